use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCategory;

/// Which resource bundle the visitor asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    #[default]
    All,
    BuyerGuide,
    Listings,
    InspectionChecklist,
    MarketReport,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 5] = [
        ResourceCategory::All,
        ResourceCategory::BuyerGuide,
        ResourceCategory::Listings,
        ResourceCategory::InspectionChecklist,
        ResourceCategory::MarketReport,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ResourceCategory::All => "all",
            ResourceCategory::BuyerGuide => "buyer-guide",
            ResourceCategory::Listings => "listings",
            ResourceCategory::InspectionChecklist => "inspection-checklist",
            ResourceCategory::MarketReport => "market-report",
        }
    }

    /// Headline shown on the lead form for this category.
    pub fn form_title(self) -> &'static str {
        match self {
            ResourceCategory::All => "All Premium Resources",
            ResourceCategory::BuyerGuide => "Complete Buyer's Guide",
            ResourceCategory::Listings => "Exclusive Property Listings",
            ResourceCategory::InspectionChecklist => "Home Inspection Checklist",
            ResourceCategory::MarketReport => "Market Insights Report",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub category: ResourceCategory,
    pub title: &'static str,
    /// Catalog card copy (hero page).
    pub teaser: &'static str,
    pub features: [&'static str; 4],
    /// Download card copy (access page).
    pub library_blurb: &'static str,
    pub file_size: &'static str,
}

pub const CATALOG: &[Resource] = &[
    Resource {
        category: ResourceCategory::BuyerGuide,
        title: "Complete Buyer's Guide",
        teaser: "Step-by-step guide to buying your first home in Ontario, including financing tips and legal requirements.",
        features: [
            "First-time buyer checklist",
            "Mortgage pre-approval guide",
            "Legal requirements",
            "Hidden cost calculator",
        ],
        library_blurb: "62-page comprehensive guide to buying your first home in Ontario",
        file_size: "2.4 MB PDF",
    },
    Resource {
        category: ResourceCategory::Listings,
        title: "Exclusive Property Listings",
        teaser: "Access to off-market properties and pre-construction deals not available to the general public.",
        features: [
            "Off-market listings",
            "Pre-construction deals",
            "Investment opportunities",
            "Price reduction alerts",
        ],
        library_blurb: "Access to off-market properties and pre-construction deals",
        file_size: "Portal Access",
    },
    Resource {
        category: ResourceCategory::InspectionChecklist,
        title: "Home Inspection Checklist",
        teaser: "Professional checklist used by top inspectors to evaluate properties and avoid costly surprises.",
        features: [
            "Room-by-room checklist",
            "Red flag indicators",
            "Negotiation leverage tips",
            "Printable PDF format",
        ],
        library_blurb: "Professional 15-point inspection checklist PDF",
        file_size: "1.8 MB PDF",
    },
    Resource {
        category: ResourceCategory::MarketReport,
        title: "Market Insights Report",
        teaser: "Monthly market analysis with pricing trends, inventory levels, and forecasts for Ontario regions.",
        features: [
            "Price trend analysis",
            "Inventory tracking",
            "Seasonal patterns",
            "Investment hotspots",
        ],
        library_blurb: "Q4 2024 Ontario real estate market analysis and forecasts",
        file_size: "3.2 MB PDF",
    },
];

pub fn find(category: ResourceCategory) -> Option<&'static Resource> {
    CATALOG.iter().find(|r| r.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_for_every_category() {
        for c in ResourceCategory::ALL {
            assert_eq!(c.slug().parse::<ResourceCategory>(), Ok(c));
            assert_eq!(c.to_string(), c.slug());
        }
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let err = "condo-guide".parse::<ResourceCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("condo-guide".to_string()));
        assert!("".parse::<ResourceCategory>().is_err());
        assert!("Listings".parse::<ResourceCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&ResourceCategory::InspectionChecklist).unwrap();
        assert_eq!(json, "\"inspection-checklist\"");
        let back: ResourceCategory = serde_json::from_str("\"market-report\"").unwrap();
        assert_eq!(back, ResourceCategory::MarketReport);
    }

    #[test]
    fn test_catalog_covers_each_specific_category_once() {
        assert_eq!(CATALOG.len(), 4);
        for c in ResourceCategory::ALL.into_iter().filter(|c| *c != ResourceCategory::All) {
            assert_eq!(CATALOG.iter().filter(|r| r.category == c).count(), 1, "{c}");
        }
        assert!(find(ResourceCategory::All).is_none());
    }

    #[test]
    fn test_form_title_matches_catalog_title() {
        for r in CATALOG {
            assert_eq!(r.category.form_title(), r.title);
        }
        assert_eq!(ResourceCategory::All.form_title(), "All Premium Resources");
    }
}
