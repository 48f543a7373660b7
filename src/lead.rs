use std::sync::OnceLock;

use regex::Regex;

use crate::error::FieldError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// `local@domain.tld` with no whitespace anywhere and a dot after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
}

/// A lead that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadFormErrors {
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

impl LeadForm {
    /// Checks both fields; a failure on one never hides the other.
    pub fn validate(&self) -> Result<Lead, LeadFormErrors> {
        let full_name = self.full_name.trim();

        let errors = LeadFormErrors {
            full_name: full_name.is_empty().then_some(FieldError::NameRequired),
            email: if self.email.trim().is_empty() {
                Some(FieldError::EmailRequired)
            } else if !is_valid_email(&self.email) {
                Some(FieldError::EmailInvalid)
            } else {
                None
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Lead {
            full_name: full_name.to_string(),
            email: self.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> LeadForm {
        LeadForm {
            full_name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_lead_is_trimmed_name_and_raw_email() {
        let lead = form("  Jane Doe ", "jane@x.com").validate().unwrap();
        assert_eq!(lead.full_name, "Jane Doe");
        assert_eq!(lead.email, "jane@x.com");
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["jane@x.com", "a@b.c", "first.last+tag@mail.example.ca", "x@y.z.w"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "jane",
            "jane@",
            "jane@x",
            "@x.com",
            "jane@.com",
            "jane@x.",
            "jane @x.com",
            "jane@ x.com",
            " jane@x.com",
            "jane@x.com ",
            "ja@ne@x.com",
        ] {
            assert!(!is_valid_email(bad), "{bad:?}");
        }
    }

    #[test]
    fn test_missing_name_reported_with_valid_email() {
        let errors = form("   ", "jane@x.com").validate().unwrap_err();
        assert_eq!(errors.full_name, Some(FieldError::NameRequired));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn test_both_errors_reported_together() {
        let errors = form("", "not-an-email").validate().unwrap_err();
        assert_eq!(errors.full_name, Some(FieldError::NameRequired));
        assert_eq!(errors.email, Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_blank_email_is_required_not_invalid() {
        let errors = form("Jane", " \t").validate().unwrap_err();
        assert_eq!(errors.full_name, None);
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "Full name is required");
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "Please enter a valid email address"
        );
    }
}
