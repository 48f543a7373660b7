//! The four-step lead wizard.
//!
//! `hero -> form -> verification -> access`, with `back` from verification
//! and `restart` from access. All state lives in [`WizardState`] and only
//! changes through [`WizardState::transition`].

use std::fmt;
use std::rc::Rc;

use gloo::console;
use yew::functional::Reducible;

use crate::error::TransitionError;
use crate::resources::ResourceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Hero,
    Form,
    Verification,
    Access,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Hero => "hero",
            Step::Form => "form",
            Step::Verification => "verification",
            Step::Access => "access",
        })
    }
}

/// Callbacks emitted by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Start,
    ResourceSelected(ResourceCategory),
    /// Carries the email the lead form accepted.
    FormSubmitted(String),
    EmailVerified,
    Back,
    Restart,
}

// Omits the payload email so it never reaches the console.
impl fmt::Display for WizardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardEvent::Start => f.write_str("start"),
            WizardEvent::ResourceSelected(c) => write!(f, "resource-selected({c})"),
            WizardEvent::FormSubmitted(_) => f.write_str("form-submitted"),
            WizardEvent::EmailVerified => f.write_str("email-verified"),
            WizardEvent::Back => f.write_str("back"),
            WizardEvent::Restart => f.write_str("restart"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub step: Step,
    pub email: String,
    pub resource_category: ResourceCategory,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition(&self, event: WizardEvent) -> Result<WizardState, TransitionError> {
        let next = match (self.step, event) {
            (Step::Hero, WizardEvent::Start) => WizardState {
                step: Step::Form,
                ..self.clone()
            },
            (Step::Hero, WizardEvent::ResourceSelected(category)) => WizardState {
                step: Step::Form,
                resource_category: category,
                ..self.clone()
            },
            (Step::Form, WizardEvent::FormSubmitted(email)) => WizardState {
                step: Step::Verification,
                email,
                ..self.clone()
            },
            (Step::Verification, WizardEvent::EmailVerified) => WizardState {
                step: Step::Access,
                ..self.clone()
            },
            (Step::Verification, WizardEvent::Back) => WizardState {
                step: Step::Form,
                ..self.clone()
            },
            (Step::Access, WizardEvent::Restart) => WizardState::new(),
            (step, event) => return Err(TransitionError::NotAllowed { step, event }),
        };
        Ok(next)
    }
}

impl Reducible for WizardState {
    type Action = WizardEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let label = action.to_string();
        match self.transition(action) {
            Ok(next) => {
                console::log!(format!("wizard: {} --{}--> {}", self.step, label, next.step));
                Rc::new(next)
            }
            Err(e) => {
                console::warn!(format!("wizard: ignored: {e}"));
                self
            }
        }
    }
}
