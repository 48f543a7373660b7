//! Error types surfaced by the lead flow.
//!
//! Every `Display` impl here is user-facing copy: the views render these
//! messages inline, so keep them short and plain.

use thiserror::Error;

use crate::wizard::{Step, WizardEvent};

/// Per-field validation failure on the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Full name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,
}

/// An event arrived while the wizard was on a step that does not handle it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("event {event} is not handled on the {step} step")]
    NotAllowed { step: Step, event: WizardEvent },
}

/// Slug that does not name a resource category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource category: {0}")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Please check your email and enter the correct verification code.")]
    InvalidCode,
}

/// Errors that can occur while loading `flow-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed fetching flow config: {0}")]
    Fetch(String),

    #[error("Failed parsing flow config: {0}")]
    Parse(String),

    #[error("Invalid flow config: {0}")]
    Invalid(String),
}

/// Failures of the simulated backend calls.
///
/// The stubs never produce `Submission` or `Resend`; the views still render
/// them so a real backend can be dropped in without touching the markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Something went wrong. Please try again.")]
    Submission,

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error("Failed to resend. Please try again later.")]
    Resend,
}
