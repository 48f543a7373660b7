//! Simulated backend. Nothing leaves the browser: each call sleeps for the
//! configured delay and then succeeds.

use gloo::console;
use gloo_timers::future::TimeoutFuture;

use crate::error::FlowError;
use crate::lead::Lead;
use crate::verification::check_code;

/// Resolves with the lead's email once the "verification email" is "sent".
pub async fn submit_lead(lead: Lead, delay_ms: u32) -> Result<String, FlowError> {
    TimeoutFuture::new(delay_ms).await;
    console::log!(format!("lead captured for {}", lead.full_name));
    Ok(lead.email)
}

pub async fn verify_code(code: String, code_length: usize, delay_ms: u32) -> Result<(), FlowError> {
    TimeoutFuture::new(delay_ms).await;
    check_code(&code, code_length)?;
    console::log!("verification code accepted");
    Ok(())
}

pub async fn resend_code(delay_ms: u32) -> Result<(), FlowError> {
    TimeoutFuture::new(delay_ms).await;
    console::log!("verification code resent");
    Ok(())
}
