//! Timings and limits for the lead flow.
//!
//! Served next to the app as `flow-config.json` (relative, so it works under
//! any deploy path). Every field is optional; missing ones take the defaults.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_URL: &str = "./flow-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub submit_delay_ms: u32,
    pub verify_delay_ms: u32,
    pub resend_delay_ms: u32,
    pub resend_cooldown_secs: u32,
    pub code_length: usize,
    /// Shown in the demo note on the verification screen.
    pub demo_code: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            verify_delay_ms: 1500,
            resend_delay_ms: 1000,
            resend_cooldown_secs: 60,
            code_length: 6,
            demo_code: "123456".to_string(),
        }
    }
}

impl FlowConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: FlowConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::Invalid("code_length must be at least 1".into()));
        }
        if self.resend_cooldown_secs == 0 {
            return Err(ConfigError::Invalid(
                "resend_cooldown_secs must be at least 1".into(),
            ));
        }
        if self.demo_code.len() != self.code_length
            || !self.demo_code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConfigError::Invalid(format!(
                "demo_code must be {} digits",
                self.code_length
            )));
        }
        Ok(())
    }

    pub async fn fetch() -> Result<Self, ConfigError> {
        let resp = Request::get(CONFIG_URL)
            .send()
            .await
            .map_err(|e| ConfigError::Fetch(e.to_string()))?;
        if !resp.ok() {
            return Err(ConfigError::Fetch(format!("HTTP {}", resp.status())));
        }
        let text = resp
            .text()
            .await
            .map_err(|e| ConfigError::Fetch(e.to_string()))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = FlowConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resend_cooldown_secs, 60);
        assert_eq!(cfg.code_length, 6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg = FlowConfig::from_json(r#"{ "submit_delay_ms": 10 }"#).unwrap();
        assert_eq!(cfg.submit_delay_ms, 10);
        assert_eq!(cfg.verify_delay_ms, 1500);
        assert_eq!(cfg.demo_code, "123456");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(FlowConfig::from_json("{}").unwrap(), FlowConfig::default());
    }

    #[test]
    fn test_rejects_zero_limits() {
        assert!(matches!(
            FlowConfig::from_json(r#"{ "code_length": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            FlowConfig::from_json(r#"{ "resend_cooldown_secs": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_demo_code_must_fit_code_length() {
        let err = FlowConfig::from_json(r#"{ "code_length": 4 }"#).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("demo_code must be 4 digits".into()));
        assert!(FlowConfig::from_json(r#"{ "code_length": 4, "demo_code": "1234" }"#).is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            FlowConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FlowConfig::from_json(r#"{ "submit_delay_ms": -1 }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
