//! Page configuration.
//!
//! Every field has a default matching the shipped templates, so a page without
//! a `#kpConfig` block behaves exactly like one with an empty object.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Largest buffer that still parses into a `u64` without overflow.
pub const MAX_SUPPORTED_DIGITS: usize = 18;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashTiming {
    pub base_delay_ms: u32,
    pub stagger_ms: u32,
    pub fade_ms: u32,
    pub offset_px: u32,
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            base_delay_ms: 4000,
            stagger_ms: 500,
            fade_ms: 300,
            offset_px: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub nfc_delay_ms: u32,
    pub qr_delay_ms: u32,
    pub result_path: String,
    pub nfc_demo_uid: String,
    pub qr_demo_code: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            nfc_delay_ms: 2500,
            qr_delay_ms: 3000,
            result_path: "/scan/result/".to_owned(),
            nfc_demo_uid: "A1B2C3D4".to_owned(),
            qr_demo_code: "KP-2025-001".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mobile_breakpoint_px: i32,
    pub max_amount_digits: usize,
    pub flash: FlashTiming,
    pub scan: ScanConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            max_amount_digits: 9,
            flash: FlashTiming::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON object, filling missing fields with defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: UiConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_amount_digits == 0 || self.max_amount_digits > MAX_SUPPORTED_DIGITS {
            return Err(UiError::Config(format!(
                "max_amount_digits must be within 1..={MAX_SUPPORTED_DIGITS}, got {}",
                self.max_amount_digits
            )));
        }
        if self.scan.result_path.is_empty() {
            return Err(UiError::Config("scan.result_path cannot be empty".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = UiConfig::from_json("{}").unwrap();
        assert_eq!(cfg, UiConfig::default());
        assert_eq!(cfg.flash.base_delay_ms, 4000);
        assert_eq!(cfg.scan.qr_delay_ms, 3000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = UiConfig::from_json(r#"{"flash":{"stagger_ms":250},"mobile_breakpoint_px":600}"#)
            .unwrap();
        assert_eq!(cfg.flash.stagger_ms, 250);
        assert_eq!(cfg.flash.fade_ms, 300);
        assert_eq!(cfg.mobile_breakpoint_px, 600);
        assert_eq!(cfg.max_amount_digits, 9);
    }

    #[test]
    fn rejects_out_of_range_digit_limit() {
        let err = UiConfig::from_json(r#"{"max_amount_digits":19}"#).unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
        assert!(UiConfig::from_json(r#"{"max_amount_digits":0}"#).is_err());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = UiConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }
}
