//! Configuration
//!
//! Class names, the popup container id and animation timing.

use serde::{Deserialize, Serialize};

use crate::error::UiResult;

/// Fluent layer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Id of the element popups are appended to
    pub popup_container_id: String,

    /// Tag used when `create` is given no tag
    pub default_tag: String,

    /// Class of the container wrapping a labeled control
    pub input_field_class: String,

    /// Class of the full-screen scrim behind a popup
    pub popup_backing_class: String,

    /// Classes of the popup content element
    pub popup_classes: Vec<String>,

    /// Class of the popup title region
    pub popup_title_class: String,

    /// Class of the popup button row
    pub popup_buttons_class: String,

    /// Feedback animation settings
    pub vibrate: VibrateConfig,
}

/// Feedback animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibrateConfig {
    /// Time between direction flips (ms)
    pub pulse_interval_ms: u64,

    /// Horizontal offset of each nudge (px)
    pub offset_px: u32,

    /// Duration used when a non-dismissible popup is clicked away (ms)
    pub dismiss_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            popup_container_id: "popups".to_string(),
            default_tag: "div".to_string(),
            input_field_class: "input-field".to_string(),
            popup_backing_class: "fullscreen-popup-backing".to_string(),
            popup_classes: vec!["fullscreen-popup".to_string(), "popup".to_string()],
            popup_title_class: "popup-title".to_string(),
            popup_buttons_class: "buttons".to_string(),
            vibrate: VibrateConfig::default(),
        }
    }
}

impl Default for VibrateConfig {
    fn default() -> Self {
        Self {
            pulse_interval_ms: 30,
            offset_px: 10,
            dismiss_duration_ms: 400,
        }
    }
}

impl UiConfig {
    /// Load from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> UiResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.popup_container_id, "popups");
        assert_eq!(config.vibrate.pulse_interval_ms, 30);
        assert_eq!(config.vibrate.dismiss_duration_ms, 400);
    }

    #[test]
    fn test_partial_json() {
        let config = UiConfig::from_json(r#"{"popup_container_id": "overlays", "vibrate": {"offset_px": 4}}"#)
            .unwrap();
        assert_eq!(config.popup_container_id, "overlays");
        assert_eq!(config.vibrate.offset_px, 4);
        assert_eq!(config.vibrate.pulse_interval_ms, 30);
        assert_eq!(config.input_field_class, "input-field");
    }

    #[test]
    fn test_round_trip() {
        let config = UiConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(UiConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        assert!(UiConfig::from_json("{not json").is_err());
    }
}
