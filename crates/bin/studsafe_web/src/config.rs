//! Configuration loading — inline JSON embedded in the page.
//!
//! Looks for `<script type="application/json" id="studsafe-config">` in the
//! document. Every field has a sensible default so the element is optional.
//!
//! The element is read once when the module starts, so it must appear in the
//! markup before the loader script. One placed after it is not parsed yet and
//! the defaults apply.

use std::time::Duration;

use serde::Deserialize;
use studsafe_app::ports::{PageDocument, PageElement};
use studsafe_app::services::alert_dismisser::AlertOptions;
use studsafe_app::services::theme_controller::ThemeOptions;
use studsafe_domain::alert::AlertTimeline;

/// `id` of the element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "studsafe-config";

/// Longest delay a browser timer accepts (`i32::MAX`).
const MAX_TIMER_MS: u64 = 2_147_483_647;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme preference and toggle control settings.
    pub theme: ThemeConfig,
    /// Alert auto-dismiss settings.
    pub alerts: AlertsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Theme settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key.
    pub storage_key: String,
    /// Attribute set on `<html>`.
    pub attribute: String,
    /// `id` of the toggle control.
    pub toggle_id: String,
    /// Selector of the icon inside the toggle control.
    pub icon_selector: String,
    /// Tooltip attribute on the icon's container.
    pub title_attribute: String,
}

/// Alert auto-dismiss settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// Set to `false` to keep alerts on screen.
    pub enabled: bool,
    /// Selector matching alert banners.
    pub selector: String,
    /// Milliseconds an alert stays fully visible.
    pub visible_ms: u64,
    /// Milliseconds of exit animation before removal.
    pub fade_ms: u64,
    /// Horizontal slide distance of the exit animation, in pixels.
    pub slide_offset_px: i32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the page, falling back to defaults when the
    /// configuration element is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but holds malformed or
    /// invalid JSON.
    pub fn from_document<D: PageDocument>(document: &D) -> Result<Self, ConfigError> {
        match document.element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => Self::from_json(&element.text_content()),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for empty names or selectors, or alert
    /// timings longer than a browser timer can hold.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            (&self.theme.storage_key, "theme.storage_key must not be empty"),
            (&self.theme.attribute, "theme.attribute must not be empty"),
            (&self.theme.toggle_id, "theme.toggle_id must not be empty"),
            (&self.theme.icon_selector, "theme.icon_selector must not be empty"),
            (&self.theme.title_attribute, "theme.title_attribute must not be empty"),
            (&self.alerts.selector, "alerts.selector must not be empty"),
        ];
        for (value, message) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(message));
            }
        }
        let timings = [
            (self.alerts.visible_ms, "alerts.visible_ms must not exceed 2147483647 ms"),
            (self.alerts.fade_ms, "alerts.fade_ms must not exceed 2147483647 ms"),
        ];
        for (value, message) in timings {
            if value > MAX_TIMER_MS {
                return Err(ConfigError::Validation(message));
            }
        }
        Ok(())
    }

    /// Options for the theme controller.
    #[must_use]
    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            storage_key: self.theme.storage_key.clone(),
            attribute: self.theme.attribute.clone(),
            toggle_id: self.theme.toggle_id.clone(),
            icon_selector: self.theme.icon_selector.clone(),
            title_attribute: self.theme.title_attribute.clone(),
        }
    }

    /// Options for the alert dismisser.
    #[must_use]
    pub fn alert_options(&self) -> AlertOptions {
        AlertOptions {
            selector: self.alerts.selector.clone(),
            timeline: AlertTimeline {
                visible_for: Duration::from_millis(self.alerts.visible_ms),
                fade_for: Duration::from_millis(self.alerts.fade_ms),
                slide_offset_px: self.alerts.slide_offset_px,
            },
            enabled: self.alerts.enabled,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let options = ThemeOptions::default();
        Self {
            storage_key: options.storage_key,
            attribute: options.attribute,
            toggle_id: options.toggle_id,
            icon_selector: options.icon_selector,
            title_attribute: options.title_attribute,
        }
    }
}

impl Default for AlertsConfig {
    fn default() -> Self {
        let options = AlertOptions::default();
        Self {
            enabled: options.enabled,
            selector: options.selector,
            visible_ms: millis(options.timeline.visible_for),
            fade_ms: millis(options.timeline.fade_for),
            slide_offset_px: options.timeline.slide_offset_px,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "studsafe=info".to_string(),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse page configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.theme.storage_key, "studsafe-theme");
        assert_eq!(config.theme.attribute, "data-theme");
        assert_eq!(config.theme.toggle_id, "theme-toggle");
        assert_eq!(config.theme.icon_selector, ".theme-toggle-icon");
        assert_eq!(config.alerts.selector, ".alert");
        assert_eq!(config.alerts.visible_ms, 4000);
        assert_eq!(config.alerts.fade_ms, 500);
        assert!(config.alerts.enabled);
        assert_eq!(config.logging.filter, "studsafe=info");
    }

    #[test]
    fn should_return_default_when_json_blank() {
        assert_eq!(Config::from_json("  \n").unwrap(), Config::default());
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn should_parse_full_json() {
        let json = r#"{
            "theme": {
                "storage_key": "site-theme",
                "attribute": "data-mode",
                "toggle_id": "mode-switch",
                "icon_selector": ".mode-icon",
                "title_attribute": "aria-label"
            },
            "alerts": {
                "enabled": false,
                "selector": ".flash",
                "visible_ms": 2000,
                "fade_ms": 300,
                "slide_offset_px": -20
            },
            "logging": { "filter": "debug" }
        }"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.theme.storage_key, "site-theme");
        assert_eq!(config.theme.title_attribute, "aria-label");
        assert!(!config.alerts.enabled);
        assert_eq!(config.alerts.slide_offset_px, -20);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_json_with_defaults() {
        let config = Config::from_json(r#"{ "alerts": { "visible_ms": 6000 } }"#).unwrap();
        assert_eq!(config.alerts.visible_ms, 6000);
        assert_eq!(config.alerts.fade_ms, 500);
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn should_report_parse_error_for_invalid_json() {
        let result = Config::from_json("{ theme: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_reject_empty_storage_key() {
        let result = Config::from_json(r#"{ "theme": { "storage_key": "" } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Validation("theme.storage_key must not be empty"))
        ));
    }

    #[test]
    fn should_reject_blank_alert_selector() {
        let result = Config::from_json(r#"{ "alerts": { "selector": "   " } }"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_visible_ms_beyond_timer_range() {
        let result = Config::from_json(r#"{ "alerts": { "visible_ms": 3000000000 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(
                "alerts.visible_ms must not exceed 2147483647 ms"
            ))
        ));
    }

    #[test]
    fn should_reject_fade_ms_beyond_timer_range() {
        let result = Config::from_json(r#"{ "alerts": { "fade_ms": 2147483648 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(
                "alerts.fade_ms must not exceed 2147483647 ms"
            ))
        ));
    }

    #[test]
    fn should_accept_timings_at_timer_limit() {
        let config = Config::from_json(
            r#"{ "alerts": { "visible_ms": 2147483647, "fade_ms": 2147483647 } }"#,
        )
        .unwrap();
        assert_eq!(config.alerts.visible_ms, MAX_TIMER_MS);
    }

    #[test]
    fn should_convert_to_service_options() {
        let config = Config::from_json(
            r#"{ "alerts": { "visible_ms": 1500, "fade_ms": 250, "slide_offset_px": 10 } }"#,
        )
        .unwrap();

        let alerts = config.alert_options();
        assert_eq!(alerts.timeline.visible_for, Duration::from_millis(1500));
        assert_eq!(alerts.timeline.fade_for, Duration::from_millis(250));
        assert_eq!(alerts.timeline.slide_offset_px, 10);
        assert_eq!(config.theme_options(), ThemeOptions::default());
    }

    #[test]
    fn should_round_trip_default_timeline_through_config() {
        assert_eq!(
            Config::default().alert_options().timeline,
            AlertTimeline::default()
        );
    }
}
