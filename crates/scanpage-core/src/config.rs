//! Page configuration
//!
//! Defaults mirror the scan/generate page markup; a JSON document may
//! override any subset of fields.

use serde::{Deserialize, Serialize};
use std::path::Path;

use scanpage_actions::ActionSettings;
use scanpage_theme::{CookieSettings, MAX_COOKIE_AGE_DAYS};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeElements {
    /// Root element attribute read by the stylesheet
    pub attribute: String,
    /// Selector for every theme indicator icon
    pub icon_selector: String,
    /// Attribute carrying a dropdown entry's target choice
    pub control_attribute: String,
    /// Selector for the compact light → dark → auto toggle buttons
    pub toggle_selector: String,
}

impl Default for ThemeElements {
    fn default() -> Self {
        Self {
            attribute: "data-bs-theme".to_string(),
            icon_selector: ".theme-icon-active".to_string(),
            control_attribute: "data-bs-theme-value".to_string(),
            toggle_selector: "[data-theme-toggle]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeElements {
    pub webcam_radio_id: String,
    pub upload_radio_id: String,
    /// `data-bs-target` of the webcam tab link
    pub webcam_tab_target: String,
    pub upload_tab_target: String,
}

impl Default for ModeElements {
    fn default() -> Self {
        Self {
            webcam_radio_id: "methodWebcam".to_string(),
            upload_radio_id: "methodUpload".to_string(),
            webcam_tab_target: "#webcam-section".to_string(),
            upload_tab_target: "#upload-section".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultElements {
    pub copy_button_id: String,
    pub open_link_button_id: String,
    pub result_text_id: String,
}

impl Default for ResultElements {
    fn default() -> Self {
        Self {
            copy_button_id: "copyBtn".to_string(),
            open_link_button_id: "openLinkBtn".to_string(),
            result_text_id: "scanResultText".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_cookie: CookieSettings,
    pub theme: ThemeElements,
    pub modes: ModeElements,
    pub result: ResultElements,
    pub actions: ActionSettings,
    /// Log filter used when the host provides none
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_cookie: CookieSettings::default(),
            theme: ThemeElements::default(),
            modes: ModeElements::default(),
            result: ResultElements::default(),
            actions: ActionSettings::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.theme_cookie.name.is_empty() || self.theme_cookie.name.contains(['=', ';']) {
            return Err(CoreError::Config(format!(
                "invalid theme cookie name: {:?}",
                self.theme_cookie.name
            )));
        }

        if !(1..=MAX_COOKIE_AGE_DAYS).contains(&self.theme_cookie.max_age_days) {
            return Err(CoreError::Config(format!(
                "theme cookie lifetime must be 1 to {MAX_COOKIE_AGE_DAYS} days, got {}",
                self.theme_cookie.max_age_days
            )));
        }

        if self.theme.attribute.is_empty() {
            return Err(CoreError::Config(
                "theme attribute cannot be empty".to_string(),
            ));
        }

        if self.modes.webcam_radio_id == self.modes.upload_radio_id {
            return Err(CoreError::Config(
                "webcam and upload radios must be distinct".to_string(),
            ));
        }

        Ok(())
    }
}
