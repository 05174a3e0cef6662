//! User-facing strings for the result actions

use serde::{Deserialize, Serialize};

use crate::result::NO_RESULT_TEXT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionSettings {
    /// Placeholder shown before anything was scanned
    pub no_result: String,
    pub copied_message: String,
    pub nothing_to_copy_message: String,
    pub not_a_link_message: String,
    /// Browsing context for opened links
    pub link_target: String,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            no_result: NO_RESULT_TEXT.to_string(),
            copied_message: "Copied to Clipboard!".to_string(),
            nothing_to_copy_message: "No content to copy.".to_string(),
            not_a_link_message: "The scanned result is not a valid link.".to_string(),
            link_target: "_blank".to_string(),
        }
    }
}
