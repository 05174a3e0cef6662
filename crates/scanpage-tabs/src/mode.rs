//! Scan input method

use serde::{Deserialize, Serialize};

use crate::error::ModeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Live camera capture
    #[default]
    Webcam,
    /// Image file upload
    Upload,
}

impl ScanMode {
    pub const ALL: [ScanMode; 2] = [ScanMode::Webcam, ScanMode::Upload];

    /// The mutually exclusive alternative
    pub fn other(&self) -> ScanMode {
        match self {
            ScanMode::Webcam => ScanMode::Upload,
            ScanMode::Upload => ScanMode::Webcam,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Webcam => "webcam",
            ScanMode::Upload => "upload",
        }
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScanMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "webcam" => Ok(ScanMode::Webcam),
            "upload" => Ok(ScanMode::Upload),
            _ => Err(ModeError::UnknownMode(s.to_string())),
        }
    }
}
