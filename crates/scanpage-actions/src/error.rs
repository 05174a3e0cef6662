//! Result action error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Failed to open link: {0}")]
    Open(String),
}
