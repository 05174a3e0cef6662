//! Theme error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Unknown theme choice: {0}")]
    UnknownChoice(String),

    #[error("Invalid theme control {control}: unknown target {value}")]
    InvalidControl { control: String, value: String },

    #[error("Theme control not found: {0}")]
    UnknownControl(String),

    #[error("Failed to persist theme preference: {0}")]
    Persist(String),
}
