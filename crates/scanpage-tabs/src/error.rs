//! Mode selection error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModeError {
    #[error("Unknown scan mode: {0}")]
    UnknownMode(String),
}
