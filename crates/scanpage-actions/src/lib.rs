//! Scanpage Result Actions
//!
//! Two click handlers over the displayed scan result:
//! - Copy: writes the text to the clipboard unless it is the placeholder
//! - Open link: opens the trimmed text in a new browsing context if it
//!   starts with `http`

mod error;
mod handlers;
mod result;
mod settings;

pub use error::ActionError;
pub use handlers::{
    ActionOutcome, Clipboard, LinkOpener, Notifier, ResultActions, ResultTextSource,
};
pub use result::{ResultText, NO_RESULT_TEXT};
pub use settings::ActionSettings;

pub type Result<T> = std::result::Result<T, ActionError>;
