//! Scanpage Mode Selection
//!
//! The scan page offers two input methods (webcam, upload), shown twice:
//! as a radio group and as a pair of tab panels. Both are views of a single
//! [`ModeSelection`]; neither view drives the other directly.

mod error;
mod mode;
mod selection;
mod sync;

pub use error::ModeError;
pub use mode::ScanMode;
pub use selection::{ModeObserver, ModeSelection, Origin};
pub use sync::ModeSync;

pub type Result<T> = std::result::Result<T, ModeError>;
