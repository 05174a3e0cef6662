//! Scanpage Browser Bindings
//!
//! Connects the page core to a real document: `document.cookie`, the
//! `<html>` theme attribute, `matchMedia`, Bootstrap's tab plugin, the
//! clipboard, `window.open` and `alert`. The DOM adapters are compiled only for
//! `wasm32`; control binding and embedded configuration are target-independent.

mod binding;
mod error;

#[cfg(target_arch = "wasm32")]
mod attach;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod start;

pub use binding::{bind_theme_controls, control_key, page_config, CONFIG_ELEMENT_ID};
pub use error::WebError;

#[cfg(target_arch = "wasm32")]
pub use attach::attach;
#[cfg(target_arch = "wasm32")]
pub use start::{start, toggle_theme};

pub type Result<T> = std::result::Result<T, WebError>;
