//! Scanpage Theme Preference
//!
//! Three-state theme toggle (light / dark / auto):
//! ```text
//! light → dark → auto → light → ...
//! ```
//! The user's *choice* is persisted; the *effective* theme is resolved from it,
//! consulting the system color scheme whenever the choice is `auto`.

mod choice;
mod controller;
mod controls;
mod cookie;
mod error;
mod sink;
mod store;
mod system;

pub use choice::{EffectiveTheme, IconGlyph, ThemeChoice};
pub use controller::{AppliedTheme, ThemeController};
pub use controls::ThemeControls;
pub use cookie::{CookieJar, CookieSettings, MemoryCookieJar, MAX_COOKIE_AGE_DAYS};
pub use error::ThemeError;
pub use sink::{MemoryThemeSink, ThemeSink};
pub use store::{CookiePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use system::{ColorSchemeQuery, FixedColorScheme};

pub type Result<T> = std::result::Result<T, ThemeError>;
