//! Scanpage Core
//!
//! Page-level coordination for the barcode generator/scanner front end.
//! Three independent behaviors are attached once, at page-ready time:
//! theme preference, scan mode sync, and result actions.

mod config;
mod error;
mod page;

pub use config::{Config, ModeElements, ResultElements, ThemeElements};
pub use error::CoreError;
pub use page::{Page, PageBuilder};

// Re-export page components
pub use scanpage_actions::Result as ActionResult;
pub use scanpage_actions::{
    ActionError, ActionOutcome, ActionSettings, Clipboard, LinkOpener, Notifier, ResultActions,
    ResultTextSource, NO_RESULT_TEXT,
};
pub use scanpage_tabs::{ModeObserver, ModeSync, ScanMode};
pub use scanpage_theme::Result as ThemeResult;
pub use scanpage_theme::{
    AppliedTheme, ColorSchemeQuery, CookieJar, CookiePreferenceStore, CookieSettings,
    EffectiveTheme, IconGlyph, PreferenceStore, ThemeChoice, ThemeControls, ThemeController,
    ThemeError, ThemeSink, MAX_COOKIE_AGE_DAYS,
};

pub type Result<T> = std::result::Result<T, CoreError>;

