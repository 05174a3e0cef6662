//! System color-scheme query

/// Synchronous "is dark preferred" query, asked at every resolve.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// Fixed answer, for hosts without a color-scheme signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
