//! Where an applied theme becomes visible

use parking_lot::RwLock;
use std::sync::Arc;

use crate::choice::{EffectiveTheme, IconGlyph};

/// Document-side effects of applying a theme.
pub trait ThemeSink {
    /// Set the root theme attribute
    fn apply(&self, effective: EffectiveTheme);

    /// Update every theme indicator icon
    fn show_glyph(&self, glyph: IconGlyph);
}

#[derive(Debug, Default)]
struct SinkState {
    attribute: Option<EffectiveTheme>,
    glyph: Option<IconGlyph>,
}

/// Headless document: remembers the last attribute and glyph.
#[derive(Debug, Default)]
pub struct MemoryThemeSink {
    state: Arc<RwLock<SinkState>>,
}

impl MemoryThemeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self) -> Option<EffectiveTheme> {
        self.state.read().attribute
    }

    pub fn glyph(&self) -> Option<IconGlyph> {
        self.state.read().glyph
    }
}

impl Clone for MemoryThemeSink {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl ThemeSink for MemoryThemeSink {
    fn apply(&self, effective: EffectiveTheme) {
        self.state.write().attribute = Some(effective);
    }

    fn show_glyph(&self, glyph: IconGlyph) {
        self.state.write().glyph = Some(glyph);
    }
}
