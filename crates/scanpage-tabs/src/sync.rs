//! Radio group ↔ tab panel binding
//!
//! ```text
//! radio change (checked) ──► ModeSelection ──► tab display "activate"
//! tab "shown"            ──► ModeSelection ──► radio checked
//! ```

use crate::mode::ScanMode;
use crate::selection::{ModeObserver, ModeSelection, Origin};

pub struct ModeSync {
    selection: ModeSelection,
}

impl ModeSync {
    /// `initial` is whatever the markup shows as checked/visible on load
    pub fn new(
        initial: ScanMode,
        radios: impl ModeObserver + 'static,
        tabs: impl ModeObserver + 'static,
    ) -> Self {
        let mut selection = ModeSelection::new(initial);
        selection.observe(Origin::Radio, radios);
        selection.observe(Origin::Tab, tabs);
        Self { selection }
    }

    pub fn current(&self) -> ScanMode {
        self.selection.current()
    }

    /// Radio `change` event. Only a radio becoming checked counts.
    pub fn radio_changed(&self, mode: ScanMode, checked: bool) -> bool {
        if !checked {
            return false;
        }
        self.selection.select(mode, Origin::Radio)
    }

    /// Tab panel became visible (including direct clicks on the tab itself)
    pub fn tab_shown(&self, mode: ScanMode) -> bool {
        self.selection.select(mode, Origin::Tab)
    }

    /// Switch both views from code
    pub fn select(&self, mode: ScanMode) -> bool {
        self.selection.select(mode, Origin::Program)
    }
}
