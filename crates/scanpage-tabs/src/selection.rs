//! Single source of truth for the active scan mode

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::mode::ScanMode;

/// Which representation a change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The radio group
    Radio,
    /// The tab panels
    Tab,
    /// Neither view; every observer is notified
    Program,
}

/// A view that renders the current mode.
pub trait ModeObserver {
    fn mode_changed(&self, mode: ScanMode);
}

pub struct ModeSelection {
    current: Mutex<ScanMode>,
    /// One observer per representation, tagged with the origin it reports as
    observers: Vec<(Origin, Box<dyn ModeObserver>)>,
}

impl ModeSelection {
    pub fn new(initial: ScanMode) -> Self {
        Self {
            current: Mutex::new(initial),
            observers: Vec::new(),
        }
    }

    /// Attach the view for `origin`
    pub fn observe(&mut self, origin: Origin, observer: impl ModeObserver + 'static) {
        self.observers.push((origin, Box::new(observer)));
    }

    pub fn current(&self) -> ScanMode {
        *self.current.lock()
    }

    /// Set the mode and update every other view.
    ///
    /// Returns `false` when the mode was already current; nothing is
    /// notified then, which is what settles re-entrant view events.
    pub fn select(&self, mode: ScanMode, origin: Origin) -> bool {
        {
            let mut current = self.current.lock();
            if *current == mode {
                return false;
            }
            let previous = std::mem::replace(&mut *current, mode);
            tracing::debug!(from = %previous, to = %mode, origin = ?origin, "Scan mode transition");
        }

        // Lock released: observers may call back into select()
        for (view, observer) in &self.observers {
            if *view != origin {
                observer.mode_changed(mode);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<ScanMode>>>);

    impl ModeObserver for Recorder {
        fn mode_changed(&self, mode: ScanMode) {
            self.0.lock().push(mode);
        }
    }

    #[test]
    fn test_select_skips_originating_view() {
        let radios = Recorder::default();
        let tabs = Recorder::default();
        let mut selection = ModeSelection::new(ScanMode::Webcam);
        selection.observe(Origin::Radio, radios.clone());
        selection.observe(Origin::Tab, tabs.clone());

        assert!(selection.select(ScanMode::Upload, Origin::Radio));
        assert!(radios.0.lock().is_empty());
        assert_eq!(*tabs.0.lock(), vec![ScanMode::Upload]);
        assert_eq!(selection.current(), ScanMode::Upload);
    }

    #[test]
    fn test_unchanged_mode_is_noop() {
        let tabs = Recorder::default();
        let mut selection = ModeSelection::new(ScanMode::Webcam);
        selection.observe(Origin::Tab, tabs.clone());

        assert!(!selection.select(ScanMode::Webcam, Origin::Radio));
        assert!(tabs.0.lock().is_empty());
    }

    #[test]
    fn test_program_origin_notifies_all() {
        let radios = Recorder::default();
        let tabs = Recorder::default();
        let mut selection = ModeSelection::new(ScanMode::Upload);
        selection.observe(Origin::Radio, radios.clone());
        selection.observe(Origin::Tab, tabs.clone());

        selection.select(ScanMode::Webcam, Origin::Program);
        assert_eq!(*radios.0.lock(), vec![ScanMode::Webcam]);
        assert_eq!(*tabs.0.lock(), vec![ScanMode::Webcam]);
    }
}
