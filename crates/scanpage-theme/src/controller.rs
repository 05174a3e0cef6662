//! Theme controller
//!
//! Owns the three collaborators (preference store, theme sink, system
//! color-scheme query) and holds no other state: the store is the single
//! source of truth for the user's choice.

use serde::Serialize;

use crate::choice::{EffectiveTheme, IconGlyph, ThemeChoice};
use crate::controls::ThemeControls;
use crate::sink::ThemeSink;
use crate::store::PreferenceStore;
use crate::system::ColorSchemeQuery;
use crate::Result;

/// What a single apply produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedTheme {
    pub choice: ThemeChoice,
    pub effective: EffectiveTheme,
    pub glyph: IconGlyph,
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    sink: Box<dyn ThemeSink>,
    system: Box<dyn ColorSchemeQuery>,
}

impl ThemeController {
    pub fn new(
        store: impl PreferenceStore + 'static,
        sink: impl ThemeSink + 'static,
        system: impl ColorSchemeQuery + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            sink: Box::new(sink),
            system: Box::new(system),
        }
    }

    /// Effective theme for a choice, asking the system for `Auto` each time
    pub fn resolve(&self, choice: ThemeChoice) -> EffectiveTheme {
        match choice {
            ThemeChoice::Light => EffectiveTheme::Light,
            ThemeChoice::Dark => EffectiveTheme::Dark,
            ThemeChoice::Auto => EffectiveTheme::from_dark(self.system.prefers_dark()),
        }
    }

    /// Persisted choice, `Auto` when nothing is stored
    pub fn current_choice(&self) -> ThemeChoice {
        self.store.get().unwrap_or_default()
    }

    /// Render and persist a choice.
    ///
    /// A persistence failure is logged; the document is still updated.
    pub fn apply(&self, choice: ThemeChoice) -> AppliedTheme {
        let effective = self.resolve(choice);
        self.sink.apply(effective);

        if let Err(e) = self.store.set(choice) {
            tracing::warn!(choice = %choice, error = %e, "Failed to persist theme choice");
        }

        let glyph = choice.glyph();
        self.sink.show_glyph(glyph);

        tracing::debug!(choice = %choice, effective = %effective, "Applied theme");

        AppliedTheme {
            choice,
            effective,
            glyph,
        }
    }

    /// Compact toggle: advance the persisted choice one step
    pub fn cycle(&self) -> AppliedTheme {
        let next = self.current_choice().next();
        tracing::info!(choice = %next, "Cycling theme");
        self.apply(next)
    }

    /// Page-ready: re-apply whatever was persisted
    pub fn initialize(&self) -> AppliedTheme {
        self.apply(self.current_choice())
    }

    /// Dropdown click on a registered control
    pub fn select(&self, controls: &ThemeControls, control: &str) -> Result<AppliedTheme> {
        let choice = controls.target(control)?;
        tracing::info!(control = %control, choice = %choice, "Theme selected");
        Ok(self.apply(choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie::{CookieJar, CookieSettings, MemoryCookieJar};
    use crate::error::ThemeError;
    use crate::sink::MemoryThemeSink;
    use crate::store::{CookiePreferenceStore, MemoryPreferenceStore};
    use crate::system::FixedColorScheme;
    use parking_lot::RwLock;
    use std::sync::Arc;

    fn controller_with(
        cookies: &str,
        prefers_dark: bool,
    ) -> (ThemeController, MemoryCookieJar, MemoryThemeSink) {
        let jar = MemoryCookieJar::with_cookies(cookies);
        let sink = MemoryThemeSink::new();
        let controller = ThemeController::new(
            CookiePreferenceStore::new(jar.clone()),
            sink.clone(),
            FixedColorScheme(prefers_dark),
        );
        (controller, jar, sink)
    }

    /// System query whose answer can change between calls
    #[derive(Clone, Default)]
    struct SwitchableScheme(Arc<RwLock<bool>>);

    impl ColorSchemeQuery for SwitchableScheme {
        fn prefers_dark(&self) -> bool {
            *self.0.read()
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self) -> Option<ThemeChoice> {
            None
        }

        fn set(&self, _choice: ThemeChoice) -> Result<()> {
            Err(ThemeError::Persist("cookies disabled".to_string()))
        }
    }

    #[test]
    fn test_initialize_without_cookie_follows_system() {
        let (controller, jar, sink) = controller_with("", true);
        let applied = controller.initialize();

        assert_eq!(applied.choice, ThemeChoice::Auto);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(sink.glyph(), Some(IconGlyph::Contrast));
        assert_eq!(jar.get("theme").as_deref(), Some("auto"));

        let (controller, _, sink) = controller_with("", false);
        controller.initialize();
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Light));
    }

    #[test]
    fn test_initialize_from_dark_cookie_then_cycle() {
        let (controller, jar, sink) = controller_with("theme=dark", false);
        controller.initialize();
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(sink.glyph(), Some(IconGlyph::DarkMode));

        let applied = controller.cycle();
        assert_eq!(applied.choice, ThemeChoice::Auto);
        assert_eq!(jar.get("theme").as_deref(), Some("auto"));
        assert_eq!(sink.glyph(), Some(IconGlyph::Contrast));
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Light));
    }

    #[test]
    fn test_malformed_cookie_initializes_as_auto() {
        let (controller, jar, sink) = controller_with("theme=purple", true);
        let applied = controller.initialize();
        assert_eq!(applied.choice, ThemeChoice::Auto);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(sink.glyph(), Some(IconGlyph::Contrast));
        assert_eq!(jar.get("theme").as_deref(), Some("auto"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (controller, jar, sink) = controller_with("", false);
        for choice in ThemeChoice::ALL {
            let first = controller.apply(choice);
            let cookie = jar.read();
            let second = controller.apply(choice);
            assert_eq!(first, second);
            assert_eq!(jar.read(), cookie);
            assert_eq!(sink.attribute(), Some(second.effective));
            assert_eq!(sink.glyph(), Some(choice.glyph()));
        }
    }

    #[test]
    fn test_apply_then_read_round_trips() {
        let (controller, _, _) = controller_with("", true);
        for choice in ThemeChoice::ALL {
            controller.apply(choice);
            assert_eq!(controller.current_choice(), choice);
        }
    }

    #[test]
    fn test_cycle_returns_after_three_invocations() {
        for start in ThemeChoice::ALL {
            let controller = ThemeController::new(
                MemoryPreferenceStore::with_choice(start),
                MemoryThemeSink::new(),
                FixedColorScheme(false),
            );
            controller.cycle();
            controller.cycle();
            let applied = controller.cycle();
            assert_eq!(applied.choice, start);
        }
    }

    #[test]
    fn test_cycle_reads_choice_not_rendered_theme() {
        // auto rendered as dark must still cycle to light, not to auto
        let (controller, _, sink) = controller_with("theme=auto", true);
        controller.initialize();
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));

        let applied = controller.cycle();
        assert_eq!(applied.choice, ThemeChoice::Light);
    }

    #[test]
    fn test_auto_is_resolved_at_apply_time() {
        let scheme = SwitchableScheme::default();
        let sink = MemoryThemeSink::new();
        let controller = ThemeController::new(
            MemoryPreferenceStore::new(),
            sink.clone(),
            scheme.clone(),
        );

        controller.apply(ThemeChoice::Auto);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Light));

        *scheme.0.write() = true;
        // no live update until the next apply
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Light));
        controller.apply(ThemeChoice::Auto);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
    }

    #[test]
    fn test_out_of_range_cookie_lifetime_is_not_fatal() {
        let jar = MemoryCookieJar::new();
        let sink = MemoryThemeSink::new();
        let settings = CookieSettings {
            max_age_days: 1_000_000_000,
            ..CookieSettings::default()
        };
        let controller = ThemeController::new(
            CookiePreferenceStore::with_settings(jar.clone(), settings),
            sink.clone(),
            FixedColorScheme(false),
        );

        let applied = controller.apply(ThemeChoice::Dark);
        assert_eq!(applied.effective, EffectiveTheme::Dark);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(jar.get("theme"), None);
    }

    #[test]
    fn test_persist_failure_still_updates_document() {
        let sink = MemoryThemeSink::new();
        let controller = ThemeController::new(FailingStore, sink.clone(), FixedColorScheme(false));

        let applied = controller.apply(ThemeChoice::Dark);
        assert_eq!(applied.effective, EffectiveTheme::Dark);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(sink.glyph(), Some(IconGlyph::DarkMode));
    }

    #[test]
    fn test_select_registered_control() {
        let (controller, jar, sink) = controller_with("", false);
        let controls =
            ThemeControls::from_pairs([("theme-light", "light"), ("theme-dark", "dark")]).unwrap();

        let applied = controller.select(&controls, "theme-dark").unwrap();
        assert_eq!(applied.choice, ThemeChoice::Dark);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(jar.get("theme").as_deref(), Some("dark"));

        assert!(controller.select(&controls, "theme-auto").is_err());
        assert_eq!(jar.get("theme").as_deref(), Some("dark"));
    }
}
