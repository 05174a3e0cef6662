//! Page state container
//!
//! Each feature is attached only when the host found its elements; events
//! for a missing feature are dropped without error.

use scanpage_actions::{ActionOutcome, ResultActions};
use scanpage_tabs::{ModeSync, ScanMode};
use scanpage_theme::{AppliedTheme, ThemeController, ThemeControls};

use crate::Result;

struct ThemeFeature {
    controller: ThemeController,
    controls: ThemeControls,
}

pub struct Page {
    theme: Option<ThemeFeature>,
    modes: Option<ModeSync>,
    actions: Option<ResultActions>,
}

#[derive(Default)]
pub struct PageBuilder {
    theme: Option<ThemeFeature>,
    modes: Option<ModeSync>,
    actions: Option<ResultActions>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, controller: ThemeController, controls: ThemeControls) -> Self {
        self.theme = Some(ThemeFeature {
            controller,
            controls,
        });
        self
    }

    pub fn modes(mut self, sync: ModeSync) -> Self {
        self.modes = Some(sync);
        self
    }

    pub fn actions(mut self, actions: ResultActions) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn build(self) -> Page {
        tracing::debug!(
            theme = self.theme.is_some(),
            modes = self.modes.is_some(),
            actions = self.actions.is_some(),
            "Page features attached"
        );

        Page {
            theme: self.theme,
            modes: self.modes,
            actions: self.actions,
        }
    }
}

impl Page {
    pub fn builder() -> PageBuilder {
        PageBuilder::new()
    }

    /// Page-ready: apply the persisted theme choice
    pub fn ready(&self) -> Option<AppliedTheme> {
        let applied = self.theme.as_ref().map(|t| t.controller.initialize());
        tracing::info!(theme = ?applied.map(|a| a.choice), "Page ready");
        applied
    }

    pub fn theme(&self) -> Option<&ThemeController> {
        self.theme.as_ref().map(|t| &t.controller)
    }

    pub fn modes(&self) -> Option<&ModeSync> {
        self.modes.as_ref()
    }

    pub fn actions(&self) -> Option<&ResultActions> {
        self.actions.as_ref()
    }

    /// Theme dropdown entry clicked
    pub fn theme_control_clicked(&self, control: &str) -> Result<Option<AppliedTheme>> {
        let Some(theme) = &self.theme else {
            tracing::debug!(control = %control, "Theme feature not attached");
            return Ok(None);
        };
        Ok(Some(theme.controller.select(&theme.controls, control)?))
    }

    /// Compact theme toggle clicked
    pub fn theme_toggle_clicked(&self) -> Option<AppliedTheme> {
        let applied = self.theme.as_ref().map(|t| t.controller.cycle());
        if applied.is_none() {
            tracing::debug!("Theme feature not attached");
        }
        applied
    }

    /// Mode radio `change` event
    pub fn radio_changed(&self, mode: ScanMode, checked: bool) -> bool {
        match &self.modes {
            Some(sync) => sync.radio_changed(mode, checked),
            None => false,
        }
    }

    /// Tab panel `shown` event
    pub fn tab_shown(&self, mode: ScanMode) -> bool {
        match &self.modes {
            Some(sync) => sync.tab_shown(mode),
            None => false,
        }
    }

    pub fn copy_clicked(&self) -> Option<ActionOutcome> {
        self.actions.as_ref().map(ResultActions::copy)
    }

    pub fn open_link_clicked(&self) -> Option<ActionOutcome> {
        self.actions.as_ref().map(ResultActions::open_link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use scanpage_actions::{
        ActionSettings, Clipboard, LinkOpener, Notifier, ResultTextSource, NO_RESULT_TEXT,
    };
    use scanpage_tabs::ModeObserver;
    use scanpage_theme::{
        CookiePreferenceStore, EffectiveTheme, FixedColorScheme, IconGlyph, MemoryCookieJar,
        MemoryThemeSink, ThemeChoice,
    };
    use std::sync::Arc;

    fn dropdown() -> ThemeControls {
        ThemeControls::from_pairs([
            ("theme-light", "light"),
            ("theme-dark", "dark"),
            ("theme-auto", "auto"),
        ])
        .unwrap()
    }

    fn themed_page(cookies: &str, prefers_dark: bool) -> (Page, MemoryCookieJar, MemoryThemeSink) {
        let jar = MemoryCookieJar::with_cookies(cookies);
        let sink = MemoryThemeSink::new();
        let controller = ThemeController::new(
            CookiePreferenceStore::new(jar.clone()),
            sink.clone(),
            FixedColorScheme(prefers_dark),
        );
        let page = Page::builder().theme(controller, dropdown()).build();
        (page, jar, sink)
    }

    #[derive(Clone, Default)]
    struct View(Arc<Mutex<Option<ScanMode>>>);

    impl ModeObserver for View {
        fn mode_changed(&self, mode: ScanMode) {
            *self.0.lock() = Some(mode);
        }
    }

    #[derive(Clone, Default)]
    struct Host {
        text: Arc<Mutex<String>>,
        clipboard: Arc<Mutex<Vec<String>>>,
        alerts: Arc<Mutex<Vec<String>>>,
    }

    impl ResultTextSource for Host {
        fn text(&self) -> String {
            self.text.lock().clone()
        }
    }

    impl Clipboard for Host {
        fn write_text(&self, text: &str) -> scanpage_actions::Result<()> {
            self.clipboard.lock().push(text.to_string());
            Ok(())
        }
    }

    impl LinkOpener for Host {
        fn open(&self, _url: &str, _target: &str) -> scanpage_actions::Result<()> {
            Ok(())
        }
    }

    impl Notifier for Host {
        fn notify(&self, message: &str) {
            self.alerts.lock().push(message.to_string());
        }
    }

    #[test]
    fn test_first_visit_follows_system_preference() {
        let (page, jar, sink) = themed_page("", true);
        let applied = page.ready().unwrap();

        assert_eq!(applied.choice, ThemeChoice::Auto);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(sink.glyph(), Some(IconGlyph::Contrast));
        assert_eq!(jar.get("theme").as_deref(), Some("auto"));
    }

    #[test]
    fn test_dark_visit_then_toggle() {
        let (page, jar, sink) = themed_page("theme=dark", false);
        page.ready();
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(sink.glyph(), Some(IconGlyph::DarkMode));

        let applied = page.theme_toggle_clicked().unwrap();
        assert_eq!(applied.choice, ThemeChoice::Auto);
        assert_eq!(jar.get("theme").as_deref(), Some("auto"));
        assert_eq!(sink.glyph(), Some(IconGlyph::Contrast));
    }

    #[test]
    fn test_dropdown_click() {
        let (page, jar, sink) = themed_page("", false);
        page.ready();

        let applied = page.theme_control_clicked("theme-dark").unwrap().unwrap();
        assert_eq!(applied.choice, ThemeChoice::Dark);
        assert_eq!(sink.attribute(), Some(EffectiveTheme::Dark));
        assert_eq!(jar.get("theme").as_deref(), Some("dark"));

        assert!(page.theme_control_clicked("theme-sepia").is_err());
    }

    #[test]
    fn test_upload_radio_shows_upload_tab() {
        let radios = View::default();
        let tabs = View::default();
        let page = Page::builder()
            .modes(ModeSync::new(ScanMode::Webcam, radios.clone(), tabs.clone()))
            .build();

        assert!(page.radio_changed(ScanMode::Upload, true));
        assert_eq!(*tabs.0.lock(), Some(ScanMode::Upload));
        assert_eq!(page.modes().unwrap().current(), ScanMode::Upload);

        assert!(page.tab_shown(ScanMode::Webcam));
        assert_eq!(*radios.0.lock(), Some(ScanMode::Webcam));
    }

    #[test]
    fn test_result_actions() {
        let host = Host::default();
        *host.text.lock() = NO_RESULT_TEXT.to_string();
        let actions = ResultActions::new(
            host.clone(),
            host.clone(),
            host.clone(),
            host.clone(),
            ActionSettings::default(),
        );
        let page = Page::builder().actions(actions).build();

        assert_eq!(page.copy_clicked(), Some(ActionOutcome::NothingToCopy));
        assert!(host.clipboard.lock().is_empty());

        *host.text.lock() = "https://example.com".to_string();
        assert_eq!(page.copy_clicked(), Some(ActionOutcome::Copied));
        assert_eq!(
            page.open_link_clicked(),
            Some(ActionOutcome::Opened("https://example.com".to_string()))
        );
    }

    #[test]
    fn test_missing_features_are_noops() {
        let page = Page::builder().build();

        assert!(page.ready().is_none());
        assert!(page.theme_toggle_clicked().is_none());
        assert!(page.theme_control_clicked("theme-dark").unwrap().is_none());
        assert!(!page.radio_changed(ScanMode::Upload, true));
        assert!(!page.tab_shown(ScanMode::Upload));
        assert!(page.copy_clicked().is_none());
        assert!(page.open_link_clicked().is_none());
    }
}
