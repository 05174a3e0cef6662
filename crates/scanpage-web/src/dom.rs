//! Document-backed collaborators

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement, HtmlInputElement, Window};

use scanpage_core::{
    ActionError, Clipboard, ColorSchemeQuery, CookieJar, EffectiveTheme, IconGlyph, LinkOpener,
    ModeObserver, Notifier, ResultTextSource, ScanMode, ThemeError, ThemeSink,
};

#[wasm_bindgen]
extern "C" {
    /// Bootstrap's tab plugin (`bootstrap.Tab`)
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tab)]
    type BootstrapTab;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tab")]
    fn new(element: &Element) -> Result<BootstrapTab, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapTab);
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `document.cookie`
pub struct DocumentCookieJar {
    document: HtmlDocument,
}

impl DocumentCookieJar {
    pub fn new(document: &Document) -> Option<Self> {
        document
            .clone()
            .dyn_into::<HtmlDocument>()
            .ok()
            .map(|document| Self { document })
    }
}

impl CookieJar for DocumentCookieJar {
    fn read(&self) -> String {
        self.document.cookie().unwrap_or_default()
    }

    fn write(&self, assignment: &str) -> scanpage_core::ThemeResult<()> {
        self.document
            .set_cookie(assignment)
            .map_err(|e| ThemeError::Persist(js_message(&e)))
    }
}

/// Root theme attribute plus every indicator icon
pub struct DocumentThemeSink {
    document: Document,
    attribute: String,
    icon_selector: String,
}

impl DocumentThemeSink {
    pub fn new(document: Document, attribute: String, icon_selector: String) -> Self {
        Self {
            document,
            attribute,
            icon_selector,
        }
    }
}

impl ThemeSink for DocumentThemeSink {
    fn apply(&self, effective: EffectiveTheme) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(e) = root.set_attribute(&self.attribute, effective.as_str()) {
            tracing::warn!(error = %js_message(&e), "Failed to set theme attribute");
        }
    }

    fn show_glyph(&self, glyph: IconGlyph) {
        match self.document.query_selector_all(&self.icon_selector) {
            Ok(icons) => {
                for i in 0..icons.length() {
                    if let Some(icon) = icons.item(i) {
                        icon.set_text_content(Some(glyph.as_str()));
                    }
                }
            }
            Err(e) => {
                tracing::warn!(
                    selector = %self.icon_selector,
                    error = %js_message(&e),
                    "Bad icon selector"
                );
            }
        }
    }
}

/// `matchMedia('(prefers-color-scheme: dark)')`, evaluated per call
pub struct MediaQueryScheme {
    window: Window,
}

impl MediaQueryScheme {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemeQuery for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
}

/// The webcam/upload radio inputs
#[derive(Clone)]
pub struct RadioInputs {
    pub webcam: HtmlInputElement,
    pub upload: HtmlInputElement,
}

impl RadioInputs {
    pub fn input(&self, mode: ScanMode) -> &HtmlInputElement {
        match mode {
            ScanMode::Webcam => &self.webcam,
            ScanMode::Upload => &self.upload,
        }
    }

    /// Mode whose radio is checked in the markup, webcam if neither
    pub fn checked(&self) -> ScanMode {
        if self.upload.checked() {
            ScanMode::Upload
        } else {
            ScanMode::Webcam
        }
    }
}

impl ModeObserver for RadioInputs {
    fn mode_changed(&self, mode: ScanMode) {
        self.input(mode).set_checked(true);
    }
}

/// The two tab links driven by Bootstrap
#[derive(Clone)]
pub struct TabLinks {
    pub webcam: Element,
    pub upload: Element,
}

impl TabLinks {
    pub fn link(&self, mode: ScanMode) -> &Element {
        match mode {
            ScanMode::Webcam => &self.webcam,
            ScanMode::Upload => &self.upload,
        }
    }
}

impl ModeObserver for TabLinks {
    fn mode_changed(&self, mode: ScanMode) {
        match BootstrapTab::new(self.link(mode)) {
            Ok(tab) => tab.show(),
            Err(e) => {
                tracing::warn!(mode = %mode, error = %js_message(&e), "Bootstrap tab unavailable")
            }
        }
    }
}

/// Result display element
pub struct ElementText {
    element: HtmlElement,
}

impl ElementText {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ResultTextSource for ElementText {
    fn text(&self) -> String {
        self.element.inner_text()
    }
}

/// Clipboard, `window.open` and `alert` of one window
#[derive(Clone)]
pub struct WindowServices {
    window: Window,
}

impl WindowServices {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Clipboard for WindowServices {
    fn write_text(&self, text: &str) -> scanpage_core::ActionResult<()> {
        // Completion is not awaited
        let _pending = self.window.navigator().clipboard().write_text(text);
        Ok(())
    }
}

impl LinkOpener for WindowServices {
    fn open(&self, url: &str, target: &str) -> scanpage_core::ActionResult<()> {
        match self.window.open_with_url_and_target(url, target) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ActionError::Open("blocked by the browser".to_string())),
            Err(e) => Err(ActionError::Open(js_message(&e))),
        }
    }
}

impl Notifier for WindowServices {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = %js_message(&e), "Alert failed");
        }
    }
}
