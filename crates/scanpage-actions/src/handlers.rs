//! Copy / open-link click handlers

use serde::Serialize;

use crate::result::ResultText;
use crate::settings::ActionSettings;
use crate::Result;

/// The result display element
pub trait ResultTextSource {
    /// Rendered text, as the user sees it
    fn text(&self) -> String;
}

pub trait Clipboard {
    /// Start a clipboard write; completion is not awaited
    fn write_text(&self, text: &str) -> Result<()>;
}

pub trait LinkOpener {
    fn open(&self, url: &str, target: &str) -> Result<()>;
}

/// Blocking acknowledgement shown to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ActionOutcome {
    Copied,
    NothingToCopy,
    Opened(String),
    NotALink,
}

pub struct ResultActions {
    source: Box<dyn ResultTextSource>,
    clipboard: Box<dyn Clipboard>,
    opener: Box<dyn LinkOpener>,
    notifier: Box<dyn Notifier>,
    settings: ActionSettings,
}

impl ResultActions {
    pub fn new(
        source: impl ResultTextSource + 'static,
        clipboard: impl Clipboard + 'static,
        opener: impl LinkOpener + 'static,
        notifier: impl Notifier + 'static,
        settings: ActionSettings,
    ) -> Self {
        Self {
            source: Box::new(source),
            clipboard: Box::new(clipboard),
            opener: Box::new(opener),
            notifier: Box::new(notifier),
            settings,
        }
    }

    /// Copy button click
    pub fn copy(&self) -> ActionOutcome {
        let text = self.source.text();
        let result = ResultText::new(&text, &self.settings.no_result);

        match result.copyable() {
            Some(content) => {
                if let Err(e) = self.clipboard.write_text(content) {
                    tracing::warn!(error = %e, "Clipboard write failed");
                }
                tracing::info!(len = content.len(), "Copied scan result");
                self.notifier.notify(&self.settings.copied_message);
                ActionOutcome::Copied
            }
            None => {
                self.notifier.notify(&self.settings.nothing_to_copy_message);
                ActionOutcome::NothingToCopy
            }
        }
    }

    /// Open-link button click
    pub fn open_link(&self) -> ActionOutcome {
        let text = self.source.text();
        let result = ResultText::new(&text, &self.settings.no_result);

        match result.link() {
            Some(url) => {
                if let Err(e) = self.opener.open(url, &self.settings.link_target) {
                    tracing::warn!(url = %url, error = %e, "Opening scanned link failed");
                }
                tracing::info!(url = %url, "Opened scanned link");
                ActionOutcome::Opened(url.to_string())
            }
            None => {
                self.notifier.notify(&self.settings.not_a_link_message);
                ActionOutcome::NotALink
            }
        }
    }
}
