//! Displayed scan result text

/// Placeholder rendered by the scan page before a decode
pub const NO_RESULT_TEXT: &str = "No result yet";

/// Text currently shown in the result area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultText<'a> {
    text: &'a str,
    placeholder: &'a str,
}

impl<'a> ResultText<'a> {
    pub fn new(text: &'a str, placeholder: &'a str) -> Self {
        Self { text, placeholder }
    }

    /// Text worth copying: non-empty and not the placeholder. Not trimmed.
    pub fn copyable(&self) -> Option<&'a str> {
        if self.text.is_empty() || self.text == self.placeholder {
            None
        } else {
            Some(self.text)
        }
    }

    /// Trimmed text if it looks like a web link (literal `http` prefix)
    pub fn link(&self) -> Option<&'a str> {
        let trimmed = self.text.trim();
        trimmed.starts_with("http").then_some(trimmed)
    }
}
