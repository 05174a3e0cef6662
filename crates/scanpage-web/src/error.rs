//! Browser binding error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("No global window")]
    NoWindow,

    #[error("No document")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Core error: {0}")]
    Core(#[from] scanpage_core::CoreError),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        WebError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(error: WebError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanpage_core::CoreError;

    #[test]
    fn test_core_error_message() {
        let error = WebError::from(CoreError::Config("bad cookie".to_string()));
        assert_eq!(
            error.to_string(),
            "Core error: Configuration error: bad cookie"
        );
    }
}
