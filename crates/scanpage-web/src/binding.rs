//! Document-independent parts of page attachment

use scanpage_core::{Config, ThemeControls};

use crate::Result;

/// Id of the `<script type="application/json">` element holding page configuration
pub const CONFIG_ELEMENT_ID: &str = "scanpage-config";

/// Key of the theme control at `index` in document order
pub fn control_key(index: usize) -> String {
    format!("theme-control-{index}")
}

/// Register dropdown entries by document position.
///
/// Entries with an unknown target value are skipped. Returns the map and
/// the handles that were bound, each with its key.
pub fn bind_theme_controls<T, I>(entries: I) -> (ThemeControls, Vec<(String, T)>)
where
    I: IntoIterator<Item = (T, String)>,
{
    let mut controls = ThemeControls::new();
    let mut bound = Vec::new();

    for (index, (handle, value)) in entries.into_iter().enumerate() {
        let key = control_key(index);
        match controls.insert(key.clone(), &value) {
            Ok(_) => bound.push((key, handle)),
            Err(e) => tracing::warn!(error = %e, "Skipping theme control"),
        }
    }

    (controls, bound)
}

/// Configuration embedded in the page, defaults when there is none
pub fn page_config(embedded: Option<&str>) -> Result<Config> {
    match embedded.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => Ok(Config::from_json(json)?),
        None => Ok(Config::default()),
    }
}
