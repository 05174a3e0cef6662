//! Typed mapping from theme-selection controls to their target choice

use std::collections::BTreeMap;

use crate::choice::ThemeChoice;
use crate::error::ThemeError;
use crate::Result;

/// Theme dropdown entries keyed by control id.
///
/// Every target value is validated when the map is built, so clicks can
/// only ever apply one of the three known choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeControls {
    targets: BTreeMap<String, ThemeChoice>,
}

impl ThemeControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(control id, attached value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut controls = Self::new();
        for (control, value) in pairs {
            controls.insert(control, value.as_ref())?;
        }
        Ok(controls)
    }

    /// Register one control, rejecting unknown target values
    pub fn insert(&mut self, control: impl Into<String>, value: &str) -> Result<ThemeChoice> {
        let control = control.into();
        let choice = value
            .parse::<ThemeChoice>()
            .map_err(|_| ThemeError::InvalidControl {
                control: control.clone(),
                value: value.to_string(),
            })?;
        self.targets.insert(control, choice);
        Ok(choice)
    }

    pub fn target(&self, control: &str) -> Result<ThemeChoice> {
        self.targets
            .get(control)
            .copied()
            .ok_or_else(|| ThemeError::UnknownControl(control.to_string()))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
