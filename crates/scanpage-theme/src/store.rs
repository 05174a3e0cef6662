//! Persistence of the theme choice

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::choice::ThemeChoice;
use crate::cookie::{CookieJar, CookieSettings};
use crate::Result;

/// Where the user's choice lives between page loads.
pub trait PreferenceStore {
    /// Stored choice, `None` if nothing was persisted yet
    fn get(&self) -> Option<ThemeChoice>;

    /// Overwrite the stored choice
    fn set(&self, choice: ThemeChoice) -> Result<()>;
}

/// Store backed by the `theme` cookie.
pub struct CookiePreferenceStore<J> {
    jar: J,
    settings: CookieSettings,
}

impl<J: CookieJar> CookiePreferenceStore<J> {
    pub fn new(jar: J) -> Self {
        Self::with_settings(jar, CookieSettings::default())
    }

    pub fn with_settings(jar: J, settings: CookieSettings) -> Self {
        Self { jar, settings }
    }

}

impl<J: CookieJar> PreferenceStore for CookiePreferenceStore<J> {
    fn get(&self) -> Option<ThemeChoice> {
        self.settings.find_choice(&self.jar.read())
    }

    fn set(&self, choice: ThemeChoice) -> Result<()> {
        let assignment = self.settings.header_value(choice, Utc::now())?;
        self.jar.write(&assignment)?;
        tracing::debug!(cookie = %self.settings.name, choice = %choice, "Persisted theme choice");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    choice: Arc<RwLock<Option<ThemeChoice>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(choice: ThemeChoice) -> Self {
        Self {
            choice: Arc::new(RwLock::new(Some(choice))),
        }
    }
}

impl Clone for MemoryPreferenceStore {
    fn clone(&self) -> Self {
        Self {
            choice: Arc::clone(&self.choice),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Option<ThemeChoice> {
        *self.choice.read()
    }

    fn set(&self, choice: ThemeChoice) -> Result<()> {
        *self.choice.write() = Some(choice);
        Ok(())
    }
}
