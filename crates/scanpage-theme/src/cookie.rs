//! Cookie encoding for the persisted theme choice
//!
//! Written as `theme=<choice>; expires=<GMT date>; path=/; SameSite=Lax`,
//! read back from a `document.cookie`-style string (`a=1; theme=dark`).

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::choice::ThemeChoice;
use crate::error::ThemeError;
use crate::Result;

/// Longest lifetime browsers honor for a cookie
pub const MAX_COOKIE_AGE_DAYS: i64 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieSettings {
    /// Cookie name
    pub name: String,
    /// Lifetime in days, refreshed on every write
    pub max_age_days: i64,
    pub path: String,
    pub same_site: String,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: "theme".to_string(),
            max_age_days: 30,
            path: "/".to_string(),
            same_site: "Lax".to_string(),
        }
    }
}

impl CookieSettings {
    /// Expiry for a cookie written at `now`
    pub fn expires_at(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        TimeDelta::try_days(self.max_age_days)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ThemeError::Persist(format!(
                    "cookie lifetime out of range: {} days",
                    self.max_age_days
                ))
            })
    }

    /// Full assignment string for `document.cookie`
    pub fn header_value(&self, choice: ThemeChoice, now: DateTime<Utc>) -> Result<String> {
        let expires = self.expires_at(now)?.format("%a, %d %b %Y %H:%M:%S GMT");
        Ok(format!(
            "{}={}; expires={}; path={}; SameSite={}",
            self.name, choice, expires, self.path, self.same_site
        ))
    }

    /// Raw value of this cookie in a `; `-separated cookie string
    pub fn find_value<'a>(&self, cookies: &'a str) -> Option<&'a str> {
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|row| {
                let (name, value) = row.split_once('=')?;
                (name == self.name).then_some(value)
            })
    }

    /// Stored choice, if any. Malformed values count as `Auto`.
    pub fn find_choice(&self, cookies: &str) -> Option<ThemeChoice> {
        self.find_value(cookies).map(ThemeChoice::parse_or_auto)
    }
}

/// Host cookie storage (`document.cookie` semantics)
pub trait CookieJar {
    /// All visible cookies as `name=value` pairs joined by `; `
    fn read(&self) -> String;

    /// Store one cookie assignment string
    fn write(&self, assignment: &str) -> Result<()>;
}

/// In-memory jar that merges writes by name like a browser does.
///
/// Attributes (`expires`, `path`, `SameSite`) are accepted and dropped.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<RwLock<Vec<(String, String)>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-populated from a cookie string
    pub fn with_cookies(cookies: &str) -> Self {
        let jar = Self::new();
        for row in cookies.split(';').map(str::trim).filter(|r| !r.is_empty()) {
            if let Some((name, value)) = row.split_once('=') {
                jar.insert(name, value);
            }
        }
        jar
    }

    /// Current value stored under `name`
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .read()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn insert(&self, name: &str, value: &str) {
        let mut cookies = self.cookies.write();
        match cookies.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => cookies.push((name.to_string(), value.to_string())),
        }
    }
}

impl Clone for MemoryCookieJar {
    fn clone(&self) -> Self {
        Self {
            cookies: Arc::clone(&self.cookies),
        }
    }
}

impl CookieJar for MemoryCookieJar {
    fn read(&self) -> String {
        self.cookies
            .read()
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, assignment: &str) -> Result<()> {
        let pair = assignment.split(';').next().unwrap_or_default().trim();
        if let Some((name, value)) = pair.split_once('=') {
            self.insert(name.trim(), value.trim());
        }
        Ok(())
    }
}
