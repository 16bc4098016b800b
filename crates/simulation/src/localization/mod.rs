mod collation;
mod tables;
#[cfg(test)]
mod tests;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::buildings::BuildingKey;
use crate::definitions::{Definitions, ResourceKey};

pub use collation::{ActiveCollator, Collator, LocaleCollator, OrdinalCollator};

use tables::{build_english_table, build_french_table, build_german_table};

// =============================================================================
// Constants
// =============================================================================

/// Default locale used when no locale is explicitly set.
pub const DEFAULT_LOCALE: &str = "en";

/// All supported locale codes.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "de", "fr"];

/// Human-readable names for each supported locale (same order as SUPPORTED_LOCALES).
pub const LOCALE_NAMES: &[&str] = &["English", "Deutsch", "Francais"];

/// A string table maps localization keys to their translated text for a single locale.
pub type StringTable = BTreeMap<String, String>;

// =============================================================================
// Resource
// =============================================================================

/// Holds all string tables (one per locale) and the currently active locale.
///
/// Building and resource names live under `building.<Key>` and
/// `resource.<Key>`; the definition table's `name` is the fallback when a
/// locale has no entry.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct LocalizationState {
    pub active_locale: String,
    pub tables: BTreeMap<String, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        let mut state = Self {
            active_locale: DEFAULT_LOCALE.to_string(),
            tables: BTreeMap::new(),
        };
        state.tables.insert("en".to_string(), build_english_table());
        state.tables.insert("de".to_string(), build_german_table());
        state.tables.insert("fr".to_string(), build_french_table());
        state
    }
}

impl LocalizationState {
    /// Look up a localization key in the active locale's string table.
    /// Returns the translated string, or the key itself as a fallback.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Look up a localization key, returning `None` if not found.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.active_locale)
            .and_then(|table| table.get(key).map(|s| s.as_str()))
            .or_else(|| {
                // Fallback to English if key not found in active locale
                self.tables
                    .get(DEFAULT_LOCALE)
                    .and_then(|table| table.get(key).map(|s| s.as_str()))
            })
    }

    /// Set the active locale. If the locale is not supported, this is a no-op.
    pub fn set_locale(&mut self, locale: &str) {
        if self.tables.contains_key(locale) {
            self.active_locale = locale.to_string();
        }
    }

    /// Return the display name for the currently active locale.
    pub fn active_locale_name(&self) -> &str {
        SUPPORTED_LOCALES
            .iter()
            .position(|code| *code == self.active_locale)
            .map(|i| LOCALE_NAMES[i])
            .unwrap_or(self.active_locale.as_str())
    }

    /// Localized name of a building type.
    pub fn building_name<'a>(&'a self, key: &'a BuildingKey, defs: &'a Definitions) -> &'a str {
        self.get(&format!("building.{key}"))
            .or_else(|| defs.building(key).map(|d| d.name.as_str()))
            .unwrap_or(key.as_str())
    }

    /// Localized name of a resource.
    pub fn resource_name<'a>(&'a self, key: &'a ResourceKey, defs: &'a Definitions) -> &'a str {
        self.get(&format!("resource.{key}"))
            .or_else(|| defs.resource(key).map(|d| d.name.as_str()))
            .unwrap_or(key.as_str())
    }

    /// Decimal separator of the active locale.
    pub fn decimal_separator(&self) -> char {
        match self.active_locale.as_str() {
            "de" | "fr" => ',',
            _ => '.',
        }
    }

    /// Rewrite a `.`-formatted number with the active locale's decimal separator.
    pub fn localize_decimal(&self, formatted: &str) -> String {
        match self.decimal_separator() {
            '.' => formatted.to_string(),
            sep => formatted.replace('.', &sep.to_string()),
        }
    }
}
