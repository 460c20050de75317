//! `TranslationRegistry` — registered languages and the current language.
//!
//! Callers may own a registry and pass it explicitly, or use the
//! process-wide instance returned by [`TranslationRegistry::global`], which
//! sits behind an `RwLock` so any thread can read or switch the language.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use ft_core::HolidayType;
use ft_time::Holiday;
use tracing::{error, warn};

use crate::table::TranslationTable;

/// The default language; its table is always registered and complete.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Language-keyed translation tables plus the current language.
#[derive(Debug, Clone)]
pub struct TranslationRegistry {
    tables: HashMap<String, TranslationTable>,
    current: String,
}

static GLOBAL: OnceLock<RwLock<TranslationRegistry>> = OnceLock::new();

impl Default for TranslationRegistry {
    fn default() -> Self {
        let mut tables = HashMap::new();
        tables.insert(DEFAULT_LANGUAGE.to_string(), TranslationTable::german());
        Self {
            tables,
            current: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl TranslationRegistry {
    /// Registry with only the default (German) table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static RwLock<TranslationRegistry> {
        GLOBAL.get_or_init(|| RwLock::new(TranslationRegistry::new()))
    }

    /// Register (or replace) the table for `iso_code`.
    ///
    /// The code is lower-cased.  Missing entries are copied from the default
    /// table and a warning is logged.  Returns the back-filled holiday types.
    /// Replacing the default table itself is allowed; it is completed from
    /// the previous default table.
    pub fn add_translation(&mut self, iso_code: &str, mut table: TranslationTable) -> Vec<HolidayType> {
        let code = iso_code.to_lowercase();
        let filled = match self.tables.get(DEFAULT_LANGUAGE) {
            Some(default) => table.fill_from(default),
            None => table.fill_from(&TranslationTable::german()),
        };
        if !filled.is_empty() {
            warn!(
                language = %code,
                missing = filled.len(),
                "translation does not cover all holidays, took German as fallback"
            );
        }
        self.tables.insert(code, table);
        filled
    }

    /// Switch the current language.
    ///
    /// An unregistered code leaves the current language unchanged, logs an
    /// error, and returns `false`.
    pub fn set_language(&mut self, iso_code: &str) -> bool {
        let code = iso_code.to_lowercase();
        if !self.tables.contains_key(&code) {
            error!(
                language = %code,
                "tried to set language but the translation is missing, register it with add_translation first"
            );
            return false;
        }
        self.current = code;
        true
    }

    /// The current language code.
    pub fn language(&self) -> &str {
        &self.current
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// The table registered for `iso_code`.
    pub fn table(&self, iso_code: &str) -> Option<&TranslationTable> {
        self.tables.get(&iso_code.to_lowercase())
    }

    /// Name of `kind` in `lang`, or in the current language when `None`.
    ///
    /// Returns `None` only for an unregistered language.
    pub fn translate(&self, kind: HolidayType, lang: Option<&str>) -> Option<&str> {
        self.table(lang.unwrap_or(self.current.as_str()))?.get(kind)
    }

    /// Name of `holiday` in `lang`, or in the current language when `None`.
    pub fn holiday_name(&self, holiday: &Holiday, lang: Option<&str>) -> Option<&str> {
        self.translate(holiday.kind, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_german() {
        let reg = TranslationRegistry::new();
        assert_eq!(reg.language(), "de");
        assert_eq!(reg.languages(), vec!["de"]);
        assert_eq!(
            reg.translate(HolidayType::PrayerAndRepentance, None),
            Some("Buß- und Bettag")
        );
    }

    #[test]
    fn add_and_switch() {
        let mut reg = TranslationRegistry::new();
        let filled = reg.add_translation("EN", TranslationTable::english());
        assert!(filled.is_empty());
        assert!(reg.set_language("En"));
        assert_eq!(reg.language(), "en");
        assert_eq!(reg.translate(HolidayType::GoodFriday, None), Some("Good Friday"));
        assert_eq!(reg.translate(HolidayType::GoodFriday, Some("de")), Some("Karfreitag"));
    }

    #[test]
    fn unknown_language_keeps_current() {
        let mut reg = TranslationRegistry::new();
        assert!(!reg.set_language("fr"));
        assert_eq!(reg.language(), "de");
        assert_eq!(reg.translate(HolidayType::NewYear, Some("fr")), None);
    }

    #[test]
    fn partial_table_is_backfilled() {
        let mut reg = TranslationRegistry::new();
        let table = TranslationTable::new().with(HolidayType::NewYear, "Capodanno");
        let filled = reg.add_translation("it", table);
        assert_eq!(filled.len(), 16);
        assert_eq!(reg.translate(HolidayType::NewYear, Some("it")), Some("Capodanno"));
        assert_eq!(reg.translate(HolidayType::AllSaints, Some("it")), Some("Allerheiligen"));
        assert!(reg.table("IT").unwrap().is_complete());
    }

    #[test]
    fn override_default_names() {
        let mut reg = TranslationRegistry::new();
        let table = TranslationTable::german().with(HolidayType::ChristmasDay, "Erster Weihnachtsfeiertag");
        reg.add_translation("de", table);
        assert_eq!(
            reg.translate(HolidayType::ChristmasDay, None),
            Some("Erster Weihnachtsfeiertag")
        );
    }
}
