//! `TranslationTable` — holiday type to display name.

use std::collections::BTreeMap;

use ft_core::HolidayType;

/// Map of [`HolidayType`] to display name.
///
/// May be partial; [`TranslationRegistry`](crate::TranslationRegistry)
/// completes it from the default language on registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TranslationTable(BTreeMap<HolidayType, String>);

impl TranslationTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of `kind`, returning the previous one.
    pub fn insert(&mut self, kind: HolidayType, name: impl Into<String>) -> Option<String> {
        self.0.insert(kind, name.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, kind: HolidayType, name: impl Into<String>) -> Self {
        self.insert(kind, name);
        self
    }

    /// The name of `kind`, if present.
    pub fn get(&self, kind: HolidayType) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    /// Holiday types without a (non-empty) name, in declaration order.
    pub fn missing(&self) -> Vec<HolidayType> {
        HolidayType::all()
            .iter()
            .copied()
            .filter(|k| self.get(*k).map_or(true, str::is_empty))
            .collect()
    }

    /// Return `true` if every holiday type has a name.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(kind, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (HolidayType, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Fill every missing (or empty) entry from `fallback`.
    ///
    /// Returns the holiday types that were filled.
    pub fn fill_from(&mut self, fallback: &TranslationTable) -> Vec<HolidayType> {
        let missing = self.missing();
        for &kind in &missing {
            if let Some(name) = fallback.get(kind) {
                self.insert(kind, name);
            }
        }
        missing
    }

    /// The German names (the default language).
    pub fn german() -> Self {
        use HolidayType as H;
        [
            (H::NewYear, "Neujahrstag"),
            (H::Epiphany, "Heilige Drei Könige"),
            (H::GoodFriday, "Karfreitag"),
            (H::EasterSunday, "Ostersonntag"),
            (H::EasterMonday, "Ostermontag"),
            (H::LabourDay, "Tag der Arbeit"),
            (H::Ascension, "Christi Himmelfahrt"),
            (H::WhitSunday, "Pfingstsonntag"),
            (H::WhitMonday, "Pfingstmontag"),
            (H::CorpusChristi, "Fronleichnam"),
            (H::Assumption, "Mariä Himmelfahrt"),
            (H::GermanUnity, "Tag der Deutschen Einheit"),
            (H::Reformation, "Reformationstag"),
            (H::AllSaints, "Allerheiligen"),
            (H::PrayerAndRepentance, "Buß- und Bettag"),
            (H::ChristmasDay, "1. Weihnachtstag"),
            (H::BoxingDay, "2. Weihnachtstag"),
        ]
        .into_iter()
        .collect()
    }

    /// English names.  Not registered by default.
    pub fn english() -> Self {
        use HolidayType as H;
        [
            (H::NewYear, "New Year's Day"),
            (H::Epiphany, "Epiphany"),
            (H::GoodFriday, "Good Friday"),
            (H::EasterSunday, "Easter Sunday"),
            (H::EasterMonday, "Easter Monday"),
            (H::LabourDay, "Labour Day"),
            (H::Ascension, "Ascension Day"),
            (H::WhitSunday, "Whit Sunday"),
            (H::WhitMonday, "Whit Monday"),
            (H::CorpusChristi, "Corpus Christi"),
            (H::Assumption, "Assumption Day"),
            (H::GermanUnity, "German Unity Day"),
            (H::Reformation, "Reformation Day"),
            (H::AllSaints, "All Saints' Day"),
            (H::PrayerAndRepentance, "Day of Prayer and Repentance"),
            (H::ChristmasDay, "Christmas Day"),
            (H::BoxingDay, "Boxing Day"),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>> FromIterator<(HolidayType, S)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (HolidayType, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
