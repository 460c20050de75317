//! Integration tests for translating engine output.

use ft_core::{HolidayType, Region};
use ft_i18n::{TranslationRegistry, TranslationTable};
use ft_time::HolidayYear;

#[test]
fn names_for_a_year() {
    let mut reg = TranslationRegistry::new();
    reg.add_translation("en", TranslationTable::english());

    let year = HolidayYear::build(2020, Region::SN).unwrap();
    let german: Vec<&str> = year
        .iter()
        .map(|h| reg.holiday_name(h, None).unwrap())
        .collect();
    assert!(german.contains(&"Buß- und Bettag"));
    assert!(german.contains(&"Reformationstag"));

    let english: Vec<&str> = year
        .iter()
        .map(|h| reg.holiday_name(h, Some("en")).unwrap())
        .collect();
    assert_eq!(english.first(), Some(&"New Year's Day"));
    assert_eq!(english.last(), Some(&"Boxing Day"));
}

#[test]
fn every_holiday_has_a_default_name() {
    let reg = TranslationRegistry::new();
    for &kind in HolidayType::all() {
        let name = reg.translate(kind, None).unwrap();
        assert!(!name.is_empty(), "{kind}");
    }
}

#[test]
fn global_registry_is_shared() {
    // Only this test touches the global instance.
    {
        let mut reg = TranslationRegistry::global().write().unwrap();
        reg.add_translation("en", TranslationTable::english());
    }
    let handle = std::thread::spawn(|| {
        TranslationRegistry::global()
            .read()
            .unwrap()
            .languages()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    });
    assert_eq!(handle.join().unwrap(), vec!["de", "en"]);
}

#[cfg(feature = "serde")]
#[test]
fn table_from_json() {
    let table: TranslationTable =
        serde_json::from_str(r#"{"KARFREITAG": "Good Friday", "NEUJAHRSTAG": "New Year"}"#).unwrap();
    assert_eq!(table.get(HolidayType::GoodFriday), Some("Good Friday"));
    assert_eq!(table.len(), 2);
    let mut reg = TranslationRegistry::new();
    assert_eq!(reg.add_translation("en", table).len(), 15);
}
