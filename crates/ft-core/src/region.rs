//! `Region` — German federal states plus the nationwide selector.

use std::str::FromStr;

use crate::errors::{Error, Result};

/// A German federal state (two-letter code) or the `ALL` selector.
///
/// `ALL` is not "nationwide holidays only": it is its own branch in every
/// regional rule and selects every holiday known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Region {
    /// Baden-Württemberg.
    BW,
    /// Bayern.
    BY,
    /// Berlin.
    BE,
    /// Brandenburg.
    BB,
    /// Bremen.
    HB,
    /// Hessen.
    HE,
    /// Hamburg.
    HH,
    /// Mecklenburg-Vorpommern.
    MV,
    /// Niedersachsen.
    NI,
    /// Nordrhein-Westfalen.
    NW,
    /// Rheinland-Pfalz.
    RP,
    /// Saarland.
    SL,
    /// Sachsen.
    SN,
    /// Sachsen-Anhalt.
    ST,
    /// Schleswig-Holstein.
    SH,
    /// Thüringen.
    TH,
    /// Every holiday of every region.
    All,
}

const ALL_REGIONS: [Region; 17] = [
    Region::BW,
    Region::BY,
    Region::BE,
    Region::BB,
    Region::HB,
    Region::HE,
    Region::HH,
    Region::MV,
    Region::NI,
    Region::NW,
    Region::RP,
    Region::SL,
    Region::SN,
    Region::ST,
    Region::SH,
    Region::TH,
    Region::All,
];

impl Region {
    /// Every region, `ALL` last.
    pub fn all() -> &'static [Region] {
        &ALL_REGIONS
    }

    /// The sixteen federal states (everything except `ALL`).
    pub fn states() -> &'static [Region] {
        &ALL_REGIONS[..16]
    }

    /// Return the code (`"BW"`, …, `"ALL"`).
    pub fn code(&self) -> &'static str {
        match self {
            Region::BW => "BW",
            Region::BY => "BY",
            Region::BE => "BE",
            Region::BB => "BB",
            Region::HB => "HB",
            Region::HE => "HE",
            Region::HH => "HH",
            Region::MV => "MV",
            Region::NI => "NI",
            Region::NW => "NW",
            Region::RP => "RP",
            Region::SL => "SL",
            Region::SN => "SN",
            Region::ST => "ST",
            Region::SH => "SH",
            Region::TH => "TH",
            Region::All => "ALL",
        }
    }

    /// Return `true` for the `ALL` selector.
    pub fn is_all(&self) -> bool {
        matches!(self, Region::All)
    }

    /// Return `true` if `self` is `ALL` or one of `regions`.
    pub fn is_any_of(&self, regions: &[Region]) -> bool {
        self.is_all() || regions.contains(self)
    }

    /// Comma-separated list of every code, as used in error messages.
    pub fn code_list() -> String {
        ALL_REGIONS
            .iter()
            .map(Region::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Parse a region code; only the exact upper-case codes are accepted.
    fn from_str(s: &str) -> Result<Self> {
        ALL_REGIONS
            .iter()
            .copied()
            .find(|r| r.code() == s)
            .ok_or_else(|| Error::InvalidRegion(s.to_string()))
    }
}

/// Anything the public API accepts where a region is expected.
///
/// Typed [`Region`] values pass through; strings are validated and rejected
/// with [`Error::InvalidRegion`].
pub trait IntoRegion {
    /// Convert into a validated [`Region`].
    fn into_region(self) -> Result<Region>;
}

impl IntoRegion for Region {
    fn into_region(self) -> Result<Region> {
        Ok(self)
    }
}

impl IntoRegion for &str {
    fn into_region(self) -> Result<Region> {
        self.parse()
    }
}

impl IntoRegion for String {
    fn into_region(self) -> Result<Region> {
        self.parse()
    }
}

impl IntoRegion for &String {
    fn into_region(self) -> Result<Region> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for &r in Region::all() {
            assert_eq!(r.code().parse::<Region>().unwrap(), r);
        }
    }

    #[test]
    fn codes_must_match_exactly() {
        for code in ["sn", "all", "By", " SN ", "BY ", "ALL\n"] {
            assert_eq!(
                code.parse::<Region>(),
                Err(Error::InvalidRegion(code.into())),
                "{code:?}"
            );
        }
        assert_eq!("SN".parse::<Region>().unwrap(), Region::SN);
    }

    #[test]
    fn unknown_code() {
        assert_eq!(
            "XX".parse::<Region>(),
            Err(Error::InvalidRegion("XX".into()))
        );
        assert!("".into_region().is_err());
    }

    #[test]
    fn all_selects_everything() {
        assert!(Region::All.is_any_of(&[]));
        assert!(Region::BW.is_any_of(&[Region::BW, Region::BY]));
        assert!(!Region::HB.is_any_of(&[Region::BW, Region::BY]));
    }

    #[test]
    fn states_exclude_all() {
        assert_eq!(Region::states().len(), 16);
        assert!(!Region::states().contains(&Region::All));
    }
}
