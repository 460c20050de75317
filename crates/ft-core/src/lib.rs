//! # ft-core
//!
//! Core types and error definitions for feiertage.
//!
//! This crate provides the closed vocabularies shared by every other crate in
//! the workspace: the German [`Region`] codes, the [`HolidayType`]
//! identifiers, and the error hierarchy used to reject bad input at the API
//! boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Holiday identifiers.
pub mod holiday_type;

/// German federal-state codes.
pub mod region;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use holiday_type::{HolidayType, IntoHolidayType};
pub use region::{IntoRegion, Region};
