//! # ft-i18n
//!
//! Display names for holidays.
//!
//! A [`TranslationRegistry`] maps lower-case ISO language codes to
//! [`TranslationTable`]s and remembers the current language.  The German
//! table is the default and always complete; tables registered later are
//! back-filled from it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Language registry and the process-wide instance.
pub mod registry;

/// Translation tables and the built-in languages.
pub mod table;

pub use registry::{TranslationRegistry, DEFAULT_LANGUAGE};
pub use table::TranslationTable;
