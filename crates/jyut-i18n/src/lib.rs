#![forbid(unsafe_code)]

//! Translation catalogs for Jyut Dictionary.
//!
//! Loads Qt Linguist `.ts` documents into read-only catalogs keyed by
//! (context, source, disambiguation), selects numerus forms with per-language
//! plural rules, and serves lookups through a translator whose active
//! catalog set can be switched at runtime in one atomic step.
//!
//! # How it fits together
//! [`ts`] parses documents into a [`Catalog`]. [`CatalogLocator`] maps
//! locale tags to files, [`I18nConfig`] decides which language to load,
//! and [`Translator`] holds what is active. A missing translation is never
//! an error: lookups fall back to the source text.

pub mod catalog;
pub mod config;
pub mod coverage;
pub mod error;
pub mod format;
pub mod locale;
pub mod locator;
pub mod plural;
pub mod translator;
pub mod ts;

use std::borrow::Cow;

pub use catalog::{
    Catalog, CatalogBuilder, CatalogHeader, CatalogStats, Context, DuplicateEntry,
    DuplicatePolicy, LoadOptions, Location, Message, Translation, TranslationStatus,
};
pub use config::{ConfigError, I18nConfig, LanguagePreference, LanguageSource, ResolvedLanguages};
pub use coverage::{CoverageReport, LocaleCoverage, MessageKey};
pub use error::I18nError;
pub use locale::{KNOWN_LANGUAGES, KnownLanguage, LocaleTag};
pub use locator::CatalogLocator;
pub use plural::{PluralCategory, PluralRule};
pub use translator::{LoadReport, TranslationSet, Translator};

/// Translate through the global translator.
#[must_use]
pub fn tr<'a>(context: &str, source: &'a str) -> Cow<'a, str> {
    Translator::global().translate(context, source, None)
}

/// Translate a numerus message through the global translator, with `%n`
/// replaced by `count`.
#[must_use]
pub fn tr_n(context: &str, source: &str, count: i64) -> String {
    Translator::global().translate_plural(context, source, None, count)
}
