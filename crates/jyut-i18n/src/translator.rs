//! Runtime translator with an atomically swappable catalog set.
//!
//! The active [`TranslationSet`] lives behind an [`ArcSwap`]: lookups are
//! wait-free and a language switch is a single pointer swap, so a reader
//! sees either the whole old set or the whole new one. A reader that needs
//! several lookups to agree takes a [`Translator::snapshot`] first.
//!
//! ```
//! use std::sync::Arc;
//! use jyut_i18n::catalog::{Catalog, LoadOptions};
//! use jyut_i18n::locale::LocaleTag;
//! use jyut_i18n::translator::Translator;
//!
//! let translator = Translator::new();
//! assert_eq!(translator.translate("NoUpdateDialog", "No update found!", None), "No update found!");
//!
//! let mut b = Catalog::builder(LocaleTag::parse("yue_Hant").unwrap(), LoadOptions::default());
//! b.insert("NoUpdateDialog", "No update found!", "冇搵到可用嘅更新!").unwrap();
//! translator.install(Arc::new(b.finish()));
//!
//! assert_eq!(translator.translate("NoUpdateDialog", "No update found!", None), "冇搵到可用嘅更新!");
//! ```

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::catalog::{Catalog, LoadOptions, Message, Translation};
use crate::config::{I18nConfig, ResolvedLanguages};
use crate::error::I18nError;
use crate::format::substitute_count;
use crate::locale::LocaleTag;
use crate::locator::CatalogLocator;
use crate::plural::{PluralCategory, select_category, select_form};

/// Language the source strings are written in; it needs no catalog.
pub const SOURCE_LANGUAGE: &str = "en";

// ---------------------------------------------------------------------------
// TranslationSet
// ---------------------------------------------------------------------------

/// Ordered catalogs searched by a translator, most recently installed first.
#[derive(Debug, Clone, Default)]
pub struct TranslationSet {
    catalogs: Vec<Arc<Catalog>>,
}

impl TranslationSet {
    #[must_use]
    pub fn new(catalogs: Vec<Arc<Catalog>>) -> Self {
        Self { catalogs }
    }

    #[must_use]
    pub fn catalogs(&self) -> &[Arc<Catalog>] {
        &self.catalogs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    #[must_use]
    pub fn locales(&self) -> Vec<LocaleTag> {
        self.catalogs.iter().map(|c| c.locale().clone()).collect()
    }

    /// The first catalog with an active message for the key.
    #[must_use]
    pub fn lookup(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Option<(&Catalog, &Message)> {
        self.catalogs.iter().find_map(|c| {
            c.lookup(context, source, disambiguation)
                .map(|m| (c.as_ref(), m))
        })
    }

    /// Translated text, or `None` when no catalog has it.
    #[must_use]
    pub fn translate(&self, context: &str, source: &str, disambiguation: Option<&str>) -> Option<&str> {
        let (catalog, message) = self.lookup(context, source, disambiguation)?;
        match &message.translation {
            Translation::Text(t) => Some(t.as_str()),
            Translation::Numerus(forms) => {
                select_category(catalog.plural_rule(), forms, PluralCategory::Other)
            }
        }
    }

    /// Translated form for `count`, before `%n` substitution.
    #[must_use]
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        count: i64,
    ) -> Option<&str> {
        let (catalog, message) = self.lookup(context, source, disambiguation)?;
        match &message.translation {
            Translation::Text(t) => Some(t.as_str()),
            Translation::Numerus(forms) => select_form(catalog.plural_rule(), forms, count),
        }
    }
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// Outcome of [`Translator::load_preferred`] / [`Translator::load_first`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Locale of the catalog now active, `None` for the source language.
    pub loaded: Option<LocaleTag>,
    /// Problems that were skipped on the way.
    pub warnings: Vec<String>,
}

/// Thread-safe catalog stack with atomic replacement.
pub struct Translator {
    active: ArcSwap<TranslationSet>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locales", &self.active_locales())
            .finish()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// A translator with no catalogs: every lookup returns the source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_set(TranslationSet::default())
    }

    #[must_use]
    pub fn with_set(set: TranslationSet) -> Self {
        Self {
            active: ArcSwap::from_pointee(set),
        }
    }

    /// The process-wide translator used by [`tr`](crate::tr) and
    /// [`tr_n`](crate::tr_n).
    pub fn global() -> &'static Translator {
        static GLOBAL: OnceLock<Translator> = OnceLock::new();
        GLOBAL.get_or_init(Translator::new)
    }

    /// Put `catalog` on top of the stack. A catalog already installed for
    /// the same locale is dropped.
    pub fn install(&self, catalog: Arc<Catalog>) {
        let locale = catalog.locale().clone();
        self.active.rcu(|current| {
            let mut catalogs = Vec::with_capacity(current.len() + 1);
            catalogs.push(Arc::clone(&catalog));
            catalogs.extend(
                current
                    .catalogs
                    .iter()
                    .filter(|c| c.locale() != &locale)
                    .cloned(),
            );
            TranslationSet::new(catalogs)
        });
        tracing::info!(locale = %locale, "catalog installed");
    }

    /// Remove the catalog for `locale`. Returns whether one was installed.
    pub fn remove(&self, locale: &LocaleTag) -> bool {
        let previous = self.active.rcu(|current| {
            TranslationSet::new(
                current
                    .catalogs
                    .iter()
                    .filter(|c| c.locale() != locale)
                    .cloned()
                    .collect(),
            )
        });
        let removed = previous.catalogs.iter().any(|c| c.locale() == locale);
        if removed {
            tracing::info!(locale = %locale, "catalog removed");
        }
        removed
    }

    /// Swap in a whole new stack, first element on top.
    pub fn replace(&self, catalogs: Vec<Arc<Catalog>>) {
        let set = TranslationSet::new(catalogs);
        tracing::info!(locales = ?set.locales(), "translation set replaced");
        self.active.store(Arc::new(set));
    }

    /// Drop every catalog.
    pub fn clear(&self) {
        self.replace(Vec::new());
    }

    /// The current set, unaffected by later switches.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TranslationSet> {
        self.active.load_full()
    }

    #[must_use]
    pub fn active_locales(&self) -> Vec<LocaleTag> {
        self.active.load().locales()
    }

    /// Translated text, or `source` when nothing matches.
    #[must_use]
    pub fn translate<'a>(
        &self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> Cow<'a, str> {
        let set = self.active.load();
        match set.translate(context, source, disambiguation) {
            Some(text) => Cow::Owned(text.to_string()),
            None => Cow::Borrowed(source),
        }
    }

    /// Translated form for `count` with `%n` replaced; the source text
    /// gets the same substitution when nothing matches.
    #[must_use]
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        count: i64,
    ) -> String {
        let set = self.active.load();
        let text = set
            .translate_plural(context, source, disambiguation, count)
            .unwrap_or(source);
        substitute_count(text, count)
    }

    /// Load the catalog for `tag` and make it the only active one.
    ///
    /// On failure the current set stays active.
    pub fn switch_locale(
        &self,
        locator: &CatalogLocator,
        tag: &LocaleTag,
        options: LoadOptions,
    ) -> Result<Arc<Catalog>, I18nError> {
        let catalog = Arc::new(locator.load(tag, options)?);
        self.replace(vec![Arc::clone(&catalog)]);
        Ok(catalog)
    }

    /// Resolve the configured language from the environment and load it.
    pub fn load_preferred(&self, config: &I18nConfig) -> LoadReport {
        self.load_resolved(config, &config.resolve_languages())
    }

    /// [`load_preferred`](Self::load_preferred) with languages resolved by
    /// the caller.
    pub fn load_resolved(&self, config: &I18nConfig, languages: &ResolvedLanguages) -> LoadReport {
        let mut report = self.load_first(&config.locator(), &languages.tags(), config.load_options());
        let mut warnings = languages.warnings.clone();
        warnings.append(&mut report.warnings);
        report.warnings = warnings;
        report
    }

    /// Install the first of `tags` that loads, replacing the current set.
    ///
    /// Reaching the source language, or running out of tags, leaves no
    /// catalog active. Failed loads are reported as warnings.
    pub fn load_first(
        &self,
        locator: &CatalogLocator,
        tags: &[LocaleTag],
        options: LoadOptions,
    ) -> LoadReport {
        let mut report = LoadReport::default();
        for tag in tags {
            if tag.language() == SOURCE_LANGUAGE {
                tracing::info!(locale = %tag, "source language selected");
                self.clear();
                return report;
            }
            match self.switch_locale(locator, tag, options) {
                Ok(catalog) => {
                    report.loaded = Some(catalog.locale().clone());
                    return report;
                }
                Err(e) => {
                    tracing::warn!(locale = %tag, error = %e, "catalog unavailable");
                    report.warnings.push(e.to_string());
                }
            }
        }
        self.clear();
        report
    }
}
