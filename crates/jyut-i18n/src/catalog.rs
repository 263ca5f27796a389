//! Translation catalog for one locale: contexts of messages keyed by
//! (source text, disambiguation).
//!
//! # Invariants
//!
//! 1. **Read-only after build**: a [`Catalog`] is produced by
//!    [`CatalogBuilder::finish`] and never mutated; it is `Send + Sync`
//!    and shared through `Arc`.
//!
//! 2. **One winner per key**: within a context, at most one *active*
//!    message answers a given (source, disambiguation). Which one is
//!    decided by the [`DuplicatePolicy`] at build time; every tolerated
//!    duplicate is recorded in [`Catalog::duplicates`].
//!
//! 3. **Inactive messages never answer**: obsolete, vanished, empty, and
//!    (optionally) unfinished messages stay in the model for tooling but
//!    are invisible to lookups.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing context | Context not in catalog | Lookup returns `None` |
//! | Missing key | Source not in context | Lookup returns `None` |
//! | Unknown disambiguation | No message with that comment | Retried without comment |
//! | Duplicate key | Same key twice | Policy: keep first / keep last / reject |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;
use crate::locale::LocaleTag;
use crate::plural::{PluralCategory, PluralRule, select_category, select_form};

/// Status carried by a `<translation type=...>` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    Vanished,
}

impl TranslationStatus {
    /// Parse the `type` attribute value. Unknown values count as finished.
    #[must_use]
    pub fn from_attr(value: &str) -> Self {
        match value {
            "unfinished" => Self::Unfinished,
            "obsolete" => Self::Obsolete,
            "vanished" => Self::Vanished,
            _ => Self::Finished,
        }
    }

    /// Obsolete and vanished messages no longer exist in the UI code.
    #[must_use]
    pub fn is_retired(self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

/// Source-code reference kept for traceability only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    pub file: Option<String>,
    pub line: Option<i64>,
}

/// Translated text: one string, or ordered numerus forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
    Text(String),
    Numerus(Vec<String>),
}

impl Translation {
    /// Whether no usable text is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Numerus(forms) => forms.iter().all(String::is_empty),
        }
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// One source string and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Message {
    pub source: String,
    /// `<comment>`: distinguishes identical sources with different meanings.
    pub disambiguation: Option<String>,
    pub translation: Translation,
    pub status: TranslationStatus,
    /// `<extracomment>`: developer note for translators.
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    /// `<oldsource>`: the source text before the last edit, if recorded.
    pub old_source: Option<String>,
    pub locations: Vec<Location>,
}

impl Message {
    /// A finished, single-form message.
    #[must_use]
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Text(translation.into()),
            ..Self::default()
        }
    }

    /// A finished numerus message.
    #[must_use]
    pub fn numerus(source: impl Into<String>, forms: Vec<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Numerus(forms),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_disambiguation(mut self, comment: impl Into<String>) -> Self {
        self.disambiguation = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    /// Disambiguation as a plain string, empty when absent.
    #[must_use]
    pub fn disambiguation_str(&self) -> &str {
        self.disambiguation.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_numerus(&self) -> bool {
        matches!(self.translation, Translation::Numerus(_))
    }

    /// Whether lookups may return this message.
    #[must_use]
    pub fn is_active(&self, use_unfinished: bool) -> bool {
        !self.status.is_retired()
            && !self.translation.is_empty()
            && (use_unfinished || self.status != TranslationStatus::Unfinished)
    }

    /// Human-readable key, `source` or `source#disambiguation`.
    #[must_use]
    pub fn key_label(&self) -> String {
        match self.disambiguation.as_deref() {
            Some(d) if !d.is_empty() => format!("{}#{d}", self.source),
            _ => self.source.clone(),
        }
    }
}

/// A named group of messages, typically one UI class.
#[derive(Debug, Clone, Default)]
pub struct Context {
    name: String,
    messages: Vec<Message>,
    /// Source text → indices of winning active messages (one per
    /// distinct disambiguation).
    index: HashMap<String, Vec<usize>>,
}

impl Context {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All messages in document order, including inactive ones.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Find the active message for an exact (source, disambiguation) key.
    #[must_use]
    pub fn find(&self, source: &str, disambiguation: &str) -> Option<&Message> {
        self.index
            .get(source)?
            .iter()
            .map(|&i| &self.messages[i])
            .find(|m| m.disambiguation_str() == disambiguation)
    }

    /// Find with Qt's retry: a non-empty disambiguation that matches
    /// nothing is retried as empty.
    #[must_use]
    pub fn lookup(&self, source: &str, disambiguation: Option<&str>) -> Option<&Message> {
        let comment = disambiguation.unwrap_or_default();
        self.find(source, comment).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                self.find(source, "")
            }
        })
    }

    /// Active messages that answer lookups.
    pub fn active_messages(&self) -> impl Iterator<Item = &Message> {
        self.index
            .values()
            .flatten()
            .map(|&i| &self.messages[i])
    }
}

/// How to resolve two active messages with the same key in one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// First match wins (the format's conventional reading).
    #[default]
    KeepFirst,
    /// Last write wins.
    KeepLast,
    /// Fail the load with [`I18nError::DuplicateKey`].
    Reject,
}

/// Options fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Let `unfinished` translations answer lookups. Default: true.
    pub use_unfinished: bool,
    /// Duplicate key handling. Default: keep first.
    pub duplicates: DuplicatePolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            use_unfinished: true,
            duplicates: DuplicatePolicy::KeepFirst,
        }
    }
}

/// A tolerated duplicate, recorded for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub context: String,
    pub key: String,
    /// Index (within the context) of the message that answers lookups.
    pub kept: usize,
    /// Index of the message that was shadowed.
    pub shadowed: usize,
}

/// Document attributes of the `<TS>` root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CatalogHeader {
    pub version: Option<String>,
    /// Declared target language (`yue_HK`); may differ from the file tag.
    pub language: Option<String>,
    pub source_language: Option<String>,
}

/// All translations for one locale.
///
/// # Example
///
/// ```
/// use jyut_i18n::catalog::{Catalog, LoadOptions, Message};
/// use jyut_i18n::locale::LocaleTag;
///
/// let mut builder = Catalog::builder(LocaleTag::parse("yue_Hant").unwrap(), LoadOptions::default());
/// builder.push("NoUpdateDialog", Message::new("No update found!", "冇搵到可用嘅更新!")).unwrap();
/// let catalog = builder.finish();
///
/// assert_eq!(
///     catalog.translate("NoUpdateDialog", "No update found!", None),
///     Some("冇搵到可用嘅更新!")
/// );
/// assert_eq!(catalog.translate("NoUpdateDialog", "Missing", None), None);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: LocaleTag,
    header: CatalogHeader,
    plural_rule: PluralRule,
    options: LoadOptions,
    contexts: Vec<Context>,
    context_index: HashMap<String, usize>,
    duplicates: Vec<DuplicateEntry>,
}

impl Catalog {
    /// Start building a catalog for `locale`.
    #[must_use]
    pub fn builder(locale: LocaleTag, options: LoadOptions) -> CatalogBuilder {
        CatalogBuilder::new(locale, options)
    }

    /// An empty catalog: every lookup misses.
    #[must_use]
    pub fn empty(locale: LocaleTag) -> Self {
        Self::builder(locale, LoadOptions::default()).finish()
    }

    #[must_use]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    #[must_use]
    pub fn header(&self) -> &CatalogHeader {
        &self.header
    }

    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    #[must_use]
    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// Contexts in document order.
    #[must_use]
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.context_index.get(name).map(|&i| &self.contexts[i])
    }

    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateEntry] {
        &self.duplicates
    }

    /// Every message with its context name, in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    /// The active message for a key, with the disambiguation retry.
    #[must_use]
    pub fn lookup(&self, context: &str, source: &str, disambiguation: Option<&str>) -> Option<&Message> {
        self.context(context)?.lookup(source, disambiguation)
    }

    /// Translated text for a key, or `None` when the catalog has none.
    ///
    /// For a numerus message this returns the form used for "other".
    #[must_use]
    pub fn translate(&self, context: &str, source: &str, disambiguation: Option<&str>) -> Option<&str> {
        let message = self.lookup(context, source, disambiguation)?;
        match &message.translation {
            Translation::Text(text) => Some(text.as_str()),
            Translation::Numerus(forms) => {
                select_category(self.plural_rule, forms, PluralCategory::Other)
            }
        }
    }

    /// Translated text for `count`, selecting the numerus form by the
    /// catalog's plural rule. `%n` is left for the caller to substitute.
    #[must_use]
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        count: i64,
    ) -> Option<&str> {
        let message = self.lookup(context, source, disambiguation)?;
        match &message.translation {
            Translation::Text(text) => Some(text.as_str()),
            Translation::Numerus(forms) => select_form(self.plural_rule, forms, count),
        }
    }

    /// Counts by status, for reports.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            contexts: self.contexts.len(),
            duplicates: self.duplicates.len(),
            ..CatalogStats::default()
        };
        for (_, m) in self.messages() {
            stats.messages += 1;
            match m.status {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => stats.obsolete += 1,
            }
            if m.is_numerus() {
                stats.numerus += 1;
            }
        }
        stats.active = self.contexts.iter().map(|c| c.active_messages().count()).sum();
        stats
    }
}

/// Message counts of one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete plus vanished.
    pub obsolete: usize,
    pub numerus: usize,
    /// Messages that answer lookups.
    pub active: usize,
    pub duplicates: usize,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates messages and applies the duplicate policy.
#[derive(Debug)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    fn new(locale: LocaleTag, options: LoadOptions) -> Self {
        let plural_rule = PluralRule::for_locale(locale.language());
        Self {
            catalog: Catalog {
                locale,
                header: CatalogHeader::default(),
                plural_rule,
                options,
                contexts: Vec::new(),
                context_index: HashMap::new(),
                duplicates: Vec::new(),
            },
        }
    }

    pub fn set_header(&mut self, header: CatalogHeader) {
        self.catalog.header = header;
    }

    /// Override the plural rule detected from the locale.
    pub fn set_plural_rule(&mut self, rule: PluralRule) {
        self.catalog.plural_rule = rule;
    }

    /// Make sure a context exists, even if it ends up with no messages.
    pub fn ensure_context(&mut self, name: &str) -> usize {
        if let Some(&i) = self.catalog.context_index.get(name) {
            return i;
        }
        let i = self.catalog.contexts.len();
        self.catalog.contexts.push(Context {
            name: name.to_string(),
            ..Context::default()
        });
        self.catalog.context_index.insert(name.to_string(), i);
        i
    }

    /// Append a message to `context`.
    ///
    /// Fails only under [`DuplicatePolicy::Reject`].
    pub fn push(&mut self, context: &str, message: Message) -> Result<(), I18nError> {
        let ctx_index = self.ensure_context(context);
        let options = self.catalog.options;
        let ctx = &mut self.catalog.contexts[ctx_index];

        let new_index = ctx.messages.len();
        let active = message.is_active(options.use_unfinished);
        ctx.messages.push(message);
        if !active {
            return Ok(());
        }

        let message = &ctx.messages[new_index];
        let slots = ctx.index.entry(message.source.clone()).or_default();
        let existing = slots
            .iter()
            .position(|&i| ctx.messages[i].disambiguation_str() == message.disambiguation_str());

        let Some(slot) = existing else {
            slots.push(new_index);
            return Ok(());
        };

        let key = message.key_label();
        let previous = slots[slot];
        let (kept, shadowed) = match options.duplicates {
            DuplicatePolicy::KeepFirst => (previous, new_index),
            DuplicatePolicy::KeepLast => {
                slots[slot] = new_index;
                (new_index, previous)
            }
            DuplicatePolicy::Reject => {
                return Err(I18nError::DuplicateKey {
                    locale: self.catalog.locale.to_string(),
                    context: ctx.name.clone(),
                    key,
                });
            }
        };
        tracing::warn!(
            locale = %self.catalog.locale,
            context = %ctx.name,
            key = %key,
            kept,
            shadowed,
            "duplicate message key"
        );
        self.catalog.duplicates.push(DuplicateEntry {
            context: ctx.name.clone(),
            key,
            kept,
            shadowed,
        });
        Ok(())
    }

    /// Convenience for a finished single-form message.
    pub fn insert(
        &mut self,
        context: &str,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<(), I18nError> {
        self.push(context, Message::new(source, translation))
    }

    /// Convenience for a finished numerus message.
    pub fn insert_numerus(
        &mut self,
        context: &str,
        source: impl Into<String>,
        forms: Vec<String>,
    ) -> Result<(), I18nError> {
        self.push(context, Message::numerus(source, forms))
    }

    #[must_use]
    pub fn finish(self) -> Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yue() -> LocaleTag {
        LocaleTag::parse("yue_Hant").unwrap()
    }

    fn sample_catalog() -> Catalog {
        let mut b = Catalog::builder(yue(), LoadOptions::default());
        b.insert("AboutWindow", "About %1", "關於 %1").unwrap();
        b.insert("MainWindow", "&File", "檔案").unwrap();
        b.push("MainWindow", Message::new("Open", "打開").with_disambiguation("file"))
            .unwrap();
        b.push("MainWindow", Message::new("Open", "開啟")).unwrap();
        b.push(
            "MainWindow",
            Message::new("Draft", "草稿").with_status(TranslationStatus::Unfinished),
        )
        .unwrap();
        b.push(
            "MainWindow",
            Message::new("Old", "舊").with_status(TranslationStatus::Obsolete),
        )
        .unwrap();
        b.push("MainWindow", Message::new("Empty", "")).unwrap();
        b.insert_numerus("SearchHistoryTab", "%n results", vec!["%n 個結果".into()])
            .unwrap();
        b.finish()
    }

    #[test]
    fn simple_lookup() {
        let c = sample_catalog();
        assert_eq!(c.translate("AboutWindow", "About %1", None), Some("關於 %1"));
        assert_eq!(c.translate("MainWindow", "&File", None), Some("檔案"));
    }

    #[test]
    fn context_is_part_of_the_key() {
        let c = sample_catalog();
        assert_eq!(c.translate("AboutWindow", "&File", None), None);
        assert_eq!(c.translate("NoSuchContext", "&File", None), None);
    }

    #[test]
    fn disambiguation_selects_and_retries() {
        let c = sample_catalog();
        assert_eq!(c.translate("MainWindow", "Open", Some("file")), Some("打開"));
        assert_eq!(c.translate("MainWindow", "Open", None), Some("開啟"));
        assert_eq!(c.translate("MainWindow", "Open", Some("unknown")), Some("開啟"));
        assert_eq!(c.translate("MainWindow", "&File", Some("menu")), Some("檔案"));
    }

    #[test]
    fn inactive_messages_do_not_answer() {
        let c = sample_catalog();
        assert_eq!(c.translate("MainWindow", "Old", None), None);
        assert_eq!(c.translate("MainWindow", "Empty", None), None);
        assert_eq!(c.translate("MainWindow", "Draft", None), Some("草稿"));
        assert_eq!(c.context("MainWindow").unwrap().len(), 6);
    }

    #[test]
    fn unfinished_can_be_excluded() {
        let options = LoadOptions {
            use_unfinished: false,
            ..LoadOptions::default()
        };
        let mut b = Catalog::builder(yue(), options);
        b.push("X", Message::new("Draft", "草稿").with_status(TranslationStatus::Unfinished))
            .unwrap();
        let c = b.finish();
        assert_eq!(c.translate("X", "Draft", None), None);
    }

    #[test]
    fn numerus_lookup_uses_plural_rule() {
        let c = sample_catalog();
        assert_eq!(c.plural_rule(), PluralRule::CJK);
        assert_eq!(c.translate_plural("SearchHistoryTab", "%n results", None, 1), Some("%n 個結果"));
        assert_eq!(c.translate("SearchHistoryTab", "%n results", None), Some("%n 個結果"));

        let mut b = Catalog::builder(LocaleTag::parse("en").unwrap(), LoadOptions::default());
        b.insert_numerus("T", "%n file(s)", vec!["%n file".into(), "%n files".into()])
            .unwrap();
        let en = b.finish();
        assert_eq!(en.translate_plural("T", "%n file(s)", None, 1), Some("%n file"));
        assert_eq!(en.translate_plural("T", "%n file(s)", None, 3), Some("%n files"));
        assert_eq!(en.translate("T", "%n file(s)", None), Some("%n files"));
    }

    #[test]
    fn simple_message_via_plural_lookup() {
        let c = sample_catalog();
        assert_eq!(c.translate_plural("MainWindow", "&File", None, 3), Some("檔案"));
    }

    #[test]
    fn keep_first_records_duplicate() {
        let mut b = Catalog::builder(yue(), LoadOptions::default());
        b.insert("strings", "OK", "好").unwrap();
        b.insert("strings", "OK", "確定").unwrap();
        let c = b.finish();
        assert_eq!(c.translate("strings", "OK", None), Some("好"));
        assert_eq!(
            c.duplicates(),
            &[DuplicateEntry {
                context: "strings".into(),
                key: "OK".into(),
                kept: 0,
                shadowed: 1,
            }]
        );
    }

    #[test]
    fn keep_last_overrides() {
        let options = LoadOptions {
            duplicates: DuplicatePolicy::KeepLast,
            ..LoadOptions::default()
        };
        let mut b = Catalog::builder(yue(), options);
        b.insert("strings", "Dictionary", "字典").unwrap();
        b.insert("strings", "Dictionary", "辭典").unwrap();
        let c = b.finish();
        assert_eq!(c.translate("strings", "Dictionary", None), Some("辭典"));
        assert_eq!(c.duplicates()[0].kept, 1);
    }

    #[test]
    fn reject_fails_on_duplicate() {
        let options = LoadOptions {
            duplicates: DuplicatePolicy::Reject,
            ..LoadOptions::default()
        };
        let mut b = Catalog::builder(yue(), options);
        b.insert("strings", "OK", "好").unwrap();
        let err = b.insert("strings", "OK", "確定").unwrap_err();
        assert!(matches!(err, I18nError::DuplicateKey { ref context, ref key, .. }
            if context == "strings" && key == "OK"));
    }

    #[test]
    fn duplicates_ignore_inactive_messages() {
        let options = LoadOptions {
            duplicates: DuplicatePolicy::Reject,
            ..LoadOptions::default()
        };
        let mut b = Catalog::builder(yue(), options);
        b.push("strings", Message::new("OK", "").with_status(TranslationStatus::Unfinished))
            .unwrap();
        b.insert("strings", "OK", "好").unwrap();
        assert_eq!(b.finish().translate("strings", "OK", None), Some("好"));
    }

    #[test]
    fn same_source_different_disambiguation_is_not_duplicate() {
        let options = LoadOptions {
            duplicates: DuplicatePolicy::Reject,
            ..LoadOptions::default()
        };
        let mut b = Catalog::builder(yue(), options);
        b.push("X", Message::new("Open", "打開").with_disambiguation("file"))
            .unwrap();
        b.push("X", Message::new("Open", "開").with_disambiguation("door"))
            .unwrap();
        assert!(b.finish().duplicates().is_empty());
    }

    #[test]
    fn stats_count_by_status() {
        let stats = sample_catalog().stats();
        assert_eq!(stats.contexts, 3);
        assert_eq!(stats.messages, 8);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.obsolete, 1);
        assert_eq!(stats.finished, 6);
        assert_eq!(stats.numerus, 1);
        assert_eq!(stats.active, 6);
        assert_eq!(stats.duplicates, 0);
    }

    #[test]
    fn empty_catalog() {
        let c = Catalog::empty(yue());
        assert!(c.contexts().is_empty());
        assert_eq!(c.translate("A", "b", None), None);
        assert_eq!(c.stats(), CatalogStats::default());
    }

    #[test]
    fn messages_iterates_in_document_order() {
        let c = sample_catalog();
        let first: Vec<(&str, &str)> = c
            .messages()
            .take(3)
            .map(|(ctx, m)| (ctx, m.source.as_str()))
            .collect();
        assert_eq!(first, vec![("AboutWindow", "About %1"), ("MainWindow", "&File"), ("MainWindow", "Open")]);
    }

    #[test]
    fn key_label_includes_disambiguation() {
        assert_eq!(Message::new("Open", "x").with_disambiguation("file").key_label(), "Open#file");
        assert_eq!(Message::new("Open", "x").with_disambiguation("").key_label(), "Open");
    }

    #[test]
    fn status_attr_parsing() {
        assert_eq!(TranslationStatus::from_attr("unfinished"), TranslationStatus::Unfinished);
        assert_eq!(TranslationStatus::from_attr("vanished"), TranslationStatus::Vanished);
        assert!(TranslationStatus::from_attr("obsolete").is_retired());
        assert_eq!(TranslationStatus::from_attr("whatever"), TranslationStatus::Finished);
    }
}
