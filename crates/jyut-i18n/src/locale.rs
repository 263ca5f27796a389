//! Locale tags, Qt-style candidate expansion, and the languages the
//! application offers.
//!
//! Tags are accepted in POSIX (`yue_Hant_HK`, `en_CA.UTF-8`) and BCP 47
//! (`zh-Hans`) spellings and normalized to the underscore form used in
//! catalog file names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::I18nError;

/// A parsed locale identifier: `language[_Script][_REGION]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleTag {
    /// Parse a locale string.
    ///
    /// Encoding (`.UTF-8`) and modifier (`@latin`) suffixes are dropped.
    /// `C` and `POSIX` are rejected: they name no language.
    pub fn parse(input: &str) -> Result<Self, I18nError> {
        let invalid = || I18nError::InvalidLocale(input.to_string());

        let core = input
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if core.is_empty() || core == "C" || core == "POSIX" {
            return Err(invalid());
        }

        let mut parts = core.split(['_', '-']);
        let language = parts.next().ok_or_else(invalid)?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut script = None;
        let mut region = None;
        for part in parts {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) && script.is_none()
                && region.is_none()
            {
                let mut s = part.to_ascii_lowercase();
                s[..1].make_ascii_uppercase();
                script = Some(s);
            } else if region.is_none()
                && ((part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                    || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit())))
            {
                region = Some(part.to_ascii_uppercase());
            } else {
                return Err(invalid());
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            script,
            region,
        })
    }

    /// Build a tag from already-validated parts.
    #[must_use]
    pub fn from_parts(language: &str, script: Option<&str>, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            script: script.map(str::to_string),
            region: region.map(str::to_ascii_uppercase),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Candidate tags in Qt's lookup order, most specific first.
    ///
    /// `yue_Hant_HK` expands to `yue_Hant_HK`, `yue_Hant`, `yue_HK`, `yue`.
    /// The list never contains duplicates and always ends with the bare
    /// language.
    #[must_use]
    pub fn candidates(&self) -> Vec<LocaleTag> {
        let lang = self.language.as_str();
        let script = self.script.as_deref();
        let region = self.region.as_deref();

        let mut out: Vec<LocaleTag> = Vec::with_capacity(4);
        let mut push = |tag: LocaleTag| {
            if !out.contains(&tag) {
                out.push(tag);
            }
        };
        push(self.clone());
        if script.is_some() {
            push(Self::from_parts(lang, script, None));
        }
        if region.is_some() {
            push(Self::from_parts(lang, None, region));
        }
        push(Self::from_parts(lang, None, None));
        out
    }

    /// Whether text in this locale is written with Han characters.
    ///
    /// An explicit script wins. A tag without a script also counts as Han
    /// when its language is Chinese (`zh`, `yue`, ...), so `zh_TW` and bare
    /// `yue` qualify. A script-only check would reject both.
    #[must_use]
    pub fn is_han_script(&self) -> bool {
        match self.script.as_deref() {
            Some(s) => matches!(s, "Hani" | "Hans" | "Hant"),
            None => HAN_LANGUAGES.contains(&self.language.as_str()),
        }
    }

    /// Read the system locale from `LC_ALL`, `LC_MESSAGES`, then `LANG`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) with an injectable variable source.
    ///
    /// Empty variables are skipped, as are values that do not parse (`C`).
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .filter(|v| !v.trim().is_empty())
            .find_map(|v| Self::parse(&v).ok())
    }
}

const HAN_LANGUAGES: &[&str] = &["zh", "yue", "lzh", "wuu", "hak", "nan", "gan", "hsn", "cmn"];

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(s) = &self.script {
            write!(f, "_{s}")?;
        }
        if let Some(r) = &self.region {
            write!(f, "_{r}")?;
        }
        Ok(())
    }
}

impl FromStr for LocaleTag {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LocaleTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocaleTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Application languages
// ---------------------------------------------------------------------------

/// A language choice offered in the application's settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownLanguage {
    /// Catalog tag, or `None` for "follow the system".
    pub tag: Option<&'static str>,
    /// English display name; this is also the source text of the
    /// translatable label in context [`LANGUAGE_LABEL_CONTEXT`].
    pub name: &'static str,
}

/// Context holding the translatable language labels.
pub const LANGUAGE_LABEL_CONTEXT: &str = "AdvancedTab";

/// Languages in the order the settings screen lists them.
pub const KNOWN_LANGUAGES: &[KnownLanguage] = &[
    KnownLanguage { tag: None, name: "Use system language" },
    KnownLanguage { tag: Some("en"), name: "English" },
    KnownLanguage { tag: Some("fr"), name: "French" },
    KnownLanguage { tag: Some("fr_CA"), name: "French (CA)" },
    KnownLanguage { tag: Some("zh_Hans"), name: "Simplified Chinese" },
    KnownLanguage { tag: Some("zh_Hant"), name: "Traditional Chinese" },
    KnownLanguage { tag: Some("yue_Hans"), name: "Cantonese (Simplified)" },
    KnownLanguage { tag: Some("yue_Hant"), name: "Cantonese (Traditional)" },
];

/// Find the known language whose tag matches `tag` exactly.
#[must_use]
pub fn known_language(tag: &LocaleTag) -> Option<&'static KnownLanguage> {
    let canonical = tag.to_string();
    KNOWN_LANGUAGES
        .iter()
        .find(|k| k.tag.is_some_and(|t| t == canonical))
}
