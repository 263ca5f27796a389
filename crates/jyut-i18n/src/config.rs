//! Configuration for catalog discovery, language choice, and loading.
//!
//! [`I18nConfig`] is plain data that can be loaded from TOML or JSON.
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! [catalogs]
//! directory = "resources/translations"
//!
//! [language]
//! preference = "yue_Hant"
//! fallbacks = ["zh_Hant"]
//!
//! [loading]
//! duplicates = "keep-last"
//! ```
//!
//! # Language resolution
//!
//! 1. `JYUT_I18N_LANG`, when set and not `system`;
//! 2. the configured preference, unless it is `system`;
//! 3. the system locale (`LC_ALL`, `LC_MESSAGES`, `LANG`);
//!
//! followed by the configured fallbacks. An empty result means the
//! source language is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::LoadOptions;
use crate::locale::LocaleTag;
use crate::locator::{CatalogLocator, DEFAULT_EXTENSION, DEFAULT_PREFIX, DEFAULT_SEPARATOR};

/// Environment variable that overrides the configured language.
pub const LANG_ENV: &str = "JYUT_I18N_LANG";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub catalogs: CatalogsConfig,
    pub language: LanguageConfig,
    pub loading: LoadOptions,
}

impl I18nConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load a `.json` or TOML file (by extension) and reject invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Check every value. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.catalogs.prefix.is_empty() {
            errors.push("catalogs.prefix must not be empty".into());
        }
        if self.catalogs.extension.is_empty() {
            errors.push("catalogs.extension must not be empty".into());
        } else if self.catalogs.extension.starts_with('.') {
            errors.push(format!(
                "catalogs.extension must not start with '.', got {:?}",
                self.catalogs.extension
            ));
        }
        if self.catalogs.separator.contains(['/', '\\']) {
            errors.push(format!(
                "catalogs.separator must not contain a path separator, got {:?}",
                self.catalogs.separator
            ));
        }

        if let LanguagePreference::Explicit(tag) = &self.language.preference {
            if LocaleTag::parse(tag).is_err() {
                errors.push(format!("language.preference is not a locale tag: {tag:?}"));
            }
        }
        for tag in &self.language.fallbacks {
            if LocaleTag::parse(tag).is_err() {
                errors.push(format!("language.fallbacks entry is not a locale tag: {tag:?}"));
            }
        }

        errors
    }

    /// A locator for the configured directory and naming scheme.
    #[must_use]
    pub fn locator(&self) -> CatalogLocator {
        CatalogLocator::new(&self.catalogs.directory)
            .with_prefix(&self.catalogs.prefix)
            .with_separator(&self.catalogs.separator)
            .with_extension(&self.catalogs.extension)
    }

    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        self.loading
    }

    /// Resolve the language candidates from the process environment.
    #[must_use]
    pub fn resolve_languages(&self) -> ResolvedLanguages {
        self.resolve_languages_with(|key| std::env::var(key).ok())
    }

    /// [`resolve_languages`](Self::resolve_languages) with an injectable
    /// variable source.
    pub fn resolve_languages_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> ResolvedLanguages {
        let mut out = ResolvedLanguages::default();

        let primary = match env(LANG_ENV).filter(|v| !v.trim().is_empty()) {
            Some(v) if !v.trim().eq_ignore_ascii_case("system") => {
                Some((v, LanguageSource::Environment))
            }
            _ => match &self.language.preference {
                LanguagePreference::Explicit(tag) => Some((tag.clone(), LanguageSource::Preference)),
                LanguagePreference::System => None,
            },
        };

        match primary {
            Some((raw, source)) => out.push_raw(&raw, source),
            None => {
                if let Some(tag) = LocaleTag::from_env_with(&env) {
                    out.push(tag, LanguageSource::System);
                }
            }
        }

        for raw in &self.language.fallbacks {
            out.push_raw(raw, LanguageSource::Fallback);
        }
        out
    }
}

/// Where catalogs live and how their files are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogsConfig {
    /// Default: `resources/translations`.
    pub directory: PathBuf,
    /// Default: `jyutdictionary`.
    pub prefix: String,
    /// Default: `-`.
    pub separator: String,
    /// Without the dot. Default: `ts`.
    pub extension: String,
}

impl Default for CatalogsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("resources/translations"),
            prefix: DEFAULT_PREFIX.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub preference: LanguagePreference,
    /// Tried in order after the preferred language.
    pub fallbacks: Vec<String>,
}

/// `"system"` or a locale tag.
///
/// Tags are kept as written and checked by [`I18nConfig::validate`], so
/// one bad entry does not make the whole file unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LanguagePreference {
    #[default]
    System,
    Explicit(String),
}

impl Serialize for LanguagePreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::System => serializer.serialize_str("system"),
            Self::Explicit(tag) => serializer.serialize_str(tag),
        }
    }
}

impl<'de> Deserialize<'de> for LanguagePreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("system") {
            Ok(Self::System)
        } else {
            Ok(Self::Explicit(s))
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution result
// ---------------------------------------------------------------------------

/// Why a language is in the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSource {
    Environment,
    Preference,
    System,
    Fallback,
}

/// Ordered, de-duplicated languages to try.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedLanguages {
    pub languages: Vec<(LocaleTag, LanguageSource)>,
    /// Values that were skipped because they do not parse.
    pub warnings: Vec<String>,
}

impl ResolvedLanguages {
    /// The tags alone, in order.
    #[must_use]
    pub fn tags(&self) -> Vec<LocaleTag> {
        self.languages.iter().map(|(t, _)| t.clone()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    fn push(&mut self, tag: LocaleTag, source: LanguageSource) {
        if !self.languages.iter().any(|(t, _)| *t == tag) {
            self.languages.push((tag, source));
        }
    }

    fn push_raw(&mut self, raw: &str, source: LanguageSource) {
        match LocaleTag::parse(raw) {
            Ok(tag) => self.push(tag, source),
            Err(e) => {
                tracing::warn!(value = raw, ?source, "ignoring unusable language");
                self.warnings.push(e.to_string());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
