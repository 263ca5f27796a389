//! Maps locale tags to catalog files on disk.
//!
//! Files are named `<prefix><separator><tag>.<extension>`, for example
//! `jyutdictionary-yue_Hant.ts`. Resolution walks
//! [`LocaleTag::candidates`] and stops at the first file that exists.

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, LoadOptions};
use crate::error::I18nError;
use crate::locale::LocaleTag;
use crate::ts;

/// Default file prefix.
pub const DEFAULT_PREFIX: &str = "jyutdictionary";
/// Default separator between prefix and tag.
pub const DEFAULT_SEPARATOR: &str = "-";
/// Default extension, without the dot.
pub const DEFAULT_EXTENSION: &str = "ts";

/// Finds catalog files for locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocator {
    directory: PathBuf,
    prefix: String,
    separator: String,
    extension: String,
}

impl CatalogLocator {
    /// A locator over `directory` with the default naming scheme.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file a catalog for exactly `tag` would live in.
    #[must_use]
    pub fn path_for(&self, tag: &LocaleTag) -> PathBuf {
        self.directory.join(format!(
            "{}{}{tag}.{}",
            self.prefix, self.separator, self.extension
        ))
    }

    /// First existing file among `tag`'s candidates.
    pub fn resolve(&self, tag: &LocaleTag) -> Result<(LocaleTag, PathBuf), I18nError> {
        let mut searched = Vec::new();
        for candidate in tag.candidates() {
            let path = self.path_for(&candidate);
            if path.is_file() {
                tracing::debug!(requested = %tag, found = %candidate, path = %path.display(), "catalog resolved");
                return Ok((candidate, path));
            }
            searched.push(path);
        }
        Err(I18nError::MissingCatalog {
            locale: tag.to_string(),
            searched,
        })
    }

    /// Locales that have a catalog file in the directory, sorted.
    ///
    /// Files whose tag part does not parse are ignored. A missing
    /// directory yields an empty list.
    pub fn available(&self) -> Result<Vec<LocaleTag>, I18nError> {
        let entries = match std::fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(I18nError::Io {
                    path: self.directory.clone(),
                    source,
                });
            }
        };

        let mut tags: Vec<LocaleTag> = entries
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .filter_map(|e| self.tag_from_file_name(&e.file_name().to_string_lossy()))
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }

    /// Extract the locale from a catalog file name, if it follows the scheme.
    #[must_use]
    pub fn tag_from_file_name(&self, name: &str) -> Option<LocaleTag> {
        let stem = name
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix(self.separator.as_str())?
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        LocaleTag::parse(stem).ok()
    }

    /// Resolve and parse the catalog for `tag`.
    ///
    /// The catalog is named after the file that was found, which may be a
    /// less specific candidate than `tag`.
    pub fn load(&self, tag: &LocaleTag, options: LoadOptions) -> Result<Catalog, I18nError> {
        let (found, path) = self.resolve(tag)?;
        ts::parse_file(&path, Some(found), options)
    }
}
