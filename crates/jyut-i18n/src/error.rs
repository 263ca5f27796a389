//! Error types shared by the loader, locator, and translator.

use std::path::PathBuf;

/// Errors from i18n operations.
///
/// A missing translation is not an error: lookups fall back to the source
/// text. Everything here is fatal to one catalog load, never to the process.
#[derive(Debug)]
pub enum I18nError {
    /// A locale string was malformed.
    InvalidLocale(String),
    /// A catalog document could not be parsed.
    Parse {
        /// File the document came from, if it was read from disk.
        path: Option<PathBuf>,
        /// Byte offset into the document where parsing stopped.
        offset: usize,
        /// 1-based line of `offset`.
        line: usize,
        /// 1-based column (in chars) of `offset`.
        column: usize,
        message: String,
    },
    /// Duplicate (source, disambiguation) key in one context, reported only
    /// when the duplicate policy is [`DuplicatePolicy::Reject`](crate::catalog::DuplicatePolicy::Reject).
    DuplicateKey {
        locale: String,
        context: String,
        key: String,
    },
    /// No catalog file exists for the requested locale.
    MissingCatalog {
        locale: String,
        /// Every path that was probed, most specific first.
        searched: Vec<PathBuf>,
    },
    /// A catalog file exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl I18nError {
    /// Build a parse error at `offset` within `input`, computing line and column.
    pub(crate) fn parse_at(input: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(input.len());
        let (line, column) = line_column(input, offset);
        Self::Parse {
            path: None,
            offset,
            line,
            column,
            message: message.into(),
        }
    }

    /// Attach a file path to a parse error. Other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse {
                offset,
                line,
                column,
                message,
                ..
            } => Self::Parse {
                path: Some(file.into()),
                offset,
                line,
                column,
                message,
            },
            other => other,
        }
    }

    /// Whether the error means "nothing to load" rather than "bad data".
    #[must_use]
    pub fn is_missing_catalog(&self) -> bool {
        matches!(self, Self::MissingCatalog { .. })
    }
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l}"),
            Self::Parse {
                path,
                line,
                column,
                message,
                ..
            } => match path {
                Some(p) => write!(f, "parse error in {}:{line}:{column}: {message}", p.display()),
                None => write!(f, "parse error at {line}:{column}: {message}"),
            },
            Self::DuplicateKey {
                locale,
                context,
                key,
            } => {
                write!(f, "duplicate key '{key}' in context '{context}' of locale '{locale}'")
            }
            Self::MissingCatalog { locale, searched } => {
                write!(f, "no catalog for locale '{locale}'")?;
                if !searched.is_empty() {
                    let paths: Vec<String> =
                        searched.iter().map(|p| p.display().to_string()).collect();
                    write!(f, " (searched {})", paths.join(", "))?;
                }
                Ok(())
            }
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for I18nError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn line_column(input: &str, offset: usize) -> (usize, usize) {
    let mut end = offset;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    let before = &input[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
