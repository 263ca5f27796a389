use std::path::PathBuf;

use jyut_i18n::{ConfigError, I18nError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] I18nError),

    #[error("{failed} of {total} catalogs failed to load")]
    CheckFailed { failed: usize, total: usize },

    #[error("path does not exist: {path}")]
    MissingPath { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Process exit code: 2 usage/config, 3 bad catalog data, 4 missing
    /// catalog, 1 anything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Config(_) => 2,
            Self::Catalog(e) => match e {
                I18nError::InvalidLocale(_) => 2,
                I18nError::Parse { .. } | I18nError::DuplicateKey { .. } => 3,
                I18nError::MissingCatalog { .. } => 4,
                I18nError::Io { .. } => 1,
            },
            Self::CheckFailed { .. } => 3,
            Self::MissingPath { .. } => 4,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::usage("bad").exit_code(), 2);
        assert_eq!(CliError::Config(ConfigError::Validation(vec![])).exit_code(), 2);
        assert_eq!(CliError::CheckFailed { failed: 1, total: 2 }.exit_code(), 3);
        assert_eq!(
            CliError::Catalog(I18nError::MissingCatalog {
                locale: "fr".into(),
                searched: vec![],
            })
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::Catalog(I18nError::InvalidLocale("x".into())).exit_code(),
            2
        );
        assert_eq!(
            CliError::Io(std::io::Error::other("disk")).exit_code(),
            1
        );
    }

    #[test]
    fn catalog_errors_display_transparently() {
        let err = CliError::from(I18nError::InvalidLocale("Klingon".into()));
        assert_eq!(err.to_string(), "invalid locale: Klingon");
    }
}
