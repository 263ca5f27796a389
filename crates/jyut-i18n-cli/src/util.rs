use std::path::Path;

use jyut_i18n::{Catalog, CatalogLocator, I18nConfig, LoadOptions, LocaleTag, ts};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "JYUT_I18N_LOG";

/// Install the stderr log subscriber. Later calls are no-ops.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Print `report` as pretty JSON, or as the text `render` produces.
pub fn emit<T: Serialize>(json: bool, report: &T, render: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        let text = render(report);
        if !text.is_empty() {
            println!("{text}");
        }
    }
    Ok(())
}

/// Load a catalog file given on the command line.
///
/// The locale comes from `locale` when given, then from a
/// `jyutdictionary-<tag>.ts` file name, then from the document header.
pub fn load_catalog(path: &Path, locale: Option<&str>, options: LoadOptions) -> Result<Catalog> {
    if !path.exists() {
        return Err(CliError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    let tag = match locale {
        Some(raw) => Some(LocaleTag::parse(raw)?),
        None => locale_from_path(path),
    };
    Ok(ts::parse_file(path, tag, options)?)
}

fn locale_from_path(path: &Path) -> Option<LocaleTag> {
    let name = path.file_name()?.to_string_lossy();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    CatalogLocator::new(dir).tag_from_file_name(&name)
}

/// The configuration at `path`, or defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<I18nConfig> {
    match path {
        Some(p) => Ok(I18nConfig::load(p)?),
        None => Ok(I18nConfig::default()),
    }
}
