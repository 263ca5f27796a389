use std::path::PathBuf;

use clap::Args;
use jyut_i18n::format::{arg, substitute_count};
use jyut_i18n::LoadOptions;
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::util::{emit, load_catalog};

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Catalog file to search.
    #[arg(long)]
    pub catalog: PathBuf,

    /// Locale of the catalog; inferred from the file name or header when omitted.
    #[arg(long)]
    pub locale: Option<String>,

    #[arg(long)]
    pub context: String,

    #[arg(long)]
    pub source: String,

    #[arg(long)]
    pub disambiguation: Option<String>,

    /// Select a numerus form and substitute `%n`.
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Values for `%1`, `%2`, ... in order.
    #[arg(long = "arg")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub locale: String,
    pub context: String,
    pub source: String,
    pub disambiguation: Option<String>,
    /// Whether the catalog had an active translation.
    pub found: bool,
    pub text: String,
}

pub fn execute_lookup(args: &LookupArgs) -> Result<LookupReport> {
    if args.source.is_empty() {
        return Err(CliError::usage("--source must not be empty"));
    }
    let catalog = load_catalog(&args.catalog, args.locale.as_deref(), LoadOptions::default())?;
    let disambiguation = args.disambiguation.as_deref();

    let translated = match args.count {
        Some(n) => catalog.translate_plural(&args.context, &args.source, disambiguation, n),
        None => catalog.translate(&args.context, &args.source, disambiguation),
    };
    let found = translated.is_some();
    let mut text = translated.unwrap_or(&args.source).to_string();
    if let Some(n) = args.count {
        text = substitute_count(&text, n);
    }
    if !args.args.is_empty() {
        let values: Vec<&str> = args.args.iter().map(String::as_str).collect();
        text = arg(&text, &values);
    }
    if !found {
        tracing::debug!(context = %args.context, source = %args.source, "no translation, using source");
    }

    Ok(LookupReport {
        locale: catalog.locale().to_string(),
        context: args.context.clone(),
        source: args.source.clone(),
        disambiguation: args.disambiguation.clone(),
        found,
        text,
    })
}

pub fn run_lookup(args: LookupArgs, json: bool) -> Result<()> {
    let report = execute_lookup(&args)?;
    emit(json, &report, |r| r.text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="yue_HK" sourcelanguage="en_CA">
<context>
    <name>AboutWindow</name>
    <message>
        <source>About %1</source>
        <translation>關於 %1</translation>
    </message>
    <message numerus="yes">
        <source>%n entries</source>
        <translation><numerusform>%n 個詞條</numerusform></translation>
    </message>
</context>
</TS>
"#;

    fn args(dir: &tempfile::TempDir, source: &str) -> LookupArgs {
        let catalog = dir.path().join("jyutdictionary-yue_Hant.ts");
        std::fs::write(&catalog, DOC).unwrap();
        LookupArgs {
            catalog,
            locale: None,
            context: "AboutWindow".into(),
            source: source.into(),
            disambiguation: None,
            count: None,
            args: Vec::new(),
        }
    }

    #[test]
    fn found_with_args() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(&dir, "About %1");
        a.args = vec!["粵語辭典".into()];
        let r = execute_lookup(&a).unwrap();
        assert!(r.found);
        assert_eq!(r.locale, "yue_Hant");
        assert_eq!(r.text, "關於 粵語辭典");
    }

    #[test]
    fn missing_falls_back_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(&dir, "Contact %1");
        a.args = vec!["us".into()];
        let r = execute_lookup(&a).unwrap();
        assert!(!r.found);
        assert_eq!(r.text, "Contact us");
    }

    #[test]
    fn numerus_with_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(&dir, "%n entries");
        a.count = Some(12);
        assert_eq!(execute_lookup(&a).unwrap().text, "12 個詞條");
    }

    #[test]
    fn empty_source_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = args(&dir, "");
        assert_eq!(execute_lookup(&a).unwrap_err().exit_code(), 2);
    }
}
