use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use jyut_i18n::config::LANG_ENV;
use jyut_i18n::translator::SOURCE_LANGUAGE;
use jyut_i18n::{I18nConfig, KNOWN_LANGUAGES, LanguageSource, LocaleTag};
use serde::Serialize;

use crate::error::Result;
use crate::util::{emit, load_config};

#[derive(Debug, Clone, Args)]
pub struct LocalesArgs {
    /// Configuration file (TOML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog directory; overrides the configured one.
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnownLanguageEntry {
    pub tag: Option<String>,
    pub name: String,
    /// Catalog that would serve this language, if one exists.
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalesReport {
    pub directory: PathBuf,
    pub available: Vec<LocaleTag>,
    pub languages: Vec<KnownLanguageEntry>,
}

pub fn execute_locales(args: &LocalesArgs) -> Result<LocalesReport> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(dir) = &args.dir {
        config.catalogs.directory = dir.clone();
    }
    let locator = config.locator();
    let available = locator.available()?;

    let languages = KNOWN_LANGUAGES
        .iter()
        .map(|known| {
            let catalog = known
                .tag
                .filter(|t| *t != SOURCE_LANGUAGE)
                .and_then(|t| LocaleTag::parse(t).ok())
                .and_then(|tag| locator.resolve(&tag).ok())
                .map(|(_, path)| path);
            KnownLanguageEntry {
                tag: known.tag.map(str::to_string),
                name: known.name.to_string(),
                catalog,
            }
        })
        .collect();

    Ok(LocalesReport {
        directory: locator.directory().to_path_buf(),
        available,
        languages,
    })
}

fn render_locales(report: &LocalesReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "catalogs in {}:", report.directory.display());
    if report.available.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for tag in &report.available {
        let _ = writeln!(out, "  {tag}");
    }
    let _ = writeln!(out, "languages:");
    for l in &report.languages {
        let tag = l.tag.as_deref().unwrap_or("system");
        let status = match (&l.catalog, l.tag.as_deref()) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(SOURCE_LANGUAGE)) => "source language".to_string(),
            (None, None) => "from environment".to_string(),
            (None, Some(_)) => "no catalog".to_string(),
        };
        let _ = writeln!(out, "  {tag:<9} {:<24} {status}", l.name);
    }
    out.trim_end().to_string()
}

pub fn run_locales(args: LocalesArgs, json: bool) -> Result<()> {
    let report = execute_locales(&args)?;
    emit(json, &report, render_locales)
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Configuration file (TOML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub locale: LocaleTag,
    pub source: LanguageSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub candidates: Vec<Candidate>,
    /// Catalog that would be loaded, `None` when the source language wins
    /// or nothing matches.
    pub selected: Option<LocaleTag>,
    pub path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Resolve against an explicit variable source; see [`run_resolve`].
pub fn execute_resolve_with(
    config: &I18nConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolveReport {
    let resolved = config.resolve_languages_with(env);
    let locator = config.locator();
    let mut report = ResolveReport {
        candidates: resolved
            .languages
            .iter()
            .map(|(locale, source)| Candidate {
                locale: locale.clone(),
                source: *source,
            })
            .collect(),
        selected: None,
        path: None,
        warnings: resolved.warnings.clone(),
    };

    for tag in resolved.tags() {
        if tag.language() == SOURCE_LANGUAGE {
            break;
        }
        match locator.resolve(&tag) {
            Ok((found, path)) => {
                report.selected = Some(found);
                report.path = Some(path);
                break;
            }
            Err(e) => report.warnings.push(e.to_string()),
        }
    }
    report
}

fn render_resolve(report: &ResolveReport) -> String {
    let mut out = String::new();
    for c in &report.candidates {
        let source = match c.source {
            LanguageSource::Environment => LANG_ENV,
            LanguageSource::Preference => "preference",
            LanguageSource::System => "system",
            LanguageSource::Fallback => "fallback",
        };
        let _ = writeln!(out, "candidate {} ({source})", c.locale);
    }
    for w in &report.warnings {
        let _ = writeln!(out, "warning: {w}");
    }
    match (&report.selected, &report.path) {
        (Some(tag), Some(path)) => {
            let _ = writeln!(out, "selected {tag}: {}", path.display());
        }
        _ => {
            let _ = writeln!(out, "selected source language ({SOURCE_LANGUAGE})");
        }
    }
    out.trim_end().to_string()
}

pub fn run_resolve(args: ResolveArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let report = execute_resolve_with(&config, |key| std::env::var(key).ok());
    emit(json, &report, render_resolve)
}
