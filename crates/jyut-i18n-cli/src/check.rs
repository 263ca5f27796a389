use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use jyut_i18n::format::max_placeholder;
use jyut_i18n::{Catalog, CatalogStats, DuplicateEntry, DuplicatePolicy, LoadOptions, Translation};
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::util::{emit, load_catalog};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Catalog files to validate.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Treat duplicate keys as errors.
    #[arg(long)]
    pub strict: bool,

    /// Do not let unfinished translations answer lookups.
    #[arg(long = "no-unfinished")]
    pub no_unfinished: bool,
}

impl CheckArgs {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            use_unfinished: !self.no_unfinished,
            duplicates: if self.strict {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::KeepFirst
            },
        }
    }
}

/// A translation that uses a different highest `%N` than its source.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderMismatch {
    pub context: String,
    pub source: String,
    pub source_max: usize,
    pub translation_max: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    pub path: PathBuf,
    pub locale: Option<String>,
    pub ok: bool,
    pub error: Option<String>,
    pub stats: Option<CatalogStats>,
    pub duplicates: Vec<DuplicateEntry>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub total: usize,
    pub failed: usize,
    pub entries: Vec<CheckEntry>,
}

fn placeholder_mismatches(catalog: &Catalog) -> Vec<PlaceholderMismatch> {
    let use_unfinished = catalog.options().use_unfinished;
    catalog
        .messages()
        .filter(|(_, m)| m.is_active(use_unfinished))
        .filter_map(|(ctx, m)| {
            let source_max = max_placeholder(&m.source);
            let translation_max = match &m.translation {
                Translation::Text(t) => max_placeholder(t),
                Translation::Numerus(forms) => forms.iter().map(|f| max_placeholder(f)).max().unwrap_or(0),
            };
            (source_max != translation_max).then(|| PlaceholderMismatch {
                context: ctx.to_string(),
                source: m.source.clone(),
                source_max,
                translation_max,
            })
        })
        .collect()
}

pub fn execute_check(args: &CheckArgs) -> CheckReport {
    let options = args.load_options();
    let entries: Vec<CheckEntry> = args
        .paths
        .iter()
        .map(|path| match load_catalog(path, None, options) {
            Ok(catalog) => CheckEntry {
                path: path.clone(),
                locale: Some(catalog.locale().to_string()),
                ok: true,
                error: None,
                stats: Some(catalog.stats()),
                duplicates: catalog.duplicates().to_vec(),
                placeholder_mismatches: placeholder_mismatches(&catalog),
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "catalog check failed");
                CheckEntry {
                    path: path.clone(),
                    locale: None,
                    ok: false,
                    error: Some(e.to_string()),
                    stats: None,
                    duplicates: Vec::new(),
                    placeholder_mismatches: Vec::new(),
                }
            }
        })
        .collect();

    CheckReport {
        total: entries.len(),
        failed: entries.iter().filter(|e| !e.ok).count(),
        entries,
    }
}

fn render(report: &CheckReport) -> String {
    let mut out = String::new();
    for e in &report.entries {
        match (&e.stats, &e.error) {
            (Some(s), _) => {
                let _ = writeln!(
                    out,
                    "ok    {} [{}] contexts={} messages={} finished={} unfinished={} obsolete={} numerus={} duplicates={}",
                    e.path.display(),
                    e.locale.as_deref().unwrap_or("?"),
                    s.contexts,
                    s.messages,
                    s.finished,
                    s.unfinished,
                    s.obsolete,
                    s.numerus,
                    s.duplicates,
                );
                for d in &e.duplicates {
                    let _ = writeln!(out, "      duplicate {}: {:?}", d.context, d.key);
                }
                for m in &e.placeholder_mismatches {
                    let _ = writeln!(
                        out,
                        "      placeholders {}: {:?} uses %{} but translation uses %{}",
                        m.context, m.source, m.source_max, m.translation_max
                    );
                }
            }
            (None, error) => {
                let _ = writeln!(out, "FAIL  {}: {}", e.path.display(), error.as_deref().unwrap_or("unknown error"));
            }
        }
    }
    out.trim_end().to_string()
}

pub fn run_check(args: CheckArgs, json: bool) -> Result<()> {
    let report = execute_check(&args);
    emit(json, &report, render)?;
    if report.failed > 0 {
        return Err(CliError::CheckFailed {
            failed: report.failed,
            total: report.total,
        });
    }
    Ok(())
}
