use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use jyut_i18n::coverage::coverage_report;
use jyut_i18n::{Catalog, CoverageReport, LoadOptions};

use crate::error::Result;
use crate::util::{emit, load_catalog};

#[derive(Debug, Clone, Args)]
pub struct CoverageArgs {
    /// Catalog files to compare; keys are pooled across all of them.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// List the keys each catalog is missing.
    #[arg(long)]
    pub missing: bool,
}

pub fn execute_coverage(args: &CoverageArgs) -> Result<CoverageReport> {
    let catalogs = args
        .paths
        .iter()
        .map(|p| load_catalog(p, None, LoadOptions::default()))
        .collect::<Result<Vec<Catalog>>>()?;
    let refs: Vec<&Catalog> = catalogs.iter().collect();
    Ok(coverage_report(&refs))
}

fn render(report: &CoverageReport, missing: bool) -> String {
    let width = report
        .locales
        .iter()
        .map(|l| l.locale.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for l in &report.locales {
        let _ = writeln!(
            out,
            "{:<width$}  {}/{}  {:.1}%",
            l.locale, l.present, report.total_keys, l.coverage_percent
        );
        if missing {
            for key in &l.missing {
                let _ = writeln!(out, "    {key}");
            }
        }
    }
    out.trim_end().to_string()
}

pub fn run_coverage(args: CoverageArgs, json: bool) -> Result<()> {
    let report = execute_coverage(&args)?;
    if json && !args.missing {
        // Summary only: drop the key lists.
        let mut summary = report;
        for l in &mut summary.locales {
            l.missing.clear();
        }
        return emit(true, &summary, |r| render(r, false));
    }
    emit(json, &report, |r| render(r, args.missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, messages: &[(&str, &str)]) -> PathBuf {
        let mut body = String::from("<TS version=\"2.1\"><context><name>MainWindow</name>");
        for (src, tr) in messages {
            body.push_str(&format!(
                "<message><source>{src}</source><translation>{tr}</translation></message>"
            ));
        }
        body.push_str("</context></TS>");
        let p = dir.path().join(name);
        std::fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn pooled_keys_and_percentages() {
        let dir = tempfile::tempdir().unwrap();
        let full = write(
            &dir,
            "jyutdictionary-zh_Hant.ts",
            &[("Search", "搜尋"), ("Settings", "設定"), ("Help", "說明"), ("Quit", "結束")],
        );
        let half = write(&dir, "jyutdictionary-yue_Hant.ts", &[("Search", "搵"), ("Help", "幫助")]);

        let args = CoverageArgs {
            paths: vec![full, half],
            missing: true,
        };
        let report = execute_coverage(&args).unwrap();
        assert_eq!(report.total_keys, 4);
        assert_eq!(report.locales[0].locale, "yue_Hant");
        assert_eq!(report.locales[0].present, 2);
        assert!((report.locales[0].coverage_percent - 50.0).abs() < 0.01);
        assert_eq!(report.locales[1].present, 4);

        let text = render(&report, true);
        assert!(text.contains("yue_Hant  2/4  50.0%"));
        assert!(text.contains("MainWindow: \"Quit\""));
        assert!(!render(&report, false).contains("Quit"));
    }

    #[test]
    fn any_unreadable_catalog_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let ok = write(&dir, "jyutdictionary-fr.ts", &[("Search", "Rechercher")]);
        let args = CoverageArgs {
            paths: vec![ok, dir.path().join("jyutdictionary-fr_CA.ts")],
            missing: false,
        };
        assert_eq!(execute_coverage(&args).unwrap_err().exit_code(), 4);
    }
}
