//! Cross-catalog translation coverage.
//!
//! The reference key set is the union of every non-retired message key
//! across the given catalogs. Each catalog is then checked for an active
//! message per key.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Catalog;

/// A (context, source, disambiguation) triple, ordered for stable output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub disambiguation: String,
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", self.context, self.source)?;
        if !self.disambiguation.is_empty() {
            write!(f, " ({})", self.disambiguation)?;
        }
        Ok(())
    }
}

/// Coverage across a set of catalogs.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Number of unique reference keys.
    pub total_keys: usize,
    /// One entry per catalog, sorted by locale.
    pub locales: Vec<LocaleCoverage>,
}

/// Coverage of one catalog against the reference keys.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    pub present: usize,
    /// Sorted.
    pub missing: Vec<MessageKey>,
    /// 0.0–100.0; an empty reference set counts as full coverage.
    pub coverage_percent: f32,
}

/// All keys still in use by any catalog, sorted.
#[must_use]
pub fn reference_keys(catalogs: &[&Catalog]) -> Vec<MessageKey> {
    let keys: BTreeSet<MessageKey> = catalogs
        .iter()
        .flat_map(|c| c.messages())
        .filter(|(_, m)| !m.status.is_retired())
        .map(|(ctx, m)| MessageKey {
            context: ctx.to_string(),
            source: m.source.clone(),
            disambiguation: m.disambiguation_str().to_string(),
        })
        .collect();
    keys.into_iter().collect()
}

/// Keys from `reference` that `catalog` cannot translate.
#[must_use]
pub fn missing_keys(catalog: &Catalog, reference: &[MessageKey]) -> Vec<MessageKey> {
    reference
        .iter()
        .filter(|k| {
            catalog
                .context(&k.context)
                .and_then(|c| c.find(&k.source, &k.disambiguation))
                .is_none()
        })
        .cloned()
        .collect()
}

/// Build a coverage report over `catalogs`.
#[must_use]
pub fn coverage_report(catalogs: &[&Catalog]) -> CoverageReport {
    let reference = reference_keys(catalogs);
    let total = reference.len();

    let mut locales: Vec<LocaleCoverage> = catalogs
        .iter()
        .map(|catalog| {
            let missing = missing_keys(catalog, &reference);
            let present = total.saturating_sub(missing.len());
            let coverage_percent = if total == 0 {
                100.0
            } else {
                (present as f32 / total as f32) * 100.0
            };
            LocaleCoverage {
                locale: catalog.locale().to_string(),
                present,
                missing,
                coverage_percent,
            }
        })
        .collect();
    locales.sort_by(|a, b| a.locale.cmp(&b.locale));

    CoverageReport {
        total_keys: total,
        locales,
    }
}
