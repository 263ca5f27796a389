//! CLDR plural categories and the per-language rules that map a count to
//! a `<numerusform>` slot.
//!
//! Qt Linguist stores numerus translations as an ordered list of forms
//! whose meaning depends on the target language. [`PluralRule::numerus_categories`]
//! gives that order, so selecting a form is `categorize` followed by a
//! position lookup.

use serde::Serialize;

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

/// Built-in plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PluralRule {
    /// one (n = 1), other.
    English,
    /// one (n = 0 or 1), other.
    French,
    /// Chinese, Cantonese, Japanese, Korean…: a single form.
    CJK,
    /// one (…1 except …11), few (…2-4 except …12-14), many.
    Russian,
    /// one (n = 1), few (…2-4 except …12-14), many.
    Polish,
    /// zero, one, two, few (…03-10), many (…11-99), other.
    Arabic,
}

impl PluralRule {
    /// Detect the rule from a locale tag's language subtag.
    ///
    /// Accepts any string; unknown languages get [`PluralRule::English`].
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "zh" | "yue" | "lzh" | "wuu" | "cmn" | "ja" | "ko" | "vi" | "th" | "id" | "ms"
            | "lo" | "my" => Self::CJK,
            "fr" | "pt" | "hy" | "ff" | "kab" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Russian,
            "pl" => Self::Polish,
            "ar" => Self::Arabic,
            _ => Self::English,
        }
    }

    /// Map a count to its plural category. Negative counts use `|n|`.
    #[must_use]
    pub fn categorize(self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match self {
            Self::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if n <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::CJK => PluralCategory::Other,
            Self::Russian => {
                let (n10, n100) = (n % 10, n % 100);
                if n10 == 1 && n100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                let (n10, n100) = (n % 10, n % 100);
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Arabic => match (n, n % 100) {
                (0, _) => PluralCategory::Zero,
                (1, _) => PluralCategory::One,
                (2, _) => PluralCategory::Two,
                (_, 3..=10) => PluralCategory::Few,
                (_, 11..=99) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
        }
    }

    /// Category of each `<numerusform>` slot, in document order.
    #[must_use]
    pub fn numerus_categories(self) -> &'static [PluralCategory] {
        use PluralCategory::*;
        match self {
            Self::English | Self::French => &[One, Other],
            Self::CJK => &[Other],
            Self::Russian | Self::Polish => &[One, Few, Many],
            Self::Arabic => &[Zero, One, Two, Few, Many, Other],
        }
    }

    /// Number of numerus forms a complete translation carries.
    #[must_use]
    pub fn form_count(self) -> usize {
        self.numerus_categories().len()
    }

    /// Slot index for `count`.
    #[must_use]
    pub fn form_index(self, count: i64) -> usize {
        let category = self.categorize(count);
        self.numerus_categories()
            .iter()
            .position(|&c| c == category)
            .unwrap_or(0)
    }
}

/// Pick the form for `count` from an ordered numerus list.
///
/// Missing or empty slots fall back to the last non-empty form before
/// them, then to the first non-empty form. Returns `None` only when every
/// form is empty.
#[must_use]
pub fn select_form(rule: PluralRule, forms: &[String], count: i64) -> Option<&str> {
    select_category(rule, forms, rule.categorize(count))
}

/// Pick the form for `category`. A category the rule does not use maps to
/// the rule's last slot.
#[must_use]
pub fn select_category(rule: PluralRule, forms: &[String], category: PluralCategory) -> Option<&str> {
    let categories = rule.numerus_categories();
    let slot = categories
        .iter()
        .position(|&c| c == category)
        .unwrap_or(categories.len() - 1);
    let wanted = slot.min(forms.len().saturating_sub(1));
    forms
        .get(..=wanted)
        .and_then(|head| head.iter().rev().find(|f| !f.is_empty()))
        .or_else(|| forms.iter().find(|f| !f.is_empty()))
        .map(String::as_str)
}
