//! Per-language translation coverage of a catalog.

use crate::catalog::{Catalog, LocalizationUnit, TranslationState};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LanguageCoverage {
    pub language: String,
    pub translated: usize,
    /// Missing, or in a state other than `translated`/`error`.
    pub pending: usize,
    pub failed: usize,
    pub unsupported: usize,
    /// Keys marked `shouldTranslate: false`.
    pub excluded: usize,
}

impl LanguageCoverage {
    /// Keys that count towards completion.
    pub fn total(&self) -> usize {
        self.translated + self.pending + self.failed + self.unsupported
    }

    /// Translated share in percent; an empty catalog counts as complete.
    pub fn percent(&self) -> f64 {
        match self.total() {
            0 => 100.0,
            total => self.translated as f64 * 100.0 / total as f64,
        }
    }
}

/// Coverage for each language, in the given order.
///
/// For the source language, a key without an explicit localization counts as
/// translated since the key itself is the source text.
pub fn coverage(catalog: &Catalog, languages: &[String]) -> Vec<LanguageCoverage> {
    languages
        .iter()
        .map(|language| {
            let is_source = language == catalog.source_language();
            let mut stats = LanguageCoverage {
                language: language.clone(),
                ..LanguageCoverage::default()
            };

            for (_, group) in catalog.strings() {
                if !group.is_translatable() {
                    stats.excluded += 1;
                    continue;
                }
                match group.localization(language) {
                    None if is_source => stats.translated += 1,
                    None => stats.pending += 1,
                    Some(LocalizationUnit::Opaque(_)) => stats.unsupported += 1,
                    Some(unit) => match unit.string_unit().map(|u| &u.state) {
                        Some(TranslationState::Translated) => stats.translated += 1,
                        Some(TranslationState::Error) => stats.failed += 1,
                        Some(TranslationState::Pending(_)) | None => stats.pending += 1,
                    },
                }
            }

            stats
        })
        .collect()
}
