//! Incremental translation of a catalog.
//!
//! Planning walks the catalog (keys outer, target languages inner) and turns
//! every pair that needs work into a [`TranslationTask`]. Processing submits
//! the tasks one at a time through the [`RateGate`] and merges each result
//! back before the next call starts.

use tracing::{debug, warn};

use super::{RateGate, TranslationRequest, Translator};
use crate::{
    catalog::{Catalog, TranslationState},
    error::{Error, Result},
    issues::{Issue, TranslationFailedIssue, UnsupportedFormatIssue},
    utils::contains_alphabetic,
};

/// One (key, language) pair that needs a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTask {
    pub key: String,
    pub language: String,
    pub source_text: String,
    pub context: Option<String>,
}

impl TranslationTask {
    fn request<'a>(&'a self, source_language: &'a str) -> TranslationRequest<'a> {
        TranslationRequest {
            text: &self.source_text,
            source_language,
            target_language: &self.language,
            context: self.context.as_deref(),
        }
    }
}

/// Outcome of the planning pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Plan {
    pub tasks: Vec<TranslationTask>,
    /// Unsupported-format warnings, in catalog order.
    pub issues: Vec<Issue>,
    /// Pairs already translated.
    pub up_to_date: usize,
    /// Pairs skipped because the unit uses variants or substitutions.
    pub unsupported: usize,
    /// Pairs skipped because the key is marked `shouldTranslate: false`.
    pub not_translatable: usize,
}

/// Summary of a translation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingReport {
    pub translated: usize,
    pub failed: usize,
    /// Non-linguistic text copied without a service call.
    pub passthrough: usize,
    pub up_to_date: usize,
    pub unsupported: usize,
    pub not_translatable: usize,
    /// External calls made.
    pub calls: usize,
    pub issues: Vec<Issue>,
}

impl ProcessingReport {
    fn from_plan(plan: &Plan) -> Self {
        Self {
            up_to_date: plan.up_to_date,
            unsupported: plan.unsupported,
            not_translatable: plan.not_translatable,
            issues: plan.issues.clone(),
            ..Self::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Pairs that did not need a service call.
    pub fn skipped(&self) -> usize {
        self.up_to_date + self.unsupported + self.not_translatable
    }
}

/// Progress notifications emitted while processing.
#[derive(Debug, Clone, Copy)]
pub enum ProgressEvent<'a> {
    /// Planning finished; `total` tasks will run.
    Planned { total: usize },
    /// A pair was skipped with a warning.
    Warning { issue: &'a Issue },
    Started {
        index: usize,
        total: usize,
        task: &'a TranslationTask,
    },
    Translated {
        index: usize,
        total: usize,
        task: &'a TranslationTask,
        text: &'a str,
    },
    /// Text without letters, copied unchanged.
    Passthrough {
        index: usize,
        total: usize,
        task: &'a TranslationTask,
    },
    Failed {
        index: usize,
        total: usize,
        task: &'a TranslationTask,
        reason: &'a str,
    },
}

/// Remove duplicate language codes, keeping the first occurrence.
fn unique_languages(target_languages: &[String]) -> Vec<&str> {
    let mut seen = Vec::new();
    for language in target_languages {
        if !seen.contains(&language.as_str()) {
            seen.push(language.as_str());
        }
    }
    seen
}

/// Decide which (key, language) pairs need translation.
///
/// For each pair, in order of precedence:
/// 1. the source language is never translated;
/// 2. keys marked `shouldTranslate: false` are skipped;
/// 3. variant/substitution units are skipped with a warning;
/// 4. translated units are skipped unless `force` is set;
/// 5. anything else becomes a task whose source text is the explicit
///    source-language value, or the key itself.
pub fn plan(catalog: &Catalog, target_languages: &[String], force: bool) -> Result<Plan> {
    if target_languages.is_empty() {
        return Err(Error::ConfigurationMissing(
            "no target languages given".to_string(),
        ));
    }

    let source_language = catalog.source_language();
    let languages = unique_languages(target_languages);
    let mut plan = Plan::default();

    for (key, group) in catalog.strings() {
        for &language in &languages {
            if language == source_language {
                continue;
            }

            if !group.is_translatable() {
                plan.not_translatable += 1;
                continue;
            }

            if let Some(unit) = group.localization(language) {
                if unit.is_opaque() {
                    plan.unsupported += 1;
                    plan.issues.push(
                        UnsupportedFormatIssue {
                            key: key.clone(),
                            language: language.to_string(),
                        }
                        .into(),
                    );
                    continue;
                }
                if unit.is_translated() && !force {
                    plan.up_to_date += 1;
                    continue;
                }
            }

            let source_text = group
                .localization(source_language)
                .and_then(|unit| unit.string_unit())
                .map(|unit| unit.value.clone())
                .unwrap_or_else(|| key.clone());

            plan.tasks.push(TranslationTask {
                key: key.clone(),
                language: language.to_string(),
                source_text,
                context: group.comment.clone(),
            });
        }
    }

    Ok(plan)
}

/// Runs planned tasks against a [`Translator`] and merges the results.
pub struct Orchestrator<T> {
    translator: T,
    gate: RateGate,
}

impl<T: Translator> Orchestrator<T> {
    pub fn new(translator: T, gate: RateGate) -> Self {
        Self { translator, gate }
    }

    /// Translate every pair that needs it and write results into `catalog`.
    ///
    /// Only a missing configuration is fatal. A failed call marks its unit as
    /// `error`, is recorded in the report and the run continues.
    pub async fn process<F>(
        &self,
        catalog: &mut Catalog,
        target_languages: &[String],
        force: bool,
        mut progress: F,
    ) -> Result<ProcessingReport>
    where
        F: FnMut(ProgressEvent<'_>),
    {
        let plan = plan(catalog, target_languages, force)?;
        let mut report = ProcessingReport::from_plan(&plan);
        let total = plan.tasks.len();
        let source_language = catalog.source_language().to_string();

        progress(ProgressEvent::Planned { total });
        for issue in &plan.issues {
            progress(ProgressEvent::Warning { issue });
        }

        for (i, task) in plan.tasks.iter().enumerate() {
            let index = i + 1;
            progress(ProgressEvent::Started { index, total, task });

            if !contains_alphabetic(&task.source_text) {
                catalog.set_translation(
                    &task.key,
                    &task.language,
                    &task.source_text,
                    TranslationState::Translated,
                );
                report.passthrough += 1;
                progress(ProgressEvent::Passthrough { index, total, task });
                continue;
            }

            self.gate.wait().await;
            report.calls += 1;
            debug!(key = %task.key, language = %task.language, index, total, "translating");

            match self.translate_task(task, &source_language).await {
                Ok(text) => {
                    catalog.set_translation(
                        &task.key,
                        &task.language,
                        &text,
                        TranslationState::Translated,
                    );
                    report.translated += 1;
                    progress(ProgressEvent::Translated {
                        index,
                        total,
                        task,
                        text: &text,
                    });
                }
                Err(err) => {
                    warn!("{}", err);
                    let reason = match err {
                        Error::TranslationFailed { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    catalog.set_translation(&task.key, &task.language, "", TranslationState::Error);
                    report.failed += 1;
                    report.issues.push(
                        TranslationFailedIssue {
                            key: task.key.clone(),
                            language: task.language.clone(),
                            reason: reason.clone(),
                        }
                        .into(),
                    );
                    progress(ProgressEvent::Failed {
                        index,
                        total,
                        task,
                        reason: &reason,
                    });
                }
            }
        }

        Ok(report)
    }

    /// One service call. Backend errors become `Error::TranslationFailed`
    /// for the task's pair.
    async fn translate_task(&self, task: &TranslationTask, source_language: &str) -> Result<String> {
        self.translator
            .translate(&task.request(source_language))
            .await
            .map_err(|err| Error::TranslationFailed {
                key: task.key.clone(),
                language: task.language.clone(),
                reason: err.to_string(),
            })
    }
}
