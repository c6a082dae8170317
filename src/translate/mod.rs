//! Translation of missing catalog entries.
//!
//! - `orchestrator`: decides which (key, language) pairs need work and merges results
//! - `rate_limit`: minimum spacing between calls to the translation service
//! - `openai`: [`Translator`] backed by an OpenAI-compatible chat completions API

pub mod openai;
pub mod orchestrator;
pub mod rate_limit;

use std::future::Future;

pub use openai::{OpenAiConfig, OpenAiTranslator};
pub use orchestrator::{Orchestrator, Plan, ProcessingReport, ProgressEvent, TranslationTask, plan};
pub use rate_limit::RateGate;

use crate::error::TranslationError;

/// One text to translate, borrowed from a [`TranslationTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    pub source_language: &'a str,
    pub target_language: &'a str,
    /// Developer comment from the catalog, if any.
    pub context: Option<&'a str>,
}

/// External translation capability.
///
/// Implementations do not retry; a failed call is final for the run.
pub trait Translator {
    fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> impl Future<Output = Result<String, TranslationError>>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(
        &self,
        request: &TranslationRequest<'_>,
    ) -> impl Future<Output = Result<String, TranslationError>> {
        (**self).translate(request)
    }
}
