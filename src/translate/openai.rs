//! Translator backed by an OpenAI-compatible chat completions endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TranslationRequest, Translator};
use crate::error::TranslationError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for [`OpenAiTranslator`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Per-request deadline. Expiry counts as a failed translation.
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct OpenAiTranslator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiTranslator {
    pub fn new(config: OpenAiConfig) -> Result<Self, TranslationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl Translator for OpenAiTranslator {
    async fn translate(&self, request: &TranslationRequest<'_>) -> Result<String, TranslationError> {
        let body = build_chat_request(&self.config.model, request);
        debug!(
            target_language = request.target_language,
            model = %self.config.model,
            "sending translation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = response.json().await?;
        extract_translation(response, request.text)
    }
}

fn system_prompt(request: &TranslationRequest<'_>) -> String {
    let mut prompt = format!(
        "You translate user interface strings of an app from the language with code \"{}\" \
         to the language with code \"{}\". Reply with the translated text only, without quotes \
         or explanations. Keep printf-style format specifiers such as %@, %d, %lld or %1$@ \
         exactly as they are, and keep line breaks.",
        request.source_language, request.target_language
    );
    if let Some(context) = request.context.filter(|c| !c.trim().is_empty()) {
        prompt.push_str("\nContext from the developer: ");
        prompt.push_str(context);
    }
    prompt
}

fn build_chat_request<'a>(model: &'a str, request: &TranslationRequest<'_>) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt(request),
            },
            ChatMessage {
                role: "user".to_string(),
                content: request.text.to_string(),
            },
        ],
        temperature: 0.2,
    }
}

/// The first choice's text, with the source's edge whitespace.
///
/// Models drop or add surrounding whitespace and sometimes wrap the reply in
/// quotes. Both are discarded and the source's own leading and trailing
/// whitespace (as in `"Name: "`) is put back.
fn extract_translation(response: ChatResponse, source: &str) -> Result<String, TranslationError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();

    let mut text = content.trim();
    if !source.trim_start().starts_with('"')
        && text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
    {
        text = text[1..text.len() - 1].trim();
    }
    if text.is_empty() {
        return Err(TranslationError::EmptyResponse);
    }

    let leading = &source[..source.len() - source.trim_start().len()];
    let trailing = &source[source.trim_end().len()..];
    Ok(format!("{}{}{}", leading, text, trailing))
}
