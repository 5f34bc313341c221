pub(crate) mod baidu;
pub(crate) mod microsoft;
pub(crate) mod youdao;

use crate::config::{Credentials, ProviderConfig};
use crate::provider::ProviderId;
use crate::request::build_request;
use crate::sign::Freshness;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};

/// One translation call against one provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
    pub credentials: Credentials,
    pub base_url: Option<String>,
}

impl TranslateRequest {
    /// Request for `text` under `config`, with an optional per-query target.
    pub fn from_config(text: &str, config: &ProviderConfig, target_override: Option<&str>) -> Self {
        Self {
            text: text.to_owned(),
            source_lang: config.source_lang.clone(),
            target_lang: target_override.unwrap_or(config.target_lang.as_str()).to_owned(),
            credentials: config.credentials.clone(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.credentials.provider()
    }

    /// Configured source language, or the vendor's default when unset.
    pub fn source_or_default(&self) -> &str {
        self.source_lang
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.provider().default_source_lang())
    }

    pub(crate) fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url.as_deref().unwrap_or(default)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alternate {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordForm {
    pub form: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioRefs {
    pub origin_url: Option<String>,
    pub result_url: Option<String>,
}

/// Vendor-agnostic translation record. Fields a vendor does not supply stay
/// empty or `None`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationResult {
    pub source_text: String,
    pub primary_translation: String,
    pub alternates: Vec<Alternate>,
    /// Dictionary explanations, one line each.
    pub explains: Vec<String>,
    pub phonetic_notes: Option<String>,
    pub word_forms: Option<Vec<WordForm>>,
    pub pronunciation_audio: Option<AudioRefs>,
    pub dictionary_url: Option<String>,
}

impl TranslationResult {
    pub fn plain(source_text: impl Into<String>, primary_translation: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            primary_translation: primary_translation.into(),
            ..Default::default()
        }
    }
}

/// Terminal state of a single adapter call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// One record per translated segment; never empty.
    Success(Vec<TranslationResult>),
    Empty,
    VendorError(String, String),
    TransportError(String),
}

impl TranslationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationOutcome::Success(_))
    }

    pub(crate) fn vendor_code(code: impl Into<String>) -> Self {
        let code = code.into();
        let message = format!("No results! (Code {code})");
        TranslationOutcome::VendorError(code, message)
    }
}

/// Parses a vendor body, treating a blank body as `{}`. `None` means the body
/// was not JSON at all.
pub(crate) fn parse_body(body: &str) -> Option<serde_json::Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Some(serde_json::Value::Object(Default::default()));
    }
    match serde_json::from_str(trimmed) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(error = %e, "vendor body is not json");
            None
        }
    }
}

pub(crate) fn is_empty_object(value: &serde_json::Value) -> bool {
    value.as_object().is_some_and(|o| o.is_empty())
}

/// Maps a raw vendor body onto a [`TranslationOutcome`].
pub fn normalize(provider: ProviderId, source_text: &str, body: &str) -> TranslationOutcome {
    let Some(value) = parse_body(body) else {
        return TranslationOutcome::Empty;
    };
    match provider {
        ProviderId::Youdao => youdao::normalize(source_text, value),
        ProviderId::Microsoft => microsoft::normalize(source_text, value),
        ProviderId::Baidu => baidu::normalize(value),
    }
}

/// Builds, signs, sends and normalises one request. Never fails: every
/// error is folded into the returned outcome.
pub async fn translate<T>(transport: &T, request: &TranslateRequest) -> TranslationOutcome
where
    T: Transport + ?Sized,
{
    let provider = request.provider();
    let http = build_request(request, Freshness::now());
    match transport.send(http).await {
        Ok(body) => normalize(provider, &request.text, &body),
        Err(e) => {
            tracing::warn!(%provider, error = %e, "translation transport failed");
            TranslationOutcome::TransportError(e.message())
        }
    }
}
