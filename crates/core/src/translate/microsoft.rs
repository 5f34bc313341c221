use crate::config::Credentials;
use crate::provider::ProviderId;
use crate::request::{HttpRequest, Method};
use crate::sign::client_trace_id;
use crate::translate::{TranslateRequest, TranslationOutcome, TranslationResult};
use serde::{Deserialize, Serialize};

pub const BASE_URL: &str = "https://api-apc.cognitive.microsofttranslator.com";
const API_VERSION: &str = "3.0";

#[derive(Serialize)]
struct MicrosoftRequestItem<'a> {
    text: &'a str,
}

pub(crate) fn build_request(request: &TranslateRequest) -> HttpRequest {
    let (subscription_key, region) = match &request.credentials {
        Credentials::Microsoft {
            subscription_key,
            region,
        } => (subscription_key.expose(), region.as_str()),
        _ => ("", ""),
    };
    let base = request.base_url_or(BASE_URL).trim_end_matches('/');
    let body = serde_json::to_value([MicrosoftRequestItem {
        text: &request.text,
    }])
    .unwrap_or_default();

    HttpRequest {
        provider: ProviderId::Microsoft,
        method: Method::Post,
        base_url: format!("{base}/translate"),
        query: vec![
            ("api-version", API_VERSION.to_owned()),
            ("from", request.source_or_default().to_owned()),
            ("to", request.target_lang.clone()),
            ("includeAlignment", "true".to_owned()),
            ("textType", "html".to_owned()),
        ],
        headers: vec![
            ("Ocp-Apim-Subscription-Key", subscription_key.to_owned()),
            ("Ocp-Apim-Subscription-Region", region.to_owned()),
            ("Content-type", "application/json".to_owned()),
            ("X-ClientTraceId", client_trace_id()),
        ],
        body: Some(body),
    }
}

#[derive(Deserialize)]
struct MicrosoftItem {
    #[serde(default)]
    translations: Vec<MicrosoftTranslation>,
}

#[derive(Deserialize)]
struct MicrosoftTranslation {
    text: String,
}

#[derive(Deserialize)]
struct MicrosoftErrorBody {
    error: MicrosoftError,
}

#[derive(Deserialize)]
struct MicrosoftError {
    code: serde_json::Value,
    #[serde(default)]
    message: String,
}

pub(crate) fn normalize(source_text: &str, value: serde_json::Value) -> TranslationOutcome {
    if value.is_object() {
        return match serde_json::from_value::<MicrosoftErrorBody>(value) {
            Ok(body) => {
                let code = match body.error.code {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                TranslationOutcome::VendorError(code, body.error.message)
            }
            Err(_) => TranslationOutcome::Empty,
        };
    }

    let items: Vec<MicrosoftItem> = match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::debug!(error = %e, "unexpected microsoft response shape");
            return TranslationOutcome::Empty;
        }
    };
    let texts: Vec<String> = items
        .into_iter()
        .flat_map(|item| item.translations)
        .map(|t| t.text)
        .collect();
    if texts.is_empty() {
        return TranslationOutcome::Empty;
    }

    TranslationOutcome::Success(vec![TranslationResult::plain(
        source_text,
        texts.join(", "),
    )])
}
