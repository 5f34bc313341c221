use crate::config::Credentials;
use crate::provider::ProviderId;
use crate::request::{HttpRequest, Method};
use crate::sign::{baidu_sign, Freshness};
use crate::translate::{is_empty_object, TranslateRequest, TranslationOutcome, TranslationResult};
use serde::Deserialize;

pub const BASE_URL: &str = "http://api.fanyi.baidu.com/api/trans/vip/translate";

pub(crate) fn build_request(request: &TranslateRequest, freshness: Freshness) -> HttpRequest {
    let (app_id, secret_key) = match &request.credentials {
        Credentials::Baidu { app_id, secret_key } => (app_id.as_str(), secret_key.expose()),
        _ => ("", ""),
    };
    let sign = baidu_sign(app_id, &request.text, freshness.salt_ms, secret_key);

    HttpRequest {
        provider: ProviderId::Baidu,
        method: Method::Get,
        base_url: request.base_url_or(BASE_URL).to_owned(),
        query: vec![
            ("q", request.text.clone()),
            ("from", request.source_or_default().to_owned()),
            ("to", request.target_lang.clone()),
            ("appid", app_id.to_owned()),
            ("salt", freshness.salt_ms.to_string()),
            ("sign", sign),
        ],
        headers: Vec::new(),
        body: None,
    }
}

#[derive(Deserialize)]
struct BaiduResponse {
    #[serde(default)]
    trans_result: Option<Vec<Segment>>,
    #[serde(default)]
    error_code: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct Segment {
    src: String,
    dst: String,
}

pub(crate) fn normalize(value: serde_json::Value) -> TranslationOutcome {
    if is_empty_object(&value) {
        return TranslationOutcome::Empty;
    }
    let response: BaiduResponse = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "unexpected baidu response shape");
            return TranslationOutcome::Empty;
        }
    };

    match (response.trans_result, response.error_code) {
        (Some(segments), _) if !segments.is_empty() => TranslationOutcome::Success(
            segments
                .into_iter()
                .map(|s| TranslationResult::plain(s.src, s.dst))
                .collect(),
        ),
        (None, Some(code)) => {
            let code = match code {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            TranslationOutcome::vendor_code(code)
        }
        _ => TranslationOutcome::Empty,
    }
}
