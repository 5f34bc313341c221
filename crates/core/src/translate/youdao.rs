use crate::config::Credentials;
use crate::provider::ProviderId;
use crate::request::{HttpRequest, Method};
use crate::sign::{youdao_sign, Freshness};
use crate::translate::{
    is_empty_object, Alternate, AudioRefs, TranslateRequest, TranslationOutcome,
    TranslationResult, WordForm,
};
use serde::Deserialize;

pub const BASE_URL: &str = "https://openapi.youdao.com/api";
const SIGN_TYPE: &str = "v3";

pub(crate) fn build_request(request: &TranslateRequest, freshness: Freshness) -> HttpRequest {
    let (app_id, secret_key) = match &request.credentials {
        Credentials::Youdao { app_id, secret_key } => (app_id.as_str(), secret_key.expose()),
        _ => ("", ""),
    };
    let sign = youdao_sign(app_id, &request.text, freshness, secret_key);

    HttpRequest {
        provider: ProviderId::Youdao,
        method: Method::Get,
        base_url: request.base_url_or(BASE_URL).to_owned(),
        query: vec![
            ("q", request.text.clone()),
            ("appKey", app_id.to_owned()),
            ("salt", freshness.salt_ms.to_string()),
            ("from", request.source_or_default().to_owned()),
            ("to", request.target_lang.clone()),
            ("sign", sign),
            ("curtime", freshness.curtime.to_string()),
            ("signType", SIGN_TYPE.to_owned()),
        ],
        headers: Vec::new(),
        body: None,
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct YoudaoResponse {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    query: Option<String>,
    translation: Option<Vec<String>>,
    web: Option<Vec<WebEntry>>,
    basic: Option<Basic>,
    l: Option<String>,
    webdict: Option<Link>,
    #[serde(rename = "speakUrl")]
    speak_url: Option<String>,
    #[serde(rename = "tSpeakUrl")]
    t_speak_url: Option<String>,
}

#[derive(Deserialize)]
struct WebEntry {
    key: String,
    #[serde(default)]
    value: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Basic {
    phonetic: Option<String>,
    #[serde(rename = "us-phonetic")]
    us_phonetic: Option<String>,
    #[serde(rename = "uk-phonetic")]
    uk_phonetic: Option<String>,
    explains: Vec<String>,
    wfs: Option<Vec<WfsEntry>>,
}

#[derive(Deserialize)]
struct WfsEntry {
    wf: Wf,
}

#[derive(Deserialize)]
struct Wf {
    name: String,
    value: String,
}

#[derive(Deserialize)]
struct Link {
    url: Option<String>,
}

pub(crate) fn normalize(source_text: &str, value: serde_json::Value) -> TranslationOutcome {
    if is_empty_object(&value) {
        return TranslationOutcome::Empty;
    }
    let response: YoudaoResponse = match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "unexpected youdao response shape");
            return TranslationOutcome::Empty;
        }
    };

    let translation = response.translation.unwrap_or_default();
    if translation.is_empty() && response.basic.is_none() {
        return match response.error_code {
            Some(code) if code != "0" => TranslationOutcome::vendor_code(code),
            _ => TranslationOutcome::Empty,
        };
    }

    // `l` is "{from}2{to}", e.g. "en2zh-CHS".
    let (from, to) = response
        .l
        .as_deref()
        .and_then(|l| l.split_once('2'))
        .unwrap_or_default();
    let en_to_zh = from == "en" && to == "zh-CHS";
    let zh_to_en = from == "zh-CHS" && to == "en";

    let mut result = TranslationResult {
        source_text: response.query.unwrap_or_else(|| source_text.to_owned()),
        primary_translation: translation.join(", "),
        ..Default::default()
    };

    if let Some(basic) = response.basic {
        let generic = || {
            basic
                .phonetic
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| format!("[{p}]"))
        };
        result.phonetic_notes = if en_to_zh {
            labelled_phonetics(&basic).or_else(generic)
        } else {
            generic()
        };

        // In the zh-CHS -> en direction the dictionary explains complement the
        // translation list instead of repeating it.
        result.explains = if zh_to_en {
            let mut lines = translation.clone();
            if !basic.explains.is_empty() {
                lines.push(basic.explains.join(","));
            }
            lines
        } else {
            basic.explains
        };

        result.word_forms = basic.wfs.map(|wfs| {
            wfs.into_iter()
                .map(|entry| WordForm {
                    form: entry.wf.name,
                    value: entry.wf.value,
                })
                .collect()
        });
    }

    result.alternates = response
        .web
        .unwrap_or_default()
        .into_iter()
        .map(|entry| Alternate {
            label: entry.key,
            value: entry.value.join(", "),
        })
        .collect();

    if response.speak_url.is_some() || response.t_speak_url.is_some() {
        result.pronunciation_audio = Some(AudioRefs {
            origin_url: response.speak_url,
            result_url: response.t_speak_url,
        });
    }
    result.dictionary_url = response.webdict.and_then(|w| w.url);

    TranslationOutcome::Success(vec![result])
}

fn labelled_phonetics(basic: &Basic) -> Option<String> {
    let parts: Vec<String> = [("us", &basic.us_phonetic), ("uk", &basic.uk_phonetic)]
        .into_iter()
        .filter_map(|(label, p)| {
            p.as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| format!("{label}: [{p}]"))
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Secret;
    use serde_json::json;

    fn request(text: &str) -> TranslateRequest {
        TranslateRequest {
            text: text.into(),
            source_lang: None,
            target_lang: "zh-CHS".into(),
            credentials: Credentials::Youdao {
                app_id: "app-id".into(),
                secret_key: Secret::new("secret"),
            },
            base_url: None,
        }
    }

    fn single(outcome: TranslationOutcome) -> TranslationResult {
        match outcome {
            TranslationOutcome::Success(mut results) if results.len() == 1 => results.remove(0),
            other => panic!("expected one result, got {other:?}"),
        }
    }

    #[test]
    fn request_carries_v3_signature_params() {
        let freshness = Freshness::from_millis(1_660_000_000_000);
        let req = build_request(&request("hello"), freshness);

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.base_url, BASE_URL);
        let keys: Vec<_> = req.query.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["q", "appKey", "salt", "from", "to", "sign", "curtime", "signType"]
        );
        assert_eq!(req.query_value("from"), Some("auto"));
        assert_eq!(req.query_value("salt"), Some("1660000000000"));
        assert_eq!(req.query_value("curtime"), Some("1660000000"));
        assert_eq!(req.query_value("signType"), Some("v3"));
        assert_eq!(
            req.query_value("sign"),
            Some(youdao_sign("app-id", "hello", freshness, "secret").as_str())
        );
    }

    #[test]
    fn empty_object_is_empty() {
        assert_eq!(normalize("hello", json!({})), TranslationOutcome::Empty);
    }

    #[test]
    fn error_code_without_translation_is_vendor_error() {
        let outcome = normalize("hello", json!({"errorCode": "108", "l": "en2zh-CHS"}));
        assert_eq!(
            outcome,
            TranslationOutcome::VendorError("108".into(), "No results! (Code 108)".into())
        );
    }

    #[test]
    fn en_to_zh_keeps_explains_separate_and_labels_phonetics() {
        let value = json!({
            "errorCode": "0",
            "query": "good",
            "translation": ["好"],
            "basic": {
                "phonetic": "ɡʊd",
                "us-phonetic": "ɡʊd",
                "uk-phonetic": "gʊd",
                "explains": ["adj. 好的", "n. 好处"],
                "wfs": [{"wf": {"name": "比较级", "value": "better"}}]
            },
            "web": [{"key": "good", "value": ["好", "善"]}],
            "l": "en2zh-CHS",
            "webdict": {"url": "http://m.youdao.com/dict?q=good"},
            "speakUrl": "http://audio/origin",
            "tSpeakUrl": "http://audio/result"
        });
        let result = single(normalize("good", value));

        assert_eq!(result.source_text, "good");
        assert_eq!(result.primary_translation, "好");
        assert_eq!(result.explains, vec!["adj. 好的", "n. 好处"]);
        assert_eq!(result.phonetic_notes.as_deref(), Some("us: [ɡʊd] uk: [gʊd]"));
        assert_eq!(
            result.word_forms,
            Some(vec![WordForm {
                form: "比较级".into(),
                value: "better".into()
            }])
        );
        assert_eq!(
            result.alternates,
            vec![Alternate {
                label: "good".into(),
                value: "好, 善".into()
            }]
        );
        assert_eq!(
            result.pronunciation_audio,
            Some(AudioRefs {
                origin_url: Some("http://audio/origin".into()),
                result_url: Some("http://audio/result".into()),
            })
        );
        assert_eq!(
            result.dictionary_url.as_deref(),
            Some("http://m.youdao.com/dict?q=good")
        );
    }

    #[test]
    fn zh_to_en_appends_explains_to_translation() {
        let value = json!({
            "query": "你好",
            "translation": ["Hello"],
            "basic": {"phonetic": "nǐ hǎo", "explains": ["hello", "hi"]},
            "l": "zh-CHS2en"
        });
        let result = single(normalize("你好", value));

        assert_eq!(result.explains, vec!["Hello", "hello,hi"]);
        assert_eq!(result.phonetic_notes.as_deref(), Some("[nǐ hǎo]"));
        assert_eq!(result.word_forms, None);
    }

    #[test]
    fn en_to_zh_falls_back_to_generic_phonetic() {
        let value = json!({
            "translation": ["猫"],
            "basic": {"phonetic": "kæt", "explains": ["n. 猫"]},
            "l": "en2zh-CHS"
        });
        let result = single(normalize("cat", value));
        assert_eq!(result.phonetic_notes.as_deref(), Some("[kæt]"));
    }

    #[test]
    fn zh_to_en_without_explains_adds_no_blank_line() {
        let value = json!({
            "translation": ["Hello"],
            "basic": {"phonetic": "nǐ hǎo"},
            "l": "zh-CHS2en"
        });
        let result = single(normalize("你好", value));
        assert_eq!(result.explains, vec!["Hello"]);
    }

    #[test]
    fn sentence_without_basic_uses_translation_only() {
        let value = json!({
            "query": "how are you",
            "translation": ["你好吗"],
            "l": "en2zh-CHS"
        });
        let result = single(normalize("how are you", value));
        assert_eq!(result.primary_translation, "你好吗");
        assert!(result.explains.is_empty());
        assert!(result.alternates.is_empty());
        assert_eq!(result.phonetic_notes, None);
        assert_eq!(result.pronunciation_audio, None);
    }

    #[test]
    fn wrong_shape_is_empty() {
        assert_eq!(
            normalize("hello", json!({"translation": "not-a-list"})),
            TranslationOutcome::Empty
        );
        assert_eq!(normalize("hello", json!([1, 2, 3])), TranslationOutcome::Empty);
    }
}
