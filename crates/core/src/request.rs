use crate::provider::ProviderId;
use crate::sign::Freshness;
use crate::translate::{baidu, microsoft, youdao, TranslateRequest};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully-formed outbound request, independent of any HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub provider: ProviderId,
    pub method: Method,
    pub base_url: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Base URL with the query string appended and percent-encoded.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(&self.base_url, self.query.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

/// Builds the vendor request for `request`. Callers must have checked that
/// the text is non-empty and the credentials are complete.
pub fn build_request(request: &TranslateRequest, freshness: Freshness) -> HttpRequest {
    match request.provider() {
        ProviderId::Youdao => youdao::build_request(request, freshness),
        ProviderId::Microsoft => microsoft::build_request(request),
        ProviderId::Baidu => baidu::build_request(request, freshness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_percent_encodes_query_values() {
        let req = HttpRequest {
            provider: ProviderId::Baidu,
            method: Method::Get,
            base_url: "http://example.test/api".into(),
            query: vec![("q", "a b&c".into()), ("to", "zh".into())],
            headers: vec![],
            body: None,
        };
        let url = req.url().expect("valid url");
        assert_eq!(url.as_str(), "http://example.test/api?q=a+b%26c&to=zh");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            provider: ProviderId::Microsoft,
            method: Method::Post,
            base_url: "https://example.test/translate".into(),
            query: vec![],
            headers: vec![("Content-type", "application/json".into())],
            body: None,
        };
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.header_value("x-missing"), None);
    }
}
