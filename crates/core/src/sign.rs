//! Request signatures for the vendors that need one.
//!
//! Everything here is pure: the caller supplies the salt and timestamp via
//! [`Freshness`] so a signature can be reproduced exactly in tests.

use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-request values that keep a signature from being replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Freshness {
    /// Current time in milliseconds, sent as `salt`.
    pub salt_ms: u64,
    /// `salt_ms` rounded to the nearest second, sent as `curtime`.
    pub curtime: u64,
}

impl Freshness {
    pub fn from_millis(salt_ms: u64) -> Self {
        Self {
            salt_ms,
            curtime: (salt_ms + 500) / 1000,
        }
    }

    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        Self::from_millis(ms)
    }
}

/// Youdao's input normalisation for the v3 signature: texts longer than 20
/// characters become first 10 + char count + last 10.
pub fn truncate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len <= 20 {
        return text.to_owned();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[len - 10..].iter().collect();
    format!("{head}{len}{tail}")
}

/// SHA-256 over `appId + truncate(q) + salt + curtime + secret`, lowercase hex.
pub fn youdao_sign(app_id: &str, text: &str, freshness: Freshness, secret_key: &str) -> String {
    let input = format!(
        "{app_id}{}{}{}{secret_key}",
        truncate(text),
        freshness.salt_ms,
        freshness.curtime
    );
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// MD5 over `appid + q + salt + secret`, lowercase hex.
pub fn baidu_sign(app_id: &str, text: &str, salt_ms: u64, secret_key: &str) -> String {
    let input = format!("{app_id}{text}{salt_ms}{secret_key}");
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Fresh `X-ClientTraceId` value for Microsoft requests.
pub fn client_trace_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
