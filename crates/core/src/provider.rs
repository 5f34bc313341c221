use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The translation vendors a query can fan out to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Youdao,
    Microsoft,
    Baidu,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [ProviderId::Youdao, ProviderId::Microsoft, ProviderId::Baidu];

    /// Slot index into per-provider arenas.
    pub const fn index(self) -> usize {
        match self {
            ProviderId::Youdao => 0,
            ProviderId::Microsoft => 1,
            ProviderId::Baidu => 2,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            ProviderId::Youdao => "youdao",
            ProviderId::Microsoft => "microsoft",
            ProviderId::Baidu => "baidu",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            ProviderId::Youdao => "Youdao",
            ProviderId::Microsoft => "Microsoft",
            ProviderId::Baidu => "Baidu",
        }
    }

    /// Heading shown above this provider's results.
    pub const fn block_title(self) -> &'static str {
        match self {
            ProviderId::Youdao => "Youdao translation results",
            ProviderId::Microsoft => "Microsoft translation results",
            ProviderId::Baidu => "Baidu translation results",
        }
    }

    /// Source language sent when none is configured. Youdao and Baidu
    /// auto-detect; Microsoft is pinned to English.
    pub const fn default_source_lang(self) -> &'static str {
        match self {
            ProviderId::Youdao => "auto",
            ProviderId::Microsoft => "en",
            ProviderId::Baidu => "auto",
        }
    }

    pub const fn default_target_lang(self) -> &'static str {
        match self {
            ProviderId::Youdao => "zh-CHS",
            ProviderId::Microsoft => "zh-Hans",
            ProviderId::Baidu => "zh",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ProviderId::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownProvider(s.to_owned()))
    }
}
