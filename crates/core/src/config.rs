use crate::provider::ProviderId;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, path::Path};

pub const ENV_YOUDAO_APP_ID: &str = "YOUDAO_APP_ID";
pub const ENV_YOUDAO_SECRET_KEY: &str = "YOUDAO_SECRET_KEY";
pub const ENV_MICROSOFT_SUBSCRIPTION_KEY: &str = "MICROSOFT_SUBSCRIPTION_KEY";
pub const ENV_MICROSOFT_REGION: &str = "MICROSOFT_REGION";
pub const ENV_BAIDU_APP_ID: &str = "BAIDU_APP_ID";
pub const ENV_BAIDU_SECRET_KEY: &str = "BAIDU_SECRET_KEY";

/// A credential string. May be blank; the dispatch gate reports blanks.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(**redacted**)")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Credentials {
    Youdao { app_id: String, secret_key: Secret },
    Microsoft { subscription_key: Secret, region: String },
    Baidu { app_id: String, secret_key: Secret },
}

impl Credentials {
    pub fn empty(provider: ProviderId) -> Self {
        match provider {
            ProviderId::Youdao => Credentials::Youdao {
                app_id: String::new(),
                secret_key: Secret::default(),
            },
            ProviderId::Microsoft => Credentials::Microsoft {
                subscription_key: Secret::default(),
                region: String::new(),
            },
            ProviderId::Baidu => Credentials::Baidu {
                app_id: String::new(),
                secret_key: Secret::default(),
            },
        }
    }

    pub fn provider(&self) -> ProviderId {
        match self {
            Credentials::Youdao { .. } => ProviderId::Youdao,
            Credentials::Microsoft { .. } => ProviderId::Microsoft,
            Credentials::Baidu { .. } => ProviderId::Baidu,
        }
    }

    /// Names of required fields that are blank, in the order the settings
    /// page lists them.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, bool); 2] = match self {
            Credentials::Youdao { app_id, secret_key } | Credentials::Baidu { app_id, secret_key } => {
                [("appId", is_blank(app_id)), ("secretKey", secret_key.is_blank())]
            }
            Credentials::Microsoft {
                subscription_key,
                region,
            } => [
                ("secret key", subscription_key.is_blank()),
                ("location", is_blank(region)),
            ],
        };
        fields
            .into_iter()
            .filter_map(|(name, blank)| blank.then_some(name))
            .collect()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub credentials: Credentials,
    #[serde(default)]
    pub source_lang: Option<String>,
    pub target_lang: String,
    /// Overrides the vendor endpoint, e.g. for a proxy.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ProviderConfig {
    pub fn new(provider: ProviderId, enabled: bool) -> Self {
        Self {
            enabled,
            credentials: Credentials::empty(provider),
            source_lang: None,
            target_lang: provider.default_target_lang().to_owned(),
            base_url: None,
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.credentials.provider()
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Snapshot of all provider settings. Read-only while a query is in flight.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub youdao: ProviderConfig,
    pub microsoft: ProviderConfig,
    pub baidu: ProviderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            youdao: ProviderConfig::new(ProviderId::Youdao, true),
            microsoft: ProviderConfig::new(ProviderId::Microsoft, false),
            baidu: ProviderConfig::new(ProviderId::Baidu, true),
        }
    }
}

impl Settings {
    pub fn get(&self, provider: ProviderId) -> &ProviderConfig {
        match provider {
            ProviderId::Youdao => &self.youdao,
            ProviderId::Microsoft => &self.microsoft,
            ProviderId::Baidu => &self.baidu,
        }
    }

    pub fn get_mut(&mut self, provider: ProviderId) -> &mut ProviderConfig {
        match provider {
            ProviderId::Youdao => &mut self.youdao,
            ProviderId::Microsoft => &mut self.microsoft,
            ProviderId::Baidu => &mut self.baidu,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = ProviderId> + '_ {
        ProviderId::ALL
            .into_iter()
            .filter(move |p| self.get(*p).enabled)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.check_slots()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Restricts the enabled set to `only`, leaving other fields untouched.
    pub fn restrict_to(&mut self, only: &[ProviderId]) {
        for provider in ProviderId::ALL {
            if !only.contains(&provider) {
                self.get_mut(provider).enabled = false;
            }
        }
    }

    fn check_slots(&self) -> Result<(), ConfigError> {
        for provider in ProviderId::ALL {
            let found = self.get(provider).provider();
            if found != provider {
                return Err(ConfigError::CredentialMismatch {
                    slot: provider,
                    found,
                });
            }
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{slot} settings carry {found} credentials")]
    CredentialMismatch { slot: ProviderId, found: ProviderId },
}

/// Where credential environment variables are read from.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<String>;

    /// `flag` if given, otherwise the variable `key`. Blank values count as
    /// unset.
    fn layered(&self, flag: Option<String>, key: &str) -> Option<String> {
        flag.filter(|v| !is_blank(v))
            .or_else(|| self.lookup(key).filter(|v| !is_blank(v)))
    }
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct FixedEnv(HashMap<String, String>);

impl FixedEnv {
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl EnvSource for FixedEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Credential overrides gathered from flags; `None` keeps the settings value.
#[derive(Clone, Debug, Default)]
pub struct CredentialOverrides {
    pub youdao_app_id: Option<String>,
    pub youdao_secret_key: Option<String>,
    pub microsoft_subscription_key: Option<String>,
    pub microsoft_region: Option<String>,
    pub baidu_app_id: Option<String>,
    pub baidu_secret_key: Option<String>,
}

/// Layers flag values, then environment variables, over `settings`.
pub fn apply_credential_overrides(
    settings: &mut Settings,
    overrides: CredentialOverrides,
    env: &impl EnvSource,
) {
    let CredentialOverrides {
        youdao_app_id,
        youdao_secret_key,
        microsoft_subscription_key,
        microsoft_region,
        baidu_app_id,
        baidu_secret_key,
    } = overrides;

    match &mut settings.youdao.credentials {
        Credentials::Youdao { app_id, secret_key } => {
            replace(app_id, env.layered(youdao_app_id, ENV_YOUDAO_APP_ID));
            replace_secret(secret_key, env.layered(youdao_secret_key, ENV_YOUDAO_SECRET_KEY));
        }
        other => tracing::warn!(found = %other.provider(), "youdao slot holds foreign credentials"),
    }
    match &mut settings.microsoft.credentials {
        Credentials::Microsoft {
            subscription_key,
            region,
        } => {
            replace_secret(
                subscription_key,
                env.layered(microsoft_subscription_key, ENV_MICROSOFT_SUBSCRIPTION_KEY),
            );
            replace(region, env.layered(microsoft_region, ENV_MICROSOFT_REGION));
        }
        other => tracing::warn!(found = %other.provider(), "microsoft slot holds foreign credentials"),
    }
    match &mut settings.baidu.credentials {
        Credentials::Baidu { app_id, secret_key } => {
            replace(app_id, env.layered(baidu_app_id, ENV_BAIDU_APP_ID));
            replace_secret(secret_key, env.layered(baidu_secret_key, ENV_BAIDU_SECRET_KEY));
        }
        other => tracing::warn!(found = %other.provider(), "baidu slot holds foreign credentials"),
    }
}

fn replace(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn replace_secret(field: &mut Secret, value: Option<String>) {
    if let Some(value) = value {
        *field = Secret::new(value);
    }
}
