use crate::config::Settings;
use crate::provider::ProviderId;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingField {
    pub provider: ProviderId,
    pub field: &'static str,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} translation service's {} shouldn't be empty.",
            self.provider.display_name(),
            self.field
        )
    }
}

/// Every blank credential across all enabled providers, reported together.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.missing))]
pub struct ConfigurationError {
    pub missing: Vec<MissingField>,
}

impl ConfigurationError {
    pub fn providers(&self) -> Vec<ProviderId> {
        let mut providers: Vec<_> = self.missing.iter().map(|m| m.provider).collect();
        providers.dedup();
        providers
    }
}

fn render(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks a single provider's credentials.
pub fn validate_provider(settings: &Settings, provider: ProviderId) -> Result<(), ConfigurationError> {
    let missing: Vec<_> = settings
        .get(provider)
        .credentials
        .blank_fields()
        .into_iter()
        .map(|field| MissingField { provider, field })
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError { missing })
    }
}

/// Splits the enabled providers into those ready to dispatch and a combined
/// error for the rest.
pub fn validate(settings: &Settings) -> (Vec<ProviderId>, Option<ConfigurationError>) {
    let mut ready = Vec::new();
    let mut missing = Vec::new();

    for provider in settings.enabled() {
        let blanks = settings.get(provider).credentials.blank_fields();
        if blanks.is_empty() {
            ready.push(provider);
        } else {
            missing.extend(blanks.into_iter().map(|field| MissingField { provider, field }));
        }
    }

    let error = (!missing.is_empty()).then_some(ConfigurationError { missing });
    (ready, error)
}
