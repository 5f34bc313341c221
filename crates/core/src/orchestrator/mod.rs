//! Fans one query out to every enabled provider and keeps their results
//! independent.
//!
//! Each provider slot carries a generation counter. Re-issuing a provider's
//! request bumps its counter, and a response is accepted only if it still
//! carries the slot's current generation. Superseded responses are dropped
//! silently; they are never cancelled on the wire.

mod validation;

pub use validation::{validate, validate_provider, ConfigurationError, MissingField};

use crate::config::Settings;
use crate::provider::ProviderId;
use crate::translate::{translate, TranslateRequest, TranslationOutcome};
use crate::transport::Transport;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

const LOG_TARGET: &str = "orchestrator";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    Requesting,
    Delivered,
    Failed,
}

/// An accepted outcome, labelled for display under its provider's heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub provider: ProviderId,
    pub title: &'static str,
    pub generation: u64,
    pub outcome: TranslationOutcome,
}

/// Receives what a query produces.
pub trait DisplaySink {
    fn show(&mut self, delivery: Delivery);
    fn notify(&mut self, error: &ConfigurationError);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReport {
    pub dispatched: Vec<ProviderId>,
    pub configuration_error: Option<ConfigurationError>,
}

#[derive(Clone, Debug)]
struct Slot {
    state: SlotState,
    generation: u64,
    target_override: Option<String>,
    /// Target language of the last dispatched request.
    dispatched_target: Option<String>,
}

impl Slot {
    fn new() -> Self {
        Self {
            state: SlotState::Idle,
            generation: 0,
            target_override: None,
            dispatched_target: None,
        }
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.state = SlotState::Idle;
        self.dispatched_target = None;
    }
}

#[derive(Debug)]
struct Response {
    provider: ProviderId,
    generation: u64,
    outcome: TranslationOutcome,
}

/// State of one open result view: the current text, per-provider target
/// overrides and generations.
///
/// Dispatch uses `tokio::spawn`, so methods that send requests must run
/// inside a tokio runtime.
pub struct QuerySession<T> {
    transport: Arc<T>,
    settings: Settings,
    text: String,
    slots: [Slot; 3],
    tx: UnboundedSender<Response>,
    rx: UnboundedReceiver<Response>,
}

impl<T> QuerySession<T>
where
    T: Transport + 'static,
{
    pub fn new(transport: T, settings: Settings) -> Self {
        Self::with_shared(Arc::new(transport), settings)
    }

    pub fn with_shared(transport: Arc<T>, settings: Settings) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            transport,
            settings,
            text: String::new(),
            slots: [Slot::new(), Slot::new(), Slot::new()],
            tx,
            rx,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self, provider: ProviderId) -> SlotState {
        self.slots[provider.index()].state
    }

    pub fn generation(&self, provider: ProviderId) -> u64 {
        self.slots[provider.index()].generation
    }

    pub fn target(&self, provider: ProviderId) -> &str {
        self.slots[provider.index()]
            .target_override
            .as_deref()
            .unwrap_or(self.settings.get(provider).target_lang.as_str())
    }

    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|s| s.state != SlotState::Requesting)
    }

    /// Issues `text` to every enabled provider whose inputs changed.
    ///
    /// A provider is re-sent when the text differs from the previous query,
    /// when its target language differs from the last one sent, or when an
    /// identical request is still in flight (the new one supersedes it).
    /// Providers with blank credentials are skipped and reported together.
    /// Blank text clears every slot.
    pub fn submit(&mut self, text: &str) -> SubmitReport {
        if text.trim().is_empty() {
            tracing::debug!(target: LOG_TARGET, "blank query, clearing results");
            self.clear();
            return SubmitReport::default();
        }

        let text_changed = text != self.text;
        let (ready, configuration_error) = validate(&self.settings);

        if let Some(error) = &configuration_error {
            tracing::warn!(target: LOG_TARGET, %error, "skipping misconfigured providers");
            if text_changed {
                for provider in error.providers() {
                    self.slots[provider.index()].invalidate();
                }
            }
        }

        self.text = text.to_owned();
        let mut dispatched = Vec::with_capacity(ready.len());
        for provider in ready {
            let slot = &self.slots[provider.index()];
            let target = self.target(provider).to_owned();
            let stale = text_changed
                || slot.state == SlotState::Idle
                || slot.state == SlotState::Requesting
                || slot.dispatched_target.as_deref() != Some(target.as_str());
            if stale {
                self.dispatch(provider, target);
                dispatched.push(provider);
            }
        }

        SubmitReport {
            dispatched,
            configuration_error,
        }
    }

    /// Sets a per-query target language for one provider. If a query is
    /// active and the target changed, only that provider is re-sent and the
    /// new generation is returned. `Ok(None)` means the override was stored
    /// without sending anything.
    pub fn set_target(
        &mut self,
        provider: ProviderId,
        target: impl Into<String>,
    ) -> Result<Option<u64>, ConfigurationError> {
        let target = target.into();
        self.slots[provider.index()].target_override = Some(target.clone());

        if self.text.trim().is_empty() || !self.settings.get(provider).enabled {
            return Ok(None);
        }
        let slot = &self.slots[provider.index()];
        if slot.dispatched_target.as_deref() == Some(target.as_str()) {
            return Ok(None);
        }
        validate_provider(&self.settings, provider)?;
        Ok(Some(self.dispatch(provider, target)))
    }

    /// Drops every pending and delivered result, as when the view closes.
    pub fn clear(&mut self) {
        self.text.clear();
        for slot in &mut self.slots {
            slot.invalidate();
        }
    }

    fn dispatch(&mut self, provider: ProviderId, target: String) -> u64 {
        let request = TranslateRequest::from_config(
            &self.text,
            self.settings.get(provider),
            Some(target.as_str()),
        );

        let slot = &mut self.slots[provider.index()];
        slot.generation += 1;
        slot.state = SlotState::Requesting;
        slot.dispatched_target = Some(target);
        let generation = slot.generation;

        tracing::info!(target: LOG_TARGET, %provider, generation, to = %request.target_lang, "dispatching");

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = translate(transport.as_ref(), &request).await;
            // The session may be gone; nothing is waiting then.
            let _ = tx.send(Response {
                provider,
                generation,
                outcome,
            });
        });

        generation
    }

    fn accept(&mut self, response: Response) -> Option<Delivery> {
        let slot = &mut self.slots[response.provider.index()];
        if response.generation != slot.generation || slot.state != SlotState::Requesting {
            tracing::debug!(
                target: LOG_TARGET,
                provider = %response.provider,
                generation = response.generation,
                current = slot.generation,
                "discarding stale response"
            );
            return None;
        }

        slot.state = match response.outcome {
            TranslationOutcome::Success(_) | TranslationOutcome::Empty => SlotState::Delivered,
            TranslationOutcome::VendorError(..) | TranslationOutcome::TransportError(_) => {
                SlotState::Failed
            }
        };
        Some(Delivery {
            provider: response.provider,
            title: response.provider.block_title(),
            generation: response.generation,
            outcome: response.outcome,
        })
    }

    /// Waits for the next current-generation outcome, in completion order.
    /// Returns `None` once no provider is still requesting.
    pub async fn next_delivery(&mut self) -> Option<Delivery> {
        while !self.is_settled() {
            let response = self.rx.recv().await?;
            if let Some(delivery) = self.accept(response) {
                return Some(delivery);
            }
        }
        None
    }

    pub async fn run_until_settled<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) {
        while let Some(delivery) = self.next_delivery().await {
            sink.show(delivery);
        }
    }

    /// Submits `text`, reports any configuration problem, then streams every
    /// outcome into `sink`.
    pub async fn query<S: DisplaySink + ?Sized>(&mut self, text: &str, sink: &mut S) -> SubmitReport {
        let report = self.submit(text);
        if let Some(error) = &report.configuration_error {
            sink.notify(error);
        }
        self.run_until_settled(sink).await;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, Secret};
    use crate::request::HttpRequest;
    use crate::transport::TransportError;
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use serde_json::json;
    use std::sync::Mutex;
    use tokio::sync::Semaphore;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Call {
        provider: ProviderId,
        text: String,
        to: String,
    }

    /// Answers every request with a canned per-vendor body once a permit is
    /// available.
    struct ScriptedTransport {
        gate: Semaphore,
        calls: Mutex<Vec<Call>>,
        fail: Option<ProviderId>,
    }

    impl ScriptedTransport {
        fn open() -> Self {
            Self::gated(Semaphore::MAX_PERMITS)
        }

        fn gated(permits: usize) -> Self {
            Self {
                gate: Semaphore::new(permits),
                calls: Mutex::new(Vec::new()),
                fail: None,
            }
        }

        fn failing(provider: ProviderId) -> Self {
            Self {
                fail: Some(provider),
                ..Self::open()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn release(&self, n: usize) {
            self.gate.add_permits(n);
        }
    }

    fn request_text(request: &HttpRequest) -> String {
        match request.query_value("q") {
            Some(q) => q.to_owned(),
            None => request
                .body
                .as_ref()
                .and_then(|b| b[0]["text"].as_str())
                .unwrap_or_default()
                .to_owned(),
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<String, TransportError>> {
            async move {
                let text = request_text(&request);
                let to = request.query_value("to").unwrap_or_default().to_owned();
                self.calls.lock().unwrap().push(Call {
                    provider: request.provider,
                    text: text.clone(),
                    to: to.clone(),
                });
                self.gate
                    .acquire()
                    .await
                    .map_err(|e| TransportError::Other(e.to_string()))?
                    .forget();

                if self.fail == Some(request.provider) {
                    return Err(TransportError::Status(503, "busy".into()));
                }
                let body = match request.provider {
                    ProviderId::Youdao => json!({
                        "query": text,
                        "translation": [format!("{text}:{to}:yd")],
                        "l": format!("en2{to}")
                    }),
                    ProviderId::Microsoft => {
                        json!([{"translations": [{"text": format!("{text}:{to}:ms")}]}])
                    }
                    ProviderId::Baidu => json!({
                        "trans_result": [{"src": text, "dst": format!("{text}:{to}:bd")}]
                    }),
                };
                Ok(body.to_string())
            }
            .boxed()
        }
    }

    #[derive(Default)]
    struct VecSink {
        deliveries: Vec<Delivery>,
        notices: Vec<String>,
    }

    impl DisplaySink for VecSink {
        fn show(&mut self, delivery: Delivery) {
            self.deliveries.push(delivery);
        }

        fn notify(&mut self, error: &ConfigurationError) {
            self.notices.push(error.to_string());
        }
    }

    fn configured() -> Settings {
        let mut settings = Settings::default();
        settings.youdao.credentials = Credentials::Youdao {
            app_id: "yd-app".into(),
            secret_key: Secret::new("yd-secret"),
        };
        settings.microsoft.enabled = true;
        settings.microsoft.credentials = Credentials::Microsoft {
            subscription_key: Secret::new("ms-key"),
            region: "eastasia".into(),
        };
        settings.baidu.credentials = Credentials::Baidu {
            app_id: "bd-app".into(),
            secret_key: Secret::new("bd-secret"),
        };
        settings
    }

    fn primary(delivery: &Delivery) -> &str {
        match &delivery.outcome {
            TranslationOutcome::Success(results) => &results[0].primary_translation,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_enabled_provider_delivers_once() {
        let mut session = QuerySession::new(ScriptedTransport::open(), configured());
        let mut sink = VecSink::default();

        let report = session.query("hello", &mut sink).await;

        assert_eq!(report.dispatched, ProviderId::ALL.to_vec());
        assert!(sink.notices.is_empty());
        let mut providers: Vec<_> = sink.deliveries.iter().map(|d| d.provider).collect();
        providers.sort();
        assert_eq!(providers, ProviderId::ALL.to_vec());
        for delivery in &sink.deliveries {
            assert_eq!(delivery.title, delivery.provider.block_title());
            assert_eq!(delivery.generation, 1);
            assert_eq!(session.state(delivery.provider), SlotState::Delivered);
        }
        let baidu = sink
            .deliveries
            .iter()
            .find(|d| d.provider == ProviderId::Baidu)
            .expect("baidu delivery");
        assert_eq!(primary(baidu), "hello:zh:bd");
    }

    #[tokio::test]
    async fn new_text_supersedes_in_flight_query() {
        let transport = Arc::new(ScriptedTransport::gated(0));
        let mut session = QuerySession::with_shared(Arc::clone(&transport), configured());

        session.submit("hello");
        session.submit("world");
        assert_eq!(session.generation(ProviderId::Youdao), 2);

        transport.release(100);
        let mut sink = VecSink::default();
        session.run_until_settled(&mut sink).await;

        assert_eq!(sink.deliveries.len(), 3);
        for delivery in &sink.deliveries {
            assert_eq!(delivery.generation, 2);
            assert!(primary(delivery).starts_with("world:"));
        }
    }

    #[tokio::test]
    async fn identical_resubmission_keeps_one_live_slot() {
        let transport = Arc::new(ScriptedTransport::gated(0));
        let mut session = QuerySession::with_shared(Arc::clone(&transport), configured());

        session.submit("hello");
        let report = session.submit("hello");
        assert_eq!(report.dispatched, ProviderId::ALL.to_vec());

        transport.release(100);
        let mut sink = VecSink::default();
        session.run_until_settled(&mut sink).await;

        let baidu: Vec<_> = sink
            .deliveries
            .iter()
            .filter(|d| d.provider == ProviderId::Baidu)
            .collect();
        assert_eq!(baidu.len(), 1);
        assert_eq!(baidu[0].generation, 2);
        assert_eq!(session.next_delivery().await, None);
    }

    #[tokio::test]
    async fn settled_identical_query_is_not_resent() {
        let transport = Arc::new(ScriptedTransport::open());
        let mut session = QuerySession::with_shared(Arc::clone(&transport), configured());
        let mut sink = VecSink::default();

        session.query("hello", &mut sink).await;
        let report = session.query("hello", &mut sink).await;

        assert!(report.dispatched.is_empty());
        assert_eq!(transport.calls().len(), 3);
        assert_eq!(sink.deliveries.len(), 3);
    }

    #[tokio::test]
    async fn target_change_only_touches_that_provider() {
        let transport = Arc::new(ScriptedTransport::open());
        let mut session = QuerySession::with_shared(Arc::clone(&transport), configured());
        let mut sink = VecSink::default();
        session.query("hello", &mut sink).await;

        let youdao_gen = session.generation(ProviderId::Youdao);
        let baidu_gen = session.generation(ProviderId::Baidu);

        let generation = session.set_target(ProviderId::Microsoft, "ja");
        assert_eq!(generation, Ok(Some(2)));
        assert_eq!(session.generation(ProviderId::Youdao), youdao_gen);
        assert_eq!(session.generation(ProviderId::Baidu), baidu_gen);
        assert_eq!(session.state(ProviderId::Youdao), SlotState::Delivered);
        assert_eq!(session.state(ProviderId::Baidu), SlotState::Delivered);
        assert_eq!(session.state(ProviderId::Microsoft), SlotState::Requesting);

        let delivery = session.next_delivery().await.expect("microsoft delivery");
        assert_eq!(delivery.provider, ProviderId::Microsoft);
        assert_eq!(primary(&delivery), "hello:ja:ms");
        assert_eq!(session.next_delivery().await, None);

        // Same target again is a no-op.
        assert_eq!(session.set_target(ProviderId::Microsoft, "ja"), Ok(None));
    }

    #[tokio::test]
    async fn target_override_survives_new_text() {
        let transport = Arc::new(ScriptedTransport::open());
        let mut session = QuerySession::with_shared(Arc::clone(&transport), configured());
        assert_eq!(session.set_target(ProviderId::Youdao, "ja"), Ok(None));
        assert_eq!(session.target(ProviderId::Youdao), "ja");

        let mut sink = VecSink::default();
        session.query("hello", &mut sink).await;

        let youdao_calls: Vec<_> = transport
            .calls()
            .into_iter()
            .filter(|c| c.provider == ProviderId::Youdao)
            .collect();
        assert_eq!(youdao_calls.len(), 1);
        assert_eq!(youdao_calls[0].to, "ja");
        assert_eq!(youdao_calls[0].text, "hello");
    }

    #[tokio::test]
    async fn target_change_on_misconfigured_provider_reports_why() {
        let transport = Arc::new(ScriptedTransport::open());
        let mut settings = configured();
        settings.microsoft.credentials = Credentials::Microsoft {
            subscription_key: Secret::default(),
            region: "eastasia".into(),
        };
        let mut session = QuerySession::with_shared(Arc::clone(&transport), settings);
        let mut sink = VecSink::default();
        session.query("hello", &mut sink).await;
        let calls_before = transport.calls().len();

        let error = session
            .set_target(ProviderId::Microsoft, "ja")
            .expect_err("blank subscription key");
        assert_eq!(error.providers(), vec![ProviderId::Microsoft]);
        assert_eq!(session.target(ProviderId::Microsoft), "ja");
        assert_eq!(session.state(ProviderId::Microsoft), SlotState::Idle);
        assert!(session.is_settled());
        assert_eq!(transport.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn missing_credentials_block_dispatch_and_are_reported_together() {
        let transport = Arc::new(ScriptedTransport::open());
        let mut settings = configured();
        settings.microsoft.enabled = false;
        settings.youdao.credentials = Credentials::Youdao {
            app_id: String::new(),
            secret_key: Secret::new("s"),
        };
        settings.baidu.credentials = Credentials::Baidu {
            app_id: "a".into(),
            secret_key: Secret::default(),
        };
        let mut session = QuerySession::with_shared(Arc::clone(&transport), settings);
        let mut sink = VecSink::default();

        let report = session.query("hello", &mut sink).await;
        tokio::task::yield_now().await;

        assert!(report.dispatched.is_empty());
        assert!(transport.calls().is_empty());
        assert!(sink.deliveries.is_empty());
        assert_eq!(sink.notices.len(), 1);
        assert!(sink.notices[0].contains("Youdao translation service's appId"));
        assert!(sink.notices[0].contains("Baidu translation service's secretKey"));
    }

    #[tokio::test]
    async fn valid_providers_still_run_beside_misconfigured_ones() {
        let mut settings = configured();
        settings.microsoft.credentials = Credentials::Microsoft {
            subscription_key: Secret::new("k"),
            region: " ".into(),
        };
        let mut session = QuerySession::new(ScriptedTransport::open(), settings);
        let mut sink = VecSink::default();

        let report = session.query("hello", &mut sink).await;

        assert_eq!(report.dispatched, vec![ProviderId::Youdao, ProviderId::Baidu]);
        assert_eq!(
            sink.notices,
            vec!["Microsoft translation service's location shouldn't be empty.".to_owned()]
        );
        assert_eq!(sink.deliveries.len(), 2);
        assert_eq!(session.state(ProviderId::Microsoft), SlotState::Idle);
    }

    #[tokio::test]
    async fn one_failure_does_not_hide_other_results() {
        let mut session =
            QuerySession::new(ScriptedTransport::failing(ProviderId::Microsoft), configured());
        let mut sink = VecSink::default();

        session.query("hello", &mut sink).await;

        assert_eq!(sink.deliveries.len(), 3);
        let failed = sink
            .deliveries
            .iter()
            .find(|d| d.provider == ProviderId::Microsoft)
            .expect("microsoft delivery");
        assert_eq!(
            failed.outcome,
            TranslationOutcome::TransportError("http error 503: busy".into())
        );
        assert_eq!(session.state(ProviderId::Microsoft), SlotState::Failed);
        assert_eq!(session.state(ProviderId::Youdao), SlotState::Delivered);
        assert_eq!(session.state(ProviderId::Baidu), SlotState::Delivered);
    }

    #[tokio::test]
    async fn blank_text_clears_and_discards_in_flight() {
        let transport = Arc::new(ScriptedTransport::gated(0));
        let mut session = QuerySession::with_shared(Arc::clone(&transport), configured());

        session.submit("hello");
        let report = session.submit("   ");
        assert_eq!(report, SubmitReport::default());
        assert!(session.is_settled());
        assert_eq!(session.text(), "");

        transport.release(100);
        assert_eq!(session.next_delivery().await, None);
        for provider in ProviderId::ALL {
            assert_eq!(session.state(provider), SlotState::Idle);
            assert_eq!(session.generation(provider), 2);
        }
    }

    #[tokio::test]
    async fn stale_response_is_dropped_by_accept() {
        let mut session = QuerySession::new(ScriptedTransport::gated(0), configured());
        session.submit("hello");
        session.submit("world");

        let stale = Response {
            provider: ProviderId::Baidu,
            generation: 1,
            outcome: TranslationOutcome::Empty,
        };
        assert_eq!(session.accept(stale), None);
        assert_eq!(session.state(ProviderId::Baidu), SlotState::Requesting);

        let current = Response {
            provider: ProviderId::Baidu,
            generation: 2,
            outcome: TranslationOutcome::Empty,
        };
        let delivery = session.accept(current).expect("current generation accepted");
        assert_eq!(delivery.outcome, TranslationOutcome::Empty);
        assert_eq!(session.state(ProviderId::Baidu), SlotState::Delivered);
    }
}
