use anyhow::Context;
use clap::Parser;
use selection_translator_core::config::{
    apply_credential_overrides, CredentialOverrides, EnvSource, ProcessEnv, Settings,
};
use selection_translator_core::languages;
use selection_translator_core::orchestrator::{ConfigurationError, Delivery, DisplaySink, QuerySession};
use selection_translator_core::provider::ProviderId;
use selection_translator_core::translate::{TranslationOutcome, TranslationResult};
use selection_translator_core::transport::HttpTransport;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "selection-translator")]
#[command(about = "Translate text with Youdao, Microsoft and Baidu side by side")]
struct Args {
    /// Text to translate. Words are joined with spaces.
    text: Vec<String>,

    /// JSON settings snapshot.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Only query these providers (repeatable).
    #[arg(long = "provider")]
    providers: Vec<ProviderId>,

    /// Youdao app id. Falls back to $YOUDAO_APP_ID.
    #[arg(long)]
    youdao_app_id: Option<String>,

    /// Youdao secret key. Falls back to $YOUDAO_SECRET_KEY.
    #[arg(long)]
    youdao_secret_key: Option<String>,

    /// Microsoft subscription key. Falls back to $MICROSOFT_SUBSCRIPTION_KEY.
    #[arg(long)]
    microsoft_key: Option<String>,

    /// Microsoft resource region. Falls back to $MICROSOFT_REGION.
    #[arg(long)]
    microsoft_region: Option<String>,

    /// Baidu app id. Falls back to $BAIDU_APP_ID.
    #[arg(long)]
    baidu_app_id: Option<String>,

    /// Baidu secret key. Falls back to $BAIDU_SECRET_KEY.
    #[arg(long)]
    baidu_secret_key: Option<String>,

    #[arg(long)]
    to_youdao: Option<String>,

    #[arg(long)]
    to_microsoft: Option<String>,

    #[arg(long)]
    to_baidu: Option<String>,

    /// Read further queries from stdin; each line supersedes the last.
    /// `:to <provider> <lang>` changes one provider's target.
    #[arg(long)]
    interactive: bool,

    /// List the language codes a provider accepts and exit.
    #[arg(long, value_name = "PROVIDER")]
    languages: Option<ProviderId>,

    /// HTTP client timeout; unset leaves it to the transport.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    if let Some(provider) = args.languages {
        for (code, name) in languages::languages(provider) {
            println!("{code:10} {name}");
        }
        return Ok(());
    }

    let env = ProcessEnv;
    let settings = build_settings(&args, &env)?;
    tracing::info!(
        enabled = ?settings.enabled().collect::<Vec<_>>(),
        "settings loaded"
    );

    let transport = match args.timeout_secs {
        Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs))
            .context("failed to build http client")?,
        None => HttpTransport::new(),
    };
    let mut session = QuerySession::new(transport, settings);
    let mut sink = TerminalSink;
    for (provider, target) in [
        (ProviderId::Youdao, args.to_youdao.clone()),
        (ProviderId::Microsoft, args.to_microsoft.clone()),
        (ProviderId::Baidu, args.to_baidu.clone()),
    ] {
        if let Some(target) = target {
            warn_unknown_language(provider, &target);
            if let Err(error) = session.set_target(provider, target) {
                sink.notify(&error);
            }
        }
    }

    let text = args.text.join(" ");

    if args.interactive {
        run_interactive(&mut session, &text, &mut sink).await
    } else {
        if text.trim().is_empty() {
            anyhow::bail!("nothing to translate; pass TEXT or use --interactive");
        }
        session.query(&text, &mut sink).await;
        Ok(())
    }
}

async fn run_interactive(
    session: &mut QuerySession<HttpTransport>,
    initial: &str,
    sink: &mut TerminalSink,
) -> anyhow::Result<()> {
    if !initial.trim().is_empty() {
        submit(session, initial, sink);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let line = line.trim();
                if line == ":quit" {
                    break;
                }
                match parse_target_command(line) {
                    Some(Ok((provider, lang))) => {
                        warn_unknown_language(provider, lang);
                        match session.set_target(provider, lang) {
                            Ok(Some(_)) => {
                                println!("{} re-translating into {lang}", provider.display_name())
                            }
                            Ok(None) => println!("{} target set to {lang}", provider.display_name()),
                            Err(error) => sink.notify(&error),
                        }
                    }
                    Some(Err(e)) => eprintln!("{e}"),
                    None => submit(session, line, sink),
                }
            }
            delivery = session.next_delivery(), if !session.is_settled() => {
                if let Some(delivery) = delivery {
                    sink.show(delivery);
                }
            }
        }
    }

    // Flush whatever is still current.
    session.run_until_settled(sink).await;
    Ok(())
}

fn submit(session: &mut QuerySession<HttpTransport>, text: &str, sink: &mut TerminalSink) {
    let report = session.submit(text);
    if let Some(error) = &report.configuration_error {
        sink.notify(error);
    }
}

/// Parses `:to <provider> <lang>`. `None` means the line is query text.
fn parse_target_command(line: &str) -> Option<anyhow::Result<(ProviderId, &str)>> {
    let rest = line.strip_prefix(":to ")?;
    let mut parts = rest.split_whitespace();
    let parsed = match (parts.next(), parts.next(), parts.next()) {
        (Some(provider), Some(lang), None) => provider
            .parse::<ProviderId>()
            .map(|p| (p, lang))
            .map_err(anyhow::Error::from),
        _ => Err(anyhow::anyhow!("usage: :to <provider> <lang>")),
    };
    Some(parsed)
}

fn warn_unknown_language(provider: ProviderId, code: &str) {
    if !languages::is_supported(provider, code) {
        tracing::warn!(%provider, code, "target language not in the known list; sending anyway");
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let default_level: LevelFilter = level
        .parse()
        .with_context(|| format!("invalid --log-level: {level}"))?;
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // Results go to stdout; keep logs out of the way.
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")
}

fn build_settings(args: &Args, env: &impl EnvSource) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    apply_credential_overrides(
        &mut settings,
        CredentialOverrides {
            youdao_app_id: args.youdao_app_id.clone(),
            youdao_secret_key: args.youdao_secret_key.clone(),
            microsoft_subscription_key: args.microsoft_key.clone(),
            microsoft_region: args.microsoft_region.clone(),
            baidu_app_id: args.baidu_app_id.clone(),
            baidu_secret_key: args.baidu_secret_key.clone(),
        },
        env,
    );

    if !args.providers.is_empty() {
        for provider in &args.providers {
            settings.get_mut(*provider).enabled = true;
        }
        settings.restrict_to(&args.providers);
    }

    Ok(settings)
}

struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn show(&mut self, delivery: Delivery) {
        println!("== {} ==", delivery.title);
        match delivery.outcome {
            TranslationOutcome::Success(results) => {
                for result in &results {
                    print_result(result);
                }
            }
            TranslationOutcome::Empty => println!("No results!"),
            TranslationOutcome::VendorError(_, message) => println!("{message}"),
            TranslationOutcome::TransportError(message) => println!("{message}"),
        }
        println!();
    }

    fn notify(&mut self, error: &ConfigurationError) {
        eprintln!("{error}");
    }
}

fn print_result(result: &TranslationResult) {
    match &result.dictionary_url {
        Some(url) => println!("{} <{url}>", result.source_text),
        None => println!("{}", result.source_text),
    }
    if let Some(phonetic) = &result.phonetic_notes {
        println!("  {phonetic}");
    }
    if result.explains.is_empty() {
        println!("  {}", result.primary_translation);
    } else {
        for line in &result.explains {
            println!("  {line}");
        }
    }
    if let Some(forms) = &result.word_forms {
        let forms: Vec<_> = forms.iter().map(|f| format!("{}: {}", f.form, f.value)).collect();
        println!("Word forms");
        println!("  {}", forms.join(", "));
    }
    if !result.alternates.is_empty() {
        println!("Other translations");
        for alt in &result.alternates {
            println!("  {}: {}", alt.label, alt.value);
        }
    }
    if let Some(audio) = &result.pronunciation_audio {
        if let Some(url) = &audio.origin_url {
            println!("  origin audio: {url}");
        }
        if let Some(url) = &audio.result_url {
            println!("  result audio: {url}");
        }
    }
}
