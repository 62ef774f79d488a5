use std::{process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use tessera_tokens::{GeneratorConfig, TOKEN_COUNT, generate};

mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run(&GeneratorConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::failed(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &GeneratorConfig) -> Result<()> {
    let started = Instant::now();

    let written = generate(config)
        .await
        .context("failed to generate theme tokens")?;
    for path in &written {
        output::wrote(path, TOKEN_COUNT);
    }

    output::finished(written.len(), started.elapsed());
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tessera_tokens=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
