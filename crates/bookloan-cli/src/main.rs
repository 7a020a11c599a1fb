//! BookLoan console binary

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookloan_cli::{CliConfig, LoanSession};
use bookloan_common::VERSION;
use bookloan_rules::LoanRulesEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the console transcript on stdout stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!("Starting BookLoan v{}", VERSION);

    // Load configuration
    let config = CliConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let catalog = config.load_catalog()?;
    let engine = LoanRulesEngine::new(config.rules_config());
    let session = LoanSession::new(engine, catalog)
        .with_days_late(config.days_late)
        .with_report(config.show_report)
        .with_detailed_catalog(config.detailed_catalog);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let outcome = session.run(&mut input, &mut output).await?;
    debug!(?outcome, "Session finished");

    Ok(())
}
