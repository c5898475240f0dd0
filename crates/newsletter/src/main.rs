//! Newsletter CLI - builds and emails the bestseller digest.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsletter::{NewsletterConfig, Pipeline, RunOutcome};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is fine; the real environment still applies.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("newsletter=info,warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing")?;

    let config = NewsletterConfig::from_env();
    tracing::info!(
        model = %config.model,
        smtp_host = %config.smtp_host,
        smtp_port = config.smtp_port,
        "Loaded configuration"
    );

    let pipeline = Pipeline::from_config(&config);

    let code = match pipeline.run().await {
        RunOutcome::NoData => {
            println!("No books retrieved.");
            ExitCode::SUCCESS
        }
        RunOutcome::Sent {
            categories,
            books,
            failed_summaries,
        } => {
            println!("✅ Email sent successfully!");
            println!("   Categories: {categories}");
            println!("   Books: {books}");
            if failed_summaries > 0 {
                eprintln!("   Summaries failed: {failed_summaries}");
            }
            ExitCode::SUCCESS
        }
        RunOutcome::DispatchFailed { reason, .. } => {
            eprintln!("❌ Failed to send email: {reason}");
            ExitCode::FAILURE
        }
    };

    Ok(code)
}
