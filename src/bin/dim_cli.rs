//! Dimension Resolution CLI
//!
//! Resolves a physical quantity name to its dimensional formula using the
//! local dictionary, falling back to the Groq oracle when `GROQ_API_KEY`
//! is configured.
//!
//! # Usage
//!
//! ```bash
//! # Local lookup
//! dim_cli speed
//!
//! # AI fallback (requires GROQ_API_KEY)
//! dim_cli impulse
//!
//! # Machine-readable output
//! dim_cli force --format json
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use dim_resolver::{GroqClient, InferenceGateway, Resolution, ResolveError, Resolver};

#[derive(Parser)]
#[command(name = "dim_cli")]
#[command(version = "0.1.0")]
#[command(about = "Resolve a physical quantity to its dimensional formula")]
struct Cli {
    /// Quantity name, e.g. "force" (case-insensitive)
    quantity: String,

    /// Output format: json or pretty (default)
    #[arg(long, short = 'o', default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn render_pretty(resolution: &Resolution) {
    match resolution {
        Resolution::Verified {
            name,
            vector,
            equivalents,
        } => {
            println!(
                "{} {}",
                format!("Dimension of {}:", name).green().bold(),
                vector
            );
            if equivalents.is_empty() {
                println!("No other quantity shares this dimension.");
            } else {
                let list: Vec<&str> = equivalents.iter().map(String::as_str).collect();
                println!("Quantities with same dimension: {}", list.join(", "));
            }
        }
        Resolution::Unverified { name, raw_text } => {
            println!(
                "{} {}",
                format!("AI-inferred dimension of {} (unverified):", name)
                    .yellow()
                    .bold(),
                raw_text
            );
        }
        Resolution::NotFound { name, reason } => {
            eprintln!("{} {} — {}", "Not found:".red().bold(), name, reason);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Missing credential disables the fallback rather than failing startup.
    let gateway: Option<Arc<dyn InferenceGateway>> = match GroqClient::from_env() {
        Ok(client) => Some(Arc::new(client)),
        Err(_) => {
            eprintln!(
                "{}",
                "GROQ_API_KEY not set. AI fallback disabled.".yellow()
            );
            None
        }
    };

    let resolver = Resolver::standard(gateway);

    match resolver.resolve(&cli.quantity).await {
        Ok(resolution) => {
            match cli.format {
                OutputFormat::Json => match serde_json::to_string_pretty(&resolution) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{} {}", "Serialization error:".red().bold(), e);
                        return ExitCode::FAILURE;
                    }
                },
                OutputFormat::Pretty => render_pretty(&resolution),
            }
            match resolution {
                Resolution::NotFound { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            }
        }
        Err(ResolveError::EmptyInput) => {
            eprintln!("{}", "Please enter a quantity name.".red());
            ExitCode::FAILURE
        }
    }
}
