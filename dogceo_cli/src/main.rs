mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dogceo_api::{Client, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

/// Environment variable that overrides the API base URL.
const BASE_URL_ENV: &str = "DOGCEO_BASE_URL";

#[derive(Parser)]
#[command(name = "dogceo")]
#[command(about = "Look up dog breeds on dog.ceo")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (defaults to $DOGCEO_BASE_URL, then https://dog.ceo/api)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sub-breeds of a breed
    SubBreeds(commands::sub_breeds::SubBreedsArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dogceo_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_name(&cli.output);
    let base_url = resolve_base_url(cli.base_url.as_deref(), std::env::var(BASE_URL_ENV).ok());
    let client = Client::with_base_url(&base_url);

    match &cli.command {
        Commands::SubBreeds(args) => commands::sub_breeds::run(args, &client, &format)?,
    }

    Ok(())
}

/// The `--base-url` flag wins over the environment, which wins over production.
fn resolve_base_url(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(|s| s.to_string())
        .or(env)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
