use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use stockdata_fn::alphavantage_api::Client;
use stockdata_fn::{handle, Config, ErrorResponse, Request};

#[derive(Parser)]
#[command(name = "stockdata")]
#[command(about = "Fetch daily stock price history as columnar JSON")]
struct Cli {
    /// Request JSON, e.g. '{"id": 1, "stock": "ibm"}'. Reads stdin when omitted.
    #[arg(long)]
    request: Option<String>,

    /// Override the upstream API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdata_fn=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let raw = match cli.request {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };
    let request: Request = serde_json::from_str(&raw).context("Invalid request JSON")?;

    let config = Config::from_env()?;
    let base_url = cli
        .base_url
        .or_else(|| std::env::var("STOCKDATA_BASE_URL").ok());
    let client = match base_url {
        Some(base) => Client::with_base_url(&base, config.api_key)?,
        None => Client::new(config.api_key)?,
    };

    match handle(&request, &client).await {
        Ok(resp) => {
            println!("{}", serde_json::to_string(&resp)?);
        }
        Err(err) => {
            tracing::error!("Invocation failed: {}", err);
            println!("{}", serde_json::to_string(&ErrorResponse::from(&err))?);
            std::process::exit(1);
        }
    }

    Ok(())
}
