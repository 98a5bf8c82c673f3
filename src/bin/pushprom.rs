//! pushprom CLI: push a single sample from the command line.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pushprom_rs::config::Config;
use pushprom_rs::telemetry::init_logging;
use pushprom_rs::{Labels, MetricKind, PushSender, Value};

#[derive(Parser)]
#[command(name = "pushprom", about = "Push metrics to a pushprom endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Push one sample
    Send {
        /// Metric name
        name: String,
        /// Sample value (integer or float, may be negative)
        #[arg(allow_negative_numbers = true)]
        value: Value,
        /// Help text reported with the metric
        #[arg(long, default_value = "")]
        help_text: String,
        /// Metric type tag (unknown tags are sent as gauge)
        #[arg(long, default_value = "gauge")]
        kind: String,
        /// Label as key=value, repeatable
        #[arg(long = "label", value_parser = parse_label, required = true)]
        labels: Vec<(String, String)>,
        /// Print the JSON payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the configured endpoint address
    Address,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_logging(&config.log_level)?;

    match cli.command {
        Command::Send {
            name,
            value,
            help_text,
            kind,
            labels,
            dry_run,
        } => {
            let labels: Labels = labels.into_iter().collect();
            cmd_send(&config, name, value, help_text, &kind, labels, dry_run).await
        }
        Command::Address => {
            println!("{}", config.credentials().address());
            Ok(())
        }
    }
}

async fn cmd_send(
    config: &Config,
    name: String,
    value: Value,
    help_text: String,
    kind: &str,
    labels: Labels,
    dry_run: bool,
) -> anyhow::Result<()> {
    let sender = PushSender::new(
        &config.credentials(),
        name,
        help_text,
        MetricKind::from_tag(kind),
    )?;

    if dry_run {
        let payload = sender.payload(value, &labels)?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let response = sender
        .send(value, &labels)
        .await
        .with_context(|| format!("failed to push to {}", sender.endpoint()))?;
    let status = response.status();
    let body = response.text().await?;
    println!("{status}");
    if !body.is_empty() {
        println!("{body}");
    }
    Ok(())
}

fn parse_label(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid label {s:?}, expected key=value"))?;
    if key.is_empty() {
        return Err(format!("invalid label {s:?}, key is empty"));
    }
    Ok((key.to_string(), value.to_string()))
}
