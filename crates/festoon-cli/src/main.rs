mod config;

use clap::{Parser, Subcommand};
use festoon_decor::decorate;
use festoon_detect::{classify, extract_title};
use festoon_watch::{poll_until, PollConfig, WaitOutcome};
use serde_json::json;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

#[derive(Parser)]
#[command(name = "festoon")]
#[command(about = "Decorate API documentation pages by deployment environment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Classify {
        #[arg(help = "Page title to classify, e.g. 'Training API - PRODUCTION'")]
        title: String,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
    Decorate {
        #[arg(help = "Rendered documentation page (HTML file)")]
        input: String,
        #[arg(short, long, help = "Write the decorated page here instead of in place")]
        output: Option<String>,
        #[arg(long, help = "Print the decoration report as JSON")]
        json: bool,
    },
    Watch {
        #[arg(help = "Page path to poll until the title element appears")]
        input: String,
        #[arg(short, long, help = "Write the decorated page here instead of in place")]
        output: Option<String>,
        #[arg(short = 'f', long, help = "Path to config file")]
        config: Option<String>,
        #[arg(long, help = "Override the polling interval in milliseconds")]
        interval_ms: Option<u64>,
        #[arg(long, help = "Override the maximum probe count")]
        max_attempts: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festoon=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify { title, json } => run_classify(title, json),
        Commands::Decorate {
            input,
            output,
            json,
        } => run_decorate(input, output, json),
        Commands::Watch {
            input,
            output,
            config: config_path,
            interval_ms,
            max_attempts,
        } => run_watch(input, output, config_path, interval_ms, max_attempts).await,
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_classify(title: String, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let environment = classify(&title);

    if as_json {
        let out = json!({
            "environment": environment,
            "color": environment.color(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("environment: {}", environment);
        println!("color: {}", environment.color());
    }

    Ok(())
}

fn run_decorate(
    input: String,
    output: Option<String>,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = std::fs::read_to_string(&input)?;
    let decorated = decorate(&html)?;

    let dest = output.unwrap_or(input);
    std::fs::write(&dest, &decorated.html)?;

    let report = &decorated.report;
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if report.already_decorated {
        println!("{}: already decorated ({})", dest, report.environment);
    } else {
        println!(
            "{}: {} ({}){}",
            dest,
            report.environment,
            report.color,
            if report.banner_inserted {
                " + production banner"
            } else {
                ""
            }
        );
    }

    Ok(())
}

async fn run_watch(
    input: String,
    output: Option<String>,
    config_path: Option<String>,
    interval_ms: Option<u64>,
    max_attempts: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = match config_path {
        Some(path) => config::FestoonConfig::from_file(&path)?,
        None => config::FestoonConfig::default(),
    };

    let poll = PollConfig {
        interval: Duration::from_millis(interval_ms.unwrap_or(file_config.watch.interval_ms)),
        max_attempts: max_attempts.unwrap_or(file_config.watch.max_attempts),
    };

    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(true);
        }
    });

    info!(
        path = %input,
        interval_ms = poll.interval.as_millis() as u64,
        max_attempts = poll.max_attempts,
        "waiting for title element"
    );

    // The renderer writes the page asynchronously; probe until a document
    // with a title element shows up.
    let probe_path = input.clone();
    let outcome = poll_until(poll, cancel_rx, move || {
        let html = std::fs::read_to_string(&probe_path).ok()?;
        extract_title(&html).map(|_| html)
    })
    .await;

    match outcome {
        WaitOutcome::Found { value: html, attempts } => {
            info!(attempts, "title element appeared");
            let decorated = decorate(&html)?;
            let dest = output.unwrap_or(input);
            std::fs::write(&dest, &decorated.html)?;
            let report = &decorated.report;
            if report.already_decorated {
                println!("{}: already decorated ({})", dest, report.environment);
            } else {
                println!("{}: {} ({})", dest, report.environment, report.color);
            }
            Ok(())
        }
        WaitOutcome::TimedOut { attempts } => {
            Err(format!("no title element in {} after {} probes", input, attempts).into())
        }
        WaitOutcome::Cancelled => Err("watch cancelled".into()),
    }
}
