use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use u_fairdiv::scenarios::{demo_instance, reference_scenarios};
use u_fairdiv::wrr::{Allocation, WrrConfig, WrrRunner};

#[derive(Parser)]
#[command(name = "wrr", about = "Weighted round-robin allocation demo")]
struct Cli {
    /// Decay constant for the demonstration run [default: the demo's own y]
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Output format for the demonstration trace
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip the reference-scenario self-check
    #[arg(long)]
    skip_self_check: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "u_fairdiv=info,wrr=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.skip_self_check && !self_check() {
        return Ok(ExitCode::FAILURE);
    }

    let (rights, valuations, demo_y) = demo_instance();
    let config = WrrConfig::default().with_y(cli.y.unwrap_or(demo_y));
    let alloc = WrrRunner::run(&rights, &valuations, &config)?;
    print_allocation(&alloc, cli.format)?;

    Ok(ExitCode::SUCCESS)
}

/// Runs every reference scenario; returns whether all matched.
fn self_check() -> bool {
    let scenarios = reference_scenarios();
    let mut failed = 0usize;
    for scenario in &scenarios {
        match scenario.check() {
            Ok(_) => info!(name = scenario.name, "self-check passed"),
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        error!(failed, total = scenarios.len(), "self-check failed");
    }
    failed == 0
}

fn print_allocation(alloc: &Allocation, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            for line in alloc.trace() {
                println!("{line}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(alloc)?),
    }
    Ok(())
}
