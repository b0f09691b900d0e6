//! ssm-agent-fact - external fact reporting the SSM agent CLI and its diagnostics.

use anyhow::Context;
use clap::Parser;
use ssmfact_common::OsFamily;
use ssmfact_probe::{output, AgentDiagnosticsProbe, OutputFormat, ProbeConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ssm-agent-fact")]
#[command(
    author,
    version,
    about = "Report whether the AWS SSM agent CLI is installed and what it diagnoses"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (json, text)
    #[arg(long, default_value = "json")]
    format: String,

    /// OS family to probe for (windows, Debian, RedHat); detected when omitted
    #[arg(long)]
    os_family: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, the fact document to stdout.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let format: OutputFormat = cli.format.parse()?;
    let config = match cli.os_family {
        Some(name) => ProbeConfig::new(OsFamily::from(name)),
        None => ProbeConfig::detect(),
    };
    info!("Probing for SSM agent (OS family {})", config.os_family);

    let result = AgentDiagnosticsProbe::new(config)
        .run()
        .context("SSM agent fact collection failed")?;

    print!("{}", output::render(&result, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
