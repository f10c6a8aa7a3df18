use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use statedoc::{common, report, server};

#[derive(Parser)]
#[command(name = "statedoc", version, about = "Infrastructure state to technical report")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report document from a state file
    Generate {
        /// Infrastructure state JSON file
        #[arg(short, long)]
        input: String,
        /// Output path for the rendered report
        #[arg(short, long, default_value = "report.html")]
        output: String,
    },
    /// Serve the report generation endpoint
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Allowed CORS origin; any origin when omitted
        #[arg(long)]
        cors_origin: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => {
            let content = std::fs::read_to_string(&input)?;
            let html = report::generate_html_from_str(&content)?;
            common::write_string_to_file(&output, &html)?;
            info!("Report written to {}", output);
        }
        Commands::Serve { port, cors_origin } => {
            server::start_server(port, cors_origin.as_deref()).await?;
        }
    }

    Ok(())
}
