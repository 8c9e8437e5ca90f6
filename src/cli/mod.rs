use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{inspect_csv, serve};

#[derive(Parser)]
#[command(name = "argoview")]
#[command(about = "Argo float telemetry panel with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "ARGOVIEW_BIND_ADDRESS")]
        bind_address: Option<String>,

        /// CSV file to hydrate profiles from at startup
        ///
        /// When absent or unreadable the service serves the builtin sample
        /// fleet instead.
        #[arg(short, long, env = "ARGOVIEW_CSV_PATH")]
        csv_path: Option<PathBuf>,
    },
    /// Parse a profile CSV file and report what the service would load
    ///
    /// Prints how many rows were kept and discarded, and the panel
    /// statistics the file would produce.
    InspectCsv {
        /// Path to the CSV file
        #[arg(short, long)]
        csv_path: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                csv_path,
            } => {
                serve(bind_address.as_deref(), csv_path.as_deref()).await?;
            }
            Commands::InspectCsv { csv_path } => {
                inspect_csv(&csv_path)?;
            }
        }
        Ok(())
    }
}
