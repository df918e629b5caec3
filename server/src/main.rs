mod config;
mod export;
mod routes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use leptos::prelude::get_configuration;

use crate::config::{ConfigError, ServerConfig};
use crate::export::ExportError;

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Portfolio blog server and static exporter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the site over HTTP (default).
    Serve,
    /// Render every page into a static directory.
    Export {
        /// Output directory.
        #[arg(long, short, env = "EXPORT_DIR", default_value = "dist")]
        out: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli.command.unwrap_or(Command::Serve)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "folio failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| ConfigError::Leptos(e.to_string()))?
        .leptos_options;
    let app = routes::app(&config, leptos_options);

    match command {
        Command::Serve => {
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
            tracing::info!(port = config.port, site_root = %config.site_root.display(), "folio listening");
            axum::serve(listener, app).await?;
        }
        Command::Export { out } => {
            let summary = export::export_site(app, &config, &out).await?;
            tracing::info!(
                pages = summary.pages,
                files = summary.files_copied,
                out = %out.display(),
                "static export complete"
            );
        }
    }
    Ok(())
}
