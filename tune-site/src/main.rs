//! tune-site - musician portfolio site server and exporter
//!
//! `serve` renders pages per request and serves the rest of the site
//! directory. `build` writes the rendered site to a directory.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::{error, info, warn};
use tune_common::config::{locate_config_file, Overrides, SiteSettings, TomlConfig};
use tune_common::logging::init_tracing;
use tune_site::content::{ContentSource, DirSource, HttpSource};
use tune_site::export::export_site;
use tune_site::{build_router, AppState, PageRenderer};

/// Command-line arguments for tune-site
#[derive(Parser, Debug)]
#[command(name = "tune-site")]
#[command(about = "Renders and serves a musician portfolio site")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding page shells, components and data
    #[arg(long, global = true)]
    site_root: Option<PathBuf>,

    /// Remote origin serving the data files instead of the site root
    #[arg(long, global = true)]
    content_origin: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the site over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Render every page into an output directory
    Build {
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_file = locate_config_file(cli.config.as_deref())?;
    let toml = match &config_file {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };

    let (host, port) = match &cli.command {
        Command::Serve { host, port } => (host.clone(), *port),
        Command::Build { .. } => (None, None),
    };
    let settings = SiteSettings::resolve(
        Overrides {
            site_root: cli.site_root.clone(),
            host,
            port,
            content_origin: cli.content_origin.clone(),
        },
        &toml,
    )?;

    init_tracing(&settings.log_level)?;

    info!(
        "Starting tune-site v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_file {
        Some(path) => info!("Config file: {}", path.display()),
        None => warn!("No config file found, using defaults"),
    }
    info!("Site root: {}", settings.site_root.display());

    let site: Arc<dyn ContentSource> = Arc::new(DirSource::new(settings.site_root.clone()));
    let content: Arc<dyn ContentSource> = match &settings.content_origin {
        Some(origin) => {
            info!("Content origin: {}", origin);
            Arc::new(HttpSource::new(origin, settings.fetch_timeout)?)
        }
        None => Arc::clone(&site),
    };
    let renderer = PageRenderer::new(site, content);

    match cli.command {
        Command::Serve { .. } => serve(renderer, &settings).await,
        Command::Build { out } => {
            let summary = export_site(&renderer, &settings.site_root, &out)
                .await
                .with_context(|| format!("Failed to export site to {}", out.display()))?;
            info!(
                "Wrote {} pages and {} files to {}",
                summary.rendered,
                summary.copied,
                out.display()
            );
            Ok(())
        }
    }
}

async fn serve(renderer: PageRenderer, settings: &SiteSettings) -> Result<()> {
    if !settings.site_root.is_dir() {
        warn!(
            "Site root {} is not a directory; every page will 404",
            settings.site_root.display()
        );
    }

    let app = build_router(AppState::new(renderer, settings.site_root.clone()));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("tune-site listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
