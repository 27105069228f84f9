use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartag_deck::{assets::is_renderable, config::Config, web::AssetsResponse, App};

#[derive(Parser, Debug)]
#[command(name = "smartag-deck")]
#[command(about = "Pitch page for smart and resilient agriculture with edge AI")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/smartag-deck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Port to serve on, overrides the config file
    #[arg(long)]
    port: Option<u16>,

    /// Write the rendered page to a file and exit
    #[arg(long, value_name = "PATH")]
    render: Option<PathBuf>,

    /// Report the state of the page images and exit
    #[arg(long)]
    check: bool,

    /// Print the --check report as JSON
    #[arg(long, requires = "check")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let app = App::new(config);

    if cli.check {
        return check_assets(&app, cli.json);
    }

    if let Some(path) = cli.render {
        app.render_to(&path)?;
        println!("✓ Page written to {:?}", path);
        return Ok(());
    }

    info!("Starting smartag-deck");
    app.run(shutdown_signal()).await
}

fn check_assets(app: &App, json: bool) -> Result<()> {
    let report = app.check();
    let renderable = is_renderable(&report);

    if json {
        println!("{}", serde_json::to_string_pretty(&AssetsResponse::from(report))?);
        if !renderable {
            std::process::exit(1);
        }
        return Ok(());
    }

    for status in &report {
        match (status.present, status.dimensions) {
            (true, Some((w, h))) => println!(
                "✓ {:?}: {} ({} bytes, {}x{})",
                status.role,
                status.path,
                status.size_bytes.unwrap_or(0),
                w,
                h
            ),
            (true, None) => println!(
                "? {:?}: {} ({} bytes, not a decodable image)",
                status.role,
                status.path,
                status.size_bytes.unwrap_or(0)
            ),
            (false, _) => println!("✗ {:?}: {} missing or unreadable", status.role, status.path),
        }
    }

    if !renderable {
        println!("✗ Page cannot be rendered");
        std::process::exit(1);
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down...");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, shutting down...");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
