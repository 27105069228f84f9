pub mod assets;
pub mod config;
pub mod deck;
pub mod error;
pub mod web;

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use assets::{inspect_assets, AssetStatus};
use config::Config;
use error::DeckError;

/// Main application struct
pub struct App {
    config: Arc<Config>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Serve the page until `shutdown` resolves
    pub async fn run(&self, shutdown: impl Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
        for status in self.check() {
            if !status.present {
                warn!("Asset missing: {}", status.path);
            }
        }
        web::start_server(self.config.clone(), shutdown).await
    }

    /// Render the page once and write it to `path`
    pub fn render_to(&self, path: &Path) -> error::Result<usize> {
        let html = deck::render_page(&self.config)?;
        std::fs::write(path, &html).map_err(|source| DeckError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {} bytes to {:?}", html.len(), path);
        Ok(html.len())
    }

    /// Inspect the page images
    pub fn check(&self) -> Vec<AssetStatus> {
        inspect_assets(&self.config.assets)
    }
}
