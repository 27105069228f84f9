//! Preflight inspection of the page's image assets

use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::config::AssetsConfig;

/// Where on the page an image is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetRole {
    /// Background of the "Ausgangszustand" panel
    ProblemBackground,
    /// Background of the "Leitfragen" panel
    QuestionsBackground,
    /// Diagram in the technology tab
    Architecture,
}

impl AssetRole {
    /// Backgrounds degrade to no image; the architecture diagram does not
    pub fn is_required(self) -> bool {
        matches!(self, AssetRole::Architecture)
    }
}

/// State of a single asset on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetStatus {
    pub role: AssetRole,
    pub path: String,
    pub present: bool,
    pub size_bytes: Option<u64>,
    /// Pixel dimensions, if the file decodes as an image
    pub dimensions: Option<(u32, u32)>,
}

impl AssetStatus {
    /// A required asset that is missing blocks rendering
    pub fn is_blocking(&self) -> bool {
        self.role.is_required() && !self.present
    }
}

/// Pixel dimensions of an encoded image, sniffing the format from its bytes
fn decode_dimensions(bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}

/// Reads the file the same way the renderer does, so `present` means the
/// page can actually embed it.
fn inspect(role: AssetRole, path: &Path) -> AssetStatus {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!("Could not read {:?}: {}", path, e);
            None
        }
    };

    let dimensions = bytes.as_deref().and_then(|bytes| match decode_dimensions(bytes) {
        Ok(dims) => Some(dims),
        Err(e) => {
            debug!("Could not decode {:?}: {}", path, e);
            None
        }
    });

    AssetStatus {
        role,
        path: path.display().to_string(),
        present: bytes.is_some(),
        size_bytes: bytes.as_ref().map(|b| b.len() as u64),
        dimensions,
    }
}

/// Inspect all three page images
pub fn inspect_assets(assets: &AssetsConfig) -> Vec<AssetStatus> {
    vec![
        inspect(AssetRole::ProblemBackground, &assets.problem_path()),
        inspect(AssetRole::QuestionsBackground, &assets.questions_path()),
        inspect(AssetRole::Architecture, &assets.architecture_path()),
    ]
}

/// True if no asset in the report blocks rendering
pub fn is_renderable(report: &[AssetStatus]) -> bool {
    !report.iter().any(AssetStatus::is_blocking)
}
