//! Response types for the JSON API

use serde::{Deserialize, Serialize};

use crate::assets::{is_renderable, AssetStatus};

/// Generic API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Asset report for `GET /api/assets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    /// False if a missing asset prevents the page from rendering
    pub renderable: bool,
    pub assets: Vec<AssetStatus>,
}

impl From<Vec<AssetStatus>> for AssetsResponse {
    fn from(assets: Vec<AssetStatus>) -> Self {
        Self {
            renderable: is_renderable(&assets),
            assets,
        }
    }
}
