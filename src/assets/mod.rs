//! Image assets: inline embedding and preflight checks, plus the bundled
//! stylesheet and script

pub mod bundle;
pub mod embed;
pub mod report;

pub use embed::{embed_image, embed_required, DATA_URI_PREFIX};
pub use report::{inspect_assets, is_renderable, AssetRole, AssetStatus};
