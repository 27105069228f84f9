//! HTTP host for the pitch page

mod handlers;
pub mod server;
mod static_files;
mod types;

pub use server::{router, start_server};
pub use types::{ApiResponse, AssetsResponse};
