//! Inline image embedding as base64 data URIs

use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;

use crate::error::{DeckError, Result};

/// Prefix of every embedded image, regardless of the file's actual format
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Build a data URI from raw image bytes
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(bytes))
}

/// Embed an image file as a data URI.
///
/// Any read failure yields an empty string, so the caller's CSS simply
/// references nothing and the image does not render.
pub fn embed_image(path: impl AsRef<Path>) -> String {
    match std::fs::read(path.as_ref()) {
        Ok(bytes) => to_data_uri(&bytes),
        Err(_) => String::new(),
    }
}

/// Embed an image the page cannot do without; read failures abort the render
pub fn embed_required(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DeckError::AssetRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_data_uri(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("smartag-embed-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_embed_image_decodes_to_original_bytes() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("sample.bin");
        let bytes: Vec<u8> = (0..=255u8).chain([0, 0, 1]).collect();
        std::fs::write(&path, &bytes).unwrap();

        let uri = embed_image(&path);
        assert!(uri.starts_with(DATA_URI_PREFIX));

        let payload = &uri[DATA_URI_PREFIX.len()..];
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_embed_image_missing_file_is_empty() {
        assert_eq!(embed_image("/nonexistent/smartag/DryPlants.jpeg"), "");
    }

    #[test]
    fn test_embed_image_directory_is_empty() {
        let dir = scratch_dir("isdir");
        assert_eq!(embed_image(&dir), "");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_embed_image_empty_file_has_bare_prefix() {
        let dir = scratch_dir("empty");
        let path = dir.join("empty.png");
        std::fs::write(&path, b"").unwrap();

        assert_eq!(embed_image(&path), DATA_URI_PREFIX);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_embed_required_reports_path() {
        let err = embed_required("/nonexistent/smartag/arch.png").unwrap_err();
        match err {
            DeckError::AssetRead { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/smartag/arch.png"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
