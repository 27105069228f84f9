//! Stylesheet and script compiled into the binary

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/web/"]
pub struct WebAssets;

/// Global stylesheet inlined into every page
pub fn stylesheet() -> String {
    bundled_text("deck.css")
}

/// Tab switching script inlined into every page
pub fn script() -> String {
    bundled_text("deck.js")
}

fn bundled_text(name: &str) -> String {
    WebAssets::get(name)
        .map(|file| String::from_utf8_lossy(&file.data).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_contains_page_assets() {
        assert!(stylesheet().contains(".section-header"));
        assert!(stylesheet().contains("@media print"));
        assert!(script().contains("function switchTab"));
    }

    #[test]
    fn test_unknown_bundle_entry_is_empty() {
        assert_eq!(bundled_text("missing.css"), "");
    }
}
