use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::DeckError;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub page: PageConfig,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|source| DeckError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Save configuration to `config_path`, creating parent directories
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join(".config/smartag-deck/config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory the images are read from
    pub dir: PathBuf,
    /// Background of the "Ausgangszustand" panel
    pub problem_image: String,
    /// Background of the "Leitfragen" panel
    pub questions_image: String,
    /// Architecture diagram shown in the technology tab
    pub architecture_image: String,
}

impl AssetsConfig {
    pub fn problem_path(&self) -> PathBuf {
        self.dir.join(&self.problem_image)
    }

    pub fn questions_path(&self) -> PathBuf {
        self.dir.join(&self.questions_image)
    }

    pub fn architecture_path(&self) -> PathBuf {
        self.dir.join(&self.architecture_image)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            problem_image: "DryPlants.jpeg".to_string(),
            questions_image: "smartgreenhouse.png".to_string(),
            architecture_image: "TechnologieAufbauErweitert3.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Browser tab title, also used as the page heading
    pub title: String,
    /// Emoji used as favicon and in front of the heading
    pub icon: String,
    /// Target of the heading link
    pub home_url: String,
    pub partner_name: String,
    pub partner_url: String,
    pub contact_email: String,
    pub institution: String,
    pub year: u16,
    /// Show the research disclaimer above the footer
    pub show_disclaimer: bool,
    /// Show the project phase table
    pub show_timeline: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Smarte und resiliente Landwirtschaft mit Edge AI".to_string(),
            icon: "📡".to_string(),
            home_url: "https://smartelandwirtschaft.streamlit.app/".to_string(),
            partner_name: "InNoWest".to_string(),
            partner_url: "https://innowest-brandenburg.de/".to_string(),
            contact_email: "eren.misirli@th-brandenburg.de".to_string(),
            institution: "Technische Hochschule Brandenburg".to_string(),
            year: 2025,
            show_disclaimer: false,
            show_timeline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [page]
            show_timeline = true
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.page.show_timeline);
        assert!(!config.page.show_disclaimer);
        assert_eq!(config.assets.architecture_image, "TechnologieAufbauErweitert3.png");
    }

    #[test]
    fn test_asset_paths_join_dir() {
        let assets = AssetsConfig {
            dir: PathBuf::from("/srv/deck"),
            ..AssetsConfig::default()
        };

        assert_eq!(assets.problem_path(), PathBuf::from("/srv/deck/DryPlants.jpeg"));
        assert_eq!(
            assets.questions_path(),
            PathBuf::from("/srv/deck/smartgreenhouse.png")
        );
    }

    #[test]
    fn test_load_from_rejects_invalid_toml() {
        let dir = std::env::temp_dir().join(format!("smartag-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.downcast_ref::<DeckError>().is_some());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_to_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("smartag-config-save-{}", std::process::id()));
        let path = dir.join("nested/config.toml");

        let mut config = Config::default();
        config.server.port = 9100;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 9100);
        assert_eq!(loaded.page.icon, "📡");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        assert!(Config::load_from(Path::new("/nonexistent/smartag/config.toml")).is_err());
    }
}
