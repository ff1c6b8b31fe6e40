/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tome_core::Chapter;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_media")]
    pub media: MediaSettings,

    #[serde(default = "default_chapters")]
    pub chapters: ChapterSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,
}

/// The audiobook this deployment serves.
///
/// URLs are trusted configuration pointing at externally hosted
/// resources; the server never computes them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaSettings {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub audio_url: String,

    #[serde(default)]
    pub art_url: String,

    /// Chapter list the client falls back to when extraction fails
    #[serde(default = "default_fallback_chapters")]
    pub fallback_chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChapterSettings {
    /// Wall-clock budget for one extraction, sized for multi-hour files
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with TOME_)
        settings = settings.add_source(
            config::Environment::with_prefix("TOME")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.media.audio_url.is_empty() {
            return Err(ServerError::Config(
                "media.audio_url is required (set it in config.toml)".to_string(),
            ));
        }

        if self.chapters.timeout_secs == 0 {
            return Err(ServerError::Config(
                "chapters.timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        web_dir: default_web_dir(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("./web")
}

fn default_media() -> MediaSettings {
    MediaSettings {
        title: String::new(),
        author: String::new(),
        audio_url: String::new(),
        art_url: String::new(),
        fallback_chapters: default_fallback_chapters(),
    }
}

fn default_fallback_chapters() -> Vec<Chapter> {
    vec![Chapter::fallback()]
}

fn default_chapters() -> ChapterSettings {
    ChapterSettings {
        timeout_secs: default_timeout_secs(),
    }
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            media: default_media(),
            chapters: default_chapters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.chapters.timeout_secs, 60);
        assert_eq!(config.media.fallback_chapters, vec![Chapter::fallback()]);
    }

    #[test]
    fn validation_requires_an_audio_url() {
        let config = ServerConfig::default();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.media.audio_url = "https://example.com/book.m4b".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_a_zero_timeout() {
        let mut config = ServerConfig::default();
        config.media.audio_url = "https://example.com/book.m4b".to_string();
        config.chapters.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
