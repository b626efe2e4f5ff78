use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::resolve::ResolverPolicy;

/// Generative endpoint settings (`[genai]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenAiConfig {
    /// Text generation endpoint.
    pub text_url: String,
    /// Image generation endpoint.
    pub image_url: String,
    /// Optional credential; the SCS_GENAI_API_KEY env var takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            text_url: "https://genai.example.studio/v1/generate/text".to_string(),
            image_url: "https://genai.example.studio/v1/generate/image".to_string(),
            api_key: None,
        }
    }
}

/// Global configuration loaded from `~/.config/scs/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScsConfig {
    /// Remote file listing endpoint (JSON array of file records).
    pub listing_url: String,
    /// Form relay endpoint for newsletter/contact submissions.
    pub relay_url: String,
    /// Generative endpoint settings.
    #[serde(default)]
    pub genai: GenAiConfig,
    /// Matching-policy override; studio conventions when absent.
    #[serde(default)]
    pub resolver: ResolverPolicy,
}

impl Default for ScsConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://files.example.studio/api/files".to_string(),
            relay_url: "https://forms.example.studio/api/submit".to_string(),
            genai: GenAiConfig::default(),
            resolver: ResolverPolicy::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScsConfig = toml::from_str(&data)?;
    Ok(cfg)
}
