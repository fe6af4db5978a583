use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How thoroughly a downloaded file is checked before it is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Header parse plus a format-specific completeness check; no pixel decode.
    #[default]
    Structural,
    /// Full pixel decode.
    Decode,
}

/// Fetcher configuration loaded from `~/.config/imgfetch/config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Directory where fetched images are written (relative to the working directory unless absolute).
    pub output_dir: PathBuf,
    /// Base name used when the URL path has no last segment.
    pub default_basename: String,
    /// Extension (without dot) appended when the derived name has no recognized image extension.
    pub default_extension: String,
    /// Recognized image extensions (without dot, lowercase).
    pub image_extensions: Vec<String>,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow HTTP redirects.
    pub follow_redirects: bool,
    /// Maximum number of redirects when `follow_redirects` is set.
    pub max_redirections: u32,
    /// Validation applied to the written file.
    pub validation: ValidationMode,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Fetched_Images"),
            default_basename: "downloaded_image".to_string(),
            default_extension: "jpg".to_string(),
            image_extensions: ["jpg", "jpeg", "png", "gif", "bmp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
            max_redirections: 10,
            validation: ValidationMode::Structural,
        }
    }
}

impl FetcherConfig {
    /// Default config with a different output directory (handy for tests and `--output-dir`).
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetcherConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetcherConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<FetcherConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: FetcherConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
