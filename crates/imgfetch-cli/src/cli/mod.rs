//! CLI for imgfetch.

mod prompt;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use imgfetch_core::config::{self, FetcherConfig, ValidationMode};
use imgfetch_core::fetch_outcome;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Fetch one image from a URL into a local folder.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Download an image from a URL and keep it only if it is a valid image", long_about = None)]
pub struct Cli {
    /// Image URL. Prompted for on stdin when omitted.
    pub url: Option<String>,

    /// Directory to save into (default from config: Fetched_Images).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Total request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// How the downloaded file is checked.
    #[arg(long, value_enum)]
    pub validation: Option<ValidationArg>,

    /// Read config from this file instead of ~/.config/imgfetch/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationArg {
    /// Header and completeness markers only.
    Structural,
    /// Full pixel decode.
    Decode,
}

impl From<ValidationArg> for ValidationMode {
    fn from(arg: ValidationArg) -> Self {
        match arg {
            ValidationArg::Structural => ValidationMode::Structural,
            ValidationArg::Decode => ValidationMode::Decode,
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = resolve_config(cli.config.as_deref(), config::load_or_init)?;
        cli.run(cfg, &mut io::stdin().lock(), &mut io::stdout())
    }

    /// Fetches the URL (prompting on `input` when none was given) and writes
    /// the single outcome line to `output`. Fetch failures are part of the
    /// outcome, not an `Err`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        cfg: FetcherConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let cfg = self.apply_overrides(cfg);
        tracing::debug!("effective config: {:?}", cfg);

        let url = match &self.url {
            Some(url) => url.trim().to_string(),
            None => prompt::read_url(input, output)?,
        };

        let outcome = fetch_outcome(&url, &cfg);
        writeln!(output, "{}", outcome)?;
        output.flush()?;
        Ok(())
    }

    /// Flags win over config values for this run.
    pub fn apply_overrides(&self, mut cfg: FetcherConfig) -> FetcherConfig {
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        if let Some(mode) = self.validation {
            cfg.validation = mode.into();
        }
        cfg
    }
}

/// Loads the config from an explicit `--config` file, or from the default
/// location via `load_default`. An explicit file must load; a failing default
/// location falls back to built-in defaults.
pub fn resolve_config<F>(explicit: Option<&Path>, load_default: F) -> Result<FetcherConfig>
where
    F: FnOnce() -> Result<FetcherConfig>,
{
    if let Some(path) = explicit {
        return config::load_from(path);
    }
    match load_default() {
        Ok(cfg) => Ok(cfg),
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            Ok(FetcherConfig::default())
        }
    }
}

#[cfg(test)]
mod tests;
