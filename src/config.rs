//! Runtime settings: command line, config file and environment.
//!
//! Precedence, lowest first: built-in defaults, `blockdrop.toml` (or the file
//! given with `--config`), `BLOCKDROP_SEED` / `BLOCKDROP_LOG`, command line flags.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::types::FRAME_MS;

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "blockdrop.toml";

pub const ENV_SEED: &str = "BLOCKDROP_SEED";
pub const ENV_LOG: &str = "BLOCKDROP_LOG";

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "blockdrop", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    /// Seed of the piece sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,
    /// Frame tick of the game loop in milliseconds
    #[arg(long)]
    pub frame_ms: Option<u64>,
    /// Config file (default: ./blockdrop.toml, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write logs to this file; nothing is logged without one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log filter, e.g. `info` or `blockdrop_engine=debug`
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("frame_ms must be between 1 and 1000, got {0}")]
    FrameMs(u64),
}

/// Contents of the config file; every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub seed: Option<u32>,
    pub frame_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileSettings {
    pub fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u32>,
    pub frame_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS as u64,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl Settings {
    /// Resolve settings from the real config file and process environment.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = read_config_file(args.config.as_deref())?;
        Self::resolve(args, file, |name| std::env::var(name).ok())
    }

    /// Layer `file`, then the variables `env` returns, then `args` over the defaults.
    pub fn resolve(
        args: &Args,
        file: Option<FileSettings>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(file) = file {
            settings.seed = file.seed.or(settings.seed);
            settings.frame_ms = file.frame_ms.unwrap_or(settings.frame_ms);
            settings.log_file = file.log_file.or(settings.log_file);
            settings.log_level = file.log_level.unwrap_or(settings.log_level);
        }

        if let Some(v) = env(ENV_SEED) {
            let seed = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_SEED,
                value: v.clone(),
            })?;
            settings.seed = Some(seed);
        }
        if let Some(v) = env(ENV_LOG) {
            settings.log_level = v;
        }

        if let Some(seed) = args.seed {
            settings.seed = Some(seed);
        }
        if let Some(ms) = args.frame_ms {
            settings.frame_ms = ms;
        }
        if let Some(path) = &args.log_file {
            settings.log_file = Some(path.clone());
        }
        if let Some(level) = &args.log_level {
            settings.log_level = level.clone();
        }

        if !(1..=1000).contains(&settings.frame_ms) {
            return Err(ConfigError::FrameMs(settings.frame_ms));
        }
        if settings.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "log_level",
                value: settings.log_level,
            });
        }
        Ok(settings)
    }
}

/// An explicit path must exist; the default file is optional.
fn read_config_file(explicit: Option<&Path>) -> Result<Option<FileSettings>, ConfigError> {
    let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if explicit.is_none() && e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    FileSettings::parse(&raw, path).map(Some)
}
