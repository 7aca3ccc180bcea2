//! Logger setup
//!
//! Off unless `QUILL_LOG` names a level, because anything written to stderr
//! lands on the same screen the editor is clearing.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Config;

pub const LOG_ENV: &str = "QUILL_LOG";

/// Build the logger described by `config` and the environment
pub fn builder(config: &Config) -> Result<Builder> {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, "off"));

    if let Some(path) = &config.log_file {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(log_file)));
    }

    Ok(builder)
}

pub fn init(config: &Config) -> Result<()> {
    builder(config)?
        .try_init()
        .context("Failed to initialize logger")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quill.log");
        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };

        builder(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_builder_rejects_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("missing").join("quill.log")),
            ..Config::default()
        };

        let err = builder(&config).err().expect("open should fail");
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
