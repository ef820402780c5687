use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::game::{Timings, ValidationPolicy};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub on_ms: u64,
    pub step_ms: u64,
    pub pause_ms: u64,
    pub policy: ValidationPolicy,
    /// Fixed seed for reproducible games, otherwise seeded from the clock
    pub seed: Option<u64>,
    pub fps: u32,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let timings = Timings::default();

        Config {
            on_ms: timings.on_ms,
            step_ms: timings.step_ms,
            pause_ms: timings.pause_ms,
            policy: ValidationPolicy::default(),
            seed: None,
            fps: 60,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;

        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn parse(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.on_ms > 0, "on_ms must be positive");
        anyhow::ensure!(self.step_ms > 0, "step_ms must be positive");
        anyhow::ensure!(self.fps > 0, "fps must be positive");
        self.level()?;
        Ok(())
    }

    pub fn timings(&self) -> Timings {
        Timings {
            on_ms: self.on_ms,
            step_ms: self.step_ms,
            pause_ms: self.pause_ms,
        }
    }

    pub fn level(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Unknown log level {:?}", self.log_level))
    }
}
