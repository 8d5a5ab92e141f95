//! Command line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Parser)]
#[command(name = "tally", version, about = "A counter with a terminal UI and an HTTP page")]
pub struct Args {
    /// Config file (default: <config dir>/tally/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `server.bind_addr` (host:port)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Also serve the counter page over HTTP while the terminal UI runs
    #[arg(long, conflicts_with = "headless")]
    pub serve: bool,

    /// Serve the counter page over HTTP without a terminal UI
    #[arg(long)]
    pub headless: bool,
}

/// Which hosts to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tui,
    TuiWithServer,
    Headless,
}

impl Args {
    pub fn mode(&self) -> Mode {
        match (self.headless, self.serve) {
            (true, _) => Mode::Headless,
            (false, true) => Mode::TuiWithServer,
            (false, false) => Mode::Tui,
        }
    }

    /// Load the config file and apply command line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
            config.validate()?;
        }
        Ok(config)
    }
}
