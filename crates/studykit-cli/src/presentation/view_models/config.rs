use serde::Serialize;
use std::fmt;

use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
    /// TOML rendering of `config`, used for plain output.
    #[serde(skip)]
    pub rendered: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
}

/// Shown when no subcommand is given.
#[derive(Debug, Serialize)]
pub struct WelcomeViewModel {
    pub default_type: String,
    pub config_path: String,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.exists {
            writeln!(f, "# {}", self.path)?;
        } else {
            writeln!(f, "# {} (not created, showing defaults)", self.path)?;
        }
        write!(f, "{}", self.rendered)
    }
}

impl fmt::Display for ConfigPathViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.path)
    }
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config: {}", self.path)
    }
}

impl fmt::Display for WelcomeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "studykit: study planning by personality type")?;
        writeln!(f)?;
        writeln!(f, "Default type: {}", self.default_type)?;
        writeln!(f, "Config:       {}", self.config_path)
    }
}
