use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use studykit_types::{DEFAULT_SEPARATOR, Granularity, PersonalityType};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STUDYKIT_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (recommended default)
/// 4. ~/.studykit/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("STUDYKIT_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("studykit").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".studykit").join("config.toml"));
    }

    bail!("Could not determine config path: no HOME directory or config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Inclusive input range with a step, mirroring the planner's sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    pub min: u32,
    pub max: u32,
    #[serde(default = "default_step")]
    pub step: u32,
}

fn default_step() -> u32 {
    1
}

impl Bound {
    pub const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    pub fn check(&self, label: &str, value: u32) -> Result<()> {
        if value < self.min || value > self.max {
            bail!(
                "{} must be between {} and {} (got {})",
                label,
                self.min,
                self.max,
                value
            );
        }
        if self.step > 1 && (value - self.min) % self.step != 0 {
            bail!(
                "{} must be {} plus a multiple of {} (got {})",
                label,
                self.min,
                self.step,
                value
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub total_hours: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 40,
            break_minutes: 10,
            total_hours: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub focus: Bound,
    #[serde(rename = "break")]
    pub break_minutes: Bound,
    pub hours: Bound,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            focus: Bound::new(20, 60, 5),
            break_minutes: Bound::new(3, 15, 1),
            hours: Bound::new(1, 10, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub key_column: String,
    pub separator: char,
    pub granularity: Granularity,
    pub normalize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            key_column: "Country".to_string(),
            separator: DEFAULT_SEPARATOR,
            granularity: Granularity::Aggregated,
            normalize: true,
            top: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_type: PersonalityType,
    pub schedule: ScheduleConfig,
    pub bounds: BoundsConfig,
    pub distribution: DistributionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_type: PersonalityType::Enfp,
            schedule: ScheduleConfig::default(),
            bounds: BoundsConfig::default(),
            distribution: DistributionConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject bounds that cannot hold and defaults that fall outside them.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("bounds.focus", &self.bounds.focus),
            ("bounds.break", &self.bounds.break_minutes),
            ("bounds.hours", &self.bounds.hours),
        ];
        for (name, bound) in bounds {
            if bound.min > bound.max {
                bail!("{}: min {} exceeds max {}", name, bound.min, bound.max);
            }
            if bound.step == 0 {
                bail!("{}: step must be at least 1", name);
            }
        }
        if self.bounds.focus.max == 0 && self.bounds.break_minutes.max == 0 {
            bail!("bounds: focus and break cannot both be zero");
        }

        self.bounds
            .focus
            .check("schedule.focus_minutes", self.schedule.focus_minutes)?;
        self.bounds
            .break_minutes
            .check("schedule.break_minutes", self.schedule.break_minutes)?;
        self.bounds
            .hours
            .check("schedule.total_hours", self.schedule.total_hours)?;

        if self.distribution.key_column.is_empty() {
            bail!("distribution.key_column must not be empty");
        }
        if self.distribution.top == Some(0) {
            bail!("distribution.top must be at least 1");
        }
        Ok(())
    }
}
