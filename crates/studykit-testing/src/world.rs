//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory, points `--config` at a file inside it
//! and runs the CLI from there, so tests never read the user's real config.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use studykit_testing::TestWorld;
///
/// let world = TestWorld::new().with_countries();
/// let result = world.run(&["dist", "rows", "--file", "countries.csv"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    pass_config_flag: bool,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");

        Self {
            temp_dir,
            config_path,
            pass_config_flag: true,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root, also the working directory of commands.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the config path passed with `--config`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve a path relative to the temp root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Run commands without `--config`, so the path comes from the
    /// environment (e.g. `STUDYKIT_CONFIG`).
    pub fn without_config_flag(mut self) -> Self {
        self.pass_config_flag = false;
        self
    }

    /// Write a config file before running commands.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Place the sample table at `countries.csv`.
    pub fn with_countries(self) -> Self {
        self.with_table("countries.csv", fixtures::COUNTRIES_CSV)
    }

    /// Place an arbitrary CSV table under the temp root.
    pub fn with_table(self, name: &str, content: &str) -> Self {
        fixtures::write_table(self.root(), name, content).expect("Failed to write table");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("studykit")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        if self.pass_config_flag {
            cmd.arg("--config").arg(&self.config_path);
        }
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("STUDYKIT_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the studykit binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("studykit")
            .map_err(|e| anyhow::anyhow!("Failed to find studykit binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Like [`TestWorld::run`] with `--format json`, parsing stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("Command {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
