//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temporary data directory that is passed to every command
//! through `--data-dir`, so tests never touch the user's real workspace.

use anyhow::Result;
use assert_cmd::Command;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `copytrace` binary.
///
/// # Example
/// ```no_run
/// use copytrace_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["results"]).unwrap();
/// assert!(!result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    json_output: bool,
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
        let data_dir = temp_dir.path().join(".copytrace");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            json_output: false,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run commands with `--format json`.
    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point the CLI at a mock backend.
    pub fn with_backend(self, base_url: impl Into<String>) -> Self {
        self.with_env("COPYTRACE_BACKEND_URL", base_url)
    }

    /// Write a raw file into the data directory.
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        std::fs::write(self.data_dir.join(name), contents).expect("Failed to write data file");
        self
    }

    /// Serialize `value` as JSON into the data directory.
    pub fn with_json<T: Serialize>(self, name: &str, value: &T) -> Self {
        let contents = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
        self.with_file(name, &contents)
    }

    /// Configure a CLI command with this world's data dir, format and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir()).arg("--format").arg(
            if self.json_output {
                "json"
            } else {
                "plain"
            },
        );

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("COPYTRACE_PATH");
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `copytrace` binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("copytrace")
            .map_err(|e| anyhow::anyhow!("Failed to find copytrace binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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
