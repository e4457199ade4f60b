//! TestWorld pattern for CLI integration tests.
//!
//! Provides an isolated data directory and a way to point the `erpview`
//! binary at it.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// # Example
/// ```no_run
/// use assert_cmd::Command;
/// use erpview_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let mut cmd = Command::new("erpview");
/// world.configure_command(&mut cmd).arg("init");
/// assert!(cmd.output().unwrap().status.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    format: &'static str,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".erpview");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            format: "plain",
        }
    }

    /// Ask for JSON output from every command.
    pub fn json(mut self) -> Self {
        self.format = "json";
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to a file under the temp root and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Copy a fixture from this crate's `fixtures/` directory.
    pub fn copy_fixture(&self, name: &str) -> Result<PathBuf> {
        let dest = self.temp_dir.path().join(name);
        std::fs::copy(crate::fixtures::fixtures_dir().join(name), &dest)?;
        Ok(dest)
    }

    /// Point a command at this world's data directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        self.configure_command_as(cmd, self.format)
    }

    /// Like [`configure_command`](Self::configure_command) with an explicit
    /// output format.
    pub fn configure_command_as<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("ERPVIEW_PATH");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run a configured command and capture its output.
    pub fn run(&self, cmd: &mut Command, args: &[&str]) -> Result<CliResult> {
        self.run_as(cmd, self.format, args)
    }

    pub fn run_as(&self, cmd: &mut Command, format: &str, args: &[&str]) -> Result<CliResult> {
        self.configure_command_as(cmd, format);
        cmd.args(args);
        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

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
