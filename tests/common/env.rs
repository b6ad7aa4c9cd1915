//! Test environment for isolated deploy-tasks runs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the deploy-tasks binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated environment: a project directory to run from and a home
/// directory so no user-level config leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            home_dir: tempfile::tempdir().expect("home tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deploy-tasks")),
        }
    }

    /// Environment with `./deploy-tasks.toml` already written
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write_config(config);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_config(&self, content: &str) {
        self.write_project_file("deploy-tasks.toml", content);
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Run with stdin closed (prompts read EOF)
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_full(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_full(args, env_vars, None)
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        self.run_full(args, &[], Some(input))
    }

    pub fn run_full(
        &self,
        args: &[&str],
        env_vars: &[(&str, &str)],
        input: Option<&str>,
    ) -> TestResult {
        let mut cmd = self.command(self.project_root.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd.stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute deploy-tasks");
        if let Some(input) = input {
            let mut stdin = child.stdin.take().expect("piped stdin");
            stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
        to_result(child.wait_with_output().expect("Failed to wait for deploy-tasks"))
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("RUST_LOG")
            .env_remove("CI")
            .env_remove("GITHUB_ACTIONS");
        for (key, _) in std::env::vars() {
            if key.starts_with("DEPLOY_TASKS_") {
                cmd.env_remove(key);
            }
        }
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
