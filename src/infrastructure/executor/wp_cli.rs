//! WP-CLI executor
//!
//! Runs catalogued commands through the `wp` binary, either on this machine
//! or on a remote host over ssh.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use super::catalog::CommandCatalog;
use crate::domain::ports::{CommandArgs, CommandError, CommandExecutor, CommandOutput};

/// ssh reserves this exit status for its own (connection) errors
const SSH_CONNECTION_ERROR: i32 = 255;

/// Where `wp` is run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Spawn `wp` locally
    Local,
    /// Run `wp` on `destination` (user@host) via ssh
    Ssh { destination: String },
}

/// Executor backed by WP-CLI
///
/// Feature probes are cached for the lifetime of the executor.
pub struct WpCliExecutor {
    wp_bin: String,
    path: Option<String>,
    transport: Transport,
    catalog: CommandCatalog,
    probes: Mutex<HashMap<String, bool>>,
}

impl WpCliExecutor {
    pub fn new(transport: Transport, catalog: CommandCatalog) -> Self {
        Self {
            wp_bin: "wp".to_string(),
            path: None,
            transport,
            catalog,
            probes: Mutex::new(HashMap::new()),
        }
    }

    pub fn local(catalog: CommandCatalog) -> Self {
        Self::new(Transport::Local, catalog)
    }

    pub fn ssh(destination: impl Into<String>, catalog: CommandCatalog) -> Self {
        Self::new(
            Transport::Ssh {
                destination: destination.into(),
            },
            catalog,
        )
    }

    /// WordPress root passed as `--path`
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Name or path of the WP-CLI binary
    pub fn with_wp_bin(mut self, wp_bin: impl Into<String>) -> Self {
        self.wp_bin = wp_bin.into();
        self
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Arguments passed to `wp`, including the global `--path`
    fn wp_args(&self, argv: &[String]) -> Vec<String> {
        let mut args = argv.to_vec();
        if let Some(path) = &self.path {
            args.push(format!("--path={}", path));
        }
        args
    }

    fn build_command(&self, argv: &[String]) -> Command {
        let args = self.wp_args(argv);
        match &self.transport {
            Transport::Local => {
                let mut cmd = Command::new(&self.wp_bin);
                cmd.args(&args);
                cmd
            }
            Transport::Ssh { destination } => {
                let mut cmd = Command::new("ssh");
                cmd.arg(destination)
                    .arg(remote_command_line(&self.wp_bin, &args));
                cmd
            }
        }
    }

    fn program(&self) -> &str {
        match self.transport {
            Transport::Local => &self.wp_bin,
            Transport::Ssh { .. } => "ssh",
        }
    }

    fn run_argv(&self, argv: &[String]) -> Result<CommandOutput, CommandError> {
        let label = argv.join(" ");
        log::debug!("{} $ {} {}", self.display_name(), self.wp_bin, label);

        let output = self
            .build_command(argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    CommandError::Unreachable(format!("'{}' not found in PATH", self.program()))
                }
                _ => CommandError::Unreachable(format!("failed to start {}: {}", self.program(), e)),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            log::trace!("{} -> {}", label, stdout);
            return Ok(CommandOutput { stdout, stderr });
        }

        let code = output.status.code();
        log::debug!("{} exited with {:?}: {}", label, code, stderr);
        if matches!(self.transport, Transport::Ssh { .. }) && code == Some(SSH_CONNECTION_ERROR) {
            return Err(CommandError::Unreachable(stderr));
        }
        Err(CommandError::Failed {
            command: label,
            code,
            stderr,
        })
    }
}

impl CommandExecutor for WpCliExecutor {
    fn execute(&self, command: &str, args: &CommandArgs) -> Result<CommandOutput, CommandError> {
        let argv = self.catalog.resolve(command, args)?;
        self.run_argv(&argv)
    }

    fn supports(&self, feature: &str) -> bool {
        if let Ok(cache) = self.probes.lock() {
            if let Some(known) = cache.get(feature) {
                return *known;
            }
        }

        // Only answers the target actually gave are cached; a failed probe
        // is retried next time.
        let supported = match self.catalog.probe(feature) {
            Some(argv) => match self.run_argv(&argv) {
                Ok(output) => output.stdout.trim() == "yes",
                Err(e) => {
                    log::debug!("probe for '{}' failed: {}", feature, e);
                    return false;
                }
            },
            None => {
                log::debug!("no probe defined for feature '{}'", feature);
                false
            }
        };

        if let Ok(mut cache) = self.probes.lock() {
            cache.insert(feature.to_string(), supported);
        }
        supported
    }

    fn display_name(&self) -> String {
        match &self.transport {
            Transport::Local => "local".to_string(),
            Transport::Ssh { destination } => format!("ssh {}", destination),
        }
    }
}

/// Quote a single word for a POSIX shell
fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_=./:@,+".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}

/// Command line executed by the remote shell
fn remote_command_line(wp_bin: &str, args: &[String]) -> String {
    std::iter::once(wp_bin)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}
