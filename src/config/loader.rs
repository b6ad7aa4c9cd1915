//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TasksError, TasksResult};

use super::types::Config;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "deploy-tasks.toml";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "DEPLOY_TASKS_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TasksResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TasksError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TasksError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the configuration.
///
/// Order: explicit path, `./deploy-tasks.toml`, user config dir, defaults.
/// An explicit path that does not exist is an error; the implicit
/// locations are simply skipped.
pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> TasksResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths(working_dir)
            .into_iter()
            .find(|path| path.is_file()),
    };

    let loaded = match candidate {
        Some(path) => {
            log::debug!("loading configuration from {}", path.display());
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            log::debug!("no configuration file found, using defaults");
            LoadedConfig::default()
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// Implicit config locations, most specific first
pub fn candidate_paths(working_dir: &Path) -> Vec<PathBuf> {
    let mut paths = vec![working_dir.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("deploy-tasks").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (DEPLOY_TASKS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
}

/// Apply overrides from `lookup`, which is asked for un-prefixed keys
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // DEPLOY_TASKS_URL
    if let Some(url) = lookup("URL") {
        config.target.url = Some(url);
    }

    // DEPLOY_TASKS_SSH (empty forces local)
    if let Some(ssh) = lookup("SSH") {
        config.target.ssh = if ssh.trim().is_empty() { None } else { Some(ssh) };
    }

    // DEPLOY_TASKS_PATH_ROOT
    if let Some(path) = lookup("PATH_ROOT") {
        config.target.path = Some(path);
    }

    // DEPLOY_TASKS_WP_BIN
    if let Some(wp_bin) = lookup("WP_BIN") {
        config.target.wp_bin = wp_bin;
    }

    // DEPLOY_TASKS_TIMEOUT (seconds)
    if let Some(timeout) = lookup("TIMEOUT") {
        match timeout.trim().parse::<u64>() {
            Ok(secs) => config.runner.timeout_secs = Some(secs),
            Err(_) => log::warn!("ignoring {}TIMEOUT='{}': not a number", ENV_PREFIX, timeout),
        }
    }

    // DEPLOY_TASKS_DEFAULT_ANSWER
    if let Some(answer) = lookup("DEFAULT_ANSWER") {
        match parse_answer(&answer) {
            Some(answer) => config.runner.default_answer = Some(answer),
            None => log::warn!(
                "ignoring {}DEFAULT_ANSWER='{}': expected y or n",
                ENV_PREFIX,
                answer
            ),
        }
    }

    config
}

/// Parse a yes/no answer as accepted by flags and the environment
pub fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "target",
        "url",
        "ssh",
        "path",
        "wp_bin",
        "runner",
        "default_answer",
        "timeout_secs",
        "output",
        "color",
        "unicode",
        "commands",
        "features",
        "tasks",
        "name",
        "phases",
        "confirm",
        "default",
        "steps",
        "command",
        "args",
        "requires",
        "success",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
