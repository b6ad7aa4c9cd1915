//! Command catalog
//!
//! Maps logical command names to WP-CLI argument vectors, and optional
//! features to the PHP function whose existence signals them.

use std::collections::BTreeMap;

use crate::domain::ports::command_executor::names;
use crate::domain::ports::{CommandArgs, CommandError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandCatalog {
    commands: BTreeMap<String, Vec<String>>,
    features: BTreeMap<String, String>,
}

impl CommandCatalog {
    /// Catalog with nothing defined
    pub fn empty() -> Self {
        Self::default()
    }

    /// The commands used by the built-in task set
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.define(names::ACTIVATE_ALL_PLUGINS, ["plugin", "activate", "--all"]);
        catalog.define(names::UPDATE_DATABASE_SCHEMA, ["core", "update-db"]);
        catalog.define(names::DELETE_ALL_TRANSIENTS, ["transient", "delete", "--all"]);
        catalog.define(names::CLEAR_PAGE_CACHE, ["eval", "wp_cache_clear_cache();"]);
        catalog.define(names::FLUSH_REWRITE_RULES, ["rewrite", "flush"]);
        catalog.define_feature(names::FEATURE_PAGE_CACHE, "wp_cache_clear_cache");
        catalog
    }

    /// Add or replace a command
    pub fn define<I, S>(&mut self, name: impl Into<String>, argv: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands
            .insert(name.into(), argv.into_iter().map(Into::into).collect());
    }

    /// Add or replace a feature, detected by `function_exists(function)`
    pub fn define_feature(&mut self, name: impl Into<String>, function: impl Into<String>) {
        self.features.insert(name.into(), function.into());
    }

    pub fn contains(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Full WP-CLI argument vector for a command invocation
    pub fn resolve(&self, command: &str, args: &CommandArgs) -> Result<Vec<String>, CommandError> {
        let base = self
            .commands
            .get(command)
            .ok_or_else(|| CommandError::Unrecognized(command.to_string()))?;
        let mut argv = base.clone();
        argv.extend(render_args(args));
        Ok(argv)
    }

    /// Argument vector that prints `yes` when the feature is available
    pub fn probe(&self, feature: &str) -> Option<Vec<String>> {
        let function = self.features.get(feature)?;
        Some(vec![
            "eval".to_string(),
            format!(
                "echo function_exists('{}') ? 'yes' : 'no';",
                function.replace('\'', "")
            ),
        ])
    }
}

/// Render named arguments as `--key=value`, or `--key` for an empty value
pub fn render_args(args: &CommandArgs) -> Vec<String> {
    args.iter()
        .map(|(key, value)| {
            if value.is_empty() {
                format!("--{}", key)
            } else {
                format!("--{}={}", key, value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_knows_required_commands() {
        let catalog = CommandCatalog::builtin();
        for name in [
            names::ACTIVATE_ALL_PLUGINS,
            names::UPDATE_DATABASE_SCHEMA,
            names::DELETE_ALL_TRANSIENTS,
            names::CLEAR_PAGE_CACHE,
            names::FLUSH_REWRITE_RULES,
        ] {
            assert!(catalog.contains(name), "missing {name}");
        }
        assert!(catalog.has_feature(names::FEATURE_PAGE_CACHE));
    }

    #[test]
    fn resolve_appends_rendered_args() {
        let catalog = CommandCatalog::builtin();
        let mut args = CommandArgs::new();
        args.insert("skip-plugins".to_string(), String::new());
        args.insert("network".to_string(), "1".to_string());

        let argv = catalog.resolve(names::FLUSH_REWRITE_RULES, &args).unwrap();
        assert_eq!(argv, ["rewrite", "flush", "--network=1", "--skip-plugins"]);
    }

    #[test]
    fn resolve_unknown_command_is_unrecognized() {
        let err = CommandCatalog::builtin()
            .resolve("rollback-db", &CommandArgs::new())
            .unwrap_err();
        assert_eq!(err, CommandError::Unrecognized("rollback-db".to_string()));
    }

    #[test]
    fn define_overrides_builtin() {
        let mut catalog = CommandCatalog::builtin();
        catalog.define(names::FLUSH_REWRITE_RULES, ["rewrite", "flush", "--hard"]);
        let argv = catalog
            .resolve(names::FLUSH_REWRITE_RULES, &CommandArgs::new())
            .unwrap();
        assert_eq!(argv, ["rewrite", "flush", "--hard"]);
    }

    #[test]
    fn probe_checks_function_exists() {
        let catalog = CommandCatalog::builtin();
        let probe = catalog.probe(names::FEATURE_PAGE_CACHE).unwrap();
        assert_eq!(
            probe,
            [
                "eval",
                "echo function_exists('wp_cache_clear_cache') ? 'yes' : 'no';"
            ]
        );
        assert!(catalog.probe("object-cache").is_none());
    }
}
