//! Dry-run executor
//!
//! Resolves every command against the catalog and logs the WP-CLI line that
//! would run, without touching the target.

use std::sync::Mutex;

use super::catalog::CommandCatalog;
use crate::domain::ports::{CommandArgs, CommandError, CommandExecutor, CommandOutput};

pub struct DryRunExecutor {
    catalog: CommandCatalog,
    issued: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new(catalog: CommandCatalog) -> Self {
        Self {
            catalog,
            issued: Mutex::new(Vec::new()),
        }
    }

    /// WP-CLI lines that would have been run, in order
    pub fn issued(&self) -> Vec<String> {
        match self.issued.lock() {
            Ok(issued) => issued.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, command: &str, args: &CommandArgs) -> Result<CommandOutput, CommandError> {
        let line = format!("wp {}", self.catalog.resolve(command, args)?.join(" "));
        log::info!("[dry-run] {}", line);
        if let Ok(mut issued) = self.issued.lock() {
            issued.push(line.clone());
        }
        Ok(CommandOutput::new(format!("(dry run) {}", line)))
    }

    fn supports(&self, feature: &str) -> bool {
        self.catalog.has_feature(feature)
    }

    fn display_name(&self) -> String {
        "dry run".to_string()
    }
}
