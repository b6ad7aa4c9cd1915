use std::path::Path;

use deploy_tasks::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

/// Print unknown-key warnings from the config file to stderr
pub fn print_config_warnings(source: Option<&Path>, warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() || ui.json {
        for w in warnings {
            log::warn!("unknown config key '{}' in {}", w.key, w.file.display());
        }
        return;
    }

    let title = match source {
        Some(path) => format!("Configuration warnings ({})", path.display()),
        None => "Configuration warnings".to_string(),
    };
    let lines = warning_lines(warnings);
    if ui.annotate_for_ci() {
        for line in &lines {
            println!(
                "{}",
                github_actions_annotation(AnnotationLevel::Warning, line, Some("deploy-tasks config"))
            );
        }
    }

    let mut block = WarningBlock::new(title);
    for line in lines {
        block.add_line(line);
    }
    eprint!("{}", block.render(ui.color, ui.unicode));
}

fn warning_lines(warnings: &[ConfigWarning]) -> Vec<String> {
    warnings
        .iter()
        .map(|w| {
            let location = match w.line {
                Some(line) => format!("line {}", line),
                None => w.file.display().to_string(),
            };
            match &w.suggestion {
                Some(suggestion) => format!(
                    "Unknown key '{}' ({}). Did you mean '{}'?",
                    w.key, location, suggestion
                ),
                None => format!("Unknown key '{}' ({})", w.key, location),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_line_includes_suggestion() {
        let lines = warning_lines(&[ConfigWarning {
            key: "wp_bim".to_string(),
            file: PathBuf::from("deploy-tasks.toml"),
            line: Some(3),
            suggestion: Some("wp_bin".to_string()),
        }]);
        assert_eq!(
            lines,
            vec!["Unknown key 'wp_bim' (line 3). Did you mean 'wp_bin'?".to_string()]
        );
    }

    #[test]
    fn warning_line_without_line_number_names_file() {
        let lines = warning_lines(&[ConfigWarning {
            key: "zzz".to_string(),
            file: PathBuf::from("deploy-tasks.toml"),
            line: None,
            suggestion: None,
        }]);
        assert_eq!(lines, vec!["Unknown key 'zzz' (deploy-tasks.toml)".to_string()]);
    }
}
