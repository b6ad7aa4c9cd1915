//! Console Event Sink
//!
//! Prints task progress to stdout as the runner reports it.

use deploy_tasks::domain::ports::{RunEvent, RunEventSink};
use deploy_tasks::domain::value_objects::Outcome;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::run::outcome_line;

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    /// Line for `event`, or `None` when it is not shown at this verbosity
    fn render(&self, event: &RunEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            RunEvent::TaskStarted { name, .. } if self.ui.verbose > 0 => Some(format!(
                "{} {}",
                Icon::Progress.colored(color, unicode),
                ColoredText::dim(format!("running {}", name)).render(color)
            )),
            RunEvent::CommandCompleted {
                command, output, ..
            } if self.ui.verbose > 0 => {
                let mut line = format!(
                    "    {}",
                    ColoredText::dim(format!("$ {}", command)).render(color)
                );
                for out in output.lines().filter(|l| !l.trim().is_empty()) {
                    line.push_str(&format!("\n    {}", out));
                }
                Some(line)
            }
            RunEvent::Notice { message, .. } => Some(format!(
                "  {} {}",
                Icon::Arrow.colored(color, unicode),
                message
            )),
            RunEvent::TaskSucceeded {
                name, duration_ms, ..
            } => Some(outcome_line(
                name,
                &Outcome::Succeeded,
                Some(*duration_ms),
                color,
                unicode,
            )),
            RunEvent::TaskSkipped { name, reason, .. } => Some(outcome_line(
                name,
                &Outcome::skipped(*reason),
                None,
                color,
                unicode,
            )),
            RunEvent::TaskFailed { name, reason, .. } => Some(outcome_line(
                name,
                &Outcome::failed(reason.clone()),
                None,
                color,
                unicode,
            )),
            _ => None,
        }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        if let Some(line) = self.render(&event) {
            println!("{}", line);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0
    }
}
