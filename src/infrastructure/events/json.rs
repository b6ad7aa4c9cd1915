//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::entities::RunReport;
use crate::domain::ports::{RunEvent, RunEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Emit the finalized report as the last line of the stream
    pub fn report(&self, report: &RunReport) {
        let status = if report.is_success() {
            "success"
        } else {
            "failed"
        };
        let json = match serde_json::to_value(report) {
            Ok(value) => serde_json::json!({
                "event": "report",
                "status": status,
                "report": value,
            }),
            Err(e) => serde_json::json!({
                "event": "report",
                "status": status,
                "error": e.to_string(),
            }),
        };
        self.write_event(json);
    }

    /// Emit a startup error (nothing ran)
    pub fn error(&self, message: &str, exit_code: i32) {
        self.write_event(serde_json::json!({
            "event": "error",
            "message": message,
            "exit_code": exit_code,
        }));
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::Started {
                phase,
                host,
                task_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "phase": phase,
                    "host": host,
                    "task_count": task_count,
                })
            }

            RunEvent::TaskStarted { index, name } => {
                serde_json::json!({
                    "event": "task_start",
                    "index": index,
                    "task": name,
                })
            }

            RunEvent::TaskSkipped {
                index,
                name,
                reason,
            } => {
                serde_json::json!({
                    "event": "task_skipped",
                    "index": index,
                    "task": name,
                    "reason": reason,
                })
            }

            RunEvent::TaskSucceeded {
                index,
                name,
                duration_ms,
            } => {
                serde_json::json!({
                    "event": "task_succeeded",
                    "index": index,
                    "task": name,
                    "duration_ms": duration_ms,
                })
            }

            RunEvent::TaskFailed {
                index,
                name,
                reason,
            } => {
                serde_json::json!({
                    "event": "task_failed",
                    "index": index,
                    "task": name,
                    "reason": reason,
                    "message": reason.to_string(),
                })
            }

            RunEvent::CommandCompleted {
                task,
                command,
                output,
            } => {
                serde_json::json!({
                    "event": "command",
                    "task": task,
                    "command": command,
                    "output": output,
                })
            }

            RunEvent::Notice { task, message } => {
                serde_json::json!({
                    "event": "notice",
                    "task": task,
                    "message": message,
                })
            }

            RunEvent::Completed {
                succeeded,
                skipped,
                failed,
            } => {
                let status = if failed == 0 { "success" } else { "failed" };
                serde_json::json!({
                    "event": "complete",
                    "status": status,
                    "succeeded": succeeded,
                    "skipped": skipped,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
