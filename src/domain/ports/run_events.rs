//! Run Event Port
//!
//! Provides an observable interface for task runs.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::{FailureReason, Phase, SkipReason, TargetHost};

/// Event emitted during a run
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Run started
    Started {
        phase: Phase,
        host: TargetHost,
        task_count: usize,
    },

    /// A task is about to run its action
    TaskStarted { index: usize, name: String },

    /// A task was skipped (declined or cancelled)
    TaskSkipped {
        index: usize,
        name: String,
        reason: SkipReason,
    },

    /// A task finished successfully
    TaskSucceeded {
        index: usize,
        name: String,
        duration_ms: u64,
    },

    /// A task failed
    TaskFailed {
        index: usize,
        name: String,
        reason: FailureReason,
    },

    /// A command issued by a task completed
    CommandCompleted {
        task: String,
        command: String,
        output: String,
    },

    /// Free-form message from a task action
    Notice { task: String, message: String },

    /// Run completed
    Completed {
        succeeded: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving run events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait RunEventSink: Send + Sync {
    /// Handle a run event
    fn on_event(&self, event: RunEvent);

    /// Check if this sink wants command output events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingEventSink {
        events: Arc<Mutex<Vec<RunEvent>>>,
    }

    impl RunEventSink for RecordingEventSink {
        fn on_event(&self, event: RunEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(RunEvent::Started {
            phase: Phase::Deploy,
            host: TargetHost::new("example.com"),
            task_count: 3,
        });
        sink.on_event(RunEvent::TaskStarted {
            index: 0,
            name: "activate-plugins".to_string(),
        });

        assert_eq!(events.lock().unwrap().len(), 2);
        assert!(sink.wants_detailed_events());
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }
}
