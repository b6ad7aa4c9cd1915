//! Line-based prompter
//!
//! Writes the question and reads a single line. Used when stdin is not a
//! terminal (piped answers, tests).

use std::io::{self, BufRead, BufReader, Stdin, Stderr, Write};
use std::sync::Mutex;

use crate::domain::ports::prompter::{is_affirmative, Prompter};
use crate::error::TasksResult;

/// Prompter reading answers line by line.
///
/// There are no retries: EOF, read errors and anything but `y` mean "no".
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl<R, W> LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Consume the prompter and hand back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        match self.io.into_inner() {
            Ok(io) => io,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LinePrompter<BufReader<Stdin>, Stderr> {
    /// Read from stdin, ask on stderr (stdout may carry JSON events)
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, question: &str, _default: Option<bool>) -> TasksResult<bool> {
        let mut guard = match self.io.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let (reader, writer) = &mut *guard;

        let _ = write!(writer, "{} [y/n] ", question);
        let _ = writer.flush();

        let mut input = String::new();
        match reader.read_line(&mut input) {
            Ok(0) => {
                log::debug!("input closed while asking '{}', answering no", question);
                let _ = writeln!(writer);
                Ok(false)
            }
            Ok(_) => Ok(is_affirmative(&input)),
            Err(e) => {
                log::debug!("failed to read answer: {}", e);
                Ok(false)
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
