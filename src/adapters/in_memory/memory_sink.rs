// In memory implementation of the ConsoleSink port.
//
// Purpose
// - Support tests that assert on the exact sequence of emitted console lines.
//
// Responsibilities
// - Record lines in arrival order behind a lock, including lines written
//   concurrently from blocking worker threads.

use std::sync::{Mutex, PoisonError};

use crate::core::ports::ConsoleSink;

#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}
