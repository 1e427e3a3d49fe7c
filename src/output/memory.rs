//! In-memory sink. Clones share one buffer, so a caller can hand one clone to
//! the builder and read emitted lines back through the other.

use super::{LogRecord, Output};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    // A panic in another writer can't leave a half-pushed String behind, so the data is still usable.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Output for MemoryOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        self.guard().push(record.line.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
