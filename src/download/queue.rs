//! Entry queue drained by the worker pool.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::feed::Entry;

/// Ordered queue of pending entries with FIFO pull semantics.
///
/// The only mutation is the atomic "pull next or report empty" operation, so
/// each entry is handed to exactly one worker. Once a worker sees `None` it
/// retires; other workers may still hold pulled entries in flight.
#[derive(Debug)]
pub struct EntryQueue {
    entries: Mutex<VecDeque<Entry>>,
}

impl EntryQueue {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(entries.into()),
        }
    }

    /// Pull the next entry, or `None` when the queue is exhausted.
    pub fn pull_next(&self) -> Option<Entry> {
        self.entries.lock().unwrap().pop_front()
    }

    /// Number of entries not yet pulled. Only used for progress logging.
    pub fn remaining(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
