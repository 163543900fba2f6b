//! Outstanding-download tracking.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

/// Set of dispatched downloads that have not yet settled.
///
/// Transfers that escape a worker's direct wait (the video pipeline spawns
/// its byte transfer as a separate task) register here before they start, so
/// the completion coordinator cannot finalize statistics while any of them is
/// still streaming.
#[derive(Debug, Default)]
pub struct InFlightSet {
    count: Mutex<usize>,
    notify: Notify,
}

impl InFlightSet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register one outstanding download. The returned guard deregisters it
    /// on drop, whether the transfer finished or failed.
    pub fn register(self: &Arc<Self>) -> InFlightGuard {
        *self.count.lock().unwrap() += 1;
        InFlightGuard {
            set: Arc::clone(self),
        }
    }

    /// Number of outstanding downloads.
    pub fn len(&self) -> usize {
        *self.count.lock().unwrap()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wait until every registered download has deregistered.
    pub async fn drained(&self) {
        loop {
            // Arm the waiter before checking the count so a deregistration
            // between the check and the await cannot be missed.
            let notified = self.notify.notified();
            if self.is_empty() {
                return;
            }
            notified.await;
        }
    }

    fn deregister(&self) {
        let mut count = self.count.lock().unwrap();
        *count -= 1;
        if *count == 0 {
            self.notify.notify_waiters();
        }
    }
}

/// Guard for one outstanding download.
#[derive(Debug)]
pub struct InFlightGuard {
    set: Arc<InFlightSet>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set.deregister();
    }
}
