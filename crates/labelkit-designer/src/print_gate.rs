//! Per-document busy flag for print and preview requests.
//!
//! At most one capture + dispatch sequence may be in flight for a document.
//! The gate is a shared atomic flag; holding a [`PrintPermit`] keeps it set
//! and dropping the permit clears it, whichever way the request ends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the busy flag.
#[derive(Debug, Clone, Default)]
pub struct PrintGate {
    busy: Arc<AtomicBool>,
}

impl PrintGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the gate, or returns `None` while another permit is alive.
    pub fn try_acquire(&self) -> Option<PrintPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PrintPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Proof that the holder owns the gate. Releases it on drop.
#[derive(Debug)]
pub struct PrintPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for PrintPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
