use std::sync::atomic::{AtomicU64, Ordering};

/// Counts book selections for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InteractionCounter {
    count: AtomicU64,
}

impl InteractionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn read(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
