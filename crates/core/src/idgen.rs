//! Sequential ID generation

use std::sync::atomic::{self, AtomicU64};

/// Thread-safe monotonically increasing ID generator
///
/// IDs start at 1 so that 0 never names a live object.
pub struct IdGenerator<T: Copy + TryFrom<u64>> {
    next_id: AtomicU64,
    phantom: std::marker::PhantomData<T>,
}

impl<T: Copy + TryFrom<u64>> IdGenerator<T> {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            phantom: std::marker::PhantomData,
        }
    }

    /// Generator whose first ID is `next`
    pub fn starting_at(next: u64) -> Self {
        Self {
            next_id: AtomicU64::new(next),
            phantom: std::marker::PhantomData,
        }
    }

    /// Get the next available ID
    ///
    /// IDs wrap back to 1 once the target range is exhausted, so callers
    /// keying live objects by ID must skip ones still in use.
    pub fn get_available_id(&self) -> T {
        loop {
            let id = self.next_id.fetch_add(1, atomic::Ordering::Relaxed);
            if let Ok(id) = T::try_from(id) {
                return id;
            }
            // Exhausted the target range, wrap around past zero
            self.next_id.store(1, atomic::Ordering::Relaxed);
        }
    }
}

impl<T: Copy + TryFrom<u64>> Default for IdGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}
