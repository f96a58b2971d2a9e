use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide ordinal generator for reported extractions.
///
/// Ordinals start at 1 and are handed out by an atomic fetch-and-add, so two
/// concurrent reports never share one.
#[derive(Debug)]
pub struct RunCounter {
    next: AtomicUsize,
}

impl Default for RunCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunCounter {
    pub fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }

    /// Take the current ordinal and advance the counter.
    pub fn next(&self) -> usize {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Ordinal the next report will receive.
    pub fn peek(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }

    /// Number of ordinals handed out so far.
    pub fn completed(&self) -> usize {
        self.peek() - 1
    }
}
