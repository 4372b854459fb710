//! Progress logging for long element streams.

use tracing::info;

/// Log interval used by the CLI and by [`ProgressIter::with_default_step`].
pub const DEFAULT_PROGRESS_STEP: u64 = 500_000;

/// Iterator adapter that passes items through unchanged and logs an
/// `info` event every `step` items.
pub struct ProgressIter<I> {
    inner: I,
    step: u64,
    processed: u64,
}

impl<I> ProgressIter<I> {
    /// A `step` of zero disables logging.
    pub fn new(inner: I, step: u64) -> Self {
        Self {
            inner,
            step,
            processed: 0,
        }
    }

    pub fn with_default_step(inner: I) -> Self {
        Self::new(inner, DEFAULT_PROGRESS_STEP)
    }

    /// Number of items yielded so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}

impl<I: Iterator> Iterator for ProgressIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.processed += 1;
        if self.step > 0 && self.processed % self.step == 0 {
            info!(processed = self.processed, "finished {} items", self.processed);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
