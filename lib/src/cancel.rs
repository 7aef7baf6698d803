use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cooperative cancellation flag checked by [`ChunkReader`](crate::ChunkReader) between chunks.
///
/// Clones share the same flag, so one handle can stay with the decoding task
/// while another is kept by whoever decides to stop it. A read already in
/// progress is never interrupted.
///
/// # Examples
/// ```
/// use libapng::CancelFlag;
///
/// let flag = CancelFlag::new();
/// let handle = flag.clone();
/// assert!(handle.cancel());
/// assert!(flag.is_cancelled());
/// flag.reset();
/// assert!(!handle.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Creates a flag in the not-cancelled state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if cancellation was requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    /// Requests cancellation.
    ///
    /// Returns `true` if this call set the flag, `false` if it was already set.
    #[inline]
    pub fn cancel(&self) -> bool {
        self.inner
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Clears the flag so reading can resume.
    #[inline]
    pub fn reset(&self) {
        self.inner.store(false, Ordering::Release)
    }
}
