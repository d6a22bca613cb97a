use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Pixels processed between two polls of a cancel token inside one row.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Fires once a newer generation has been requested or shutdown is flagged.
#[derive(Debug)]
pub struct GenerationToken<'a> {
    latest_generation: &'a AtomicU64,
    shutdown: &'a AtomicBool,
    generation: u64,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(
        latest_generation: &'a AtomicU64,
        shutdown: &'a AtomicBool,
        generation: u64,
    ) -> Self {
        Self {
            latest_generation,
            shutdown,
            generation,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.latest_generation.load(Ordering::Relaxed) != self.generation
    }
}
