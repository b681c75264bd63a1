use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag coordinating "first success wins" across the concurrent dial
/// attempts of one logical peer connection.
///
/// Cloning yields a handle to the same flag. The flag transitions from
/// `false` to `true` at most once, claimed by the first successful attempt;
/// every attempt that completes afterwards observes it set.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }
    /// Whether some attempt already won.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
    /// Claim the win. Returns `true` for exactly one caller; the
    /// compare-exchange rules out two attempts both believing they won.
    pub(crate) fn claim(&self) -> bool {
        self.cancelled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
