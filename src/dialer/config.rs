use std::io;
use std::time::Duration;

pub(crate) const DEFAULT_DIAL_LIMIT: usize = 8;
pub(crate) const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct DialQueueConfig {
    /// Max concurrent dial attempts.
    pub limit: usize,
    /// Duration after which an in-flight dial is abandoned.
    pub dial_timeout: Duration,
}

impl Default for DialQueueConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DIAL_LIMIT,
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
        }
    }
}

impl DialQueueConfig {
    pub fn set_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
    pub fn set_dial_timeout(mut self, dial_timeout: Duration) -> Self {
        self.dial_timeout = dial_timeout;
        self
    }
    pub fn check(&self) -> io::Result<()> {
        if self.limit == 0 {
            return Err(io::Error::other("dial limit cannot be 0"));
        }
        if self.dial_timeout.is_zero() {
            return Err(io::Error::other("dial timeout cannot be 0"));
        }
        Ok(())
    }
}
