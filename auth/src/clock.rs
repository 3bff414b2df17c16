use chrono::Utc;

/// Source of the current time for token issuance and validation.
pub trait Clock: Send + Sync + 'static {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> i64;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}
