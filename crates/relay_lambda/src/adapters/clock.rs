use chrono::{DateTime, Utc};

/// Injected clock so handler timestamps are deterministic under test.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock time as seen by the hosting runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
