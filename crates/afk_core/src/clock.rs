//! Injectable time source
//!
//! All "now" reads in the engine go through [`Clock`] so tests can pin
//! elapsed-time expectations exactly. Session start stamping and elapsed
//! computation use the same clock, which keeps the recorded zone and the
//! "now" zone in agreement.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Capability trait for reading the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock rendered in the one process-wide configured UTC offset.
#[derive(Debug, Clone)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}
