use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current time for execution events.
///
/// The pipeline uses [`SystemClock`]. Tests inject a [`FixedClock`] so the
/// captured instant is known up front.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: SystemTime,
}

impl FixedClock {
    pub fn new(instant: SystemTime) -> Self {
        Self { instant }
    }

    pub fn from_unix_millis(millis: u64) -> Self {
        Self::new(UNIX_EPOCH + Duration::from_millis(millis))
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> SystemTime {
        self.instant
    }
}
