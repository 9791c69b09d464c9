use chrono::{DateTime, Utc};

/// Wall clock abstraction so use cases can be tested with a fixed time.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
