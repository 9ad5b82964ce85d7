use chrono::{DateTime, Utc};

/// Clock port supplying the current time
///
/// Cache expiry, the stats time window and relative ages all read the time
/// through this port so they can be driven deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
