//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// The store stamps `updated_at` and judges "today" for dashboard stats
/// through this trait, so tests can substitute a fixed clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
