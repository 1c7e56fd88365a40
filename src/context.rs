//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::clock::SystemClock;
use crate::adapters::demo::DemoSource;
use crate::adapters::seed_file::SeedFileSource;
use crate::ports::clock::Clock;
use crate::ports::source::TaskSource;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter combinations; tests build a context by
/// hand with whatever fakes they need.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Data source supplying the initial snapshot.
    pub source: Box<dyn TaskSource>,
}

impl ServiceContext {
    /// Creates a live context: system clock, built-in demo data.
    #[must_use]
    pub fn live() -> Self {
        let clock = SystemClock;
        let source = DemoSource::new(clock.now());
        Self { clock: Box::new(clock), source: Box::new(source) }
    }

    /// Creates a context reading its snapshot from a YAML seed file,
    /// with the system clock.
    #[must_use]
    pub fn with_seed_file(path: &Path) -> Self {
        Self { clock: Box::new(SystemClock), source: Box::new(SeedFileSource::new(path)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_context_loads_demo_snapshot() {
        let ctx = ServiceContext::live();
        let snapshot = ctx.source.load().unwrap();
        assert!(!snapshot.tasks.is_empty());
    }

    #[test]
    fn seed_file_context_reports_missing_file() {
        let ctx = ServiceContext::with_seed_file(Path::new("/nonexistent/seed.yaml"));
        assert!(ctx.source.load().is_err());
    }
}
