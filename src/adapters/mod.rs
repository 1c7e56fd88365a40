//! Adapter implementations of the port traits.

pub mod clock;
pub mod demo;
pub mod seed_file;

pub use clock::SystemClock;
pub use demo::DemoSource;
pub use seed_file::SeedFileSource;
