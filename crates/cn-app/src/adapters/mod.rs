//! Small production adapters for core ports.

pub mod clock;

pub use clock::SystemClock;
