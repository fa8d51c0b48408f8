//! Test helpers for the cube renderer crates.

pub mod sinks;

pub use sinks::SinkMock;
