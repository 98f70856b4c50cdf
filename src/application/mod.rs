//! Application layer: orchestration of the pure domain against the
//! injected sinks and stores.

pub mod use_cases;

pub use use_cases::*;
