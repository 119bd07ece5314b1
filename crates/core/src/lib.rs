//! Domain model for the certification exam engine.
//!
//! Everything here is synchronous and free of I/O: categories, the built-in
//! question bank, the exam session state machine, scoring, and certificates.

pub mod bank;
pub mod model;
pub mod scoring;
pub mod time;

pub use time::Clock;
