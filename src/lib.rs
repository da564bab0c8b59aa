//! gcode-details
//!
//! Prints every line of a G-code toolpath file next to a description of its
//! leading character.
//!
//! This library provides:
//! - Leading-character classification
//! - The read/describe/summarize runner
//! - Command-line configuration

pub mod classify;
pub mod config;
pub mod runner;

pub use classify::{Classification, DescriptionStyle, classify_line, describe_line};
pub use config::Config;
pub use runner::{RunOutcome, run};
