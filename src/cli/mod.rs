//! Command-line interface for debate-coach.
//!
//! Provides commands for interactive debates, local argument scoring,
//! topic browsing, and practice drills.

mod commands;

pub use commands::{parse_cli, run, run_with_cli};
