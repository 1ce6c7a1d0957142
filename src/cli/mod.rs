//! Command-line interface handlers.
//!
//! Each handler takes its resolved configuration and returns the desired
//! process exit code; `main` owns argument parsing and the final exit.

mod compare;
mod generate;
mod versions;

pub use compare::{run_compare, CompareFormat};
pub use generate::run_generate;
pub use versions::run_versions;
