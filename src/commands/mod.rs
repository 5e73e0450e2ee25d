//! Command implementations

pub mod benchmark;
pub mod find;
pub mod simple;

pub use benchmark::{BenchmarkResult, deal_racks, run_benchmark};
pub use find::{FindConfig, FindError, FindResult, run_find};
pub use simple::{SessionCommand, SimpleSession, parse_command, run_simple};
