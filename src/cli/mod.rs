//! CLI entry points

mod serve;

pub use serve::run_serve;
