//! Command implementations

pub mod simple;

pub use simple::{run_simple, submit_guess};
