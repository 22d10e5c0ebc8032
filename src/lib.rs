pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod output;
pub mod scanner;
pub mod syntax;

pub use error::{Result, ShapeGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RULES_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
