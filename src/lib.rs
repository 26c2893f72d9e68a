#![doc = include_str!("../README.md")]

/// Badge types, outcome table and resolution.
pub mod badge;
/// badgen.net URL construction and download.
pub mod badgen;
/// Command implementations and argument types.
pub mod commands;
/// Error kinds.
pub mod error;
/// File and GitHub Actions output writers.
pub mod output;

#[cfg(test)]
mod test_support;
