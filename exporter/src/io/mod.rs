//! I/O adapters for the export command.

pub mod artifact;
pub mod config;
pub mod git;
pub mod terminal;
