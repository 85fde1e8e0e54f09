//! Export a compiled resume into a named folder under a configured base directory.
//!
//! The crate keeps the same split the binary relies on:
//!
//! - **[`core`]**: Pure naming rules (default folder name, answer resolution,
//!   output file name). No I/O.
//! - **[`io`]**: Side-effecting adapters (configuration file, `git`, console,
//!   filesystem). The console and branch lookup sit behind traits so the
//!   orchestration can be driven from tests.
//!
//! [`export`] wires the two together into the single linear command.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
