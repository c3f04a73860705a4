//! Pieces shared by the `iconfetcher` and `resolve-alias` binaries.
//!
//! Both tools print exactly one line on success and exactly one diagnostic
//! line on failure, so the helpers here stay small: a tracing setup that
//! never touches stdout, and a line writer that flushes.

pub mod logging;
pub mod output;

pub use output::{EXIT_FAILURE, EXIT_SUCCESS, write_line};
