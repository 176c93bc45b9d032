//! linalg-cli: file loading and command handlers behind the `linalg` binary.
//!
//! Handlers return the text to print so they can be exercised without
//! spawning the binary.
pub mod commands;
pub mod input;
pub mod util;
