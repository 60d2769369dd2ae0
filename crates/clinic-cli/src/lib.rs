//! Library components of the import CLI. The binary in `main.rs` is a thin
//! shell over these modules.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
