//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod batch;
pub mod build;
pub mod check;
pub mod exposure;
pub mod validate;
