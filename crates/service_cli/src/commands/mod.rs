//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod demo;
pub mod sample;
pub mod string;
