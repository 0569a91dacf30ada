//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, init)
//! - [`extent`] - Bounding extents of polygon features
//! - [`grid`] - Grid tiling of polygon features
//! - [`sample`] - Great-circle line sampling

pub mod common;
pub mod config;
pub mod extent;
pub mod grid;
pub mod sample;
