//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`decode`] - Geohash to coordinate
//! - [`encode`] - Coordinate to geohash

pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
