//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`dump`] - Write one airport's network as CSV
//! - [`runway`] - Select a touch-down runway for an approach
//! - [`scan`] - List airports around a position
//! - [`snap`] - Snap a position onto the taxi network

pub mod common;
pub mod config;
pub mod dump;
pub mod runway;
pub mod scan;
pub mod snap;
