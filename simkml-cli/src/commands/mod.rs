//! Subcommand handlers.

pub mod config;
pub mod convert;
pub mod events;
pub mod init;
