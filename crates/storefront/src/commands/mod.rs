//! CLI commands.

pub mod build;
pub mod classify;
pub mod hours;
pub mod init;
pub mod serve;
