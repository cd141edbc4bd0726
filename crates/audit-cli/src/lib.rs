//! Library components of the audit checklist CLI.

pub mod config;
pub mod input;
pub mod logging;
pub mod shell;
pub mod summary;
