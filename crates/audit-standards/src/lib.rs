#![deny(unsafe_code)]

pub mod builtin;
pub mod registry;

pub use crate::builtin::ICAI_STANDARDS;
pub use crate::registry::StandardRegistry;
