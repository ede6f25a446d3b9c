//! Adapters behind the domain ports.

pub mod file_log;
pub mod in_memory;
