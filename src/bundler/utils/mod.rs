//! Shared helpers for staging phases.

pub mod fs;
pub mod process;
