//! Platform-specific staging.

pub mod windows;
