//! Command execution functions.
//!
//! One module per subcommand; each returns the process exit code.

pub mod cargo_build;
pub mod installer;
pub mod post_install;
