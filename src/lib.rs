//! Windows installer bundler for GTK applications built with MSYS2.
//!
//! This library provides the staging pipeline behind the
//! `kodegen_bundler_inno` binary:
//! - DLL closure collection for the application and gdk-pixbuf loaders
//! - GSettings schema staging and compilation
//! - Translation catalog staging
//! - Inno Setup compilation
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
