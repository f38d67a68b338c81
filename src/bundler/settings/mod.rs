//! Configuration structures for a bundler run.
//!
//! [`Settings`] carries the invocation inputs, [`BundleLayout`] the
//! TOML-configurable toolchain layout, and [`SettingsBuilder`] assembles and
//! validates both.

mod builder;
mod core;
mod layout;
mod package;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use layout::{BundleLayout, ToolSettings};
pub use package::PackageSettings;
