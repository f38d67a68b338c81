//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! staging phases and the installer compiler.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for the installer
//! - [`orchestrator`] - Main [`Bundler`] struct
//! - [`tool_detection`] - External tool lookup

pub(crate) mod checksum;
mod orchestrator;
pub(crate) mod tool_detection;

pub use orchestrator::Bundler;
