//! Windows installer payload staging for MSYS2/MinGW builds.
//!
//! # Module Organization
//!
//! - `dlls` - DLL closure of the application and loader plugins
//! - `gschemas` - schema staging and `glib-compile-schemas`
//! - `locale` - application and toolchain translation catalogs
//! - `inno` - Inno Setup compilation through the toolchain shell

pub mod dlls;
pub mod gschemas;
pub mod inno;
pub mod locale;
