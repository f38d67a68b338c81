//! Kodegen Bundler Inno - Windows installer bundler for MSYS2 GTK applications.
//!
//! Stages DLLs, schemas and translations into the build tree and compiles the
//! Inno Setup script. Exits non-zero on the first failing step.

use kodegen_bundler_inno::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Progress is logged at info level unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
