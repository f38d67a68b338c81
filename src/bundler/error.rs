//! Error types for staging and installer operations.
//!
//! Every fallible step in the bundler returns [`Result`]. Filesystem failures
//! carry the offending path through [`ErrorExt::fs_context`], and external tool
//! failures keep the rendered command line and exit code so the CLI can print
//! them before terminating.

use std::{
    fmt::Display,
    path::{PathBuf, StripPrefixError},
};

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while staging or compiling the installer payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Free-form error raised through [`bail!`](crate::bail).
    #[error("{0}")]
    GenericError(String),

    /// An error annotated with what the bundler was doing.
    #[error("{0}: {1}")]
    Context(String, Box<Error>),

    /// Bare IO error.
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// IO error tied to a specific path.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path being operated on
        path: PathBuf,
        /// Underlying error
        error: std::io::Error,
    },

    /// An external tool could not be spawned at all.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Spawn error
        error: std::io::Error,
    },

    /// An external tool ran and returned a non-zero status.
    #[error("command `{command}` failed, code: {}{}", display_code(.code), display_stderr(.stderr))]
    ToolFailed {
        /// Rendered command line
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// Unreadable glob match.
    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    /// Directory walk failure.
    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path outside its expected base.
    #[error("{0}")]
    StripPrefix(#[from] StripPrefixError),

    /// Invalid library pattern.
    #[error("invalid library pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Malformed layout file.
    #[error("invalid layout file: {0}")]
    Toml(#[from] toml::de::Error),
}

fn display_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "terminated by signal".to_string())
}

fn display_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

/// Attaches path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming `path`.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Attaches context to options and bundler results.
pub trait Context<T> {
    /// Wraps the error (or `None`) with a message.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Lazily built variant of [`Context::context`].
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Returns early with an [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:literal, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
