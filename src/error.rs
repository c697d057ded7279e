//! Error handling for the Blueprint application.
//! Defines the custom error type and result alias used throughout the crate.

use colored::Colorize;
use std::io;
use thiserror::Error;

/// Custom error types for Blueprint operations.
///
/// Manifest validation and template loading errors are always fatal to the
/// current operation; hook failures are captured per-hook in
/// [`crate::hooks::HookResult`] and never surface through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The manifest document is not parseable or is not a mapping
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// A required top-level manifest field is missing or has the wrong shape
    #[error("invalid manifest: {0}")]
    MissingField(String),

    /// A variable declaration in the manifest fails validation
    #[error("invalid variable: {0}")]
    InvalidVariable(String),

    /// A hook declaration in the manifest fails validation
    #[error("invalid hook: {0}")]
    InvalidHook(String),

    /// The template root directory does not exist
    #[error("template directory does not exist: '{0}'")]
    TemplateDirNotFound(String),

    /// The template root has no manifest file
    #[error("missing template.yaml in '{0}'")]
    ManifestNotFound(String),

    /// The template root has no content subdirectory
    #[error("missing files/ directory in '{0}'")]
    ContentDirNotFound(String),

    /// Represents errors raised by the template engine
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Represents errors that occur while cloning a remote template
    #[error("failed to clone template repository: {0}")]
    Git(#[from] git2::Error),

    /// Represents errors during interactive prompting
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Represents other template resolution errors
    #[error("template error: {0}")]
    Template(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints one clearly marked error line to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("  {} {}", "✖".red(), err);
    std::process::exit(1);
}
