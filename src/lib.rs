//! Blueprint is a project-scaffolding system: given a template, it collects
//! variable values, renders the template's files into a new project
//! directory, and optionally runs post-generation setup commands.

/// Command-line interface module for the Blueprint application
pub mod cli;

/// Manifest parsing and validation for templates
/// (template.yaml: name, variables, hooks)
pub mod config;

/// Error types and handling for the Blueprint application
pub mod error;

/// Post-generation hook execution in the output directory
pub mod hooks;

/// Template loading, structure validation, and content file discovery
pub mod loader;

/// Logger configuration
pub mod logger;

/// Terminal output formatting and file-tree rendering
pub mod output;

/// File materialization: directory creation, path rendering, content
/// rendering or byte-for-byte copying, with dry-run support
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering with the case-conversion helpers
pub mod renderer;

/// Static variable extraction and cross-referencing for template authors
pub mod variables;
