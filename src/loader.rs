//! Template loading for Blueprint.
//! Handles both local filesystem and git repository template sources, plus
//! discovery of built-in templates.

use crate::config::{parse_manifest, Manifest, MANIFEST_FILE};
use crate::error::{Error, Result};
use crate::renderer::TEMPLATE_SUFFIX;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use walkdir::WalkDir;

/// Conventional name of the content subdirectory under a template root.
pub const CONTENT_DIR: &str = "files";

/// A single content file discovered under a template's `files/` directory.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    /// Path relative to the content subdirectory.
    pub relative_path: PathBuf,
    pub absolute_path: PathBuf,
    /// Whether the file name carries the template suffix.
    pub is_template: bool,
}

/// A fully loaded template: validated manifest plus the content file list.
#[derive(Debug, Clone)]
pub struct LoadedTemplate {
    pub manifest: Manifest,
    pub files: Vec<TemplateFile>,
    /// Absolute path of the content subdirectory.
    pub base_path: PathBuf,
}

/// Loads and validates a template from `template_dir`.
///
/// Checks short-circuit in order: the root must be a directory, the manifest
/// file must exist, the manifest must validate, and the `files/` subdirectory
/// must exist. The content walk records leaf files only; empty directories in
/// a template are never reproduced in scaffolded output.
///
/// # Errors
/// * [`Error::TemplateDirNotFound`] / [`Error::ManifestNotFound`] /
///   [`Error::ContentDirNotFound`] for structural failures
/// * Manifest validation errors propagate from [`parse_manifest`]
pub fn load_template<P: AsRef<Path>>(template_dir: P) -> Result<LoadedTemplate> {
    let template_dir = template_dir.as_ref();

    if !template_dir.is_dir() {
        return Err(Error::TemplateDirNotFound(template_dir.display().to_string()));
    }

    let manifest_path = template_dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Err(Error::ManifestNotFound(template_dir.display().to_string()));
    }

    let manifest = parse_manifest(&fs::read_to_string(&manifest_path)?)?;

    let content_dir = template_dir.join(CONTENT_DIR);
    if !content_dir.is_dir() {
        return Err(Error::ContentDirNotFound(template_dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&content_dir) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let absolute_path = entry.path().to_path_buf();
        let relative_path =
            absolute_path.strip_prefix(&content_dir).unwrap_or(&absolute_path).to_path_buf();
        let is_template = entry.file_name().to_string_lossy().ends_with(TEMPLATE_SUFFIX);

        debug!("Discovered content file: {}", relative_path.display());
        files.push(TemplateFile { relative_path, absolute_path, is_template });
    }

    Ok(LoadedTemplate { manifest, files, base_path: content_dir })
}

/// Lists the manifests of all templates one level below `templates_dir`.
///
/// Subdirectories whose manifest is absent or invalid are skipped, not
/// failed on; the list backs the built-in template selection menu.
pub fn list_templates<P: AsRef<Path>>(templates_dir: P) -> Result<Vec<Manifest>> {
    let mut manifests = Vec::new();

    for entry in fs::read_dir(templates_dir.as_ref())? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }

        let manifest_path = entry.path().join(MANIFEST_FILE);
        let content = match fs::read_to_string(&manifest_path) {
            Ok(content) => content,
            Err(_) => continue,
        };
        match parse_manifest(&content) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => debug!("Skipping invalid template {}: {}", entry.path().display(), e),
        }
    }

    Ok(manifests)
}

/// Represents the source location of a template.
#[derive(Debug)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a string path or URL.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "https" || url.scheme() == "git" {
                return Self::Git(s.to_string());
            }
        }

        // SSH git URL format
        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }
}

/// A template source resolved to a local directory.
///
/// For git sources the checkout lives in a temporary directory that is
/// removed when this value is dropped.
#[derive(Debug)]
pub struct ResolvedTemplate {
    pub path: PathBuf,
    _checkout: Option<tempfile::TempDir>,
}

/// Resolves a template source to a local directory, cloning git sources
/// into a temporary checkout.
///
/// # Errors
/// * [`Error::TemplateDirNotFound`] if a local path does not exist
/// * [`Error::Git`] if cloning fails
pub fn resolve_source(source: &TemplateSource) -> Result<ResolvedTemplate> {
    match source {
        TemplateSource::FileSystem(path) => {
            if !path.exists() {
                return Err(Error::TemplateDirNotFound(path.display().to_string()));
            }
            Ok(ResolvedTemplate { path: path.clone(), _checkout: None })
        }
        TemplateSource::Git(repo_url) => {
            debug!("Cloning repository '{}'", repo_url);
            let checkout = tempfile::Builder::new().prefix("blueprint-git-").tempdir()?;

            let mut callbacks = git2::RemoteCallbacks::new();
            callbacks.credentials(|_url, username_from_url, _allowed_types| {
                git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
            });

            let mut fetch_opts = git2::FetchOptions::new();
            fetch_opts.remote_callbacks(callbacks);

            let mut builder = git2::build::RepoBuilder::new();
            builder.fetch_options(fetch_opts);
            builder.clone(repo_url, checkout.path())?;

            Ok(ResolvedTemplate {
                path: checkout.path().to_path_buf(),
                _checkout: Some(checkout),
            })
        }
    }
}
