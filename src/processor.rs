//! File materialization for Blueprint.
//!
//! Walks a loaded template's file list in traversal order, renders each
//! destination path segment-by-segment, and renders or copies content into
//! the output directory. Dry-run mode computes the identical plan without
//! touching the destination filesystem.

use crate::error::Result;
use crate::loader::LoadedTemplate;
use crate::renderer::{TemplateContext, TemplateEngine, TEMPLATE_SUFFIX};
use log::debug;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as binary payloads and always copied byte-for-byte.
const BINARY_EXTENSIONS: [&str; 17] = [
    "png", "jpg", "jpeg", "gif", "ico", "bmp", "webp", "svg", "woff", "woff2", "ttf",
    "eot", "otf", "zip", "tar", "gz", "pdf",
];

/// Record of what a scaffold invocation produced (or, in dry-run, would
/// produce).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldResult {
    pub output_dir: PathBuf,
    /// Rendered destination paths relative to `output_dir`, in the order the
    /// loader's walk returned the source files.
    pub files_created: Vec<String>,
    pub directories_created: BTreeSet<PathBuf>,
}

/// Returns true when the file's extension is on the binary allow-list.
///
/// The template suffix is stripped before the extension check, so a file
/// both suffix-marked and binary-extension-listed still classifies as
/// binary: classification takes precedence over the template marker and a
/// mistakenly marked payload is never corrupted by rendering.
pub fn is_binary_file(path: &Path) -> bool {
    let name = path.file_name().and_then(OsStr::to_str).unwrap_or_default();
    let name = name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name);
    Path::new(name)
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn render_destination_path(
    relative_path: &Path,
    context: &TemplateContext,
    engine: &TemplateEngine,
) -> Result<String> {
    let mut segments = Vec::new();
    for component in relative_path.components() {
        let segment = component.as_os_str().to_string_lossy();
        segments.push(engine.render_filename(&segment, context)?);
    }
    Ok(segments.join("/"))
}

/// Materializes a loaded template into `output_dir`.
///
/// For each content file, in loader walk order: the destination relative
/// path is rendered one path segment at a time, the parent directory is
/// created (tracked in a set to avoid redundant creation calls), and the
/// content is either copied verbatim (binary or unmarked files) or rendered
/// against the context (suffix-marked files, read lazily per file).
///
/// With `dry_run` set, no directory is created and no file is written, but
/// the returned plan is identical to a real run. On a filesystem error the
/// remaining loop aborts; already-written files are not rolled back.
pub fn scaffold(
    template: &LoadedTemplate,
    context: &TemplateContext,
    engine: &TemplateEngine,
    output_dir: &Path,
    dry_run: bool,
) -> Result<ScaffoldResult> {
    let mut files_created = Vec::new();
    let mut directories_created = BTreeSet::new();

    if !dry_run {
        fs::create_dir_all(output_dir)?;
    }
    directories_created.insert(output_dir.to_path_buf());

    for file in &template.files {
        let rendered_rel = render_destination_path(&file.relative_path, context, engine)?;
        let dest_path = output_dir.join(&rendered_rel);

        if let Some(dest_dir) = dest_path.parent() {
            if directories_created.insert(dest_dir.to_path_buf()) && !dry_run {
                fs::create_dir_all(dest_dir)?;
            }
        }

        if is_binary_file(&file.absolute_path) {
            debug!("Copying binary file: {}", rendered_rel);
            if !dry_run {
                fs::copy(&file.absolute_path, &dest_path)?;
            }
        } else if file.is_template {
            debug!("Rendering template file: {}", rendered_rel);
            let content = fs::read_to_string(&file.absolute_path)?;
            let rendered = engine.render(&content, context)?;
            if !dry_run {
                fs::write(&dest_path, rendered)?;
            }
        } else {
            debug!("Copying file: {}", rendered_rel);
            if !dry_run {
                fs::copy(&file.absolute_path, &dest_path)?;
            }
        }

        files_created.push(rendered_rel);
    }

    Ok(ScaffoldResult { output_dir: output_dir.to_path_buf(), files_created, directories_created })
}
