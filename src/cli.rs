//! Command-line interface implementation for Blueprint.
//! Provides argument parsing with clap and the `new`, `list`, and `validate`
//! command flows.

use crate::config::{Hook, VariableValue};
use crate::error::{Error, Result};
use crate::hooks::{run_hooks, HookCallbacks, HookResult};
use crate::loader::{list_templates, load_template, resolve_source, TemplateSource};
use crate::prompt;
use crate::processor::scaffold;
use crate::renderer::{TemplateContext, TemplateEngine};
use crate::output;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the built-in templates directory.
pub const TEMPLATES_DIR_ENV: &str = "BLUEPRINT_TEMPLATES_DIR";

/// Command-line arguments structure for Blueprint.
#[derive(Parser, Debug)]
#[command(author, version, about = "Blueprint: fast and flexible project scaffolding tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project from a template
    New(NewArgs),
    /// List available built-in templates
    List,
    /// Validate a template directory
    Validate {
        /// Path to the template root
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of a built-in template
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Custom template path or git repository URL
    #[arg(long, value_name = "SOURCE")]
    pub from: Option<String>,

    /// Preview the file plan without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip post-scaffold hooks
    #[arg(long)]
    pub no_hooks: bool,

    /// Output directory (defaults to ./<project name>)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Dispatches the parsed command line to its command flow.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New(args) => run_new(args),
        Commands::List => run_list(),
        Commands::Validate { path } => run_validate(&path),
    }
}

fn default_templates_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(TEMPLATES_DIR_ENV) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join("templates")
}

fn project_name_from(context: &TemplateContext) -> Option<String> {
    for key in ["projectName", "name"] {
        if let Some(VariableValue::String(value)) = context.get(key) {
            return Some(value.clone());
        }
    }
    None
}

fn run_new(args: NewArgs) -> Result<()> {
    let engine = TemplateEngine::new();

    // For git sources the checkout must stay alive until scaffolding is done.
    let (template_dir, _checkout) = match &args.from {
        Some(from) => {
            let source = TemplateSource::from_string(from);
            println!("{}", output::info_message(&format!("Using template from the {source}")));
            let resolved = resolve_source(&source)?;
            (resolved.path.clone(), Some(resolved))
        }
        None => {
            let templates_dir = default_templates_dir();
            let template_name = match args.template.clone() {
                Some(name) => name,
                None => {
                    let manifests = list_templates(&templates_dir)?;
                    if manifests.is_empty() {
                        return Err(Error::Template(
                            "no built-in templates found".to_string(),
                        ));
                    }
                    prompt::prompt_for_template(&manifests)?
                }
            };
            (templates_dir.join(template_name), None)
        }
    };

    let template = load_template(&template_dir)?;
    println!(
        "\n{}",
        output::success_message(&format!(
            "Template: {} ({})",
            template.manifest.name.bold(),
            template.manifest.description
        ))
    );

    let mut flags = HashMap::new();
    if let Some(name) = &args.name {
        flags.insert("projectName".to_string(), name.clone());
        flags.insert("name".to_string(), name.clone());
    }

    let has_all_required = template
        .manifest
        .variables
        .iter()
        .filter(|v| v.required)
        .all(|v| flags.contains_key(&v.name) || v.default.is_some());

    let context = if has_all_required && args.name.is_some() {
        prompt::context_from_flags(&flags, &template.manifest.variables)
    } else {
        prompt::prompt_for_variables(&template.manifest.variables)?
    };

    let project_name = project_name_from(&context)
        .or_else(|| args.name.clone())
        .unwrap_or_else(|| "project".to_string());
    let output_dir = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir()?.join(&project_name),
    };

    if args.dry_run {
        println!("{}", output::dry_run_banner());
    }

    let result = scaffold(&template, &context, &engine, &output_dir, args.dry_run)?;
    println!("{}", output::success_message("Project structure created"));
    println!("\n{}", output::format_file_tree(&result.files_created, &project_name));

    if args.dry_run {
        println!("\n{}", "  No files were created (dry-run mode)".yellow());
        return Ok(());
    }

    if !args.no_hooks && !template.manifest.post_hooks.is_empty() {
        println!("\n{}\n", "  Running post-scaffold hooks...".dimmed());

        let mut on_start = |hook: &Hook| {
            println!("{}", format!("  ⏳ {}...", hook.description).dimmed());
        };
        let mut on_complete = |hook_result: &HookResult| {
            let secs = hook_result.duration.as_secs_f64();
            if hook_result.success {
                let line = format!("{} ({:.1}s)", hook_result.description, secs);
                println!("{}", output::success_message(&line));
            } else {
                let line = format!(
                    "{}: {}",
                    hook_result.description,
                    hook_result.error.as_deref().unwrap_or("unknown error")
                );
                println!("{}", output::error_message(&line));
            }
        };

        // Hook failures are reported per-hook and never change the exit code.
        run_hooks(
            &template.manifest.post_hooks,
            &output_dir,
            HookCallbacks { on_start: Some(&mut on_start), on_complete: Some(&mut on_complete) },
        );
    }

    println!("{}", output::done_message(&project_name, &output_dir.display().to_string()));
    Ok(())
}

fn run_list() -> Result<()> {
    let manifests = list_templates(default_templates_dir())?;

    if manifests.is_empty() {
        println!("{}", "  No built-in templates found".yellow());
        return Ok(());
    }

    println!("\n{}\n", "  Available templates:".bold());
    for manifest in manifests {
        println!(
            "  {} {}",
            format!("{:<12}", manifest.name).cyan().bold(),
            manifest.description
        );
        if !manifest.variables.is_empty() {
            let names: Vec<&str> = manifest.variables.iter().map(|v| v.name.as_str()).collect();
            println!("{}", format!("{:<14}Variables: {}", "", names.join(", ")).dimmed());
        }
        println!();
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let template = load_template(path)?;

    let mut bodies = Vec::new();
    for file in &template.files {
        if file.is_template {
            bodies.push(fs::read_to_string(&file.absolute_path)?);
        }
    }
    let report = crate::variables::cross_reference(&template.manifest.variables, &bodies);

    println!(
        "{}",
        output::success_message(&format!("Template '{}' is valid", template.manifest.name))
    );
    println!(
        "{}",
        format!(
            "  {} variables, {} hooks",
            template.manifest.variables.len(),
            template.manifest.post_hooks.len()
        )
        .dimmed()
    );

    for name in &report.undefined {
        println!(
            "{}",
            output::error_message(&format!("'{name}' is referenced but never declared"))
        );
    }
    for name in &report.unused {
        println!(
            "{}",
            output::info_message(&format!("'{name}' is declared but never referenced"))
        );
    }

    Ok(())
}
