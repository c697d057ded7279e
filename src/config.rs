//! Manifest parsing and validation for Blueprint templates.
//!
//! A template manifest is a hand-authored YAML document (`template.yaml`)
//! declaring the template's identity, its variables, and optional
//! post-generation hooks. Validation is all-or-nothing: no partial manifest
//! is ever returned on failure.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Manifest file name expected directly under a template root.
pub const MANIFEST_FILE: &str = "template.yaml";

/// The three recognized variable kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    String,
    Boolean,
    Multiselect,
}

impl VariableType {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "string" => Some(VariableType::String),
            "boolean" => Some(VariableType::Boolean),
            "multiselect" => Some(VariableType::Multiselect),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Boolean => "boolean",
            VariableType::Multiselect => "multiselect",
        }
    }
}

/// A resolved variable value: text, flag, or list of text.
///
/// This is the only value shape that flows into rendering; every consumer
/// pattern-matches the three tags explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    String(String),
    Boolean(bool),
    List(Vec<String>),
}

/// A single variable declaration from the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub description: String,
    pub kind: VariableType,
    pub required: bool,
    pub default: Option<VariableValue>,
    /// Regex pattern applied to string answers; compiled at parse time.
    pub validate: Option<String>,
    /// Choice list; required and non-empty iff `kind` is multiselect.
    pub options: Vec<String>,
}

/// A post-generation hook: an opaque shell command plus a human label.
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    pub command: String,
    pub description: String,
}

/// A validated template manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub variables: Vec<Variable>,
    /// Hooks run after materialization, in list order.
    pub post_hooks: Vec<Hook>,
}

fn require_string(doc: &Value, field: &str) -> Result<String> {
    doc.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::MissingField(format!("'{field}' must be a non-empty string"))
        })
}

fn validate_variable(entry: &Value, index: usize) -> Result<Variable> {
    let mapping = entry.as_mapping().ok_or_else(|| {
        Error::InvalidVariable(format!("variable at index {index} must be a mapping"))
    })?;

    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::InvalidVariable(format!(
                "variable at index {index} must have a non-empty 'name' string"
            ))
        })?
        .to_string();

    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::InvalidVariable(format!(
                "variable '{name}' must have a non-empty 'description' string"
            ))
        })?
        .to_string();

    let kind = entry
        .get("type")
        .and_then(Value::as_str)
        .and_then(VariableType::from_str)
        .ok_or_else(|| {
            Error::InvalidVariable(format!(
                "variable '{name}' has an invalid type, expected one of: string, boolean, multiselect"
            ))
        })?;

    let options = match entry.get("options") {
        Some(value) => value
            .as_sequence()
            .ok_or_else(|| {
                Error::InvalidVariable(format!(
                    "variable '{name}' has an 'options' field that is not a sequence"
                ))
            })?
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    Error::InvalidVariable(format!(
                        "variable '{name}' has an 'options' entry that is not a string"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    if kind == VariableType::Multiselect && options.is_empty() {
        return Err(Error::InvalidVariable(format!(
            "variable '{name}' of type 'multiselect' must have a non-empty 'options' sequence"
        )));
    }

    let validate = match entry.get("validate") {
        Some(value) => {
            let pattern = value.as_str().ok_or_else(|| {
                Error::InvalidVariable(format!(
                    "variable '{name}' has a 'validate' field that is not a string"
                ))
            })?;
            Regex::new(pattern).map_err(|e| {
                Error::InvalidVariable(format!(
                    "variable '{name}' has an invalid regex pattern: {e}"
                ))
            })?;
            Some(pattern.to_string())
        }
        None => None,
    };

    let default = match entry.get("default") {
        Some(value) => Some(serde_yaml::from_value::<VariableValue>(value.clone()).map_err(|_| {
            Error::InvalidVariable(format!(
                "variable '{name}' has a 'default' that is not a string, boolean, or list of strings"
            ))
        })?),
        None => None,
    };

    let required = entry.get("required").and_then(Value::as_bool).unwrap_or(false);

    debug!("Validated variable '{}' ({} fields)", name, mapping.len());

    Ok(Variable { name, description, kind, required, default, validate, options })
}

fn validate_hook(entry: &Value, index: usize) -> Result<Hook> {
    if entry.as_mapping().is_none() {
        return Err(Error::InvalidHook(format!("hook at index {index} must be a mapping")));
    }

    let command = entry
        .get("command")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::InvalidHook(format!(
                "hook at index {index} must have a non-empty 'command' string"
            ))
        })?
        .to_string();

    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::InvalidHook(format!(
                "hook at index {index} must have a non-empty 'description' string"
            ))
        })?
        .to_string();

    Ok(Hook { command, description })
}

/// Parses and validates a manifest document.
///
/// Checks are applied in a fixed order, each producing a distinct message:
/// document shape, `name`/`description`/`version`, the `variables` sequence,
/// every variable declaration, then `hooks.post` if present.
///
/// # Errors
/// * [`Error::InvalidManifest`] if the document is not a YAML mapping
/// * [`Error::MissingField`] for a missing or empty top-level field
/// * [`Error::InvalidVariable`] / [`Error::InvalidHook`] for entry-level failures
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let doc: Value = serde_yaml::from_str(content)
        .map_err(|e| Error::InvalidManifest(e.to_string()))?;

    if doc.as_mapping().is_none() {
        return Err(Error::InvalidManifest("manifest must be a YAML mapping".to_string()));
    }

    let name = require_string(&doc, "name")?;
    let description = require_string(&doc, "description")?;
    let version = require_string(&doc, "version")?;

    let raw_variables = doc
        .get("variables")
        .and_then(Value::as_sequence)
        .ok_or_else(|| Error::MissingField("'variables' must be a sequence".to_string()))?;

    let variables = raw_variables
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_variable(entry, index))
        .collect::<Result<Vec<_>>>()?;

    let post_hooks = match doc.get("hooks").and_then(|hooks| hooks.get("post")) {
        Some(post) => post
            .as_sequence()
            .ok_or_else(|| Error::InvalidHook("'hooks.post' must be a sequence".to_string()))?
            .iter()
            .enumerate()
            .map(|(index, entry)| validate_hook(entry, index))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Manifest { name, description, version, variables, post_hooks })
}
