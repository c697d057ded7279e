//! User input and interaction handling.
//! Collects variable values interactively via dialoguer, honoring each
//! declaration's `required`, `default`, `validate`, and `options` fields.

use crate::config::{Manifest, Variable, VariableType, VariableValue};
use crate::error::{Error, Result};
use crate::renderer::TemplateContext;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use regex::Regex;
use std::collections::HashMap;

fn prompt_string(variable: &Variable) -> Result<VariableValue> {
    let mut input = Input::<String>::new().with_prompt(variable.description.clone());

    if let Some(VariableValue::String(default)) = &variable.default {
        input = input.default(default.clone());
    }

    let required = variable.required;
    let name = variable.name.clone();
    let pattern = variable.validate.clone();
    input = input.validate_with(move |value: &String| -> std::result::Result<(), String> {
        if required && value.trim().is_empty() {
            return Err(format!("{name} is required"));
        }
        if let Some(pattern) = &pattern {
            // Compiled successfully at manifest parse time.
            let regex = Regex::new(pattern).map_err(|e| e.to_string())?;
            if !regex.is_match(value) {
                return Err(format!("must match pattern: {pattern}"));
            }
        }
        Ok(())
    });

    let value = input.interact_text().map_err(|e| Error::Prompt(e.to_string()))?;
    Ok(VariableValue::String(value))
}

fn prompt_boolean(variable: &Variable) -> Result<VariableValue> {
    let default = matches!(variable.default, Some(VariableValue::Boolean(true)));
    let value = Confirm::new()
        .with_prompt(variable.description.clone())
        .default(default)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;
    Ok(VariableValue::Boolean(value))
}

fn prompt_multiselect(variable: &Variable) -> Result<VariableValue> {
    let defaults: Vec<bool> = match &variable.default {
        Some(VariableValue::List(selected)) => variable
            .options
            .iter()
            .map(|option| selected.contains(option))
            .collect(),
        _ => vec![false; variable.options.len()],
    };

    let chosen = MultiSelect::new()
        .with_prompt(variable.description.clone())
        .items(&variable.options)
        .defaults(&defaults)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    let values = chosen.into_iter().map(|index| variable.options[index].clone()).collect();
    Ok(VariableValue::List(values))
}

/// Prompts for every declared variable, in declaration order.
pub fn prompt_for_variables(variables: &[Variable]) -> Result<TemplateContext> {
    let mut context = TemplateContext::new();

    for variable in variables {
        let value = match variable.kind {
            VariableType::String => prompt_string(variable)?,
            VariableType::Boolean => prompt_boolean(variable)?,
            VariableType::Multiselect => prompt_multiselect(variable)?,
        };
        context.insert(variable.name.clone(), value);
    }

    Ok(context)
}

/// Presents a selection menu of available templates, returning the chosen
/// template's name.
pub fn prompt_for_template(manifests: &[Manifest]) -> Result<String> {
    let items: Vec<String> = manifests
        .iter()
        .map(|m| format!("{} — {}", m.name, m.description))
        .collect();

    let selection = Select::new()
        .with_prompt("Select a template")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    Ok(manifests[selection].name.clone())
}

/// Builds a context non-interactively from raw flag values, falling back to
/// declared defaults. Flag values are coerced per the variable kind:
/// booleans from `"true"`, multiselects from comma-separated lists.
pub fn context_from_flags(
    flags: &HashMap<String, String>,
    variables: &[Variable],
) -> TemplateContext {
    let mut context = TemplateContext::new();

    for variable in variables {
        if let Some(raw) = flags.get(&variable.name) {
            let value = match variable.kind {
                VariableType::Boolean => VariableValue::Boolean(raw == "true"),
                VariableType::Multiselect => VariableValue::List(
                    raw.split(',').map(|s| s.trim().to_string()).collect(),
                ),
                VariableType::String => VariableValue::String(raw.clone()),
            };
            context.insert(variable.name.clone(), value);
        } else if let Some(default) = &variable.default {
            context.insert(variable.name.clone(), default.clone());
        }
    }

    context
}
