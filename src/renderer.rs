//! Template rendering for Blueprint.
//!
//! Wraps a Handlebars registry configured once at startup and passed by
//! reference into every render call, so rendering has no hidden global
//! state and no initialization-order hazards.

use crate::config::VariableValue;
use crate::error::{Error, Result};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use indexmap::IndexMap;

/// Suffix marking a file as a renderable template. The suffix is stripped
/// from the output filename.
pub const TEMPLATE_SUFFIX: &str = ".hbs";

/// Resolved variable context, keyed by variable name in declaration order.
pub type TemplateContext = IndexMap<String, VariableValue>;

fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    let mut pending_separator = false;

    for ch in s.chars() {
        if ch.is_whitespace() || ch == '_' {
            pending_separator = true;
            prev_lower = false;
            continue;
        }
        if pending_separator {
            out.push('-');
            pending_separator = false;
        } else if prev_lower && ch.is_ascii_uppercase() {
            out.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}

fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;

    for ch in s.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    match out.chars().next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut lowered = first.to_ascii_lowercase().to_string();
            lowered.push_str(&out[first.len_utf8()..]);
            lowered
        }
        _ => out,
    }
}

fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    match camel.chars().next() {
        Some(first) => {
            let mut raised: String = first.to_uppercase().collect();
            raised.push_str(&camel[first.len_utf8()..]);
            raised
        }
        None => camel,
    }
}

handlebars_helper!(kebab_case: |s: str| to_kebab_case(s));
handlebars_helper!(camel_case: |s: str| to_camel_case(s));
handlebars_helper!(pascal_case: |s: str| to_pascal_case(s));
handlebars_helper!(upper_case: |s: str| s.to_uppercase());

/// Handlebars-backed template engine with the four case-conversion helpers.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Creates a configured engine.
    ///
    /// Output is source code and config files, not markup, so HTML escaping
    /// is disabled explicitly rather than left to the engine default.
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_helper("kebabCase", Box::new(kebab_case));
        registry.register_helper("camelCase", Box::new(camel_case));
        registry.register_helper("pascalCase", Box::new(pascal_case));
        registry.register_helper("upperCase", Box::new(upper_case));
        Self { registry }
    }

    /// Renders a template string against the given context.
    ///
    /// # Errors
    /// * [`Error::Render`] if compilation or rendering fails
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        self.registry.render_template(template, context).map_err(Error::Render)
    }

    /// Renders a filename.
    ///
    /// Names without a substitution marker skip the engine entirely and only
    /// have a trailing [`TEMPLATE_SUFFIX`] stripped; this avoids parse errors
    /// on filenames containing characters invalid in the template grammar.
    /// Names with a marker are rendered like file content, then stripped.
    pub fn render_filename(&self, filename: &str, context: &TemplateContext) -> Result<String> {
        if !filename.contains("{{") {
            return Ok(strip_template_suffix(filename).to_string());
        }
        let rendered = self.render(filename, context)?;
        Ok(strip_template_suffix(&rendered).to_string())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        TemplateEngine::new()
    }
}

fn strip_template_suffix(name: &str) -> &str {
    name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name)
}
