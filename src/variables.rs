//! Static variable extraction from template bodies.
//!
//! Matching is regular-expression based, not a full template parse: nested or
//! computed expressions (subexpressions, dotted paths, helper chains) are out
//! of the matcher's reach. This is a documented limitation; the extractor is
//! a template-authoring aid, not part of the scaffolding path.

use crate::config::Variable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Plain substitutions and block openers: `{{name}}`, `{{#if name}}`,
/// `{{#each name}}`, `{{#unless name}}`.
static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{(?:#(?:if|each|unless)\s+)?([a-zA-Z_]\w*)\}\}").unwrap()
});

/// First arguments of the four recognized case-conversion helpers.
static HELPER_CALL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{(?:kebabCase|camelCase|pascalCase|upperCase)\s+([a-zA-Z_]\w*)\}\}")
        .unwrap()
});

/// Scans template bodies for referenced variable names.
///
/// Returns a deduplicated set; extraction is idempotent and independent of
/// body ordering.
pub fn extract_variables<S: AsRef<str>>(bodies: &[S]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for body in bodies {
        let body = body.as_ref();
        for capture in VARIABLE_PATTERN.captures_iter(body) {
            names.insert(capture[1].to_string());
        }
        for capture in HELPER_CALL_PATTERN.captures_iter(body) {
            names.insert(capture[1].to_string());
        }
    }

    names
}

/// Result of cross-referencing declared variables against template bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossReference {
    /// Variable names declared in the manifest, in declaration order.
    pub defined: Vec<String>,
    /// Names referenced anywhere in the scanned bodies.
    pub used: Vec<String>,
    /// Referenced but never declared.
    pub undefined: Vec<String>,
    /// Declared but never referenced, in declaration order.
    pub unused: Vec<String>,
}

/// Cross-references declared variables with the names extracted from
/// `bodies`.
pub fn cross_reference<S: AsRef<str>>(variables: &[Variable], bodies: &[S]) -> CrossReference {
    let defined: Vec<String> = variables.iter().map(|v| v.name.clone()).collect();
    let used_set = extract_variables(bodies);

    let defined_set: BTreeSet<&str> = defined.iter().map(String::as_str).collect();

    let undefined = used_set
        .iter()
        .filter(|name| !defined_set.contains(name.as_str()))
        .cloned()
        .collect();
    let unused = defined
        .iter()
        .filter(|name| !used_set.contains(name.as_str()))
        .cloned()
        .collect();

    CrossReference { defined, used: used_set.into_iter().collect(), undefined, unused }
}
