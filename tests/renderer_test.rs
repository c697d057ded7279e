use blueprint::config::VariableValue;
use blueprint::renderer::{TemplateContext, TemplateEngine};

fn text_context(pairs: &[(&str, &str)]) -> TemplateContext {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), VariableValue::String(v.to_string())))
        .collect()
}

#[test]
fn test_substitutes_simple_variables() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("projectName", "demo")]);

    let result = engine.render("Hello {{projectName}}", &context).unwrap();
    assert_eq!(result, "Hello demo");
}

#[test]
fn test_conditional_blocks() {
    let engine = TemplateEngine::new();
    let template = "Start{{#if useDocker}}\nDockerfile{{/if}}\nEnd";

    let mut context = TemplateContext::new();
    context.insert("useDocker".to_string(), VariableValue::Boolean(true));
    assert!(engine.render(template, &context).unwrap().contains("Dockerfile"));

    context.insert("useDocker".to_string(), VariableValue::Boolean(false));
    assert!(!engine.render(template, &context).unwrap().contains("Dockerfile"));
}

#[test]
fn test_iteration_with_each() {
    let engine = TemplateEngine::new();
    let mut context = TemplateContext::new();
    context.insert(
        "features".to_string(),
        VariableValue::List(vec!["auth".to_string(), "cors".to_string()]),
    );

    let result = engine
        .render("{{#each features}}Feature: {{this}}\n{{/each}}", &context)
        .unwrap();
    assert_eq!(result, "Feature: auth\nFeature: cors\n");
}

#[test]
fn test_kebab_case_helper() {
    let engine = TemplateEngine::new();

    for (input, expected) in [
        ("MyProject", "my-project"),
        ("My Project", "my-project"),
        ("my_project", "my-project"),
        ("already-kebab", "already-kebab"),
    ] {
        let context = text_context(&[("projectName", input)]);
        let result = engine.render("{{kebabCase projectName}}", &context).unwrap();
        assert_eq!(result, expected, "input: {input}");
    }
}

#[test]
fn test_camel_case_helper() {
    let engine = TemplateEngine::new();

    for (input, expected) in [
        ("my-project", "myProject"),
        ("my_project", "myProject"),
        ("My Project", "myProject"),
    ] {
        let context = text_context(&[("projectName", input)]);
        let result = engine.render("{{camelCase projectName}}", &context).unwrap();
        assert_eq!(result, expected, "input: {input}");
    }
}

#[test]
fn test_pascal_case_helper() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("projectName", "my-project")]);

    let result = engine.render("{{pascalCase projectName}}", &context).unwrap();
    assert_eq!(result, "MyProject");
}

#[test]
fn test_upper_case_helper() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("projectName", "my-project")]);

    let result = engine.render("{{upperCase projectName}}", &context).unwrap();
    assert_eq!(result, "MY-PROJECT");
}

#[test]
fn test_never_escapes_output() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("value", "<div>\"x\" &amp; 'y'</div>")]);

    let result = engine.render("{{value}}", &context).unwrap();
    assert_eq!(result, "<div>\"x\" &amp; 'y'</div>");
}

#[test]
fn test_empty_template() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("name", "test")]);
    assert_eq!(engine.render("", &context).unwrap(), "");
}

#[test]
fn test_rendering_is_deterministic() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("projectName", "MyProject")]);
    let template = "{{kebabCase projectName}}/{{pascalCase projectName}}";

    let first = engine.render(template, &context).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.render(template, &context).unwrap(), first);
    }
}

#[test]
fn test_filename_strips_suffix() {
    let engine = TemplateEngine::new();
    let context = TemplateContext::new();

    let result = engine.render_filename("package.json.hbs", &context).unwrap();
    assert_eq!(result, "package.json");
}

#[test]
fn test_filename_without_marker_unchanged() {
    let engine = TemplateEngine::new();
    let context = TemplateContext::new();

    assert_eq!(engine.render_filename(".gitignore", &context).unwrap(), ".gitignore");
}

#[test]
fn test_filename_renders_variables() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("projectName", "app")]);

    let result = engine.render_filename("{{projectName}}.ts.hbs", &context).unwrap();
    assert_eq!(result, "app.ts");
}

#[test]
fn test_filename_applies_helpers() {
    let engine = TemplateEngine::new();
    let context = text_context(&[("projectName", "MyProject")]);

    let result = engine
        .render_filename("{{kebabCase projectName}}.ts.hbs", &context)
        .unwrap();
    assert_eq!(result, "my-project.ts");
}
