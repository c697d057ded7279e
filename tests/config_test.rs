use blueprint::config::{parse_manifest, VariableType, VariableValue};
use blueprint::error::Error;

const VALID_MANIFEST: &str = r#"
name: api
description: REST API starter
version: 1.0.0
variables:
  - name: projectName
    description: Project name
    type: string
    required: true
    validate: "^[a-z][a-z0-9-]*$"
  - name: useDocker
    description: Include a Dockerfile
    type: boolean
    default: true
  - name: features
    description: Optional features
    type: multiselect
    options:
      - auth
      - cors
    default:
      - auth
hooks:
  post:
    - command: npm install
      description: Install dependencies
"#;

#[test]
fn test_parse_valid_manifest() {
    let manifest = parse_manifest(VALID_MANIFEST).unwrap();

    assert_eq!(manifest.name, "api");
    assert_eq!(manifest.description, "REST API starter");
    assert_eq!(manifest.version, "1.0.0");
    assert_eq!(manifest.variables.len(), 3);

    let project_name = &manifest.variables[0];
    assert_eq!(project_name.name, "projectName");
    assert_eq!(project_name.kind, VariableType::String);
    assert!(project_name.required);
    assert_eq!(project_name.validate.as_deref(), Some("^[a-z][a-z0-9-]*$"));

    let use_docker = &manifest.variables[1];
    assert_eq!(use_docker.kind, VariableType::Boolean);
    assert!(!use_docker.required);
    assert_eq!(use_docker.default, Some(VariableValue::Boolean(true)));

    let features = &manifest.variables[2];
    assert_eq!(features.kind, VariableType::Multiselect);
    assert_eq!(features.options, vec!["auth".to_string(), "cors".to_string()]);
    assert_eq!(features.default, Some(VariableValue::List(vec!["auth".to_string()])));

    assert_eq!(manifest.post_hooks.len(), 1);
    assert_eq!(manifest.post_hooks[0].command, "npm install");
    assert_eq!(manifest.post_hooks[0].description, "Install dependencies");
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse_manifest(VALID_MANIFEST).unwrap();
    let second = parse_manifest(VALID_MANIFEST).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scalar_document_rejected() {
    let result = parse_manifest("just a string");
    assert!(matches!(result, Err(Error::InvalidManifest(_))));
}

#[test]
fn test_sequence_document_rejected() {
    let result = parse_manifest("- a\n- b\n");
    assert!(matches!(result, Err(Error::InvalidManifest(_))));
}

#[test]
fn test_missing_name_rejected() {
    let content = "description: d\nversion: 1.0.0\nvariables: []\n";
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::MissingField(_))));
}

#[test]
fn test_empty_description_rejected() {
    let content = "name: api\ndescription: \"\"\nversion: 1.0.0\nvariables: []\n";
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::MissingField(_))));
}

#[test]
fn test_missing_variables_rejected() {
    let content = "name: api\ndescription: d\nversion: 1.0.0\n";
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::MissingField(_))));
}

#[test]
fn test_empty_variables_accepted() {
    let content = "name: api\ndescription: d\nversion: 1.0.0\nvariables: []\n";
    let manifest = parse_manifest(content).unwrap();
    assert!(manifest.variables.is_empty());
    assert!(manifest.post_hooks.is_empty());
}

#[test]
fn test_variable_must_be_mapping() {
    let content = "name: api\ndescription: d\nversion: 1.0.0\nvariables:\n  - plain\n";
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidVariable(_))));
}

#[test]
fn test_unknown_variable_type_rejected() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: count
    description: How many
    type: number
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidVariable(_))));
}

#[test]
fn test_multiselect_requires_options() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: features
    description: Optional features
    type: multiselect
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidVariable(_))));
}

#[test]
fn test_multiselect_rejects_empty_options() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: features
    description: Optional features
    type: multiselect
    options: []
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidVariable(_))));
}

#[test]
fn test_non_string_option_rejected() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: features
    description: Optional features
    type: multiselect
    options:
      - auth
      - 42
"#;
    let result = parse_manifest(content);
    match result {
        Err(Error::InvalidVariable(message)) => {
            assert!(message.contains("'options' entry that is not a string"))
        }
        other => panic!("expected InvalidVariable, got {other:?}"),
    }
}

#[test]
fn test_invalid_regex_rejected() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: projectName
    description: Project name
    type: string
    validate: "[unclosed"
"#;
    let result = parse_manifest(content);
    match result {
        Err(Error::InvalidVariable(message)) => assert!(message.contains("regex")),
        other => panic!("expected InvalidVariable, got {other:?}"),
    }
}

#[test]
fn test_non_string_validate_rejected() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: projectName
    description: Project name
    type: string
    validate: 42
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidVariable(_))));
}

#[test]
fn test_unsupported_default_shape_rejected() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables:
  - name: port
    description: Port
    type: string
    default: 8080
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidVariable(_))));
}

#[test]
fn test_hook_missing_command_rejected() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables: []
hooks:
  post:
    - description: Install dependencies
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidHook(_))));
}

#[test]
fn test_hooks_post_must_be_sequence() {
    let content = r#"
name: api
description: d
version: 1.0.0
variables: []
hooks:
  post: npm install
"#;
    let result = parse_manifest(content);
    assert!(matches!(result, Err(Error::InvalidHook(_))));
}
