//! Integration tests for the definition loader

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;
use tmpl_meta::{DefinitionLoader, TemplateKind, ValueType};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_load_schemas_and_templates() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "schemas/lint.toml",
        r#"
kind = "lint"

[options.bullet]
type = "string"
required = true
default = "-"
"#,
    );
    write(
        temp.path(),
        "templates/default-lint.toml",
        r#"
[meta]
name = "default-lint"
kind = "lint"

[values]
bullet = "*"
"#,
    );
    write(
        temp.path(),
        "templates/karma.json",
        r#"{"meta": {"name": "karma-json", "kind": "test-runner"}, "values": {"files": ["a.js"]}}"#,
    );

    let defs = DefinitionLoader::new().load(temp.path()).unwrap();

    assert_eq!(defs.schemas.len(), 1);
    assert_eq!(defs.schemas[0].options["bullet"].expected_type, ValueType::String);

    let names: Vec<_> = defs.templates.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["default-lint", "karma-json"]);
    assert_eq!(defs.templates[1].kind(), TemplateKind::TestRunner);
    assert_eq!(defs.templates[1].values["files"], json!(["a.js"]));
}

#[test]
fn test_load_yaml_template() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "templates/strict.yaml",
        "meta:\n  name: strict\n  kind: lint\nvalues:\n  frail: true\n",
    );

    let templates = DefinitionLoader::new().load_templates(temp.path()).unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].values["frail"], json!(true));
}

#[test]
fn test_invalid_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "templates/broken.toml", "[meta\nname = ");
    write(
        temp.path(),
        "templates/missing-kind.toml",
        "[meta]\nname = \"nokind\"\n",
    );
    write(
        temp.path(),
        "templates/good.toml",
        "[meta]\nname = \"good\"\nkind = \"lint\"\n",
    );

    let templates = DefinitionLoader::new().load_templates(temp.path()).unwrap();
    let names: Vec<_> = templates.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["good"]);
}

#[test]
fn test_unrelated_files_are_ignored() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "templates/README.md", "# Templates");
    write(temp.path(), "templates/.remarkrc.js", "module.exports = {}");

    let defs = DefinitionLoader::new().load(temp.path()).unwrap();
    assert!(defs.is_empty());
}

#[test]
fn test_schema_with_duplicate_option_is_skipped() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "schemas/lint.json",
        r#"{"kind": "lint", "options": {"bullet": {"type": "string"}, "bullet": {"type": "integer"}}}"#,
    );
    write(
        temp.path(),
        "schemas/test-runner.toml",
        "kind = \"test-runner\"\n\n[options.files]\ntype = \"array\"\n",
    );

    let schemas = DefinitionLoader::new().load_schemas(temp.path()).unwrap();
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0].kind, TemplateKind::TestRunner);
}
