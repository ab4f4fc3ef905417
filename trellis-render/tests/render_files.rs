//! Integration tests for the full render-as-file cycle: template files in
//! on disk, rendered file set out, with imports collected per file and the
//! metadata sidecar alongside.

use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use trellis_render::{Error, Metadata, Result, SharedImporter, Templator};

struct WidgetTemplates {
    dir: PathBuf,
}

impl Templator for WidgetTemplates {
    fn template_dir(&self) -> PathBuf {
        self.dir.clone()
    }

    fn process_metadata(&self, metadata: &Metadata) -> Result<serde_json::Value> {
        let fields = metadata
            .param("fields")
            .cloned()
            .unwrap_or_else(|| json!([]));
        Ok(json!({ "name": metadata.name, "fields": fields }))
    }
}

/// A templator whose data collides with the reserved importer key.
struct CollidingTemplates {
    dir: PathBuf,
}

impl Templator for CollidingTemplates {
    fn template_dir(&self) -> PathBuf {
        self.dir.clone()
    }

    fn process_metadata(&self, metadata: &Metadata) -> Result<serde_json::Value> {
        Ok(json!({ "name": metadata.name, "importer": "collides" }))
    }
}

fn write_template(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).expect("failed to write template");
}

fn metadata_with_fields(name: &str, fields: &[&str]) -> Metadata {
    let mut metadata = Metadata::new(name, "widget");
    metadata.update_param("fields", json!(fields));
    metadata
}

#[test]
fn test_render_as_file_round_trip() {
    let tmp = TempDir::new().unwrap();
    write_template(
        &tmp,
        "component.jsx.hbs",
        "{{import \"react\" \"React\"}}\nexport const {{name}} = () => null;\n",
    );
    write_template(
        &tmp,
        "component.test.jsx.hbs",
        "{{import_named \"@testing-library/react\" \"render\"}}\ndescribe(\"{{name}}\", () => {});\n",
    );

    let templator = WidgetTemplates {
        dir: tmp.path().to_path_buf(),
    };
    let metadata = metadata_with_fields("MyForm", &["email", "age"]);
    let files = templator.render_as_file(&metadata).expect("render failed");

    // One output per template file plus the sidecar, in template order
    let keys: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["MyForm.jsx", "MyForm.test.jsx", ".MyForm.meta"]);

    // The sidecar parses back to a structurally equal record with
    // version and component populated
    let parsed: Metadata = serde_json::from_str(&files[".MyForm.meta"]).unwrap();
    assert_eq!(parsed, metadata);
    assert!(!parsed.version.is_empty());
    assert_eq!(parsed.component, "widget");
}

#[test]
fn test_imports_never_leak_across_files() {
    let tmp = TempDir::new().unwrap();
    write_template(
        &tmp,
        "component.jsx.hbs",
        "{{import \"react\" \"React\"}}\nexport const {{name}} = () => null;\n",
    );
    write_template(
        &tmp,
        "component.test.jsx.hbs",
        "{{import_named \"@testing-library/react\" \"render\"}}\ndescribe(\"{{name}}\", () => {});\n",
    );

    let templator = WidgetTemplates {
        dir: tmp.path().to_path_buf(),
    };
    let files = templator
        .render_as_file(&metadata_with_fields("MyForm", &[]))
        .expect("render failed");

    let component = &files["MyForm.jsx"];
    let test_file = &files["MyForm.test.jsx"];

    assert!(component.starts_with("import React from \"react\";\n"));
    assert!(!component.contains("@testing-library/react"));

    assert!(test_file.starts_with("import { render } from \"@testing-library/react\";\n"));
    assert!(!test_file.contains("import React"));
}

#[test]
fn test_star_import_conflict_aborts_generation() {
    let tmp = TempDir::new().unwrap();
    write_template(
        &tmp,
        "component.jsx.hbs",
        "{{import_star \"path\" \"path\"}}{{import_star \"path\" \"fsPath\"}}\nconst x = 1;\n",
    );

    let templator = WidgetTemplates {
        dir: tmp.path().to_path_buf(),
    };
    let err = templator
        .render_as_file(&metadata_with_fields("MyForm", &[]))
        .unwrap_err();

    let message = display_chain(&err);
    assert!(message.contains("star imports"), "unexpected error: {message}");
}

#[test]
fn test_missing_template_directory_fails() {
    let templator = WidgetTemplates {
        dir: PathBuf::from("/nonexistent/trellis/templates"),
    };
    let err = templator
        .render_as_file(&metadata_with_fields("MyForm", &[]))
        .unwrap_err();

    assert!(matches!(err, Error::TemplateDirMissing { .. }));
}

#[test]
fn test_reserved_data_key_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_template(&tmp, "component.jsx.hbs", "const x = 1;\n");

    let templator = CollidingTemplates {
        dir: tmp.path().to_path_buf(),
    };
    let err = templator
        .render_as_file(&Metadata::new("MyForm", "widget"))
        .unwrap_err();

    assert!(matches!(err, Error::ReservedDataKey { .. }));
}

#[test]
fn test_render_as_partial_has_no_import_block() {
    let tmp = TempDir::new().unwrap();
    write_template(
        &tmp,
        "component.jsx.hbs",
        "{{import \"react\" \"React\"}}\nexport const {{name}} = () => null;\n",
    );

    let templator = WidgetTemplates {
        dir: tmp.path().to_path_buf(),
    };
    let importer = SharedImporter::new();
    let body = templator
        .render_as_partial(
            "component.jsx.hbs",
            &metadata_with_fields("MyForm", &[]),
            &importer,
        )
        .expect("render failed");

    // Imports are collected on the handle but not prepended
    assert_eq!(body, "export const MyForm = () => null;\n");
    assert_eq!(importer.render_imports(), "import React from \"react\";");
}

/// Collect the full source chain of an error into one string.
fn display_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
