//! End-to-end tests for the form generator: real templates in, files on
//! disk out.

use std::path::Path;

use tempfile::TempDir;
use trellis_core::{WriteMode, WriteOptions, WriteStatus, write_file};
use trellis_generators::{ArgValues, GenerateOptions, Generator, fetch_by_key};

fn form_generator(name: &str, fields: &[&str]) -> Box<dyn Generator> {
    let kind = fetch_by_key("form").expect("form kind not registered");
    let mut generator = kind.create(name);

    let mut args = ArgValues::new();
    args.insert(
        "fields".to_string(),
        fields.iter().map(|s| s.to_string()).collect(),
    );
    generator
        .build_metadata(&args)
        .expect("build_metadata failed");
    generator
}

fn options(dir: &Path, mode: WriteMode, dry_run: bool) -> GenerateOptions {
    GenerateOptions {
        output_dir: Some(dir.to_path_buf()),
        write: WriteOptions { mode, dry_run },
    }
}

#[test]
fn test_generate_writes_component_test_and_sidecar() {
    let tmp = TempDir::new().unwrap();
    let generator = form_generator("ContactForm", &["name", "email"]);

    generator
        .generate(&options(tmp.path(), WriteMode::Force, false))
        .expect("generation failed");

    let component = std::fs::read_to_string(tmp.path().join("ContactForm.jsx")).unwrap();
    assert!(component.starts_with(
        "import React from \"react\";\nimport PropTypes from \"prop-types\";\n"
    ));
    assert!(component.contains("export class ContactForm extends React.Component"));
    assert!(component.contains("<input name=\"email\" />"));
    assert!(component.contains("name: PropTypes.string,"));

    let test_file = std::fs::read_to_string(tmp.path().join("ContactForm.test.jsx")).unwrap();
    assert!(test_file.starts_with(
        "import { render, screen } from \"@testing-library/react\";\n"
    ));
    assert!(test_file.contains("import { ContactForm } from \"./ContactForm\";"));
    assert!(test_file.contains("render(<ContactForm />);"));
    assert!(test_file.contains("expect(screen.getByText(\"name\")).toBeTruthy();"));

    let sidecar: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join(".ContactForm.meta")).unwrap())
            .unwrap();
    assert_eq!(sidecar["name"], "ContactForm");
    assert_eq!(sidecar["component"], "form");
    assert_eq!(sidecar["parameters"]["fields"], serde_json::json!(["name", "email"]));
    assert!(sidecar["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[test]
fn test_dry_run_prints_instead_of_writing() {
    let tmp = TempDir::new().unwrap();
    let generator = form_generator("ContactForm", &["name"]);
    let dry_run = options(tmp.path(), WriteMode::Force, true);

    generator
        .generate(&dry_run)
        .expect("generation failed");

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);

    // The rendered content reaches the writer and comes back as a dry run
    let files = generator
        .templator()
        .render_as_file(generator.metadata())
        .expect("render failed");
    for (filename, content) in &files {
        let status = write_file(tmp.path(), filename, content, &dry_run.write)
            .expect("write failed");
        assert_eq!(status, WriteStatus::DryRun);
    }
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_skip_mode_leaves_existing_files_untouched() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("ContactForm.jsx"), "handwritten").unwrap();
    let generator = form_generator("ContactForm", &["name"]);

    generator
        .generate(&options(tmp.path(), WriteMode::Skip, false))
        .expect("generation failed");

    // The conflicting file survives, everything else is still generated
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("ContactForm.jsx")).unwrap(),
        "handwritten"
    );
    assert!(tmp.path().join("ContactForm.test.jsx").exists());
    assert!(tmp.path().join(".ContactForm.meta").exists());
}

#[test]
fn test_component_file_matches_expected_output() {
    let tmp = TempDir::new().unwrap();
    let generator = form_generator("LoginForm", &["user"]);

    generator
        .generate(&options(tmp.path(), WriteMode::Force, false))
        .expect("generation failed");

    let component = std::fs::read_to_string(tmp.path().join("LoginForm.jsx")).unwrap();
    let expected = r#"import React from "react";
import PropTypes from "prop-types";

export class LoginForm extends React.Component {
  render() {
    return (
      <form>
        <label>
          user
          <input name="user" />
        </label>
      </form>
    );
  }
}

LoginForm.propTypes = {
  user: PropTypes.string,
};
"#;
    assert_eq!(component, expected);
}
