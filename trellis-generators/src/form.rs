//! The `form` kind: a React form component with configurable fields.

use std::path::PathBuf;

use serde_json::json;
use trellis_render::{Error as RenderError, Metadata, Templator};

use crate::error::{Error, Result};
use crate::generator::{ArgValues, Generator};
use crate::registry::{GeneratorKind, OptionSpec};

pub const FORM_KIND: GeneratorKind = GeneratorKind::new(
    "form",
    "A form component with the given fields, plus a matching test file",
    &[OptionSpec {
        name: "fields",
        description: "The fields to generate for the form",
        multiple: true,
        group: "Form Generator",
    }],
    |name| Box::new(FormGenerator::new(name)),
);

/// Templator for the form kind; templates ship with this crate.
pub struct FormTemplates {
    template_dir: PathBuf,
}

impl Default for FormTemplates {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/form")),
        }
    }
}

impl Templator for FormTemplates {
    fn template_dir(&self) -> PathBuf {
        self.template_dir.clone()
    }

    fn process_metadata(
        &self,
        metadata: &Metadata,
    ) -> trellis_render::Result<serde_json::Value> {
        let fields = metadata
            .param("fields")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| RenderError::InvalidMetadata {
                component: metadata.component.clone(),
                message: "parameter \"fields\" must be a list of field names".to_string(),
            })?;

        Ok(json!({
            "name": metadata.name,
            "fields": fields,
            "modulePath": format!("./{}", metadata.name),
        }))
    }
}

pub struct FormGenerator {
    metadata: Metadata,
    templates: FormTemplates,
}

impl FormGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            metadata: Metadata::new(name, "form"),
            templates: FormTemplates::default(),
        }
    }
}

impl Generator for FormGenerator {
    fn default_folder(&self) -> &'static str {
        "components"
    }

    fn templator(&self) -> &dyn Templator {
        &self.templates
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn build_metadata(&mut self, args: &ArgValues) -> Result<()> {
        let fields = args
            .get("fields")
            .filter(|values| !values.is_empty())
            .ok_or_else(|| Error::MissingParameter {
                property: "fields".to_string(),
                component: "form".to_string(),
                name: self.metadata.name.clone(),
            })?;
        self.metadata.update_param("fields", json!(fields));
        Ok(())
    }
}
