//! The per-component-kind template renderer.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use trellis_core::logger;

use crate::engine;
use crate::error::{Error, Result};
use crate::format::{Formatter, SourceFormatter};
use crate::importer::SharedImporter;
use crate::metadata::Metadata;

/// Key reserved for import collection; template data must not define it.
const RESERVED_DATA_KEY: &str = "importer";

/// Ordered mapping from output filename to final file content.
pub type RenderedFiles = IndexMap<String, String>;

/// Renders the template family of one component kind.
///
/// Implementors supply the template directory and the metadata-to-data
/// mapping; the provided methods drive the render cycle. Within one
/// `render_as_file` call every template file goes through render ->
/// collect imports -> format -> reset before the next file starts, so no
/// file ever observes another file's accumulated imports.
pub trait Templator {
    /// Directory holding this kind's `.hbs` template files.
    fn template_dir(&self) -> PathBuf;

    /// Transform the generic metadata record into the exact data shape the
    /// templates expect. Required-field validation belongs to the
    /// generator strategy; this is the structural backstop.
    fn process_metadata(&self, metadata: &Metadata) -> Result<serde_json::Value>;

    /// The formatter used by [`format_content`](Self::format_content).
    fn formatter(&self) -> Box<dyn Formatter> {
        Box::new(SourceFormatter)
    }

    /// List the template filenames for this kind, sorted. Only files with
    /// the engine's `.hbs` extension are included.
    fn get_templates(&self) -> Result<Vec<String>> {
        let dir = self.template_dir();
        if !dir.is_dir() {
            return Err(Error::TemplateDirMissing { path: dir });
        }
        let entries = std::fs::read_dir(&dir).map_err(|source| Error::Io {
            path: dir.clone(),
            source,
        })?;

        let mut templates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "hbs") {
                if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                    templates.push(name.to_string());
                }
            }
        }
        templates.sort();
        Ok(templates)
    }

    /// Render one template file with the import helpers bound to
    /// `importer`. The data object must not define the reserved
    /// `importer` key.
    fn render_template(
        &self,
        file: &Path,
        data: &serde_json::Value,
        importer: &SharedImporter,
    ) -> Result<String> {
        if data
            .as_object()
            .is_some_and(|object| object.contains_key(RESERVED_DATA_KEY))
        {
            return Err(Error::ReservedDataKey {
                key: RESERVED_DATA_KEY.to_string(),
            });
        }

        let template = std::fs::read_to_string(file).map_err(|source| Error::Io {
            path: file.to_path_buf(),
            source,
        })?;
        engine::render_template_str(&file.display().to_string(), &template, data, importer)
    }

    /// Render one template without prepending an import block, for
    /// fragments embedded inside another template's output.
    fn render_as_partial(
        &self,
        template_file: &str,
        metadata: &Metadata,
        importer: &SharedImporter,
    ) -> Result<String> {
        let data = self.process_metadata(metadata)?;
        let body = self.render_template(&self.template_dir().join(template_file), &data, importer)?;
        Ok(self.format_content(None, &body))
    }

    /// Concatenate import block and body, then format. Formatting is
    /// best-effort: on failure, warn and return the unformatted
    /// concatenation.
    fn format_content(&self, imports: Option<&str>, body: &str) -> String {
        let content = match imports {
            Some(block) if !block.is_empty() => format!("{}\n\n{}", block, body),
            _ => body.to_string(),
        };
        match self.formatter().format(&content) {
            Ok(formatted) => formatted,
            Err(err) => {
                logger::warn(format!("error formatting template: {}", err));
                logger::warn("continuing generation with unformatted content");
                content
            }
        }
    }

    /// Render every template file of this kind into final file contents,
    /// plus the hidden `.{name}.meta` sidecar holding the pretty-printed
    /// metadata record.
    fn render_as_file(&self, metadata: &Metadata) -> Result<RenderedFiles> {
        let mut files = RenderedFiles::new();
        let importer = SharedImporter::new();

        for template_file in self.get_templates()? {
            let body = self.render_as_partial(&template_file, metadata, &importer)?;
            let imports = importer.render_imports();
            for warning in importer.take_warnings() {
                logger::warn(warning);
            }
            let content = self.format_content(Some(&imports), &body);
            files.insert(output_filename(&metadata.name, &template_file), content);
            importer.reset_imports();
        }

        files.insert(
            format!(".{}.meta", metadata.name),
            serde_json::to_string_pretty(metadata)?,
        );
        Ok(files)
    }
}

/// Derive the output filename: the component's base name joined with the
/// extra dot-segments of the template's own filename, engine extension
/// stripped (e.g. base `MyForm` + `component.test.jsx.hbs` ->
/// `MyForm.test.jsx`).
pub fn output_filename(base: &str, template_file: &str) -> String {
    let stem = template_file
        .strip_suffix(".hbs")
        .unwrap_or(template_file);
    let mut segments: Vec<&str> = stem.split('.').collect();
    segments[0] = base;
    segments.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatError;
    use serde_json::json;

    #[test]
    fn test_output_filename_joins_base_with_sub_extensions() {
        assert_eq!(output_filename("MyForm", "component.hbs"), "MyForm");
        assert_eq!(output_filename("MyForm", "component.jsx.hbs"), "MyForm.jsx");
        assert_eq!(
            output_filename("MyForm", "component.test.jsx.hbs"),
            "MyForm.test.jsx"
        );
    }

    struct FailingFormatter;

    impl Formatter for FailingFormatter {
        fn format(&self, _: &str) -> std::result::Result<String, FormatError> {
            Err(FormatError::Unbalanced {
                delimiter: '{',
                line: 1,
            })
        }
    }

    struct BrokenFormatterTemplator;

    impl Templator for BrokenFormatterTemplator {
        fn template_dir(&self) -> PathBuf {
            PathBuf::from("unused")
        }

        fn process_metadata(&self, metadata: &Metadata) -> Result<serde_json::Value> {
            Ok(json!({ "name": metadata.name }))
        }

        fn formatter(&self) -> Box<dyn Formatter> {
            Box::new(FailingFormatter)
        }
    }

    #[test]
    fn test_format_content_falls_back_to_unformatted_on_failure() {
        let content = BrokenFormatterTemplator
            .format_content(Some("import X from \"x\";"), "const x = X;");
        assert_eq!(content, "import X from \"x\";\n\nconst x = X;");
    }

    #[test]
    fn test_format_content_skips_empty_import_block() {
        let content = BrokenFormatterTemplator.format_content(Some(""), "const x = 1;");
        assert_eq!(content, "const x = 1;");
    }
}
