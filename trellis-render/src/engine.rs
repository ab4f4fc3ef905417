//! Handlebars binding.
//!
//! Templates declare their module imports while rendering through three
//! helpers bound to the file's [`SharedImporter`]:
//!
//! ```handlebars
//! {{import "react" "React"}}
//! {{import_named "yup" "object" "string"}}
//! {{import_star "path" "path"}}
//! ```
//!
//! The helpers emit nothing into the output; their only effect is on the
//! import table. HTML escaping is disabled since the engine renders source
//! code, not markup.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderErrorReason,
};

use crate::error::{Error, Result};
use crate::importer::{ImportSpec, SharedImporter};

#[derive(Clone, Copy)]
enum ImportShape {
    Default,
    Named,
    Star,
}

impl ImportShape {
    fn helper_name(self) -> &'static str {
        match self {
            Self::Default => "import",
            Self::Named => "import_named",
            Self::Star => "import_star",
        }
    }
}

struct ImportHelper {
    importer: SharedImporter,
    shape: ImportShape,
}

impl ImportHelper {
    fn param_str<'a>(
        &self,
        h: &'a Helper<'_>,
        index: usize,
    ) -> std::result::Result<&'a str, RenderErrorReason> {
        h.param(index)
            .and_then(|param| param.value().as_str())
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(
                self.shape.helper_name(),
                index,
            ))
    }
}

impl HelperDef for ImportHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        _: &mut dyn Output,
    ) -> HelperResult {
        let library = self.param_str(h, 0)?;

        let spec = match self.shape {
            ImportShape::Default => ImportSpec::default_import(self.param_str(h, 1)?),
            ImportShape::Star => ImportSpec::star_import(self.param_str(h, 1)?),
            ImportShape::Named => {
                let mut bindings = Vec::with_capacity(h.params().len().saturating_sub(1));
                for index in 1..h.params().len() {
                    bindings.push(self.param_str(h, index)?.to_string());
                }
                if bindings.is_empty() {
                    return Err(RenderErrorReason::ParamNotFoundForIndex(
                        self.shape.helper_name(),
                        1,
                    )
                    .into());
                }
                ImportSpec::Named(bindings)
            }
        };

        self.importer
            .add_import(library, spec)
            .map_err(|err| RenderErrorReason::Other(err.to_string()).into())
    }
}

fn registry(importer: &SharedImporter) -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    for shape in [ImportShape::Default, ImportShape::Named, ImportShape::Star] {
        registry.register_helper(
            shape.helper_name(),
            Box::new(ImportHelper {
                importer: importer.clone(),
                shape,
            }),
        );
    }
    registry
}

/// Render one template string against `data`, with the import helpers
/// bound to `importer`. `name` only labels errors.
pub fn render_template_str(
    name: &str,
    template: &str,
    data: &serde_json::Value,
    importer: &SharedImporter,
) -> Result<String> {
    registry(importer)
        .render_template(template, data)
        .map_err(|source| Error::Render {
            file: name.to_string(),
            source: Box::new(source),
        })
}
