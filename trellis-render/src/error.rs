use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(
        "cannot merge differing star imports for \"{library}\": {existing}, {requested}"
    )]
    #[diagnostic(
        code(trellis::star_import_conflict),
        help("two distinct namespace imports of one library cannot coexist in a single import statement; alias them to the same name or import one of them as a named binding")
    )]
    StarImportConflict {
        library: String,
        existing: String,
        requested: String,
    },

    #[error("template directory {path} not found")]
    #[diagnostic(
        code(trellis::template_dir_missing),
        help("every component kind ships its templates in its own directory; check the generator's template_dir")
    )]
    TemplateDirMissing { path: PathBuf },

    #[error("template data defines the reserved key \"{key}\"")]
    #[diagnostic(
        code(trellis::reserved_data_key),
        help("the \"importer\" key is injected by the renderer for import collection; rename the field in process_metadata")
    )]
    ReservedDataKey { key: String },

    #[error("failed to render template {file}")]
    #[diagnostic(code(trellis::render_error))]
    Render {
        file: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("invalid metadata for component kind \"{component}\": {message}")]
    #[diagnostic(code(trellis::invalid_metadata))]
    InvalidMetadata { component: String, message: String },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(trellis::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize metadata")]
    #[diagnostic(code(trellis::serialize_error))]
    Serialize(#[from] serde_json::Error),
}
