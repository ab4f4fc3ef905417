use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator configuration
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unknown template {key}")]
    #[diagnostic(
        code(trellis::unknown_template),
        help("run 'trellis list' to see the registered template kinds")
    )]
    UnknownTemplate { key: String },

    #[error("property {property} missing in {component} generator for generating {name}")]
    #[diagnostic(
        code(trellis::missing_parameter),
        help("pass the option on the command line, e.g. --{property} ...")
    )]
    MissingParameter {
        property: String,
        component: String,
        name: String,
    },
}
