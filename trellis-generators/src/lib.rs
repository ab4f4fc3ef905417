//! Generator strategies for the Trellis component scaffolder.
//!
//! A generator strategy translates CLI arguments into a metadata record,
//! picks the templator that renders it, and hands the rendered files to
//! the file writer. Strategies are registered in the registry under a
//! camelCase key; the CLI contributes each kind's extra options to
//! `--help` from its [`OptionSpec`] list.

mod error;
mod form;
mod generator;
mod registry;

pub use error::{Error, Result};
pub use form::{FormGenerator, FormTemplates};
pub use generator::{ArgValues, GenerateOptions, Generator};
pub use registry::{GENERATORS, GeneratorKind, OptionSpec, fetch_by_key};
