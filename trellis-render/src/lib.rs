//! Template rendering and import merging for the Trellis component
//! scaffolder.
//!
//! Rendering a component works in two layers. Templates are Handlebars
//! files that declare their module imports *while rendering* through the
//! `import` helpers; the [`Importer`] accumulates those declarations and
//! merges them into one minimal import block per output file. The
//! [`Templator`] trait drives the per-file cycle: render body, render
//! import block, format, reset the importer, next file.
//!
//! # Module Organization
//!
//! - [`importer`] - Import Merger (default / named / star import rules)
//! - [`metadata`] - The structured description of one generation request
//! - [`templator`] - The per-component-kind renderer trait
//! - [`engine`] - Handlebars binding with the import helpers
//! - [`format`] - Best-effort source formatter capability

mod engine;
mod error;
pub mod format;
mod importer;
mod metadata;
mod templator;

pub use engine::render_template_str;
pub use error::{Error, Result};
pub use format::{FormatError, Formatter, SourceFormatter};
pub use importer::{ImportSpec, Importer, SharedImporter};
pub use metadata::{ApiClient, Metadata, Prop};
pub use templator::{RenderedFiles, Templator, output_filename};
