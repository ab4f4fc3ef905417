//! The generator strategy trait: from CLI arguments to written files.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use trellis_core::{WriteOptions, write_file};
use trellis_render::{Metadata, Templator};

use crate::error::Result;

/// Values of the generator-specific CLI options, keyed by option name.
pub type ArgValues = IndexMap<String, Vec<String>>;

/// Options for one `generate` invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit destination; defaults per strategy when absent
    pub output_dir: Option<PathBuf>,
    pub write: WriteOptions,
}

/// One pluggable output kind.
///
/// A strategy owns the metadata record for exactly one generation run. It
/// validates and applies CLI arguments in [`build_metadata`], then
/// [`generate`] renders every template through the strategy's templator
/// and persists the results.
///
/// [`build_metadata`]: Self::build_metadata
/// [`generate`]: Self::generate
pub trait Generator {
    /// Folder under the working directory used when `--output-dir` is not
    /// given.
    fn default_folder(&self) -> &'static str;

    fn templator(&self) -> &dyn Templator;

    fn metadata(&self) -> &Metadata;

    /// Validate the generator-specific arguments and write them into the
    /// metadata record. Fails with a descriptive error naming the missing
    /// property and the component kind/name.
    fn build_metadata(&mut self, args: &ArgValues) -> Result<()>;

    fn component_name(&self) -> &str {
        &self.metadata().name
    }

    /// Resolve the destination directory: the explicit override, else
    /// `<default_folder>/<component_name>` relative to the working
    /// directory (the writer absolutizes relative paths).
    fn output_dir(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from(self.default_folder()).join(self.component_name()),
        }
    }

    /// Render all files for this component and hand each filename/content
    /// pair to the file writer.
    fn generate(&self, options: &GenerateOptions) -> eyre::Result<()> {
        let output_dir = self.output_dir(options.output_dir.as_deref());
        let files = self.templator().render_as_file(self.metadata())?;
        for (filename, content) in &files {
            write_file(&output_dir, filename, content, &options.write)?;
        }
        Ok(())
    }
}
