//! Registry of generator kinds, looked up at CLI-parse time.

use trellis_core::to_camel_case;

use crate::form;
use crate::generator::Generator;

/// A generator-specific CLI option, turned into a clap argument by the
/// CLI once its template kind is selected.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether the option accepts multiple values
    pub multiple: bool,
    /// Help heading grouping the kind's options
    pub group: &'static str,
}

/// One registered generator kind.
pub struct GeneratorKind {
    /// Registry key in camelCase
    pub key: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionSpec],
    create: fn(&str) -> Box<dyn Generator>,
}

impl GeneratorKind {
    pub const fn new(
        key: &'static str,
        description: &'static str,
        options: &'static [OptionSpec],
        create: fn(&str) -> Box<dyn Generator>,
    ) -> Self {
        Self {
            key,
            description,
            options,
            create,
        }
    }

    /// Instantiate a strategy for one component name.
    pub fn create(&self, name: &str) -> Box<dyn Generator> {
        (self.create)(name)
    }
}

/// All registered generator kinds.
pub static GENERATORS: &[GeneratorKind] = &[form::FORM_KIND];

/// Look up a generator kind, normalizing the key to camelCase first
/// (e.g. `Form` and `form` both resolve the `form` kind; `smart-form`
/// would resolve `smartForm`).
pub fn fetch_by_key(key: &str) -> Option<&'static GeneratorKind> {
    let normalized = to_camel_case(key);
    GENERATORS.iter().find(|kind| kind.key == normalized)
}
