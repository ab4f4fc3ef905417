//! Import Merger: accumulates the import declarations templates emit while
//! rendering and merges them into one minimal import block per output file.

use std::sync::{Arc, Mutex};

use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};

/// An import declaration as issued by a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpec {
    /// A single default-import binding. A binding starting with `* as `
    /// is a star (namespace) import, a restricted subtype of default.
    Default(String),
    /// A non-empty collection of named-import bindings.
    Named(Vec<String>),
}

impl ImportSpec {
    pub fn default_import(binding: impl Into<String>) -> Self {
        Self::Default(binding.into())
    }

    pub fn star_import(alias: impl Into<String>) -> Self {
        Self::Default(format!("* as {}", alias.into()))
    }

    pub fn named(bindings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Named(bindings.into_iter().map(Into::into).collect())
    }
}

/// The merged shape of one library's imports.
///
/// An entry transitions `Default` -> `Named` when a named import (or a
/// differing non-star default) is added; it never reverts.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ImportEntry {
    Default(String),
    Named(IndexSet<String>),
}

fn is_star(binding: &str) -> bool {
    binding.starts_with("* as ")
}

fn as_default_alias(binding: &str) -> String {
    format!("default as {}", binding)
}

/// Accumulates and merges import declarations for exactly one output file
/// at a time.
///
/// Libraries render in first-seen order; named bindings keep their
/// insertion order with duplicates collapsed. Ambiguous default-import
/// merges are recorded on a warning side-channel that the renderer drains
/// after each file; only differing star imports are a hard error.
#[derive(Debug, Default)]
pub struct Importer {
    entries: IndexMap<String, ImportEntry>,
    warnings: Vec<String>,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one import declaration into the table.
    ///
    /// Fails only on differing star imports for the same library, in which
    /// case the table is left exactly as it was before the call.
    pub fn add_import(&mut self, library: &str, spec: ImportSpec) -> Result<()> {
        match spec {
            ImportSpec::Default(binding) => self.add_default(library, binding),
            ImportSpec::Named(bindings) => {
                self.add_named(library, bindings);
                Ok(())
            }
        }
    }

    fn add_default(&mut self, library: &str, binding: String) -> Result<()> {
        let Some(entry) = self.entries.get_mut(library) else {
            self.entries
                .insert(library.to_string(), ImportEntry::Default(binding));
            return Ok(());
        };

        match entry {
            ImportEntry::Default(existing) => {
                if *existing == binding {
                    // Idempotent, star or not
                    return Ok(());
                }
                if is_star(existing) || is_star(&binding) {
                    return Err(Error::StarImportConflict {
                        library: library.to_string(),
                        existing: existing.clone(),
                        requested: binding,
                    });
                }
                self.warnings.push(format!(
                    "varying default imports for the same library \"{}\": {}, {}",
                    library, existing, binding
                ));
                let mut set = IndexSet::new();
                set.insert(as_default_alias(existing));
                set.insert(as_default_alias(&binding));
                *entry = ImportEntry::Named(set);
            }
            ImportEntry::Named(set) => {
                set.insert(as_default_alias(&binding));
            }
        }
        Ok(())
    }

    fn add_named(&mut self, library: &str, bindings: Vec<String>) {
        if bindings.is_empty() {
            return;
        }
        match self.entries.get_mut(library) {
            None => {
                self.entries.insert(
                    library.to_string(),
                    ImportEntry::Named(bindings.into_iter().collect()),
                );
            }
            Some(entry) => match entry {
                ImportEntry::Default(existing) => {
                    let mut set = IndexSet::new();
                    set.insert(as_default_alias(existing));
                    set.extend(bindings);
                    *entry = ImportEntry::Named(set);
                }
                ImportEntry::Named(set) => {
                    set.extend(bindings);
                }
            },
        }
    }

    /// Render one import statement per library, in first-seen order.
    pub fn render_imports(&self) -> String {
        let statements: Vec<String> = self
            .entries
            .iter()
            .map(|(library, entry)| match entry {
                ImportEntry::Default(binding) => {
                    format!("import {} from \"{}\";", binding, library)
                }
                ImportEntry::Named(bindings) => {
                    let list: Vec<&str> = bindings.iter().map(String::as_str).collect();
                    format!("import {{ {} }} from \"{}\";", list.join(", "), library)
                }
            })
            .collect();
        statements.join("\n")
    }

    /// Clear all accumulated imports and warnings. Called by the renderer
    /// after each output file's import block has been consumed.
    pub fn reset_imports(&mut self) {
        self.entries.clear();
        self.warnings.clear();
    }

    /// Drain the soft-warning side-channel.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cloneable handle to an [`Importer`] shared between the renderer and the
/// template engine's import helpers.
///
/// The engine requires its helpers to be `Send + Sync`, hence the mutex;
/// rendering itself is strictly sequential. One handle is created per
/// `render_as_file` call and never outlives it.
#[derive(Debug, Clone, Default)]
pub struct SharedImporter(Arc<Mutex<Importer>>);

impl SharedImporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Importer) -> T) -> T {
        let mut guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    pub fn add_import(&self, library: &str, spec: ImportSpec) -> Result<()> {
        self.with(|importer| importer.add_import(library, spec))
    }

    pub fn render_imports(&self) -> String {
        self.with(|importer| importer.render_imports())
    }

    pub fn reset_imports(&self) {
        self.with(|importer| importer.reset_imports());
    }

    pub fn take_warnings(&self) -> Vec<String> {
        self.with(|importer| importer.take_warnings())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|importer| importer.is_empty())
    }
}
