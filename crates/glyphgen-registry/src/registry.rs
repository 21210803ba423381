//! The icon registry and the namespace scan over it.
//!
//! [`IconRegistry`] replaces runtime type introspection with an explicit
//! collection of declared [`IconModule`]s. Discovery walks every module
//! inside a package and produces a name-keyed mapping of icon values, with
//! deterministic order and first-writer-wins deduplication.

use std::collections::BTreeMap;

use glyphgen_vector::VectorIcon;
use thiserror::Error;
use tracing::warn;

use crate::module::{IconError, IconModule};
use crate::naming::{derive_accessor_name, fallback_name};

/// A member-level scan failure. Recovered locally: the member is skipped
/// with a warning and the scan continues.
#[derive(Debug, Clone, Error)]
pub enum DiscoveryError {
    /// Reading a field member's value failed.
    #[error("field {module}.{ident}: {source}")]
    Field {
        module: &'static str,
        ident: &'static str,
        source: IconError,
    },
    /// Invoking an accessor member failed.
    #[error("accessor {module}.{ident}: {source}")]
    Accessor {
        module: &'static str,
        ident: &'static str,
        source: IconError,
    },
}

/// An explicit registry of icon modules.
///
/// Modules register under their namespace path; scans iterate them in
/// lexical path order, so a run's output is independent of registration
/// order. Registering two modules under one path keeps the first and
/// ignores the rest.
#[derive(Debug, Default)]
pub struct IconRegistry {
    modules: BTreeMap<&'static str, &'static IconModule>,
}

impl IconRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one module. First registration of a path wins.
    pub fn register(&mut self, module: &'static IconModule) {
        if self.modules.contains_key(module.path) {
            warn!("module {} already registered, ignoring duplicate", module.path);
            return;
        }
        self.modules.insert(module.path, module);
    }

    /// Register a batch of modules.
    pub fn register_all(&mut self, modules: &'static [IconModule]) {
        for module in modules {
            self.register(module);
        }
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no modules are registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate the registered modules in lexical path order.
    pub fn modules(&self) -> impl Iterator<Item = &IconModule> {
        self.modules.values().copied()
    }

    /// Scan a package and collect every exposed icon value under a unique
    /// display name.
    ///
    /// Modules are visited in lexical path order; within a module, field
    /// members first, then accessor members, each in declaration order.
    /// When two members derive the same name, the first one encountered
    /// wins and later duplicates are dropped. A member whose value
    /// retrieval fails is skipped with a warning and never aborts the
    /// scan. A package with no icon members yields an empty mapping.
    pub fn discover(&self, package: &str) -> BTreeMap<String, VectorIcon> {
        let mut found = BTreeMap::new();

        for module in self.modules.values().filter(|m| m.in_package(package)) {
            for entry in module.fields {
                match (entry.retrieve)() {
                    Ok(icon) => {
                        found.entry(entry.ident.to_owned()).or_insert(icon);
                    }
                    Err(source) => {
                        let err = DiscoveryError::Field {
                            module: module.path,
                            ident: entry.ident,
                            source,
                        };
                        warn!("skipping {}", err);
                    }
                }
            }

            for entry in module.accessors {
                let derived = derive_accessor_name(entry.ident);
                let name = if derived.trim().is_empty() {
                    fallback_name(module.owner, entry.ident)
                } else {
                    derived
                };
                match (entry.retrieve)() {
                    Ok(icon) => {
                        found.entry(name).or_insert(icon);
                    }
                    Err(source) => {
                        let err = DiscoveryError::Accessor {
                            module: module.path,
                            ident: entry.ident,
                            source,
                        };
                        warn!("skipping {}", err);
                    }
                }
            }
        }

        found
    }
}
