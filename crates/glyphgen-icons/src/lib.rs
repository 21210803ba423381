//! Built-in vector-icon collection for Glyphgen.
//!
//! This crate is the exporter's default scan target: every icon it ships
//! is declared in an [`IconModule`](glyphgen_registry::IconModule) under
//! the `glyphgen.icons` namespace. Library consumers can also call the
//! producer functions directly.

use glyphgen_registry::IconRegistry;

pub mod basic;
pub mod navigation;

/// Namespace that contains every module this crate declares.
pub const PACKAGE: &str = "glyphgen.icons";

/// Register all built-in icon modules.
pub fn register(registry: &mut IconRegistry) {
    registry.register(&basic::BASIC);
    registry.register(&navigation::NAVIGATION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_adds_every_module() {
        let mut registry = IconRegistry::new();
        register(&mut registry);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_default_package_covers_all_modules() {
        let mut registry = IconRegistry::new();
        register(&mut registry);
        let found = registry.discover(PACKAGE);
        assert_eq!(found.len(), 8);
        assert!(found.contains_key("Home"));
        assert!(found.contains_key("Search"));
    }
}
