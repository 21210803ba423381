//! Glyphgen - build-time export of a component library's vector icons to
//! standalone SVG files.
//!
//! This is the umbrella crate: it re-exports the data model and registry
//! APIs and hosts the run orchestration used by the `glyphgen` binary.
//!
//! # Example
//!
//! ```no_run
//! use glyphgen::runner::{run, RunConfig};
//! use glyphgen::IconRegistry;
//!
//! fn main() -> Result<(), glyphgen::runner::RunError> {
//!     let mut registry = IconRegistry::new();
//!     glyphgen_icons::register(&mut registry);
//!     let summary = run(&registry, &RunConfig::default())?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

pub use glyphgen_registry::*;
pub use glyphgen_vector::*;

// Explicit so the declaration macro travels with the facade.
pub use glyphgen_registry::icon_module;

/// SVG serialization module.
pub mod svg {
    pub use glyphgen_svg::*;
}

pub mod runner;
