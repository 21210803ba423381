//! Icon registry and namespace discovery for Glyphgen.
//!
//! The pipeline needs to know every vector icon a package exposes. Instead
//! of reflecting over a built artifact at runtime, icon crates declare
//! their members explicitly with [`icon_module!`] and the build tool
//! registers those declarations into an [`IconRegistry`]. A scan is then a
//! plain walk over registered modules: deterministic, side-effect free, and
//! cheap.
//!
//! ```
//! use glyphgen_registry::{icon_module, IconModule, IconRegistry, IconResult};
//! use glyphgen_vector::{Path, PathGroup, VectorIcon};
//!
//! fn square() -> IconResult {
//!     Ok(VectorIcon::builder(24.0, 24.0)
//!         .group(PathGroup::new(Path::rect(4.0, 4.0, 16.0, 16.0)))
//!         .build())
//! }
//!
//! static SHAPES: IconModule = icon_module! {
//!     path: "demo.shapes",
//!     owner: "Shapes",
//!     fields: { Square => square },
//!     accessors: {},
//! };
//!
//! let mut registry = IconRegistry::new();
//! registry.register(&SHAPES);
//! let found = registry.discover("demo");
//! assert_eq!(found.len(), 1);
//! ```

pub mod module;
pub mod naming;
pub mod registry;

pub use module::{IconEntry, IconError, IconFn, IconModule, IconResult};
pub use naming::{derive_accessor_name, fallback_name};
pub use registry::{DiscoveryError, IconRegistry};
