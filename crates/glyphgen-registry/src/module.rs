//! Icon module declarations.
//!
//! An [`IconModule`] is the registry's unit of declaration: one static per
//! declaring module, listing the icon members that module exposes. Members
//! come in two categories that differ only in how a display name is derived
//! from them:
//!
//! - **fields**: members named directly by their identifier;
//! - **accessors**: getter-style members whose identifier goes through
//!   [`derive_accessor_name`](crate::naming::derive_accessor_name).
//!
//! Modules are declared with the [`icon_module!`](crate::icon_module)
//! macro rather than by writing entry arrays out by hand.

use glyphgen_vector::VectorIcon;
use thiserror::Error;

/// Failure reported by an icon value producer.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct IconError(String);

impl IconError {
    /// Create a new retrieval error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Result of retrieving one icon value.
pub type IconResult = Result<VectorIcon, IconError>;

/// A value producer for one registered icon.
pub type IconFn = fn() -> IconResult;

/// One registered icon member: the declaration-site identifier plus its
/// value producer.
#[derive(Debug, Clone, Copy)]
pub struct IconEntry {
    /// Identifier from the declaration site, e.g. `Home` or `getBack`.
    pub ident: &'static str,
    /// Producer invoked during discovery to obtain the icon value.
    pub retrieve: IconFn,
}

impl IconEntry {
    /// Create a new entry.
    pub const fn new(ident: &'static str, retrieve: IconFn) -> Self {
        Self { ident, retrieve }
    }
}

/// A declared icon module: a dotted namespace path and its exposed members.
#[derive(Debug, Clone, Copy)]
pub struct IconModule {
    /// Dotted namespace path, e.g. `glyphgen.icons.basic`.
    pub path: &'static str,
    /// Simple name of the declaring type, used only in fallback names.
    pub owner: &'static str,
    /// Field members, in declaration order.
    pub fields: &'static [IconEntry],
    /// Accessor members, in declaration order.
    pub accessors: &'static [IconEntry],
}

impl IconModule {
    /// Check whether this module lies inside the given package: either the
    /// package itself or any namespace nested under it.
    pub fn in_package(&self, package: &str) -> bool {
        match self.path.strip_prefix(package) {
            Some("") => true,
            Some(rest) => rest.starts_with('.'),
            None => false,
        }
    }

    /// Total number of declared members.
    pub fn member_count(&self) -> usize {
        self.fields.len() + self.accessors.len()
    }
}

/// Declare an [`IconModule`] static.
///
/// Field entries are named by their identifier verbatim; accessor entries
/// go through accessor-name derivation during discovery. Either section may
/// be empty.
///
/// # Example
///
/// ```
/// use glyphgen_registry::{icon_module, IconModule, IconResult};
/// use glyphgen_vector::{Path, PathGroup, VectorIcon};
///
/// fn dot() -> IconResult {
///     let mut path = Path::new();
///     path.move_to((11.0, 11.0)).rel_line_to((2.0, 2.0));
///     Ok(VectorIcon::builder(24.0, 24.0)
///         .group(PathGroup::new(path))
///         .build())
/// }
///
/// pub static DOTS: IconModule = icon_module! {
///     path: "demo.dots",
///     owner: "Dots",
///     fields: { Dot => dot },
///     accessors: {},
/// };
///
/// assert_eq!(DOTS.member_count(), 1);
/// ```
#[macro_export]
macro_rules! icon_module {
    (
        path: $path:expr,
        owner: $owner:expr,
        fields: { $($fident:ident => $ffn:expr),* $(,)? },
        accessors: { $($aident:ident => $afn:expr),* $(,)? } $(,)?
    ) => {
        $crate::IconModule {
            path: $path,
            owner: $owner,
            fields: &[$($crate::IconEntry::new(stringify!($fident), $ffn),)*],
            accessors: &[$($crate::IconEntry::new(stringify!($aident), $afn),)*],
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphgen_vector::{Path, PathGroup, VectorIcon};

    fn blank() -> IconResult {
        Ok(VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::new(Path::rect(0.0, 0.0, 24.0, 24.0)))
            .build())
    }

    static MODULE: IconModule = icon_module! {
        path: "pkg.shapes",
        owner: "Shapes",
        fields: { Square => blank, Circle => blank },
        accessors: { getTriangle => blank },
    };

    #[test]
    fn test_macro_preserves_declaration_order() {
        assert_eq!(MODULE.fields[0].ident, "Square");
        assert_eq!(MODULE.fields[1].ident, "Circle");
        assert_eq!(MODULE.accessors[0].ident, "getTriangle");
        assert_eq!(MODULE.member_count(), 3);
    }

    #[test]
    fn test_in_package_exact_and_nested() {
        assert!(MODULE.in_package("pkg.shapes"));
        assert!(MODULE.in_package("pkg"));
        assert!(!MODULE.in_package("pkg.shape"));
        assert!(!MODULE.in_package("pkg.shapes.inner"));
        assert!(!MODULE.in_package("other"));
    }

    #[test]
    fn test_entry_retrieval() {
        let icon = (MODULE.fields[0].retrieve)().expect("producer should succeed");
        assert_eq!(icon.width(), 24.0);
    }
}
