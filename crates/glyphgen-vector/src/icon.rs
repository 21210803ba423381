//! The vector-icon type exported by the pipeline.
//!
//! A [`VectorIcon`] is a resolution-independent description of one icon: a
//! canvas in design units, an optional default tint, and an ordered list of
//! [`PathGroup`]s. Icons are immutable once built; construct them through
//! [`VectorIcon::builder`].
//!
//! # Example
//!
//! ```
//! use glyphgen_vector::{Color, Path, PathGroup, VectorIcon};
//!
//! let mut path = Path::new();
//! path.move_to((4.0, 12.0)).line_to((20.0, 12.0)).close();
//!
//! let icon = VectorIcon::builder(24.0, 24.0)
//!     .tint(Color::BLACK)
//!     .group(PathGroup::new(path))
//!     .build();
//!
//! assert_eq!(icon.groups().len(), 1);
//! ```

use crate::color::Color;
use crate::geometry::Path;
use crate::paint::{FillRule, Paint, Stroke};

/// One drawing primitive within an icon: geometry plus paint attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
    path: Path,
    fill: Option<Paint>,
    fill_rule: FillRule,
    stroke: Option<Stroke>,
    opacity: f32,
}

impl PathGroup {
    /// Create a group with no explicit paint.
    ///
    /// A group without a fill inherits the icon's default tint at export
    /// time.
    pub fn new(path: Path) -> Self {
        Self {
            path,
            fill: None,
            fill_rule: FillRule::NonZero,
            stroke: None,
            opacity: 1.0,
        }
    }

    /// Create a group filled with the given paint.
    pub fn filled(path: Path, fill: impl Into<Paint>) -> Self {
        Self {
            fill: Some(fill.into()),
            ..Self::new(path)
        }
    }

    /// Set the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Paint>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the fill rule.
    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    /// Set the stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the group opacity (clamped to `0.0..=1.0`).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// The group's geometry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The explicit fill paint, if any.
    pub fn fill(&self) -> Option<&Paint> {
        self.fill.as_ref()
    }

    /// The fill rule.
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// The stroke, if any.
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// The group opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// An immutable, resolution-independent icon description.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorIcon {
    width: f32,
    height: f32,
    tint: Option<Color>,
    groups: Vec<PathGroup>,
}

impl VectorIcon {
    /// Start building an icon with the given canvas dimensions.
    pub fn builder(width: f32, height: f32) -> VectorIconBuilder {
        VectorIconBuilder {
            width,
            height,
            tint: None,
            groups: Vec::new(),
        }
    }

    /// Canvas width in design units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in design units.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Default tint applied to groups with no explicit fill.
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// The icon's path groups, in paint order.
    pub fn groups(&self) -> &[PathGroup] {
        &self.groups
    }
}

/// Builder for [`VectorIcon`].
#[derive(Debug, Clone)]
pub struct VectorIconBuilder {
    width: f32,
    height: f32,
    tint: Option<Color>,
    groups: Vec<PathGroup>,
}

impl VectorIconBuilder {
    /// Set the default tint.
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Append a path group.
    pub fn group(mut self, group: PathGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Finish building the icon.
    pub fn build(self) -> VectorIcon {
        VectorIcon {
            width: self.width,
            height: self.height,
            tint: self.tint,
            groups: self.groups,
        }
    }
}
