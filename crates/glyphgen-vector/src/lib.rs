//! In-memory vector-icon model for Glyphgen.
//!
//! This crate defines the data the pipeline moves around: colors, path
//! geometry, paint attributes, and the [`VectorIcon`] type itself. It has
//! no I/O and no serialization; turning an icon into a document is the
//! `glyphgen-svg` crate's job.

pub mod color;
pub mod geometry;
pub mod icon;
pub mod paint;

pub use color::Color;
pub use geometry::{Path, PathCommand, Point};
pub use icon::{PathGroup, VectorIcon, VectorIconBuilder};
pub use paint::{
    FillRule, GradientStop, LineCap, LineJoin, LinearGradient, Paint, RadialGradient, Stroke,
};
