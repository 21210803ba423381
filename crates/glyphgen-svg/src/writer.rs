//! SVG document assembly and per-icon file output.
//!
//! The writer turns one [`VectorIcon`] into a standalone SVG document:
//! canvas dimensions become the root element's `width`/`height`/`viewBox`
//! (coordinate space preserved exactly), each path group becomes one
//! `<path>` element, and paint attributes map onto the corresponding SVG
//! attributes. Attributes whose value equals the format's documented
//! default are omitted. Gradient definitions are emitted once per document
//! inside `<defs>` and shared by every group whose paint compares equal.
//!
//! # Example
//!
//! ```
//! use glyphgen_svg::SvgWriter;
//! use glyphgen_vector::{Color, Path, PathGroup, VectorIcon};
//!
//! let mut path = Path::new();
//! path.move_to((4.0, 4.0)).line_to((20.0, 20.0)).close();
//! let icon = VectorIcon::builder(24.0, 24.0)
//!     .group(PathGroup::filled(path, Color::BLACK))
//!     .build();
//!
//! let document = SvgWriter::new().document(&icon)?;
//! assert!(document.contains("viewBox=\"0 0 24 24\""));
//! # Ok::<(), glyphgen_svg::ExportError>(())
//! ```

use std::fs;
use std::path::{Path as FsPath, PathBuf};

use glyphgen_vector::{
    Color, FillRule, LineCap, LineJoin, LinearGradient, Paint, PathGroup, RadialGradient, Stroke,
    VectorIcon,
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::ExportError;
use crate::path_data::to_path_data;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Replace every character outside `[A-Za-z0-9._-]` with an underscore.
///
/// Each disallowed character maps to exactly one underscore, so distinct
/// inputs can still collide; name uniqueness is the discoverer's problem,
/// not the sanitizer's.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Per-icon outcome of an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResult {
    /// The file was written.
    Success {
        /// Path of the written document.
        file: PathBuf,
    },
    /// Serialization or the write failed; the batch continues.
    Failure {
        /// Display name of the icon that failed.
        name: String,
        /// Human-readable reason.
        reason: String,
    },
}

impl ExportResult {
    /// Check if this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Serializer from [`VectorIcon`] to standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgWriter {
    indent: bool,
}

impl SvgWriter {
    /// Create a writer producing indented documents.
    pub fn new() -> Self {
        Self { indent: true }
    }

    /// Create a writer producing single-line documents.
    pub fn compact() -> Self {
        Self { indent: false }
    }

    /// Serialize one icon to a document string.
    pub fn document(&self, icon: &VectorIcon) -> Result<String, ExportError> {
        let mut writer = if self.indent {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NS));
        svg.push_attribute(("width", format_f32(icon.width()).as_str()));
        svg.push_attribute(("height", format_f32(icon.height()).as_str()));
        svg.push_attribute((
            "viewBox",
            format!(
                "0 0 {} {}",
                format_f32(icon.width()),
                format_f32(icon.height())
            )
            .as_str(),
        ));
        writer.write_event(Event::Start(svg))?;

        let gradients = collect_gradients(icon)?;
        if !gradients.is_empty() {
            writer.write_event(Event::Start(BytesStart::new("defs")))?;
            for (index, paint) in gradients.iter().enumerate() {
                write_gradient(&mut writer, paint, index)?;
            }
            writer.write_event(Event::End(BytesEnd::new("defs")))?;
        }

        for group in icon.groups() {
            write_group(&mut writer, group, icon.tint(), &gradients)?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;

        let bytes = writer.into_inner();
        String::from_utf8(bytes)
            .map_err(|e| ExportError::InvalidIcon(format!("document is not utf-8: {}", e)))
    }

    /// Write one icon as `<sanitize(name)>.svg` inside `dir`.
    ///
    /// The directory is created (with parents) if absent.
    pub fn write_to(
        &self,
        name: &str,
        icon: &VectorIcon,
        dir: &FsPath,
    ) -> Result<PathBuf, ExportError> {
        let document = self.document(icon)?;
        fs::create_dir_all(dir)?;
        let file = dir.join(format!("{}.svg", sanitize_file_name(name)));
        fs::write(&file, document)?;
        Ok(file)
    }

    /// Write one icon, folding any error into a recorded [`ExportResult`].
    pub fn export(&self, name: &str, icon: &VectorIcon, dir: &FsPath) -> ExportResult {
        match self.write_to(name, icon, dir) {
            Ok(file) => ExportResult::Success { file },
            Err(err) => ExportResult::Failure {
                name: name.to_owned(),
                reason: err.to_string(),
            },
        }
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique gradient paints used by the icon, in first-use order.
fn collect_gradients(icon: &VectorIcon) -> Result<Vec<Paint>, ExportError> {
    let mut gradients: Vec<Paint> = Vec::new();
    let mut add = |paint: &Paint| -> Result<(), ExportError> {
        if paint.is_solid() {
            return Ok(());
        }
        validate_gradient(paint)?;
        if !gradients.iter().any(|seen| seen == paint) {
            gradients.push(paint.clone());
        }
        Ok(())
    };

    for group in icon.groups() {
        if let Some(fill) = group.fill() {
            add(fill)?;
        }
        if let Some(stroke) = group.stroke() {
            add(&stroke.paint)?;
        }
    }
    Ok(gradients)
}

fn validate_gradient(paint: &Paint) -> Result<(), ExportError> {
    let stops = match paint {
        Paint::LinearGradient(g) => &g.stops,
        Paint::RadialGradient(g) => &g.stops,
        Paint::Solid(_) => return Ok(()),
    };
    if stops.is_empty() {
        return Err(ExportError::InvalidIcon(
            "gradient with no color stops".into(),
        ));
    }
    Ok(())
}

fn gradient_id(index: usize) -> String {
    format!("grad{}", index)
}

/// Id of a structurally-equal gradient collected earlier.
fn gradient_ref(gradients: &[Paint], paint: &Paint) -> Option<String> {
    gradients
        .iter()
        .position(|seen| seen == paint)
        .map(gradient_id)
}

fn write_gradient(
    writer: &mut Writer<Vec<u8>>,
    paint: &Paint,
    index: usize,
) -> Result<(), ExportError> {
    match paint {
        Paint::LinearGradient(g) => write_linear_gradient(writer, g, index),
        Paint::RadialGradient(g) => write_radial_gradient(writer, g, index),
        Paint::Solid(_) => Ok(()),
    }
}

fn write_linear_gradient(
    writer: &mut Writer<Vec<u8>>,
    gradient: &LinearGradient,
    index: usize,
) -> Result<(), ExportError> {
    let mut el = BytesStart::new("linearGradient");
    el.push_attribute(("id", gradient_id(index).as_str()));
    el.push_attribute(("gradientUnits", "userSpaceOnUse"));
    el.push_attribute(("x1", format_f32(gradient.start.x).as_str()));
    el.push_attribute(("y1", format_f32(gradient.start.y).as_str()));
    el.push_attribute(("x2", format_f32(gradient.end.x).as_str()));
    el.push_attribute(("y2", format_f32(gradient.end.y).as_str()));
    writer.write_event(Event::Start(el))?;
    write_stops(writer, &gradient.stops)?;
    writer.write_event(Event::End(BytesEnd::new("linearGradient")))?;
    Ok(())
}

fn write_radial_gradient(
    writer: &mut Writer<Vec<u8>>,
    gradient: &RadialGradient,
    index: usize,
) -> Result<(), ExportError> {
    let mut el = BytesStart::new("radialGradient");
    el.push_attribute(("id", gradient_id(index).as_str()));
    el.push_attribute(("gradientUnits", "userSpaceOnUse"));
    el.push_attribute(("cx", format_f32(gradient.center.x).as_str()));
    el.push_attribute(("cy", format_f32(gradient.center.y).as_str()));
    el.push_attribute(("r", format_f32(gradient.radius).as_str()));
    if let Some(focus) = gradient.focus {
        el.push_attribute(("fx", format_f32(focus.x).as_str()));
        el.push_attribute(("fy", format_f32(focus.y).as_str()));
    }
    writer.write_event(Event::Start(el))?;
    write_stops(writer, &gradient.stops)?;
    writer.write_event(Event::End(BytesEnd::new("radialGradient")))?;
    Ok(())
}

fn write_stops(
    writer: &mut Writer<Vec<u8>>,
    stops: &[glyphgen_vector::GradientStop],
) -> Result<(), ExportError> {
    for stop in stops {
        let mut el = BytesStart::new("stop");
        el.push_attribute(("offset", format_f32(stop.offset).as_str()));
        el.push_attribute(("stop-color", stop.color.to_hex_rgb().as_str()));
        if !stop.color.is_opaque() {
            el.push_attribute(("stop-opacity", format_f32(stop.color.alpha_f32()).as_str()));
        }
        writer.write_event(Event::Empty(el))?;
    }
    Ok(())
}

fn write_group(
    writer: &mut Writer<Vec<u8>>,
    group: &PathGroup,
    tint: Option<Color>,
    gradients: &[Paint],
) -> Result<(), ExportError> {
    let mut el = BytesStart::new("path");
    el.push_attribute(("d", to_path_data(group.path().commands()).as_str()));

    // Explicit fill, else the icon's default tint, else the format default.
    match group.fill() {
        Some(Paint::Solid(color)) => {
            el.push_attribute(("fill", color.to_hex_rgb().as_str()));
            if !color.is_opaque() {
                el.push_attribute(("fill-opacity", format_f32(color.alpha_f32()).as_str()));
            }
        }
        Some(paint) => {
            if let Some(id) = gradient_ref(gradients, paint) {
                el.push_attribute(("fill", format!("url(#{})", id).as_str()));
            }
        }
        None => {
            if let Some(tint) = tint {
                el.push_attribute(("fill", tint.to_hex_rgb().as_str()));
                if !tint.is_opaque() {
                    el.push_attribute(("fill-opacity", format_f32(tint.alpha_f32()).as_str()));
                }
            }
        }
    }

    if group.fill_rule() == FillRule::EvenOdd {
        el.push_attribute(("fill-rule", "evenodd"));
    }

    if let Some(stroke) = group.stroke() {
        write_stroke_attributes(&mut el, stroke, gradients);
    }

    if group.opacity() != 1.0 {
        el.push_attribute(("opacity", format_f32(group.opacity()).as_str()));
    }

    writer.write_event(Event::Empty(el))?;
    Ok(())
}

fn write_stroke_attributes(el: &mut BytesStart<'_>, stroke: &Stroke, gradients: &[Paint]) {
    match &stroke.paint {
        Paint::Solid(color) => {
            el.push_attribute(("stroke", color.to_hex_rgb().as_str()));
            if !color.is_opaque() {
                el.push_attribute(("stroke-opacity", format_f32(color.alpha_f32()).as_str()));
            }
        }
        paint => {
            if let Some(id) = gradient_ref(gradients, paint) {
                el.push_attribute(("stroke", format!("url(#{})", id).as_str()));
            }
        }
    }
    if stroke.width != 1.0 {
        el.push_attribute(("stroke-width", format_f32(stroke.width).as_str()));
    }
    match stroke.cap {
        LineCap::Butt => {}
        LineCap::Round => el.push_attribute(("stroke-linecap", "round")),
        LineCap::Square => el.push_attribute(("stroke-linecap", "square")),
    }
    match stroke.join {
        LineJoin::Miter => {}
        LineJoin::Round => el.push_attribute(("stroke-linejoin", "round")),
        LineJoin::Bevel => el.push_attribute(("stroke-linejoin", "bevel")),
    }
    if stroke.miter_limit != 4.0 {
        el.push_attribute(("stroke-miterlimit", format_f32(stroke.miter_limit).as_str()));
    }
}

fn format_f32(value: f32) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphgen_vector::{GradientStop, Path, Point};

    fn home_icon() -> VectorIcon {
        let mut path = Path::new();
        path.move_to((12.0, 3.0))
            .line_to((21.0, 11.0))
            .line_to((18.0, 11.0))
            .line_to((18.0, 20.0))
            .line_to((6.0, 20.0))
            .line_to((6.0, 11.0))
            .line_to((3.0, 11.0))
            .close();
        VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::filled(path, Color::BLACK))
            .build()
    }

    fn sample_gradient() -> Paint {
        Paint::linear_gradient(
            Point::new(0.0, 0.0),
            Point::new(0.0, 24.0),
            vec![
                GradientStop::new(0.0, Color::WHITE),
                GradientStop::new(1.0, Color::BLACK),
            ],
        )
    }

    #[test]
    fn test_sanitize_passes_allowed_characters() {
        assert_eq!(sanitize_file_name("Icon_1.2-b"), "Icon_1.2-b");
    }

    #[test]
    fn test_sanitize_replaces_each_disallowed_character() {
        assert_eq!(sanitize_file_name("My Icon/Name!"), "My_Icon_Name_");
        assert_eq!(sanitize_file_name("a\u{e9}b"), "a_b");
    }

    #[test]
    fn test_document_canvas_mapping() {
        let doc = SvgWriter::new().document(&home_icon()).expect("serializes");
        assert!(doc.contains("width=\"24\""));
        assert!(doc.contains("height=\"24\""));
        assert!(doc.contains("viewBox=\"0 0 24 24\""));
    }

    #[test]
    fn test_document_path_data_verbatim() {
        let icon = home_icon();
        let doc = SvgWriter::new().document(&icon).expect("serializes");
        let expected = to_path_data(icon.groups()[0].path().commands());
        assert!(doc.contains(&format!("d=\"{}\"", expected)));
    }

    #[test]
    fn test_document_defaults_are_omitted() {
        let doc = SvgWriter::new().document(&home_icon()).expect("serializes");
        assert!(!doc.contains("fill-rule"));
        assert!(!doc.contains("opacity"));
        assert!(!doc.contains("stroke"));
    }

    #[test]
    fn test_document_even_odd_and_opacity_emitted() {
        let icon = VectorIcon::builder(24.0, 24.0)
            .group(
                PathGroup::filled(Path::rect(2.0, 2.0, 20.0, 20.0), Color::RED)
                    .with_fill_rule(FillRule::EvenOdd)
                    .with_opacity(0.5),
            )
            .build();
        let doc = SvgWriter::new().document(&icon).expect("serializes");
        assert!(doc.contains("fill-rule=\"evenodd\""));
        assert!(doc.contains("opacity=\"0.5\""));
        assert!(doc.contains("fill=\"#FF0000\""));
    }

    #[test]
    fn test_tint_fills_groups_without_explicit_paint() {
        let icon = VectorIcon::builder(24.0, 24.0)
            .tint(Color::from_rgb8(0x33, 0x66, 0x99))
            .group(PathGroup::new(Path::rect(0.0, 0.0, 24.0, 24.0)))
            .build();
        let doc = SvgWriter::new().document(&icon).expect("serializes");
        assert!(doc.contains("fill=\"#336699\""));
    }

    #[test]
    fn test_untinted_unfilled_group_omits_fill() {
        let icon = VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::new(Path::rect(0.0, 0.0, 24.0, 24.0)))
            .build();
        let doc = SvgWriter::new().document(&icon).expect("serializes");
        assert!(!doc.contains("fill="));
    }

    #[test]
    fn test_shared_gradient_emitted_once() {
        let icon = VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::filled(
                Path::rect(0.0, 0.0, 12.0, 24.0),
                sample_gradient(),
            ))
            .group(PathGroup::filled(
                Path::rect(12.0, 0.0, 12.0, 24.0),
                sample_gradient(),
            ))
            .build();
        let doc = SvgWriter::new().document(&icon).expect("serializes");

        assert_eq!(doc.matches("<linearGradient").count(), 1);
        assert_eq!(doc.matches("fill=\"url(#grad0)\"").count(), 2);
    }

    #[test]
    fn test_distinct_gradients_get_distinct_ids() {
        let radial = Paint::radial_gradient(
            Point::new(12.0, 12.0),
            12.0,
            None,
            vec![
                GradientStop::new(0.0, Color::RED),
                GradientStop::new(1.0, Color::BLUE),
            ],
        );
        let icon = VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::filled(
                Path::rect(0.0, 0.0, 12.0, 24.0),
                sample_gradient(),
            ))
            .group(PathGroup::filled(Path::rect(12.0, 0.0, 12.0, 24.0), radial))
            .build();
        let doc = SvgWriter::new().document(&icon).expect("serializes");

        assert!(doc.contains("id=\"grad0\""));
        assert!(doc.contains("id=\"grad1\""));
        assert!(doc.contains("<radialGradient"));
    }

    #[test]
    fn test_stroke_attributes() {
        let stroke = Stroke::new(Color::BLUE, 2.0)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Round);
        let mut path = Path::new();
        path.move_to((4.0, 12.0)).line_to((20.0, 12.0));
        let icon = VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::new(path).with_stroke(stroke))
            .build();
        let doc = SvgWriter::new().document(&icon).expect("serializes");

        assert!(doc.contains("stroke=\"#0000FF\""));
        assert!(doc.contains("stroke-width=\"2\""));
        assert!(doc.contains("stroke-linecap=\"round\""));
        assert!(doc.contains("stroke-linejoin=\"round\""));
        assert!(!doc.contains("stroke-miterlimit"));
    }

    #[test]
    fn test_empty_gradient_is_rejected() {
        let icon = VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::filled(
                Path::rect(0.0, 0.0, 24.0, 24.0),
                Paint::linear_gradient(Point::new(0.0, 0.0), Point::new(24.0, 0.0), Vec::new()),
            ))
            .build();
        let err = SvgWriter::new()
            .document(&icon)
            .expect_err("no stops should fail");
        assert!(matches!(err, ExportError::InvalidIcon(_)));
    }

    #[test]
    fn test_compact_writer_emits_single_line() {
        let doc = SvgWriter::compact()
            .document(&home_icon())
            .expect("serializes");
        assert!(!doc.contains('\n'));
    }

    #[test]
    fn test_document_parses_as_svg() {
        let doc = SvgWriter::new().document(&home_icon()).expect("serializes");
        let tree = usvg::Tree::from_str(&doc, &usvg::Options::default())
            .expect("emitted document should parse as SVG");
        assert_eq!(tree.size().width(), 24.0);
        assert_eq!(tree.size().height(), 24.0);
    }

    #[test]
    fn test_write_to_uses_sanitized_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = SvgWriter::new()
            .write_to("My Icon/Name!", &home_icon(), dir.path())
            .expect("writes");

        assert_eq!(file, dir.path().join("My_Icon_Name_.svg"));
        assert!(file.exists());
    }

    #[test]
    fn test_write_to_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        let file = SvgWriter::new()
            .write_to("Home", &home_icon(), &nested)
            .expect("writes");
        assert!(file.exists());
    }

    #[test]
    fn test_export_records_failure_instead_of_erroring() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bad = VectorIcon::builder(24.0, 24.0)
            .group(PathGroup::filled(
                Path::rect(0.0, 0.0, 24.0, 24.0),
                Paint::linear_gradient(Point::new(0.0, 0.0), Point::new(24.0, 0.0), Vec::new()),
            ))
            .build();

        let result = SvgWriter::new().export("Bad", &bad, dir.path());
        match result {
            ExportResult::Failure { name, reason } => {
                assert_eq!(name, "Bad");
                assert!(reason.contains("invalid icon data"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
