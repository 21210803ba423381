//! SVG serialization for Glyphgen vector icons.
//!
//! One icon in, one standalone SVG document out. The translation is
//! structural: the canvas maps onto `width`/`height`/`viewBox`, every path
//! group becomes a `<path>` element with its command sequence serialized
//! verbatim, and paint attributes map onto their SVG equivalents with
//! format defaults elided. The emitted documents stand on their own: any
//! SVG parser can consume them without knowing this crate exists.

pub mod error;
pub mod path_data;
pub mod writer;

pub use error::ExportError;
pub use path_data::{parse_path_data, to_path_data, PathDataError};
pub use writer::{sanitize_file_name, ExportResult, SvgWriter};
