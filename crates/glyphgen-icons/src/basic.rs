//! Basic glyphs: the icons nearly every surface ends up using.
//!
//! All icons in this module are declared as field members, so their
//! identifiers are their display names.

use glyphgen_registry::{icon_module, IconModule, IconResult};
use glyphgen_vector::{Color, Path, PathGroup, VectorIcon};

/// Basic icon declarations, under `glyphgen.icons.basic`.
pub static BASIC: IconModule = icon_module! {
    path: "glyphgen.icons.basic",
    owner: "BasicIcons",
    fields: {
        Home => home,
        Close => close,
        Check => check,
        Plus => plus,
    },
    accessors: {},
};

fn icon(path: Path) -> VectorIcon {
    VectorIcon::builder(24.0, 24.0)
        .tint(Color::BLACK)
        .group(PathGroup::new(path))
        .build()
}

/// A house outline with a door cutout.
pub fn home() -> IconResult {
    let mut path = Path::new();
    path.move_to((12.0, 3.0))
        .line_to((21.0, 11.0))
        .line_to((18.0, 11.0))
        .line_to((18.0, 20.0))
        .line_to((14.0, 20.0))
        .line_to((14.0, 14.0))
        .line_to((10.0, 14.0))
        .line_to((10.0, 20.0))
        .line_to((6.0, 20.0))
        .line_to((6.0, 11.0))
        .line_to((3.0, 11.0))
        .close();
    Ok(icon(path))
}

/// A diagonal cross.
pub fn close() -> IconResult {
    let mut path = Path::new();
    path.move_to((6.4, 5.0))
        .line_to((12.0, 10.6))
        .line_to((17.6, 5.0))
        .line_to((19.0, 6.4))
        .line_to((13.4, 12.0))
        .line_to((19.0, 17.6))
        .line_to((17.6, 19.0))
        .line_to((12.0, 13.4))
        .line_to((6.4, 19.0))
        .line_to((5.0, 17.6))
        .line_to((10.6, 12.0))
        .line_to((5.0, 6.4))
        .close();
    Ok(icon(path))
}

/// A checkmark.
pub fn check() -> IconResult {
    let mut path = Path::new();
    path.move_to((9.55, 15.15))
        .line_to((18.7, 6.0))
        .line_to((20.1, 7.4))
        .line_to((9.55, 17.95))
        .line_to((3.9, 12.3))
        .line_to((5.3, 10.9))
        .close();
    Ok(icon(path))
}

/// A plus sign.
pub fn plus() -> IconResult {
    let mut path = Path::new();
    path.move_to((11.0, 5.0))
        .line_to((13.0, 5.0))
        .line_to((13.0, 11.0))
        .line_to((19.0, 11.0))
        .line_to((19.0, 13.0))
        .line_to((13.0, 13.0))
        .line_to((13.0, 19.0))
        .line_to((11.0, 19.0))
        .line_to((11.0, 13.0))
        .line_to((5.0, 13.0))
        .line_to((5.0, 11.0))
        .line_to((11.0, 11.0))
        .close();
    Ok(icon(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_basic_icons_build() {
        for entry in BASIC.fields {
            let icon = (entry.retrieve)().expect("basic icons should build");
            assert_eq!(icon.width(), 24.0);
            assert_eq!(icon.height(), 24.0);
            assert!(!icon.groups().is_empty());
        }
    }

    #[test]
    fn test_paths_are_closed() {
        for entry in BASIC.fields {
            let icon = (entry.retrieve)().expect("basic icons should build");
            for group in icon.groups() {
                assert!(matches!(
                    group.path().commands().last(),
                    Some(glyphgen_vector::PathCommand::Close)
                ));
            }
        }
    }
}
