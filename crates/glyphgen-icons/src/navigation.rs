//! Navigation glyphs: chevrons, the menu button, search.
//!
//! This module declares its members as accessors, so display names go
//! through accessor-name derivation (`back` becomes `Back`).

use glyphgen_registry::{icon_module, IconModule, IconResult};
use glyphgen_vector::{Color, FillRule, Path, PathGroup, VectorIcon};

/// Navigation icon declarations, under `glyphgen.icons.navigation`.
pub static NAVIGATION: IconModule = icon_module! {
    path: "glyphgen.icons.navigation",
    owner: "NavigationIcons",
    fields: {},
    accessors: {
        back => back,
        forward => forward,
        menu => menu,
        search => search,
    },
};

fn icon(group: PathGroup) -> VectorIcon {
    VectorIcon::builder(24.0, 24.0)
        .tint(Color::BLACK)
        .group(group)
        .build()
}

/// A left-pointing chevron.
pub fn back() -> IconResult {
    let mut path = Path::new();
    path.move_to((15.4, 5.4))
        .line_to((8.8, 12.0))
        .line_to((15.4, 18.6))
        .line_to((14.0, 20.0))
        .line_to((6.0, 12.0))
        .line_to((14.0, 4.0))
        .close();
    Ok(icon(PathGroup::new(path)))
}

/// A right-pointing chevron.
pub fn forward() -> IconResult {
    let mut path = Path::new();
    path.move_to((8.6, 5.4))
        .line_to((15.2, 12.0))
        .line_to((8.6, 18.6))
        .line_to((10.0, 20.0))
        .line_to((18.0, 12.0))
        .line_to((10.0, 4.0))
        .close();
    Ok(icon(PathGroup::new(path)))
}

/// Three stacked bars.
pub fn menu() -> IconResult {
    let mut path = Path::new();
    path.move_to((4.0, 6.0))
        .rel_line_to((16.0, 0.0))
        .rel_line_to((0.0, 2.0))
        .rel_line_to((-16.0, 0.0))
        .close()
        .move_to((4.0, 11.0))
        .rel_line_to((16.0, 0.0))
        .rel_line_to((0.0, 2.0))
        .rel_line_to((-16.0, 0.0))
        .close()
        .move_to((4.0, 16.0))
        .rel_line_to((16.0, 0.0))
        .rel_line_to((0.0, 2.0))
        .rel_line_to((-16.0, 0.0))
        .close();
    Ok(icon(PathGroup::new(path)))
}

/// A magnifier: ring plus handle, drawn with an even-odd cutout.
pub fn search() -> IconResult {
    let mut path = Path::new();
    path.move_to((10.0, 3.0))
        .cubic_to((6.13, 3.0), (3.0, 6.13), (3.0, 10.0))
        .cubic_to((3.0, 13.87), (6.13, 17.0), (10.0, 17.0))
        .cubic_to((11.57, 17.0), (13.02, 16.48), (14.19, 15.61))
        .line_to((19.59, 21.0))
        .line_to((21.0, 19.59))
        .line_to((15.61, 14.19))
        .cubic_to((16.48, 13.02), (17.0, 11.57), (17.0, 10.0))
        .cubic_to((17.0, 6.13), (13.87, 3.0), (10.0, 3.0))
        .close()
        .move_to((10.0, 5.0))
        .cubic_to((12.76, 5.0), (15.0, 7.24), (15.0, 10.0))
        .cubic_to((15.0, 12.76), (12.76, 15.0), (10.0, 15.0))
        .cubic_to((7.24, 15.0), (5.0, 12.76), (5.0, 10.0))
        .cubic_to((5.0, 7.24), (7.24, 5.0), (10.0, 5.0))
        .close();
    Ok(icon(
        PathGroup::new(path).with_fill_rule(FillRule::EvenOdd),
    ))
}
