//! The literal input data, copied verbatim from the overlap test fixture.

use rect_types::{Rectangle, RectangleSet};

/// Chart title of the one hardcoded scenario.
pub const TITLE: &str = "TEST1";

/// Two overlapping primary rectangles plus their overlap region.
///
/// The `inter` entry is part of the fixture, not derived from `rects`.
pub fn test1() -> RectangleSet {
    RectangleSet {
        rects: vec![
            Rectangle::new(-100.0, -100.0, 250.0, 80.0),
            Rectangle::new(-140.0, -160.0, 250.0, 100.0),
        ],
        inter: vec![Rectangle::new(-100.0, -100.0, 210.0, 40.0)],
    }
}
