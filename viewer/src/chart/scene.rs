//! What the chart draws, before any screen-space transform is applied.

use egui::{pos2, Color32, Pos2, Rect, Stroke};

use rect_types::{Rectangle, RectangleSet};

// ----------------------------------------------------------------------------

/// Spacing of the grid lines, in data units.
const GRID_STEP: i32 = 100;

/// Spacing of the numeric tick labels, in data units.
const TICK_STEP: i32 = 200;

/// Fixed view window of the chart, in data coordinates.
///
/// `min` is the top-left corner: the chart uses the screen convention where
/// Y grows downward. Independent of the input data.
pub fn view_bounds() -> Rect {
    Rect::from_min_max(pos2(-600.0, -450.0), pos2(600.0, 450.0))
}

/// 30% opaque red, the fill of primary rectangles.
pub fn primary_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 0, 0, 76)
}

pub fn primary_outline() -> Stroke {
    Stroke::new(1.0, Color32::BLACK)
}

pub fn overlay_outline() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(0, 128, 0))
}

/// Light gray, painted dashed.
pub fn grid_stroke() -> Stroke {
    Stroke::new(0.5, Color32::from_gray(211))
}

// ----------------------------------------------------------------------------

/// A styled box, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMarker {
    /// In data coordinates.
    pub rect: Rect,
    pub fill: Color32,
    pub outline: Stroke,
}

/// One grid line, spanning the view bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub points: [Pos2; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A numeric tick label, anchored to the chart edge it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// Data-space position on the relevant axis edge.
    pub pos: Pos2,
    pub text: String,
    pub axis: Axis,
}

// ----------------------------------------------------------------------------

/// Everything the chart draws for one frame, in data coordinates.
///
/// Boxes are ordered `rects` first, then `inter`, so an index into `boxes`
/// maps back to the input set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartScene {
    pub grid: Vec<GridLine>,
    pub ticks: Vec<TickLabel>,
    pub boxes: Vec<BoxMarker>,
}

impl ChartScene {
    pub fn build(set: &RectangleSet) -> Self {
        let bounds = view_bounds();
        let mut scene = Self::default();
        scene.add_grid(bounds);
        scene.add_ticks(bounds);

        for rect in &set.rects {
            scene.boxes.push(BoxMarker {
                rect: data_rect(rect),
                fill: primary_fill(),
                outline: primary_outline(),
            });
        }
        for inter in &set.inter {
            scene.boxes.push(BoxMarker {
                rect: data_rect(inter),
                fill: Color32::TRANSPARENT,
                outline: overlay_outline(),
            });
        }

        scene
    }

    fn add_grid(&mut self, bounds: Rect) {
        for x in grid_steps(bounds.min.x, bounds.max.x, GRID_STEP) {
            self.grid.push(GridLine {
                points: [pos2(x, bounds.min.y), pos2(x, bounds.max.y)],
            });
        }
        for y in grid_steps(bounds.min.y, bounds.max.y, GRID_STEP) {
            self.grid.push(GridLine {
                points: [pos2(bounds.min.x, y), pos2(bounds.max.x, y)],
            });
        }
    }

    fn add_ticks(&mut self, bounds: Rect) {
        for x in grid_steps(bounds.min.x, bounds.max.x, TICK_STEP) {
            self.ticks.push(TickLabel {
                pos: pos2(x, bounds.max.y), // bottom edge
                text: format_tick(x),
                axis: Axis::X,
            });
        }
        for y in grid_steps(bounds.min.y, bounds.max.y, TICK_STEP) {
            self.ticks.push(TickLabel {
                pos: pos2(bounds.min.x, y), // left edge
                text: format_tick(y),
                axis: Axis::Y,
            });
        }
    }
}

/// The egui rect of a [`Rectangle`], still in data coordinates.
pub fn data_rect(rect: &Rectangle) -> Rect {
    Rect::from_min_max(rect.min().into(), rect.max().into())
}

/// Multiples of `step` within `[min, max]`, aligned to zero.
fn grid_steps(min: f32, max: f32, step: i32) -> impl Iterator<Item = f32> {
    let first = (min / step as f32).ceil() as i32 * step;
    (first..=max.floor() as i32)
        .step_by(step as usize)
        .map(|value| value as f32)
}

fn format_tick(value: f32) -> String {
    format!("{}", value as i64)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_zero_aligned() {
        let scene = ChartScene::build(&RectangleSet::default());
        let vertical = scene
            .grid
            .iter()
            .filter(|line| line.points[0].x == line.points[1].x)
            .count();
        let horizontal = scene.grid.len() - vertical;

        // X ∈ [-600, 600] holds 13 multiples of 100, Y ∈ [-450, 450] holds 9.
        assert_eq!(vertical, 13);
        assert_eq!(horizontal, 9);
        assert!(scene
            .grid
            .iter()
            .flat_map(|line| line.points)
            .all(|p| view_bounds().contains(p)));
    }

    #[test]
    fn tick_labels() {
        let scene = ChartScene::build(&RectangleSet::default());
        let x_ticks: Vec<_> = scene.ticks.iter().filter(|t| t.axis == Axis::X).collect();
        let y_ticks: Vec<_> = scene.ticks.iter().filter(|t| t.axis == Axis::Y).collect();

        assert_eq!(x_ticks.len(), 7);
        assert_eq!(y_ticks.len(), 5);
        assert_eq!(x_ticks[0].text, "-600");
        assert_eq!(x_ticks[0].pos, pos2(-600.0, 450.0));
        assert_eq!(y_ticks[0].text, "-400");
        assert_eq!(y_ticks[0].pos, pos2(-600.0, -400.0));
    }

    #[test]
    fn box_order_follows_input_order() {
        let set = RectangleSet {
            rects: vec![Rectangle::new(0.0, 0.0, 10.0, 10.0)],
            inter: vec![Rectangle::new(2.0, 2.0, 4.0, 4.0)],
        };
        let scene = ChartScene::build(&set);
        assert_eq!(scene.boxes.len(), 2);
        assert_eq!(scene.boxes[0].fill, primary_fill());
        assert_eq!(scene.boxes[1].fill, Color32::TRANSPARENT);
        assert_eq!(scene.boxes[1].outline, overlay_outline());
    }

    #[test]
    fn degenerate_rectangles_pass_through() {
        // No validation: a zero-size rectangle still produces a marker.
        let set = RectangleSet {
            rects: vec![Rectangle::new(5.0, 5.0, 0.0, 0.0)],
            inter: vec![],
        };
        let scene = ChartScene::build(&set);
        assert_eq!(scene.boxes.len(), 1);
        assert_eq!(scene.boxes[0].rect, Rect::from_min_max(pos2(5.0, 5.0), pos2(5.0, 5.0)));
    }
}
