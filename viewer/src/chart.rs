//! The 2D chart: a fixed-window, equal-aspect canvas with the fixture
//! rectangles drawn on top of a dashed grid.

pub mod scene;

use egui::emath::RectTransform;
use egui::*;

use rect_types::{Rectangle, RectangleSet};

use scene::{Axis, ChartScene};

// ----------------------------------------------------------------------------

/// Space around the plot area, reserved for the title, tick and axis labels.
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 28.0;
const MARGIN_BOTTOM: f32 = 44.0;

/// Dash pattern of the grid, in ui points.
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

// ----------------------------------------------------------------------------

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub(crate) struct ChartState {
    /// What the mouse is hovering (from previous frame).
    #[serde(skip)]
    hovered_box: Option<usize>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self { hovered_box: None }
    }
}

// ----------------------------------------------------------------------------

pub(crate) fn chart_ui(
    ui: &mut egui::Ui,
    state: &mut ChartState,
    title: &str,
    set: &RectangleSet,
) {
    let bounds = scene::view_bounds();

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let outer = response.rect;

    let avail = Rect::from_min_max(
        outer.min + vec2(MARGIN_LEFT, MARGIN_TOP),
        outer.max - vec2(MARGIN_RIGHT, MARGIN_BOTTOM),
    );
    let plot_rect = aspect_fit(bounds, avail);

    // Screen coordinates from data coordinates. Data min-Y lands on the top
    // edge of the plot: increasing Y renders downward.
    let ui_from_data = RectTransform::from_to(bounds, plot_rect);
    let data_from_ui = ui_from_data.inverse();

    // The chart keeps its own fixed colors regardless of the egui theme.
    painter.rect_filled(outer, 0.0, Color32::WHITE);

    let chart_scene = ChartScene::build(set);

    let mut shapes = vec![];

    for line in &chart_scene.grid {
        let points = [
            ui_from_data.transform_pos(line.points[0]),
            ui_from_data.transform_pos(line.points[1]),
        ];
        shapes.extend(Shape::dashed_line(
            &points,
            scene::grid_stroke(),
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }

    for (idx, marker) in chart_scene.boxes.iter().enumerate() {
        let rect_in_ui = ui_from_data.transform_rect(marker.rect);
        if marker.fill != Color32::TRANSPARENT {
            shapes.push(Shape::rect_filled(rect_in_ui, 0.0, marker.fill));
        }
        let outline = if state.hovered_box == Some(idx) {
            Stroke::new(2.0 * marker.outline.width, marker.outline.color)
        } else {
            marker.outline
        };
        shapes.push(Shape::rect_stroke(rect_in_ui, 0.0, outline));
    }

    shapes.push(Shape::rect_stroke(
        plot_rect,
        0.0,
        Stroke::new(1.0, Color32::BLACK),
    ));

    painter.extend(shapes);

    // ------------------------------------------------------------------------

    let tick_font = TextStyle::Small.resolve(ui.style());
    for tick in &chart_scene.ticks {
        let pos = ui_from_data.transform_pos(tick.pos);
        let (pos, anchor) = match tick.axis {
            Axis::X => (pos + vec2(0.0, 4.0), Align2::CENTER_TOP),
            Axis::Y => (pos + vec2(-6.0, 0.0), Align2::RIGHT_CENTER),
        };
        painter.text(pos, anchor, &tick.text, tick_font.clone(), Color32::DARK_GRAY);
    }

    painter.text(
        pos2(plot_rect.center().x, outer.top() + 4.0),
        Align2::CENTER_TOP,
        title,
        TextStyle::Heading.resolve(ui.style()),
        Color32::BLACK,
    );
    painter.text(
        pos2(plot_rect.center().x, outer.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "X-axis",
        TextStyle::Body.resolve(ui.style()),
        Color32::BLACK,
    );
    painter.text(
        pos2(outer.left() + 4.0, plot_rect.center().y),
        Align2::LEFT_CENTER,
        "Y-axis",
        TextStyle::Body.resolve(ui.style()),
        Color32::BLACK,
    );

    // ------------------------------------------------------------------------

    if let Some(idx) = state.hovered_box {
        if let Some(rectangle) = source_rectangle(set, idx) {
            egui::containers::popup::show_tooltip_at_pointer(
                ui.ctx(),
                Id::new("box_tooltip"),
                |ui| {
                    ui.monospace(rectangle.to_string());
                },
            );
        }
    }

    state.hovered_box = None;
    if let Some(pointer_pos) = response.hover_pos() {
        if plot_rect.contains(pointer_pos) {
            let data_pos = data_from_ui.transform_pos(pointer_pos);

            // topmost box under the cursor wins
            for (idx, rectangle) in set.rects.iter().chain(&set.inter).enumerate() {
                if rectangle.contains([data_pos.x, data_pos.y]) {
                    state.hovered_box = Some(idx);
                }
            }

            painter.text(
                plot_rect.right_bottom() + vec2(-4.0, -4.0),
                Align2::RIGHT_BOTTOM,
                format!("({:.0}, {:.0})", data_pos.x, data_pos.y),
                TextStyle::Monospace.resolve(ui.style()),
                Color32::GRAY,
            );
        }
    }
}

/// Largest sub-rect of `avail` with the aspect ratio of `bounds`, centered.
///
/// One data unit spans the same number of ui points in X and Y.
pub fn aspect_fit(bounds: Rect, avail: Rect) -> Rect {
    let scale = (avail.width() / bounds.width()).min(avail.height() / bounds.height());
    Rect::from_center_size(avail.center(), bounds.size() * scale)
}

/// The input rectangle behind a scene box index (`rects` first, then `inter`).
fn source_rectangle(set: &RectangleSet, idx: usize) -> Option<&Rectangle> {
    if idx < set.rects.len() {
        set.rects.get(idx)
    } else {
        set.inter.get(idx - set.rects.len())
    }
}
