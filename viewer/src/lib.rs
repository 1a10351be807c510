//! Interactive viewer for rectangle-overlap test fixtures.
//!
//! Draws a hardcoded [`rect_types::RectangleSet`] on a fixed 2D chart for
//! visual inspection. There is deliberately no algorithm here: the overlap
//! rectangles are part of the fixture, not computed.

mod app;
pub mod chart;
pub mod fixture;

pub use app::App;

/// Light chrome around the white chart canvas.
pub fn customize_egui(egui_ctx: &egui::Context) {
    egui_ctx.set_visuals(egui::Visuals::light());
}
