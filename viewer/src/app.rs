use eframe::egui;

use rect_types::RectangleSet;

use crate::chart::{self, ChartState};
use crate::fixture;

// ----------------------------------------------------------------------------

pub struct App {
    /// The fixture being inspected.
    set: RectangleSet,

    state: AppState,
}

impl App {
    pub fn new(storage: Option<&dyn eframe::Storage>, set: RectangleSet) -> Self {
        let state = storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self { set, state }
    }
}

impl eframe::App for App {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }

    fn update(&mut self, egui_ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.state.show(egui_ctx, frame, &self.set);
    }
}

// ----------------------------------------------------------------------------

#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
struct AppState {
    chart: ChartState,
}

impl AppState {
    fn show(&mut self, egui_ctx: &egui::Context, frame: &mut eframe::Frame, set: &RectangleSet) {
        egui::TopBottomPanel::top("menu_bar").show(egui_ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        frame.quit();
                    }
                });

                ui.separator();

                egui::widgets::global_dark_light_mode_switch(ui);
            });
        });

        egui::CentralPanel::default().show(egui_ctx, |ui| {
            chart::chart_ui(ui, &mut self.chart, fixture::TITLE, set);
        });
    }
}
