use viewer::fixture;

fn main() {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt::init();

    let set = fixture::test1();
    tracing::info!(
        rects = set.rects.len(),
        overlaps = set.inter.len(),
        "showing fixture"
    );

    let native_options = eframe::NativeOptions {
        initial_window_size: Some([1024.0, 768.0].into()),
        ..Default::default()
    };

    eframe::run_native(
        "rectangle overlap viewer",
        native_options,
        Box::new(move |cc| {
            viewer::customize_egui(&cc.egui_ctx);
            Box::new(viewer::App::new(cc.storage, set))
        }),
    );
}
