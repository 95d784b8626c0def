mod app;
mod config;
mod convert;
mod host;
mod icons;
mod messages;
mod panels;
mod state;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = config::load_viewer_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Pixview"),
        ..Default::default()
    };

    eframe::run_native(
        "Pixview",
        options,
        Box::new(move |cc| Ok(Box::new(app::PixviewApp::new(&cc.egui_ctx, config)))),
    )
}
