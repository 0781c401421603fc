mod app;
mod dispatch;
mod geometry;
mod model;
mod overlay;
mod settings;
mod transform;
mod voice;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    log::info!("daen v{} starting", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Ellipses",
        native_options,
        Box::new(|cc| Ok(Box::new(app::EllipseApp::new(cc)))),
    )
}
