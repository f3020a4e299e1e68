use shape_sketch::SketchConfig;

fn main() -> Result<(), eframe::Error> {
    // Default to info-level logs unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SketchConfig::load().unwrap_or_else(|err| {
        log::warn!("{err}; using default settings");
        SketchConfig::default()
    });

    shape_sketch::run_app(config)
}
