//! Main application entry point (native).

use slideverify_app::{App, AppConfig};

fn main() {
    env_logger::init();
    log::info!("Starting SlideVerify demo");

    let path = std::env::args().nth(1);
    let config = match AppConfig::with_slider_path(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load slider config {:?}: {}", path, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = App::with_config(config).run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
