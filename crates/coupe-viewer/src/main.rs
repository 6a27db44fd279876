use coupe_engine::device::GpuInit;
use coupe_engine::logging::{init_logging, LoggingConfig};
use coupe_engine::window::Runtime;
use coupe_viewer::{Viewer, ViewerConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::default();
    log::info!("textures from {}", config.asset_root.display());
    log::info!("controls: WASD move, Q/E down/up, mouse looks, wheel sets speed (Ctrl+wheel zooms), Esc quits");

    Runtime::run(config.runtime(), GpuInit::default(), Viewer::new(config))
}
