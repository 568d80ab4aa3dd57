use std::path::PathBuf;

use angle_dial::{config::DEFAULT_CONFIG_PATH, util::log, App, AppConfig};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, config_origin) = AppConfig::load_or_default(config_path.as_deref())?;
    log::init_logging(&config.logging)?;
    match config_origin {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("No {} found, using defaults", DEFAULT_CONFIG_PATH),
    }

    let terminal = ratatui::init();
    let result = match execute!(std::io::stdout(), EnableMouseCapture) {
        Ok(()) => App::new(config).run(terminal).await,
        Err(e) => Err(e.into()),
    };
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
