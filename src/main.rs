//! Main entry point for Matrix Terminal.
//!
//! This file initializes logging and the TUI, loads the config, runs the main
//! event loop, and restores the terminal on exit or panic.

use matrix_term::app::App;
use matrix_term::config;
use matrix_term::utils;

use anyhow::Result;

use matrix_term::utils::restore::RestoreGuard;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    utils::logger::init_logging();

    let config_path = config::default_config_path();
    let config = config::load_or_default(&config_path);

    let mut terminal = ratatui::init();
    // Guard ensures cleanup on both normal exit and panic
    let _guard = RestoreGuard::with(ratatui::restore);

    let mut app = App::new(config, config_path);
    // draw 1st frame
    app.draw(&mut terminal)?;
    // run event-driven main loop of app
    let result = app.run(&mut terminal).await;
    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    } else {
        tracing::info!("Exiting");
    }
    result
}
