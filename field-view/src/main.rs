//! Application entry point for the particle-network background viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates everything else to [`Viewer`] from the `viewer` module.

mod config;
mod panel;
mod viewer;

use std::path::PathBuf;

use clap::Parser;
use config::ViewConfig;
use viewer::Viewer;

#[derive(Parser)]
#[command(name = "neural_field")]
#[command(version)]
#[command(about = "Animated particle-network background behind a hero card")]
struct Cli {
    /// Configuration file (TOML) with optional [field] and [hero] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible node placement
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the background stopped
    #[arg(long)]
    paused: bool,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref());

    log::info!(
        "link distance {}, at most {} nodes",
        cfg.field.link_distance,
        cfg.field.max_nodes
    );

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Neural Field",
        options,
        Box::new(move |cc| {
            Ok(Box::new(Viewer::new(
                cc.egui_ctx.clone(),
                cfg,
                cli.seed,
                cli.paused,
            )))
        }),
    )
}

/// Loads the config file if one was given, falling back to defaults.
fn load_config(path: Option<&std::path::Path>) -> ViewConfig {
    let Some(path) = path else {
        log::info!("Using default configuration");
        return ViewConfig::default();
    };

    match ViewConfig::from_file(path) {
        Ok(cfg) => {
            log::info!("Loaded config from: {}", path.display());
            cfg
        }
        Err(e) => {
            log::error!("{e}; using default configuration");
            ViewConfig::default()
        }
    }
}
