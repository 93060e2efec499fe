mod config;
mod layout;
mod models;
mod render;
mod storage;

use chrono::Local;
use colored::*;
use config::init_config;
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};
use std::io::Write;

fn main() {
    // Initialize the logger with a custom format that includes timestamps and colors
    Builder::new()
        .format(|buf, record| {
            // Color based on log level
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().purple(),
            };

            // Apply appropriate colors to the message based on level
            let message = match record.level() {
                log::Level::Error => record.args().to_string().red(),
                log::Level::Warn => record.args().to_string().yellow(),
                log::Level::Info => record.args().to_string().normal(),
                log::Level::Debug => record.args().to_string().blue(),
                log::Level::Trace => record.args().to_string().purple(),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level,
                message
            )
        })
        .target(Target::Stdout)
        .filter(None, LevelFilter::Info) // Set default log level to Info
        .parse_env("RUST_LOG") // Allow overriding with RUST_LOG environment variable
        .init();

    info!("Generating rich menu image");

    let menu_config = init_config();

    if let Err(errors) = menu_config.validate() {
        for error in errors {
            error!("{}", error);
        }
        std::process::exit(1);
    }

    match render::render(&menu_config) {
        Ok(summary) => {
            info!(
                "Rendered {}x{} menu to {} with {} onto {:?} background",
                summary.width,
                summary.height,
                summary.output_path.display(),
                summary.font,
                summary.background
            );
            if let Some(path) = summary.area_map_path {
                info!("Tap areas described in {}", path.display());
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
