use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'")))
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Ok(level) => level,
        Err(error) => {
            panic!("{error}");
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// Sleeps for `timeout`, returning early with `true` once shutdown was signalled.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool
{
    tokio::select! {
        _ = tokio::time::sleep(timeout) => {
            false
        }
        _ = shutdown_handler.handle() => {
            true
        }
    }
}

