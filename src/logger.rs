use std::{env, time::SystemTime};

use colored::Colorize;
use log::{Level, LevelFilter};

const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

fn colored_level(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".dimmed(),
    }
}

pub fn setup_logger() -> Result<(), fern::InitError> {
    let level = env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        // reqwest and hyper are chatty at debug
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
