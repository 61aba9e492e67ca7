use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// Environment variable selecting the log verbosity.
pub const LOG_ENV: &str = "B64_TOKEN_LOG";

fn level_from_env(value: Option<&str>) -> Option<LevelFilter> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

fn logging_level() -> LevelFilter {
    // Marker files next to the executable win over the environment
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    level_from_env(std::env::var(LOG_ENV).ok().as_deref()).unwrap_or(LevelFilter::Warn)
}

/// Route `log` records to stderr so stdout only carries tool output.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if level_filter == LevelFilter::Info {
                out.finish(format_args!(
                    "[{}]: {} <{}:{}>",
                    record.level(),
                    message,
                    file,
                    line,
                ));
            } else {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    file,
                    line,
                ));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_env() {
        assert_eq!(level_from_env(Some("trace")), Some(LevelFilter::Trace));
        assert_eq!(level_from_env(Some("DEBUG")), Some(LevelFilter::Debug));
        assert_eq!(level_from_env(Some(" info ")), Some(LevelFilter::Info));
        assert_eq!(level_from_env(Some("warn")), Some(LevelFilter::Warn));
        assert_eq!(level_from_env(Some("error")), Some(LevelFilter::Error));
        assert_eq!(level_from_env(Some("off")), Some(LevelFilter::Off));
    }

    #[test]
    fn test_unknown_or_missing_level() {
        assert_eq!(level_from_env(Some("verbose")), None);
        assert_eq!(level_from_env(Some("")), None);
        assert_eq!(level_from_env(None), None);
    }
}
