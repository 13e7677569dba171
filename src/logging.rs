use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Topic logger. Writes to stderr so records never land inside the board.
#[derive(Debug)]
struct RobotsLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl log::Log for RobotsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug and trace records are limited to the selected topics
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            level = record.level(),
            target = record.target(),
            message = record.args()
        );

        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        // A closed stderr must not take the game down with it
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", output);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceLock<RobotsLogger> = OnceLock::new();

/// Parses the comma-separated topic list given on the command line
fn parse_filters(debug_filter: Option<String>) -> Option<HashSet<String>> {
    debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    })
}

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RobotsLogger {
        level,
        debug_filters: parse_filters(debug_filter),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Topic macros. Each accepts an optional robot id and turn prefix.
#[macro_export]
macro_rules! debug_robot {
    ($robot_id:expr, $turn:expr; $($arg:tt)*) => {
        log::debug!(target: "robot", "[R{:02}][T{:03}] {}", $robot_id, $turn, format_args!($($arg)*))
    };
    ($robot_id:expr; $($arg:tt)*) => {
        log::debug!(target: "robot", "[R{:02}] {}", $robot_id, format_args!($($arg)*))
    };
    ($($arg:tt)*) => {
        log::debug!(target: "robot", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_player {
    ($turn:expr; $($arg:tt)*) => {
        log::debug!(target: "player", "[T{:03}] {}", $turn, format_args!($($arg)*))
    };
    ($($arg:tt)*) => {
        log::debug!(target: "player", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_arena {
    ($($arg:tt)*) => {
        log::debug!(target: "arena", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_game {
    ($turn:expr; $($arg:tt)*) => {
        log::debug!(target: "game", "[T{:03}] {}", $turn, format_args!($($arg)*))
    };
    ($($arg:tt)*) => {
        log::debug!(target: "game", "{}", format_args!($($arg)*))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn metadata(level: log::Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_parse_filters() {
        let filters = parse_filters(Some("robot, arena,,player".to_string())).unwrap();
        assert_eq!(filters.len(), 3);
        assert!(filters.contains("robot"));
        assert!(filters.contains("arena"));
        assert!(filters.contains("player"));
        assert!(parse_filters(None).is_none());
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = RobotsLogger {
            level: LevelFilter::Info,
            debug_filters: None,
        };
        assert!(logger.enabled(&metadata(log::Level::Warn, "game")));
        assert!(logger.enabled(&metadata(log::Level::Info, "game")));
        assert!(!logger.enabled(&metadata(log::Level::Debug, "game")));
    }

    #[test]
    fn test_enabled_respects_topic_filter() {
        let logger = RobotsLogger {
            level: LevelFilter::Trace,
            debug_filters: parse_filters(Some("robot".to_string())),
        };
        assert!(logger.enabled(&metadata(log::Level::Debug, "robot")));
        assert!(!logger.enabled(&metadata(log::Level::Debug, "arena")));
        // Filters only narrow debug and trace output
        assert!(logger.enabled(&metadata(log::Level::Info, "arena")));
    }
}
