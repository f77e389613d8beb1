//! Module implementing logging for the application.
//!
//! The library logs through the `log` facade, which is forwarded
//! to an `slog` logger writing to standard error.

use std::env;
use std::sync::Mutex;

use slog::{Drain, FilterLevel, Logger};
use slog_scope::GlobalLoggerGuard;


/// Environment variable with the log filter spec, overriding the verbosity flags.
const RUST_LOG: &str = "RUST_LOG";


/// Initialize logging with given verbosity.
///
/// The returned guard has to be kept alive for as long as logging is needed.
pub fn init(verbosity: isize) -> Result<GlobalLoggerGuard, log::SetLoggerError> {
    let level = level_for(verbosity);

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let format = slog_term::FullFormat::new(decorator).build().fuse();

    let rust_log = env::var(RUST_LOG).ok();
    let mut builder = slog_envlogger::LogBuilder::new(format).filter(None, level);
    if let Some(ref spec) = rust_log {
        builder = builder.parse(spec);
    }
    let drain = Mutex::new(builder.build()).fuse();

    let logger = Logger::root(drain, o!());
    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init_with_level(facade_level(level, rust_log.as_deref()))?;

    Ok(guard)
}


/// Translate the -v/-q flag count into a filter level.
fn level_for(verbosity: isize) -> FilterLevel {
    match verbosity {
        v if v <= -3 => FilterLevel::Critical,
        -2 => FilterLevel::Error,
        -1 => FilterLevel::Warning,
        0 => FilterLevel::Info,
        1 => FilterLevel::Debug,
        _ => FilterLevel::Trace,
    }
}

/// The `log` level that lets through everything the filter level does.
fn log_level_for(level: FilterLevel) -> log::Level {
    match level {
        FilterLevel::Off | FilterLevel::Critical | FilterLevel::Error => log::Level::Error,
        FilterLevel::Warning => log::Level::Warn,
        FilterLevel::Info => log::Level::Info,
        FilterLevel::Debug => log::Level::Debug,
        FilterLevel::Trace => log::Level::Trace,
    }
}

/// Level of the `log` facade, which discards records before any filter sees them.
///
/// Directives from `RUST_LOG` may ask for more than the flags do,
/// so the env logger gets to filter everything in that case.
fn facade_level(level: FilterLevel, rust_log: Option<&str>) -> log::Level {
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => log::Level::Trace,
        _ => log_level_for(level),
    }
}


#[cfg(test)]
mod tests {
    use slog::FilterLevel;
    use super::{facade_level, level_for, log_level_for};

    #[test]
    fn verbosity_levels() {
        assert_eq!(FilterLevel::Info, level_for(0));
        assert_eq!(FilterLevel::Debug, level_for(1));
        assert_eq!(FilterLevel::Trace, level_for(5));
        assert_eq!(FilterLevel::Warning, level_for(-1));
        assert_eq!(FilterLevel::Critical, level_for(-7));
    }

    #[test]
    fn log_levels() {
        assert_eq!(log::Level::Warn, log_level_for(FilterLevel::Warning));
        assert_eq!(log::Level::Error, log_level_for(FilterLevel::Critical));
    }

    #[test]
    fn env_directives_open_the_facade() {
        assert_eq!(log::Level::Info, facade_level(FilterLevel::Info, None));
        assert_eq!(log::Level::Info, facade_level(FilterLevel::Info, Some(" ")));
        assert_eq!(log::Level::Trace, facade_level(FilterLevel::Info, Some("macrofill=trace")));
        assert_eq!(log::Level::Trace, facade_level(FilterLevel::Critical, Some("debug")));
    }
}
