//! Logging facilities based on `slog`.
//!
//! There is no global logger. The root logger is built once by whoever
//! drives the harness and handed down; every fixture and flow derives its
//! own child logger through [`component_logger`].

use slog::{o, Drain, FilterLevel, Logger};

use crate::env::ENV_VARS;

/// Builds the root terminal logger. `show_debug` lowers the default level
/// to `debug`; module specific levels can be set with `QN_LOG`.
pub fn logger(show_debug: bool) -> Logger {
    logger_with_levels(show_debug, Some(ENV_VARS.log_levels()))
}

pub fn logger_with_levels(show_debug: bool, levels: Option<&str>) -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::LogBuilder::new(drain)
        .filter(
            None,
            if show_debug {
                FilterLevel::Debug
            } else {
                FilterLevel::Info
            },
        )
        .parse(levels.unwrap_or(""))
        .build();
    let drain = slog_async::Async::new(drain.fuse())
        .chan_size(20000)
        .build()
        .fuse();
    Logger::root(drain, o!())
}

/// A logger that drops everything, for tests.
pub fn discard() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Creates a child logger for one component instance, e.g. the fixture
/// `CreateOpenings` working on `storageWorkingGroup`.
pub fn component_logger(parent: &Logger, component: &str, id: impl Into<String>) -> Logger {
    parent.new(o!("component" => component.to_string(), "id" => id.into()))
}
