//! Logger initialisation for the CLI.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger`. `RUST_LOG` takes precedence, otherwise the level follows
//! the `-v` count.

use log::LevelFilter;

/// Map the `-v` count to a default log level.
///
/// # Examples
///
/// ```
/// use brewgen::logging::level_for_verbosity;
/// use log::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
/// assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
/// ```
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let default_level = level_for_verbosity(verbosity).as_str().to_ascii_lowercase();
    let env = env_logger::Env::default().default_filter_or(default_level);
    if env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .is_err()
    {
        // A logger is already installed; keep it.
    }
}
