//! Logger setup
//!
//! `-v` lowers the default filter to debug; `RUST_LOG` still wins when set.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Build the logger for the given verbosity, reading overrides from `env`
pub fn logger_builder<'a, E: Into<Env<'a>>>(verbose: bool, env: E) -> Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(env)
        .format_timestamp(None);
    builder
}

/// Initialize the global logger from `RUST_LOG`
pub fn init_logging(verbose: bool) {
    logger_builder(verbose, Env::default()).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Never set, so only the verbosity decides the filter
    const UNSET_ENV: &str = "PCLI_TEST_UNSET_LOG_FILTER";

    #[test]
    fn test_verbose_enables_debug() {
        let logger = logger_builder(true, Env::new().filter(UNSET_ENV)).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_default_is_warn() {
        let logger = logger_builder(false, Env::new().filter(UNSET_ENV)).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }
}
