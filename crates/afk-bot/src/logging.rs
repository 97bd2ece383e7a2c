//! Logger initialization

use std::str::FromStr;

use env_logger::Builder;
use log::LevelFilter;

/// Initialize the global logger.
///
/// `--debug` wins over the configured level; anything unparsable falls
/// back to info.
pub fn init_logging(configured_level: &str, debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::from_str(configured_level).unwrap_or(LevelFilter::Info)
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .init();
}
