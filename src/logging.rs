//! Verbosity flag handling shared by both binaries.

use tracing_subscriber::filter::LevelFilter;

/// Help text for the `-v` flag; keep in sync with [`level_filter`]
pub const VERBOSE_HELP: &str =
    "Increase verbosity level (default = WARN, -v = INFO, -vv = DEBUG, -vvv = TRACE)";

/// Map a `-v` count to a log level: WARN by default, one step per `-v`
pub fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_flag_raises_one_level() {
        assert_eq!(level_filter(0), LevelFilter::WARN);
        assert_eq!(level_filter(1), LevelFilter::INFO);
        assert_eq!(level_filter(2), LevelFilter::DEBUG);
        assert_eq!(level_filter(3), LevelFilter::TRACE);
        assert_eq!(level_filter(u8::MAX), LevelFilter::TRACE);
    }

    #[test]
    fn help_text_names_every_level() {
        for (flag, count) in [("default", 0), ("-v", 1), ("-vv", 2), ("-vvv", 3)] {
            let name = level_filter(count).to_string().to_uppercase();
            let entry = format!("{flag} = {name}");
            assert!(VERBOSE_HELP.contains(&entry), "{entry:?} missing");
        }
    }
}
