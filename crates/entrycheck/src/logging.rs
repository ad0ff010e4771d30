use env_logger::Env;

/// Filter used when `RUST_LOG` is unset. The diagnostic line is the only
/// output by default, so logging is off until asked for.
pub const DEFAULT_FILTER: &str = "off";

/// Install `env_logger` as the `log` backend, writing to stderr.
pub fn init() {
    // A second init (e.g. from a test harness) is harmless, so the error is dropped.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .try_init();
}
