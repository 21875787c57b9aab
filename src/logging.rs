use env_logger::{Builder, Env};

/// Initialize logging for the client.
///
/// The filter defaults to `info` and can be overridden either through the
/// `RUST_LOG` environment variable or the `filter` argument.
pub fn init(filter: Option<&str>) {
    let default_filter = filter.unwrap_or("info");

    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}
