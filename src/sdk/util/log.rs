use env_logger::{Builder, Env};

/// Sets up `env_logger`. `RUST_LOG` wins over the `verbose` flag.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
