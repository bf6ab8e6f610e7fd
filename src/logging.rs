use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber for the terminal app.
///
/// `RUST_LOG` wins when set; otherwise `verbose` raises the crate's level
/// from warn to debug. Output goes to stderr so prompts and tables stay clean.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fastfood={default_level},fastfood_macros={default_level}"
        ))
    });

    // A subscriber may already be installed (e.g. by an embedding app).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
