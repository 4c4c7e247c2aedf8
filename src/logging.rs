use tracing::Level;

/// Install the stderr log subscriber. `debug` enables per-file tracing.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
