//! Logging initialization

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`, with the noisy
/// GPU crates turned down to `warn`. Override with RUST_LOG.
///
/// # Example
/// ```
/// voxedit::core::logging::init();
/// log::info!("Editor started");
/// ```
pub fn init() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=warn,naga=warn")
    ).init();
}
