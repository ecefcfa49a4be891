//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Logs at `info` unless `RUST_LOG` says otherwise. Safe to call more than
/// once; later calls are ignored.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init();
        super::init();
        super::info!("logging initialized twice");
    }
}
