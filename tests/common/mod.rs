use std::sync::Once;

/// Configure a [`tracing_subscriber`] with provided env settings.
///
/// ```ignore
/// RUST_LOG=tokcomb=trace cargo test
/// ```
#[track_caller]
pub fn setup() {
    static SETUP: Once = Once::new();
    SETUP.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
