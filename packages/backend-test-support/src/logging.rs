//! Test logging shared by unit and integration tests.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive: `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn directive() -> String {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .unwrap_or_else(|| "warn".to_owned())
}

static INSTALLED: Lazy<()> = Lazy::new(|| {
    // Another subscriber may already be global; keep it.
    let _ = fmt()
        .with_env_filter(EnvFilter::new(directive()))
        .with_test_writer()
        .without_time()
        .try_init();
});

/// Install the test subscriber once per process.
pub fn init() {
    Lazy::force(&INSTALLED);
}
