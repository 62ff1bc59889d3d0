//! Shared helpers for unit tests.

/// Routes `log` output through the test harness; safe to call repeatedly.
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
