//! Smoke test for the text-format logging initializer.
//!
//! Initialization installs a process-global subscriber, so the text and
//! JSON paths live in separate integration binaries.

use fieldcast_common::init_logging;

#[test]
fn test_init_logging_installs_subscriber() {
    init_logging("debug").unwrap();

    // Emitting through the installed subscriber must not panic.
    tracing::info!(component = "logging", "text subscriber active");
}
