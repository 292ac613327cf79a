//! `tracing` events routed through the logger

use multilog::{MultiLogLayer, MultiLogger};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::fixtures::read_log;
use tests::{Options, SharedBuffer};
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn test_events_reach_both_sinks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let console = SharedBuffer::new();
    let logger = Arc::new(MultiLogger::new(
        Options {
            verbose: 2,
            log_file: Some(path.to_string_lossy().into_owned()),
            log_level: Some("warn".to_string()),
            ..Default::default()
        }
        .with_stderr(console.clone()),
    ));
    let subscriber = tracing_subscriber::registry().with(MultiLogLayer::new(logger));

    tracing::subscriber::with_default(subscriber, || {
        tracing::trace!("too verbose");
        tracing::debug!(attempt = 2, "retrying");
        tracing::warn!(path = "/var/tmp/a b", "odd path");
    });

    let expected = format!(
        "DEBUG: {:<44} (attempt=2)\nWARNING: {:<44} (path=\"/var/tmp/a b\")\n",
        "retrying", "odd path"
    );
    assert_eq!(console.contents(), expected);
    assert_eq!(
        read_log(&path),
        format!("WARN[<time>]: {:<44} (path=\"/var/tmp/a b\")\n", "odd path")
    );
}
