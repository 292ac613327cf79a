//! `tracing` integration
//!
//! [`MultiLogLayer`] routes `tracing` events through a [`MultiLogger`], so
//! `tracing::warn!` and friends reach the console and file sinks with their
//! fields attached.

use multilog_core::{EventVisitor, Level};
use std::sync::Arc;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

use crate::MultiLogger;

/// Layer forwarding every event to a shared [`MultiLogger`].
#[derive(Debug, Clone)]
pub struct MultiLogLayer {
    logger: Arc<MultiLogger>,
}

impl MultiLogLayer {
    pub fn new(logger: Arc<MultiLogger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<MultiLogger> {
        &self.logger
    }
}

impl<S: Subscriber> Layer<S> for MultiLogLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.enabled(Level::from(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.logger.dispatch(
            Level::from(*event.metadata().level()),
            &visitor.message,
            &visitor.fields,
        );
    }
}

/// Install `logger` as the global `tracing` subscriber
pub fn init_tracing(logger: Arc<MultiLogger>) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(MultiLogLayer::new(logger))
        .try_init()
}
