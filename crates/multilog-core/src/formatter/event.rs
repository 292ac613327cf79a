//! `tracing` event formatting
//!
//! Lets a [`TextFormatter`] drive a `tracing_subscriber::fmt` layer.

use chrono::Local;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

use super::TextFormatter;
use crate::{Caller, Fields, Record};

/// Collects the message and the remaining fields of a `tracing` event.
#[derive(Debug, Default)]
pub struct EventVisitor {
    pub message: String,
    pub fields: Fields,
}

impl EventVisitor {
    fn is_message(field: &Field) -> bool {
        field.name() == "message"
    }

    // injected by tracing-log, not user data
    fn is_log_metadata(field: &Field) -> bool {
        field.name().starts_with("log.")
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if Self::is_message(field) {
            self.message = value.to_string();
        } else if !Self::is_log_metadata(field) {
            self.fields.insert(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if Self::is_message(field) {
            self.message = format!("{:?}", value);
        } else if !Self::is_log_metadata(field) {
            self.fields.insert(field.name(), format_args!("{:?}", value));
        }
    }
}

impl<S, N> FormatEvent<S, N> for TextFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        // the writer knows whether ANSI output was requested for its stream
        self.is_terminal.get_or_init(|| writer.has_ansi_escapes());

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let mut record = Record::new((*metadata.level()).into(), &visitor.message, &visitor.fields)
            .with_time(Local::now());

        if self.options.report_caller {
            if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
                record = record.with_caller(Caller {
                    file,
                    line,
                    function: metadata.module_path().unwrap_or_else(|| metadata.target()),
                });
            }
        }

        writer.write_str(&self.format(&record))
    }
}
