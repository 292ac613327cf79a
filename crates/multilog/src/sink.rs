//! Sinks: one output stream with its own threshold and formatter

use chrono::Local;
use multilog_core::{Fields, Level, LogOutput, Record, TextFormatter};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;

/// A single log destination.
///
/// Writes are serialized by an internal mutex, so one record never
/// interleaves with another on the same output.
pub struct Sink {
    output: Mutex<Box<dyn LogOutput>>,
    level: Level,
    formatter: TextFormatter,
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl Sink {
    pub fn new(output: Box<dyn LogOutput>, level: Level, formatter: TextFormatter) -> Self {
        Self {
            output: Mutex::new(output),
            level,
            formatter,
        }
    }

    /// Minimum level this sink writes
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn formatter(&self) -> &TextFormatter {
        &self.formatter
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Make sure the formatter knows whether the output is a terminal
    pub fn detect_terminal(&self) -> bool {
        let output = self.output.lock();
        self.formatter.detect_terminal(&**output)
    }

    /// Format and write one record if `level` passes the threshold
    pub fn emit(&self, level: Level, message: &str, fields: &Fields) {
        if !self.enabled(level) {
            return;
        }

        let mut output = self.output.lock();
        self.formatter.detect_terminal(&**output);
        let record = Record::new(level, message, fields).with_time(Local::now());
        let line = self.formatter.format(&record);
        // logging never fails the caller
        let _ = output.write_all(line.as_bytes());
        let _ = output.flush();
    }

    /// Write already rendered text, bypassing threshold and formatter
    pub fn write_raw(&self, text: &str) {
        let mut output = self.output.lock();
        let _ = output.write_all(text.as_bytes());
        let _ = output.flush();
    }
}
