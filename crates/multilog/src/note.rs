//! Notes: console messages shown regardless of verbosity
//!
//! A note is printed with a `NOTE:` prompt unless the logger is quiet. It
//! never reaches the log file.

use chrono::Local;
use std::fmt::{self, Display};

use crate::logger::join_line;
use crate::MultiLogger;

/// Prompt label of note output
pub const NOTE_PREFIX: &str = "NOTE";

impl MultiLogger {
    /// Show `message` on the console unless quiet
    pub fn note(&self, message: impl Display) {
        self.write_note(&message.to_string());
    }

    pub fn notef(&self, args: fmt::Arguments<'_>) {
        self.write_note(&fmt::format(args));
    }

    pub fn noteln(&self, args: &[&dyn Display]) {
        self.write_note(&join_line(args));
    }

    /// Alias of [`MultiLogger::note`]
    pub fn print(&self, message: impl Display) {
        self.note(message);
    }

    /// Alias of [`MultiLogger::notef`]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.notef(args);
    }

    /// Alias of [`MultiLogger::noteln`]
    pub fn println(&self, args: &[&dyn Display]) {
        self.noteln(args);
    }

    /// Note text as it would be printed; empty when quiet
    pub fn snote(&self, message: impl Display) -> String {
        self.render_note(&message.to_string())
    }

    pub fn snotef(&self, args: fmt::Arguments<'_>) -> String {
        self.render_note(&fmt::format(args))
    }

    pub fn snoteln(&self, args: &[&dyn Display]) -> String {
        self.render_note(&join_line(args))
    }

    /// Alias of [`MultiLogger::snote`]
    pub fn sprint(&self, message: impl Display) -> String {
        self.snote(message)
    }

    /// Alias of [`MultiLogger::snotef`]
    pub fn sprintf(&self, args: fmt::Arguments<'_>) -> String {
        self.snotef(args)
    }

    /// Alias of [`MultiLogger::snoteln`]
    pub fn sprintln(&self, args: &[&dyn Display]) -> String {
        self.snoteln(args)
    }

    fn render_note(&self, message: &str) -> String {
        if self.is_quiet() {
            return String::new();
        }

        let console = self.console();
        console.detect_terminal();
        let mut text = console.formatter().render_prompt(NOTE_PREFIX, Local::now());
        text.push_str(message);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    fn write_note(&self, message: &str) {
        if self.is_quiet() {
            return;
        }
        let text = self.render_note(message);
        self.console().write_raw(&text);
    }
}
