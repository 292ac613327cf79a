//! Text Formatter
//!
//! Renders one log record as a single terminal-friendly line:
//!
//! ```text
//! WARN[0003]: disk almost full                         (mount=/var used=97%)
//! ```
//!
//! - Level text, optionally truncated to 4 characters
//! - Elapsed seconds or an absolute timestamp (or nothing)
//! - Message left-justified to 44 columns when fields follow
//! - Fields sorted by key, quoted when they contain unusual characters

pub mod color;
mod event;
mod message;

pub use event::EventVisitor;
pub use message::{format_message, format_messagef, format_messageln};

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::sync::{Arc, OnceLock};

use crate::{Fields, LogOutput, Record};

/// Column width of the message when fields follow it
pub const MESSAGE_WIDTH: usize = 44;

/// Length of truncated level text (e.g. `WARN`, `ERRO`)
pub const LEVEL_TEXT_WIDTH: usize = 4;

/// Comparator over field keys
pub type SortingFunc = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Formatter flags. All default to off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatterOptions {
    /// Colorize even when the output is not a terminal
    pub force_colors: bool,

    /// Never colorize. Wins over every other color setting.
    pub disable_colors: bool,

    /// Honor `CLICOLOR_FORCE` and `CLICOLOR` (https://bixense.com/clicolors/)
    pub environment_override_colors: bool,

    /// Omit the timestamp segment
    pub disable_timestamp: bool,

    /// Print an absolute timestamp instead of seconds since start
    pub full_timestamp: bool,

    /// chrono format string for full timestamps; RFC3339 when unset
    pub timestamp_format: Option<String>,

    /// Keep fields in insertion order
    pub disable_sorting: bool,

    /// Print the whole level name instead of its first 4 characters
    pub disable_level_truncation: bool,

    /// Quote fields whose value is the empty string
    pub quote_empty_fields: bool,

    /// Include the call site when the event source provides one
    pub report_caller: bool,
}

/// Formats records into text lines.
///
/// A formatter is bound to a single output stream: terminal detection runs
/// once, on the first [`TextFormatter::detect_terminal`] call.
#[derive(Clone)]
pub struct TextFormatter {
    options: FormatterOptions,
    sorting_func: Option<SortingFunc>,
    base_timestamp: DateTime<Local>,
    is_terminal: OnceLock<bool>,
}

impl fmt::Debug for TextFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFormatter")
            .field("options", &self.options)
            .field("custom_sorting", &self.sorting_func.is_some())
            .field("base_timestamp", &self.base_timestamp)
            .field("is_terminal", &self.is_terminal.get())
            .finish()
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(FormatterOptions::default())
    }
}

impl TextFormatter {
    /// Create a formatter; elapsed-time timestamps count from now.
    pub fn new(options: FormatterOptions) -> Self {
        Self {
            options,
            sorting_func: None,
            base_timestamp: Local::now(),
            is_terminal: OnceLock::new(),
        }
    }

    /// Replace alphabetical key ordering with a custom comparator
    pub fn with_sorting_func<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        self.sorting_func = Some(Arc::new(cmp));
        self
    }

    /// Start elapsed-time timestamps from `base` instead of construction time
    pub fn with_base_timestamp(mut self, base: DateTime<Local>) -> Self {
        self.base_timestamp = base;
        self
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    pub fn base_timestamp(&self) -> DateTime<Local> {
        self.base_timestamp
    }

    /// Check whether `output` is a terminal. Only the first call checks.
    pub fn detect_terminal(&self, output: &dyn LogOutput) -> bool {
        *self.is_terminal.get_or_init(|| output.is_terminal())
    }

    /// Result of terminal detection; `false` until it has run
    pub fn is_terminal(&self) -> bool {
        self.is_terminal.get().copied().unwrap_or(false)
    }

    /// Whether lines are currently rendered with colors
    pub fn is_colored(&self) -> bool {
        color::resolve_colored(
            self.options.force_colors,
            self.options.disable_colors,
            self.options.environment_override_colors,
            self.is_terminal(),
            |key| std::env::var_os(key),
        )
    }

    /// Start and reset sequences for a level name; both empty without colors
    pub fn colors(&self, level_name: &str) -> (String, &'static str) {
        Self::colors_when(self.is_colored(), level_name)
    }

    fn colors_when(colored: bool, level_name: &str) -> (String, &'static str) {
        if !colored {
            return (String::new(), "");
        }
        (
            color::set_sequence(color::color_code(level_name)),
            color::RESET,
        )
    }

    /// Uppercased level name, truncated unless truncation is disabled.
    ///
    /// Names shorter than the truncation width are kept whole.
    pub fn level_text(&self, level_name: &str) -> String {
        let upper = level_name.to_uppercase();
        if self.options.disable_level_truncation {
            upper
        } else {
            upper.chars().take(LEVEL_TEXT_WIDTH).collect()
        }
    }

    /// Render the `LEVEL[time]: ` prompt for an arbitrary prefix
    pub fn render_prompt(&self, prefix: &str, time: DateTime<Local>) -> String {
        let mut buf = String::new();
        self.write_prompt(&mut buf, self.is_colored(), prefix, &time);
        buf
    }

    /// Render a record without the trailing newline
    pub fn render(&self, record: &Record<'_>) -> String {
        let colored = self.is_colored();
        let time = record.time.unwrap_or_else(Local::now);
        let message = record.message.strip_suffix('\n').unwrap_or(record.message);

        let mut buf = String::with_capacity(MESSAGE_WIDTH * 2);
        self.write_prompt(&mut buf, colored, record.level.as_str(), &time);

        if let Some(caller) = &record.caller {
            let _ = write!(buf, "{} ", caller);
        }

        if record.fields.is_empty() {
            buf.push_str(message);
        } else {
            let _ = write!(buf, "{:<width$}", message, width = MESSAGE_WIDTH);
            self.write_fields(&mut buf, colored, record.level.as_str(), record.fields);
        }

        buf
    }

    /// Render a record as a full line, newline included
    pub fn format(&self, record: &Record<'_>) -> String {
        let mut line = self.render(record);
        line.push('\n');
        line
    }

    /// Whether a field value has to be wrapped in quotes
    pub fn needs_quoting(&self, text: &str) -> bool {
        if self.options.quote_empty_fields && text.is_empty() {
            return true;
        }
        !text.chars().all(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '/' | '@' | '^' | '+')
        })
    }

    fn write_prompt(&self, buf: &mut String, colored: bool, name: &str, time: &DateTime<Local>) {
        let (color_set, color_reset) = Self::colors_when(colored, name);
        buf.push_str(&color_set);
        buf.push_str(&self.level_text(name));

        if !self.options.disable_timestamp {
            if self.options.full_timestamp {
                buf.push('[');
                self.write_time(buf, time);
                buf.push(']');
            } else {
                let elapsed = time.signed_duration_since(self.base_timestamp).num_seconds();
                let _ = write!(buf, "[{:04}]", elapsed);
            }
        }

        buf.push(':');
        buf.push_str(color_reset);
        buf.push(' ');
    }

    fn write_time(&self, buf: &mut String, time: &DateTime<Local>) {
        if let Some(format) = &self.options.timestamp_format {
            let mark = buf.len();
            if write!(buf, "{}", time.format(format)).is_ok() {
                return;
            }
            // chrono rejects malformed format strings at display time
            buf.truncate(mark);
        }
        buf.push_str(&time.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    fn write_fields(&self, buf: &mut String, colored: bool, level_name: &str, fields: &Fields) {
        let mut entries: Vec<(&str, &str)> = fields.iter().collect();
        if !self.options.disable_sorting {
            match &self.sorting_func {
                Some(cmp) => entries.sort_by(|a, b| cmp(a.0, b.0)),
                None => entries.sort_by(|a, b| a.0.cmp(b.0)),
            }
        }

        if colored {
            let (color_set, color_reset) = Self::colors_when(true, level_name);
            for (key, value) in entries {
                let _ = write!(buf, " {}{}{}=", color_set, key, color_reset);
                self.write_value(buf, value);
            }
        } else {
            buf.push_str(" (");
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(' ');
                }
                buf.push_str(key);
                buf.push('=');
                self.write_value(buf, value);
            }
            buf.push(')');
        }
    }

    fn write_value(&self, buf: &mut String, value: &str) {
        if self.needs_quoting(value) {
            let _ = write!(buf, "{:?}", value);
        } else {
            buf.push_str(value);
        }
    }
}
