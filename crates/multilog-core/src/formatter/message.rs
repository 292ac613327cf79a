//! Standalone prompt formatting
//!
//! `prompt: message` lines for callers that print outside a logger. The
//! palette differs from the level prompts: debug and trace are gray and
//! everything below warning is blue.

use std::fmt::{self, Display};

use super::color::{BLUE, GRAY, RED, YELLOW};
use crate::Level;

fn message_color(level: Level) -> u8 {
    match level {
        Level::Trace | Level::Debug => GRAY,
        Level::Warn => YELLOW,
        Level::Error | Level::Fatal | Level::Panic => RED,
        Level::Info => BLUE,
    }
}

/// Render `prompt: message`, coloring the prompt for `level`.
///
/// Without a level the line is left uncolored. With an empty prompt the
/// whole message is colored instead.
pub fn format_message(level: Option<Level>, prompt: &str, message: impl Display) -> String {
    let Some(level) = level else {
        return format!("{}: {}", prompt, message);
    };

    let code = message_color(level);
    if prompt.is_empty() {
        format!("\x1b[{}m{}\x1b[0m", code, message)
    } else {
        format!("\x1b[{}m{}\x1b[0m: {}", code, prompt, message)
    }
}

pub fn format_messagef(level: Option<Level>, prompt: &str, args: fmt::Arguments<'_>) -> String {
    format_message(level, prompt, args)
}

/// Like [`format_message`], with `args` joined by spaces and a newline appended
pub fn format_messageln(level: Option<Level>, prompt: &str, args: &[&dyn Display]) -> String {
    let mut message = args
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    message.push('\n');
    format_message(level, prompt, message)
}
