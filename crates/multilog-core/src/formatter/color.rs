//! ANSI color selection

use std::ffi::OsString;

use crate::Level;

pub const RED: u8 = 31;
pub const YELLOW: u8 = 33;
pub const BLUE: u8 = 34;
pub const CYAN: u8 = 36;
pub const GRAY: u8 = 37;

/// Sequence that ends a colored span
pub const RESET: &str = "\x1b[0m";

/// ANSI color code for a level name; unknown names fall back to gray.
pub fn color_code(level_name: &str) -> u8 {
    match level_name.parse::<Level>() {
        Ok(Level::Trace | Level::Debug) => BLUE,
        Ok(Level::Info) => CYAN,
        Ok(Level::Warn) => YELLOW,
        Ok(Level::Error | Level::Fatal | Level::Panic) => RED,
        Err(_) if level_name.eq_ignore_ascii_case("note") => CYAN,
        Err(_) => GRAY,
    }
}

/// Bold color start sequence, e.g. `ESC[1;31m`
pub fn set_sequence(code: u8) -> String {
    format!("\x1b[1;{}m", code)
}

/// Decide whether output is colored.
///
/// `lookup` reads an environment variable; it is only consulted when
/// `env_override` is set. Any set `CLICOLOR_FORCE` other than `0` forces
/// colors, even one that is not valid UTF-8.
pub(crate) fn resolve_colored(
    force: bool,
    disable: bool,
    env_override: bool,
    is_terminal: bool,
    lookup: impl Fn(&str) -> Option<OsString>,
) -> bool {
    let mut colored = force || (is_terminal && !cfg!(windows));

    if env_override {
        match lookup("CLICOLOR_FORCE") {
            Some(value) if value != "0" => colored = true,
            Some(_) => colored = false,
            None => {
                if lookup("CLICOLOR").is_some_and(|value| value == "0") {
                    colored = false;
                }
            }
        }
    }

    colored && !disable
}
