//! Output streams a sink can write to

use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// A writer that can tell whether it is an interactive terminal.
///
/// Only outputs backed by an OS file descriptor can be terminals; every
/// other writer keeps the default `false`.
pub trait LogOutput: Write + Send {
    fn is_terminal(&self) -> bool {
        false
    }
}

impl LogOutput for io::Stderr {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl LogOutput for io::Stdout {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl LogOutput for File {
    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl LogOutput for Vec<u8> {}

impl LogOutput for io::Sink {}

impl<T: LogOutput + ?Sized> LogOutput for Box<T> {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}
