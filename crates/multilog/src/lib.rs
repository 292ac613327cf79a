//! # multilog
//!
//! Logging façade writing every record to the console and, optionally, a
//! log file. Each destination has its own threshold and text format:
//!
//! - Console: full level names, no timestamps, colors on terminals
//! - File: 4-letter level names, absolute timestamps, no colors
//!
//! ```no_run
//! use multilog::{Logger, MultiLogger, Options};
//!
//! let logger = MultiLogger::new(Options {
//!     verbose: 1,
//!     log_file: Some("~/.cache/app/app.log".to_string()),
//!     ..Default::default()
//! });
//! logger.info("starting");
//! logger.with_field("port", 8080).warnf(format_args!("retry #{}", 2));
//! logger.note("always shown unless quiet");
//! ```
//!
//! ## Modules
//!
//! - `options` - Configuration and environment overrides
//! - `sink` - A single output with threshold and formatter
//! - `logger` - The dispatcher and its field-annotated variant
//! - `note` - Notes shown regardless of verbosity
//! - `layer` - `tracing` integration

mod error;
pub mod layer;
pub mod logger;
mod note;
pub mod options;
pub mod sink;

pub use error::SetupError;
pub use layer::{init_tracing, MultiLogLayer};
pub use logger::{FieldLogger, Logger, MultiLogger, FATAL_EXIT_CODE};
pub use note::NOTE_PREFIX;
pub use options::{ExitFunc, Options};
pub use sink::Sink;

pub use multilog_core::{
    format_message, format_messagef, format_messageln, Caller, Fields, FormatterOptions, Level,
    LogOutput, ParseLevelError, Record, TextFormatter,
};
