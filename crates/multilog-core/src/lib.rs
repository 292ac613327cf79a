//! # multilog core
//!
//! Levels, records and the text line formatter shared by the `multilog`
//! façade.
//!
//! ## Modules
//!
//! - `level` - Ordered severity levels
//! - `record` - Log records and their fields
//! - `formatter` - Colorized, aligned text rendering (also usable as a `tracing` event format)
//! - `output` - Output streams and terminal detection
//! - `path` - `~`-aware path resolution

pub mod formatter;
pub mod level;
pub mod output;
pub mod path;
pub mod record;

pub use formatter::{
    format_message, format_messagef, format_messageln, EventVisitor, FormatterOptions, SortingFunc,
    TextFormatter,
};
pub use level::{Level, ParseLevelError};
pub use output::LogOutput;
pub use path::PathError;
pub use record::{Caller, Fields, Record};
