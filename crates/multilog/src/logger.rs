//! Console + file dispatcher
//!
//! [`MultiLogger`] owns a console sink and, when configured, a file sink.
//! Every record goes to both; each sink applies its own threshold and
//! format. [`FieldLogger`] wraps a `MultiLogger` and attaches a fixed set
//! of fields to every record.

use multilog_core::{path, Fields, FormatterOptions, Level, LogOutput, TextFormatter};
use std::fmt::{self, Display};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::options::{ExitFunc, Options};
use crate::sink::Sink;
use crate::SetupError;

/// Status passed to the exit hook by the fatal methods
pub const FATAL_EXIT_CODE: i32 = 1;

/// Join arguments with single spaces and end with a newline
pub(crate) fn join_line(args: &[&dyn Display]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&arg.to_string());
    }
    line.push('\n');
    line
}

/// Logging methods shared by the plain and field-annotated loggers.
///
/// Each level comes in three forms: `info(msg)` takes any `Display`,
/// `infof(format_args!(..))` takes preformatted arguments and
/// `infoln(&[..])` joins its arguments with spaces.
pub trait Logger {
    /// Deliver one message to every sink
    fn emit(&self, level: Level, message: &str);

    /// Run the exit hook
    fn exit(&self, code: i32);

    fn log(&self, level: Level, message: impl Display) {
        self.emit(level, &message.to_string());
    }

    fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.emit(level, message),
            None => self.emit(level, &fmt::format(args)),
        }
    }

    fn logln(&self, level: Level, args: &[&dyn Display]) {
        self.emit(level, &join_line(args));
    }

    fn trace(&self, message: impl Display) {
        self.log(Level::Trace, message);
    }

    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Trace, args);
    }

    fn traceln(&self, args: &[&dyn Display]) {
        self.logln(Level::Trace, args);
    }

    fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    fn debugln(&self, args: &[&dyn Display]) {
        self.logln(Level::Debug, args);
    }

    fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    fn infoln(&self, args: &[&dyn Display]) {
        self.logln(Level::Info, args);
    }

    fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    fn warnln(&self, args: &[&dyn Display]) {
        self.logln(Level::Warn, args);
    }

    fn warning(&self, message: impl Display) {
        self.warn(message);
    }

    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.warnf(args);
    }

    fn warningln(&self, args: &[&dyn Display]) {
        self.warnln(args);
    }

    fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    fn errorln(&self, args: &[&dyn Display]) {
        self.logln(Level::Error, args);
    }

    /// Log at fatal level, then run the exit hook with status 1
    fn fatal(&self, message: impl Display) {
        self.log(Level::Fatal, message);
        self.exit(FATAL_EXIT_CODE);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);
        self.exit(FATAL_EXIT_CODE);
    }

    fn fatalln(&self, args: &[&dyn Display]) {
        self.logln(Level::Fatal, args);
        self.exit(FATAL_EXIT_CODE);
    }

    /// Log at panic level on every sink, then panic with the message
    fn panic(&self, message: impl Display) -> ! {
        let message = message.to_string();
        self.emit(Level::Panic, &message);
        panic!("{}", message)
    }

    fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic(args)
    }

    fn panicln(&self, args: &[&dyn Display]) -> ! {
        let message = join_line(args);
        self.emit(Level::Panic, &message);
        panic!("{}", message.trim_end_matches('\n'))
    }
}

/// Logger writing to the console and, optionally, a log file.
pub struct MultiLogger {
    console: Sink,
    file: Option<Sink>,
    quiet: bool,
    log_rotate_size: u64,
    exit_func: Option<ExitFunc>,
}

impl fmt::Debug for MultiLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLogger")
            .field("console", &self.console)
            .field("file", &self.file)
            .field("quiet", &self.quiet)
            .field("log_rotate_size", &self.log_rotate_size)
            .finish_non_exhaustive()
    }
}

impl MultiLogger {
    /// Build the logger, falling back to console-only logging when the
    /// log file cannot be prepared. The failure is reported on stderr.
    pub fn new(options: Options) -> Self {
        let file = match open_configured_file(&options) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                warn!("[MultiLogger] File logging disabled: {}", e);
                None
            }
        };
        Self::assemble(options, file)
    }

    /// Build the logger, returning an error when the log file cannot be prepared
    pub fn try_new(options: Options) -> Result<Self, SetupError> {
        let file = open_configured_file(&options)?;
        Ok(Self::assemble(options, file))
    }

    fn assemble(mut options: Options, file: Option<Sink>) -> Self {
        let console_output: Box<dyn LogOutput> = options
            .stderr
            .take()
            .unwrap_or_else(|| Box::new(io::stderr()));
        let console = Sink::new(
            console_output,
            options.console_level(),
            TextFormatter::new(FormatterOptions {
                disable_timestamp: true,
                full_timestamp: false,
                disable_level_truncation: true,
                force_colors: options.force_colors,
                ..Default::default()
            }),
        );

        debug!(
            "[MultiLogger] Console level {}, file logging {}",
            console.level(),
            if file.is_some() { "enabled" } else { "disabled" }
        );

        Self {
            console,
            file,
            quiet: options.quiet,
            log_rotate_size: options.log_rotate_size,
            exit_func: options.exit_func,
        }
    }

    pub fn console(&self) -> &Sink {
        &self.console
    }

    pub fn file(&self) -> Option<&Sink> {
        self.file.as_ref()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Configured rotation threshold in bytes
    pub fn log_rotate_size(&self) -> u64 {
        self.log_rotate_size
    }

    /// Whether any sink would write a record at `level`
    pub fn enabled(&self, level: Level) -> bool {
        self.console.enabled(level) || self.file.as_ref().is_some_and(|f| f.enabled(level))
    }

    /// Logger that attaches `fields` to every record
    pub fn with_fields(&self, fields: Fields) -> FieldLogger<'_> {
        FieldLogger {
            logger: self,
            fields,
        }
    }

    /// Logger that attaches one field to every record
    pub fn with_field(&self, key: impl Into<String>, value: impl Display) -> FieldLogger<'_> {
        self.with_fields(Fields::new().with(key, value))
    }

    pub(crate) fn dispatch(&self, level: Level, message: &str, fields: &Fields) {
        self.console.emit(level, message, fields);
        if let Some(file) = &self.file {
            file.emit(level, message, fields);
        }
    }
}

impl Logger for MultiLogger {
    fn emit(&self, level: Level, message: &str) {
        self.dispatch(level, message, &Fields::new());
    }

    fn exit(&self, code: i32) {
        match &self.exit_func {
            Some(exit) => exit(code),
            None => std::process::exit(code),
        }
    }
}

/// A [`MultiLogger`] view that adds fixed fields to every record.
#[derive(Debug, Clone)]
pub struct FieldLogger<'a> {
    logger: &'a MultiLogger,
    fields: Fields,
}

impl<'a> FieldLogger<'a> {
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Copy of this logger with one more field
    pub fn with_field(&self, key: impl Into<String>, value: impl Display) -> FieldLogger<'a> {
        FieldLogger {
            logger: self.logger,
            fields: self.fields.clone().with(key, value),
        }
    }

    /// Copy of this logger with `fields` merged in
    pub fn with_fields(&self, fields: Fields) -> FieldLogger<'a> {
        let mut merged = self.fields.clone();
        merged.extend_from(&fields);
        FieldLogger {
            logger: self.logger,
            fields: merged,
        }
    }
}

impl Logger for FieldLogger<'_> {
    fn emit(&self, level: Level, message: &str) {
        self.logger.dispatch(level, message, &self.fields);
    }

    fn exit(&self, code: i32) {
        self.logger.exit(code);
    }
}

fn open_configured_file(options: &Options) -> Result<Option<Sink>, SetupError> {
    match options.log_file.as_deref() {
        Some(name) if !name.is_empty() => open_file_sink(name, options.file_level()).map(Some),
        _ => Ok(None),
    }
}

fn open_file_sink(name: &str, level: Level) -> Result<Sink, SetupError> {
    let path = path::abs(name).map_err(|source| SetupError::ResolvePath {
        path: PathBuf::from(name),
        source,
    })?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            create_log_dir(dir).map_err(|source| SetupError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(&path)
        .map_err(|source| SetupError::OpenFile {
            path: path.clone(),
            source,
        })?;

    debug!("[MultiLogger] Writing {} and above to {}", level, path.display());

    Ok(Sink::new(
        Box::new(file),
        level,
        TextFormatter::new(FormatterOptions {
            disable_timestamp: false,
            full_timestamp: true,
            disable_level_truncation: false,
            ..Default::default()
        }),
    ))
}

fn create_log_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}
