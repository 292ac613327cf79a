//! Shared test utilities and fixtures for multilog integration tests.

pub use multilog::{Fields, Level, Logger, MultiLogger, Options};

pub use mocks::{ExitRecorder, CountingTerminal, SharedBuffer, TerminalBuffer};

/// Test fixture utilities
pub mod fixtures {
    use super::*;
    use regex::Regex;
    use std::path::{Path, PathBuf};
    use std::sync::OnceLock;
    use tempfile::TempDir;

    /// Log file name inside a scratch directory
    pub const LOG_FILE: &str = "log.txt";

    /// Replace RFC3339 timestamps with `<time>`
    pub fn filter_time(data: &str) -> String {
        static TIME: OnceLock<Regex> = OnceLock::new();
        let re = TIME.get_or_init(|| {
            Regex::new(r"\d{4}-\d{1,2}-\d{1,2}T\d{2}:\d{2}:\d{2}[\dZ:+-]*").unwrap()
        });
        re.replace_all(data, "<time>").into_owned()
    }

    /// Logger under test with its captured console and exit codes
    pub struct TestLogger {
        pub logger: MultiLogger,
        pub console: SharedBuffer,
        pub exits: ExitRecorder,
        pub log_path: Option<PathBuf>,
        _temp_dir: Option<TempDir>,
    }

    impl TestLogger {
        /// Console-only logger
        pub fn console(options: Options) -> Self {
            Self::build(options, None)
        }

        /// Logger that also writes to a fresh log file in a temp dir
        pub fn with_file(mut options: Options) -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let log_path = temp_dir.path().join(LOG_FILE);
            options.log_file = Some(log_path.to_string_lossy().into_owned());
            let mut test_logger = Self::build(options, Some(temp_dir));
            test_logger.log_path = Some(log_path);
            test_logger
        }

        fn build(options: Options, temp_dir: Option<TempDir>) -> Self {
            let console = SharedBuffer::new();
            let exits = ExitRecorder::new();
            let logger = MultiLogger::new(
                options
                    .with_stderr(console.clone())
                    .with_exit_func(exits.hook()),
            );
            Self {
                logger,
                console,
                exits,
                log_path: None,
                _temp_dir: temp_dir,
            }
        }

        /// Console output so far
        pub fn console_output(&self) -> String {
            self.console.contents()
        }

        /// Log file contents with timestamps masked
        pub fn file_output(&self) -> String {
            let path = self.log_path.as_deref().expect("logger has no log file");
            read_log(path)
        }
    }

    /// Read a log file, masking timestamps
    pub fn read_log(path: &Path) -> String {
        let data = std::fs::read_to_string(path).expect("Failed to read log file");
        filter_time(&data)
    }
}

/// Scripted logging sessions shared by several tests
pub mod demos {
    use super::*;

    /// One record per level, message form
    pub fn log_every_level(logger: &impl Logger) {
        logger.trace(format!("trace #{}", 1));
        logger.debug(format!("debug #{}", 2));
        logger.info(format!("info #{}", 3));
        logger.warn(format!("warn #{}", 4));
        logger.warning(format!("warning #{}", 5));
        logger.error(format!("error #{}", 6));
        logger.fatal(format!("fatal #{}", 7));
    }

    /// One record per level, format-arguments form
    pub fn logf_every_level(logger: &impl Logger) {
        logger.tracef(format_args!("trace #{}", 1));
        logger.debugf(format_args!("debug #{}", 2));
        logger.infof(format_args!("info #{}", 3));
        logger.warnf(format_args!("warn #{}", 4));
        logger.warningf(format_args!("warning #{}", 5));
        logger.errorf(format_args!("error #{}", 6));
        logger.fatalf(format_args!("fatal #{}", 7));
    }

    /// One record per level, space-joined form
    pub fn logln_every_level(logger: &impl Logger) {
        logger.traceln(&[&"trace #", &1]);
        logger.debugln(&[&"debug #", &2]);
        logger.infoln(&[&"info #", &3]);
        logger.warnln(&[&"warn #", &4]);
        logger.warningln(&[&"warning #", &5]);
        logger.errorln(&[&"error #", &6]);
        logger.fatalln(&[&"fatal #", &7]);
    }

    /// Every note form
    pub fn note_every_form(logger: &MultiLogger) {
        logger.notef(format_args!("note #{}", 1));
        logger.note(format!("note #{}", 2));
        logger.noteln(&[&"note #", &3]);
        logger.printf(format_args!("note #{}", 4));
        logger.print(format!("note #{}", 5));
        logger.println(&[&"note #", &6]);
    }
}
