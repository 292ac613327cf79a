//! File sink: truncated level names, absolute timestamps, own threshold

use multilog::{MultiLogger, SetupError};
use pretty_assertions::assert_eq;
use tests::demos::{log_every_level, logf_every_level, logln_every_level};
use tests::fixtures::{read_log, TestLogger};
use tests::{Level, Logger, Options, SharedBuffer};

const WARN_AND_ABOVE: &str = "WARN[<time>]: warn #4\n\
                              WARN[<time>]: warning #5\n\
                              ERRO[<time>]: error #6\n\
                              FATA[<time>]: fatal #7\n";

#[test]
fn test_default_file_level_is_warn() {
    let t = TestLogger::with_file(Options::default());
    logf_every_level(&t.logger);

    assert_eq!(t.logger.file().map(|f| f.level()), Some(Level::Warn));
    assert_eq!(t.file_output(), WARN_AND_ABOVE);
}

#[test]
fn test_console_and_file_thresholds_are_independent() {
    let t = TestLogger::with_file(Options {
        verbose: 2,
        log_level: Some("info".to_string()),
        ..Default::default()
    });
    log_every_level(&t.logger);

    let console = "DEBUG: debug #2\n\
                   INFO: info #3\n\
                   WARNING: warn #4\n\
                   WARNING: warning #5\n\
                   ERROR: error #6\n\
                   FATAL: fatal #7\n";
    assert_eq!(t.console_output(), console);

    let file = "INFO[<time>]: info #3\n".to_string() + WARN_AND_ABOVE;
    assert_eq!(t.file_output(), file);
}

#[test]
fn test_file_level_above_console_level() {
    let t = TestLogger::with_file(Options {
        verbose: 3,
        log_level: Some("error".to_string()),
        ..Default::default()
    });
    logln_every_level(&t.logger);

    assert!(t.console_output().starts_with("TRACE: trace # 1\n"));
    assert_eq!(
        t.file_output(),
        "ERRO[<time>]: error # 6\nFATA[<time>]: fatal # 7\n"
    );
}

#[test]
fn test_unknown_file_level_falls_back_to_error() {
    let t = TestLogger::with_file(Options {
        log_level: Some("chatty".to_string()),
        ..Default::default()
    });
    t.logger.warn("not in file");
    t.logger.error("in file");

    assert_eq!(t.file_output(), "ERRO[<time>]: in file\n");
}

#[test]
fn test_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "existing line\n").unwrap();

    let logger = MultiLogger::new(
        Options {
            log_file: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        }
        .with_stderr(SharedBuffer::new()),
    );
    logger.error("new line");

    assert_eq!(read_log(&path), "existing line\nERRO[<time>]: new line\n");
}

#[test]
fn test_missing_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("app.log");

    let logger = MultiLogger::try_new(
        Options {
            log_file: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        }
        .with_stderr(SharedBuffer::new()),
    )
    .expect("Failed to build logger");
    logger.error("created");

    assert_eq!(read_log(&path), "ERRO[<time>]: created\n");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path.parent().unwrap()).unwrap().permissions().mode();
        // umask may only clear bits
        assert_eq!(mode & 0o700, 0o700);
        assert_eq!(mode & !0o755 & 0o777, 0);
    }
}

#[test]
fn test_blocked_directory_degrades_to_console() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();
    let log_file = blocker.join("app.log").to_string_lossy().into_owned();

    let err = MultiLogger::try_new(Options {
        log_file: Some(log_file.clone()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, SetupError::CreateDir { .. } | SetupError::OpenFile { .. }));

    let console = SharedBuffer::new();
    let logger = MultiLogger::new(
        Options {
            log_file: Some(log_file),
            ..Default::default()
        }
        .with_stderr(console.clone()),
    );
    assert!(logger.file().is_none());

    logger.error("console only");
    assert_eq!(console.contents(), "ERROR: console only\n");
}

#[test]
fn test_rotate_size_is_carried() {
    let t = TestLogger::console(Options {
        log_rotate_size: 4096,
        ..Default::default()
    });
    assert_eq!(t.logger.log_rotate_size(), 4096);
    assert_eq!(
        TestLogger::console(Options::default()).logger.log_rotate_size(),
        multilog::options::DEFAULT_LOG_ROTATE_SIZE
    );
}
