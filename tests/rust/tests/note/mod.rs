//! Note integration tests
//!
//! Notes go to the console whatever the verbosity, never to the log file,
//! and disappear entirely in quiet mode.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use tests::demos::note_every_form;
use tests::fixtures::TestLogger;
use tests::{Logger, MultiLogger, Options, SharedBuffer};

const EVERY_NOTE: &str = "NOTE: note #1\n\
                          NOTE: note #2\n\
                          NOTE: note # 3\n\
                          NOTE: note #4\n\
                          NOTE: note #5\n\
                          NOTE: note # 6\n";

#[test]
fn test_notes_ignore_verbosity() {
    let t = TestLogger::console(Options::default());
    note_every_form(&t.logger);
    assert_eq!(t.console_output(), EVERY_NOTE);
}

#[test]
fn test_notes_are_not_saved_to_file() {
    let t = TestLogger::with_file(Options {
        log_level: Some("trace".to_string()),
        ..Default::default()
    });
    note_every_form(&t.logger);
    t.logger.error("recorded");

    assert_eq!(t.console_output(), format!("{}ERROR: recorded\n", EVERY_NOTE));
    assert_eq!(t.file_output(), "ERRO[<time>]: recorded\n");
}

#[test]
fn test_quiet_suppresses_notes_only() {
    let t = TestLogger::with_file(Options {
        quiet: true,
        ..Default::default()
    });
    note_every_form(&t.logger);
    t.logger.error("still shown");

    assert_eq!(t.console_output(), "ERROR: still shown\n");
    assert_eq!(t.file_output(), "ERRO[<time>]: still shown\n");
}

#[test]
fn test_snote_returns_text() {
    let t = TestLogger::console(Options::default());

    assert_eq!(t.logger.snote("kept"), "NOTE: kept\n");
    assert_eq!(t.logger.snotef(format_args!("{} + {}", 1, 2)), "NOTE: 1 + 2\n");
    assert_eq!(t.logger.snoteln(&[&"a", &"b"]), "NOTE: a b\n");
    assert_eq!(t.logger.snote("ends\n"), "NOTE: ends\n");
    assert!(t.console.is_empty());
}

#[test]
fn test_snote_is_empty_when_quiet() {
    let t = TestLogger::console(Options {
        quiet: true,
        ..Default::default()
    });
    assert_eq!(t.logger.snote("hidden"), "");
}

#[test]
fn test_forced_color_note() {
    let t = TestLogger::console(Options {
        force_colors: true,
        ..Default::default()
    });
    t.logger.note("bright");
    assert_eq!(t.console_output(), "\x1b[1;36mNOTE:\x1b[0m bright\n");
}

#[test]
fn test_concurrent_notes_and_records_keep_lines_whole() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 200;

    let console = SharedBuffer::new();
    let logger = Arc::new(MultiLogger::new(
        Options::default().with_stderr(console.clone()),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..ROUNDS {
                    logger.notef(format_args!("note-{}-{}", t, i));
                    logger.errorf(format_args!("err-{}-{}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let output = console.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * ROUNDS * 2);

    for line in &lines {
        let body = line
            .strip_prefix("NOTE: note-")
            .or_else(|| line.strip_prefix("ERROR: err-"))
            .unwrap_or_else(|| panic!("interleaved line: {:?}", line));
        let mut parts = body.split('-');
        let t: usize = parts.next().unwrap().parse().unwrap();
        let i: usize = parts.next().unwrap().parse().unwrap();
        assert!(t < THREADS && i < ROUNDS && parts.next().is_none(), "bad line {:?}", line);
    }

    for t in 0..THREADS {
        let last = format!("ERROR: err-{}-{}", t, ROUNDS - 1);
        assert!(lines.contains(&last.as_str()), "missing {}", last);
    }
}
