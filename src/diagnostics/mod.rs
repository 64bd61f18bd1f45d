// src/diagnostics/mod.rs

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use std::{
    fmt,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::warn;

/// A rejected dataset line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// 1-based position after the header.
    pub line: usize,
    /// Raw id field as far as it could be read; empty when the line never split into fields.
    pub id_text: String,
    pub message: String,
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error processing line {} for ID {}: {}",
            self.line, self.id_text, self.message
        )
    }
}

/// Write-only destination for rejected-line diagnostics.
///
/// Recording never fails from the caller's point of view; sinks that can
/// fail must report the problem themselves and carry on.
pub trait ErrorSink {
    fn record(&mut self, entry: ErrorEntry);
}

impl ErrorSink for Vec<ErrorEntry> {
    fn record(&mut self, entry: ErrorEntry) {
        self.push(entry);
    }
}

/// Appends one line per entry to a file that is never truncated.
pub struct FileErrorSink {
    path: PathBuf,
    file: File,
    recorded: usize,
    failed: usize,
}

impl FileErrorSink {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating diagnostic directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening diagnostic log {:?}", &path))?;
        Ok(Self {
            path,
            file,
            recorded: 0,
            failed: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries successfully written so far.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Entries that could not be written.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Sync to disk. Called once at shutdown; problems are logged, not returned.
    pub fn finish(self) {
        if self.failed > 0 {
            warn!(path = %self.path.display(), failed = self.failed, "some diagnostics were not written");
        }
        if let Err(e) = self.file.sync_all() {
            warn!(path = %self.path.display(), error = %e, "syncing diagnostic log failed");
        }
    }
}

impl ErrorSink for FileErrorSink {
    fn record(&mut self, entry: ErrorEntry) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = format!("{} ERROR {}\n", ts, entry);
        match self.file.write_all(line.as_bytes()) {
            Ok(()) => self.recorded += 1,
            Err(e) => {
                self.failed += 1;
                warn!(path = %self.path.display(), error = %e, "{}", entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entry(line: usize, id: &str, msg: &str) -> ErrorEntry {
        ErrorEntry {
            line,
            id_text: id.to_string(),
            message: msg.to_string(),
        }
    }

    #[test]
    fn display_names_line_and_id() {
        assert_eq!(
            entry(2, "2", "boom").to_string(),
            "Error processing line 2 for ID 2: boom"
        );
    }

    #[test]
    fn file_sink_appends_across_opens() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("logs").join("error.log");

        let mut sink = FileErrorSink::open(&path).unwrap();
        sink.record(entry(1, "x", "first"));
        assert_eq!(sink.recorded(), 1);
        sink.finish();

        let mut sink = FileErrorSink::open(&path).unwrap();
        sink.record(entry(3, "", "second"));
        sink.finish();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" ERROR Error processing line 1 for ID x: first"));
        assert!(lines[1].ends_with(" ERROR Error processing line 3 for ID : second"));

        // leading timestamp is RFC 3339
        let ts = lines[0].split(' ').next().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");
    }

    #[test]
    fn open_fails_when_destination_is_a_directory() {
        let tmp = tempdir().unwrap();
        assert!(FileErrorSink::open(tmp.path()).is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn unwritable_log_does_not_stop_the_run() {
        use crate::{process::process, session};
        use std::io::Cursor;

        let mut sink = FileErrorSink::open("/dev/full").unwrap();
        let dir = process("h\n1,A,bad\n2,B,02/02/2000\nx\n", &mut sink);

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get(2).unwrap().name, "B");
        assert_eq!(sink.recorded(), 0);
        assert_eq!(sink.failed(), 2);
        sink.finish();

        let mut out = Vec::new();
        session::run(&dir, Cursor::new(&b"2\n0\n"[..]), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Name: B"), "{out}");
        assert!(out.ends_with(&format!("{}\n", session::EXITING)), "{out}");
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink: Vec<ErrorEntry> = Vec::new();
        sink.record(entry(2, "a", "one"));
        sink.record(entry(1, "b", "two"));
        assert_eq!(sink[0].line, 2);
        assert_eq!(sink[1].line, 1);
    }
}
