// src/process/mod.rs
pub mod date_parser;

use std::num::ParseIntError;
use thiserror::Error;
use tracing::{debug, info};

use crate::diagnostics::{ErrorEntry, ErrorSink};
use crate::directory::{PersonDirectory, PersonRecord};
use date_parser::{parse_birthday, BirthdayError};

/// Why a single dataset line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 3 fields (id,name,birthday), found {0}")]
    FieldCount(usize),
    #[error("invalid user id {text:?}: {source}")]
    InvalidId {
        text: String,
        source: ParseIntError,
    },
    #[error("invalid birthday: {source}")]
    InvalidBirthday {
        id_text: String,
        source: BirthdayError,
    },
}

impl LineError {
    /// The raw id field, or `""` when the line did not split into fields.
    pub fn id_text(&self) -> &str {
        match self {
            LineError::FieldCount(_) => "",
            LineError::InvalidId { text, .. } => text,
            LineError::InvalidBirthday { id_text, .. } => id_text,
        }
    }
}

/// Parse one `id,name,DD/MM/YYYY` line.
pub fn parse_line(line: &str) -> Result<PersonRecord, LineError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [id_text, name, birthday_text] = fields[..] else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let id = id_text
        .trim()
        .parse::<i64>()
        .map_err(|source| LineError::InvalidId {
            text: id_text.to_string(),
            source,
        })?;
    let birthday = parse_birthday(birthday_text).map_err(|source| LineError::InvalidBirthday {
        id_text: id_text.to_string(),
        source,
    })?;

    Ok(PersonRecord {
        id,
        name: name.to_string(),
        birthday,
    })
}

/// Build the directory from a raw dataset.
///
/// - The first line is a header and is skipped without being looked at.
/// - Data lines are numbered from 1. A trailing newline does not add a line.
/// - Every rejected line goes to `sink` as exactly one entry; it never stops
///   the remaining lines from being read.
/// - A repeated id replaces the earlier record.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = content.len()))]
pub fn process<S: ErrorSink + ?Sized>(content: &str, sink: &mut S) -> PersonDirectory {
    let mut directory = PersonDirectory::default();
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for (line_num, line) in data_lines(content) {
        match parse_line(line) {
            Ok(record) => {
                directory.insert(record);
                accepted += 1;
            }
            Err(err) => {
                debug!(line = line_num, error = %err, "rejected line");
                rejected += 1;
                sink.record(ErrorEntry {
                    line: line_num,
                    id_text: err.id_text().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    info!(accepted, rejected, people = directory.len(), "dataset parsed");
    directory
}

fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
        .skip(1)
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
}
