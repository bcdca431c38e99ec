//! Reading `key<delimiter>value` records from text files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One input line split into key and value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

/// Errors from reading or parsing an input file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line}: missing delimiter {delimiter:?}")]
    Malformed {
        path: String,
        line: usize,
        delimiter: char,
    },
}

/// Split a line at the first delimiter. Returns `None` if there is none.
pub fn parse_line(line: &str, delimiter: char) -> Option<Record> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split_once(delimiter).map(|(key, value)| Record {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Open `path` and yield its records lazily, skipping blank lines.
///
/// Line numbers in errors are 1-based.
pub fn records(
    path: &Path,
    delimiter: char,
) -> Result<impl Iterator<Item = Result<Record, InputError>>, InputError> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| InputError::Io {
        path: name.clone(),
        source,
    })?;

    let lines = BufReader::new(file).lines().enumerate();
    Ok(lines.filter_map(move |(index, line)| {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(InputError::Io {
                    path: name.clone(),
                    source,
                }))
            }
        };
        if line.trim().is_empty() {
            return None;
        }
        Some(parse_line(&line, delimiter).ok_or_else(|| InputError::Malformed {
            path: name.clone(),
            line: index + 1,
            delimiter,
        }))
    }))
}
