/// Puzzle input reading with size enforcement and UTF-8 validation.
///
/// All input I/O of the `aoc25` binary goes through [`read_input`];
/// `aoc25-core` never touches the filesystem.
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: read through `Read::take` so the buffer is bounded.
/// - UTF-8 failures report the byte offset of the first bad sequence.
/// - Every failure maps to a [`CliError`] with exit code 2.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) when the file is missing or
/// unreadable, when the input exceeds `max_size`, on any other I/O error,
/// and when the bytes are not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();
    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads stdin, capped at `max_size` bytes.
///
/// A stream of exactly `max_size` bytes is probed for one more byte to tell
/// "at the limit" from "over the limit".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();

    let mut buf: Vec<u8> = Vec::new();
    (&mut handle)
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    tracing::debug!(bytes = buf.len(), "read stdin");
    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}
