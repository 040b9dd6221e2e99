/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `aoc25` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The tool could not read or parse the
///   puzzle input, so no puzzle logic ran.
/// - Exit code **1**: logical failure. The input was well formed but the
///   puzzle has no answer (a machine cannot be solved, circuits never close).
use std::fmt;
use std::path::PathBuf;

use aoc25_core::SolveError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `aoc25` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// `"-"` for stdin, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A line of puzzle input is malformed.
    ParseFailed {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        detail: String,
    },

    /// The input has fewer junction boxes than a circuit needs.
    TooFewBoxes {
        /// Number of boxes read.
        found: usize,
    },

    // --- Exit code 1: logical failures ---
    /// A machine's joltage system has no usable solution.
    Unsolvable {
        /// 1-based line number of the machine.
        line: usize,
        /// The solver failure.
        source: SolveError,
    },

    /// A machine's light pattern cannot be reached with any button subset.
    Unreachable {
        /// 1-based line number of the machine.
        line: usize,
    },

    /// The candidate connections never join every junction box.
    Disconnected {
        /// Number of circuits left after every candidate connection.
        circuits: usize,
        /// Number of neighbours considered per junction box.
        neighbours: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, etc.).
    /// - `1`: logical failure (unsolvable machine, disconnected circuits).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::TooFewBoxes { .. } => 2,

            Self::Unsolvable { .. } | Self::Unreachable { .. } | Self::Disconnected { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { line, detail } => {
                format!("error: line {line}: {detail}")
            }
            Self::TooFewBoxes { found } => {
                format!("error: need at least 2 junction boxes, found {found}")
            }
            Self::Unsolvable { line, source } => {
                format!("error: machine on line {line} cannot be jolted: {source}")
            }
            Self::Unreachable { line } => {
                format!("error: machine on line {line} cannot reach its light pattern")
            }
            Self::Disconnected {
                circuits,
                neighbours,
            } => {
                format!(
                    "error: unable to connect all junction boxes: {circuits} circuits remain \
                     with {neighbours} neighbours per box"
                )
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unsolvable { source, .. } => Some(source),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::TooFewBoxes { .. }
            | Self::Unreachable { .. }
            | Self::Disconnected { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
