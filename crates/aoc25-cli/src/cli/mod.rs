//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for puzzle answers.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One labelled sentence per answer (default).
    Human,
    /// A single JSON object on stdout.
    Json,
}

/// All subcommands exposed by the `aoc25` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Wire junction boxes into circuits by shortest distance.
    Circuits {
        /// File with one `x,y,z` junction box per line, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Nearest neighbours considered per junction box.
        #[arg(long, short = 'k', default_value = "10")]
        neighbours: usize,
        /// Number of shortest connections made before measuring circuits.
        #[arg(long, short = 'n', default_value = "1000")]
        connections: usize,
    },

    /// Find the fewest button presses for every factory machine.
    Machines {
        /// File with one machine description per line, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Upper bound on free-variable assignments tried per machine; a machine
        /// whose search space is larger fails with exit code 1.
        #[arg(long, default_value_t = aoc25_core::linalg::DEFAULT_MAX_CANDIDATES)]
        max_candidates: u64,
    },
}

/// Root CLI struct for the `aoc25` binary.
///
/// All global flags are marked `global = true` so clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "aoc25",
    version,
    about = "Advent of Code 2025 puzzle drivers",
    long_about = "Advent of Code 2025 puzzle drivers.\n\
                  Wires junction-box circuits with a k-d tree and union-find, and\n\
                  solves factory machine button puzzles with a linear solver."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log solver and index progress to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `AOC25_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "AOC25_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}
