//! Implementation of `aoc25 machines <file>`.
//!
//! Each line describes one factory machine:
//!
//! ```text
//! [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
//! ```
//!
//! The bracketed diagram is the target light pattern (`#` = on), each
//! parenthesised group is a button listing the lights (and joltage counters)
//! it touches, and the braces hold the target joltage of every counter.
//!
//! Two totals are reported across all machines:
//!
//! - **configure**: fewest presses that toggle the lights from all-off into
//!   the target pattern. Pressing a button twice cancels out, so a brute
//!   force over button subsets is exact.
//! - **jolt**: fewest presses that raise every counter from 0 to its target,
//!   found by reducing the button/counter system and searching its free
//!   variables for the minimal non-negative integer solution.
//!
//! Exit codes: 0 = success, 1 = a machine has no answer, 2 = malformed input.
use std::fmt;
use std::io::Write;

use aoc25_core::{IntegerSolution, Matrix, SolveError, SolverConfig, solve_min_sum};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

/// Lights are stored as bits of a `u64`.
pub const MAX_LIGHTS: usize = 64;

/// The configure search visits `2^buttons` subsets.
pub const MAX_BUTTONS: usize = 24;

/// One parsed machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Target light pattern; bit `i` is light `i`.
    pub lights: u64,
    /// Number of lights (and joltage counters).
    pub light_count: usize,
    /// One bitmask per button of the lights/counters it touches.
    pub buttons: Vec<u64>,
    /// Target value of every joltage counter.
    pub joltage: Vec<u64>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Position of the parser within a machine description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Before the opening `[`.
    Start,
    /// Inside the light diagram.
    Lights,
    /// After `]`, expecting the first button.
    LightsClosed,
    /// Inside a button's parentheses.
    Button,
    /// After a button's `)`, expecting another button or the joltage.
    ButtonClosed,
    /// Inside the joltage braces.
    Joltage,
    /// After the closing `}`; nothing more may follow.
    Done,
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "before the light diagram",
            Self::Lights => "in the light diagram",
            Self::LightsClosed => "after the light diagram",
            Self::Button => "in a button",
            Self::ButtonClosed => "after a button",
            Self::Joltage => "in the joltage list",
            Self::Done => "after the joltage list",
        };
        f.write_str(name)
    }
}

/// Why a machine description was rejected. Positions are byte offsets into
/// the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineParseError {
    /// A character that is not legal in the current state.
    UnexpectedChar {
        ch: char,
        position: usize,
        state: ParseState,
    },
    /// A `,`, `)` or `}` with no digits before it.
    MissingNumber { position: usize },
    /// A number that does not fit in 64 bits.
    NumberTooLarge { position: usize },
    /// A button names a light the diagram does not have.
    LightOutOfRange {
        position: usize,
        index: u64,
        lights: usize,
    },
    /// More than [`MAX_LIGHTS`] lights.
    TooManyLights { position: usize },
    /// More than [`MAX_BUTTONS`] buttons.
    TooManyButtons { position: usize },
    /// The line ended before the closing `}`.
    Incomplete { state: ParseState },
    /// The joltage list does not have one value per light.
    JoltageCount { expected: usize, actual: usize },
}

impl fmt::Display for MachineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar {
                ch,
                position,
                state,
            } => write!(f, "unexpected {ch:?} at byte {position} {state}"),
            Self::MissingNumber { position } => {
                write!(f, "missing number before byte {position}")
            }
            Self::NumberTooLarge { position } => {
                write!(f, "number too large at byte {position}")
            }
            Self::LightOutOfRange {
                position,
                index,
                lights,
            } => write!(
                f,
                "button at byte {position} names light {index}, but there are only {lights}"
            ),
            Self::TooManyLights { position } => {
                write!(f, "more than {MAX_LIGHTS} lights at byte {position}")
            }
            Self::TooManyButtons { position } => {
                write!(f, "more than {MAX_BUTTONS} buttons at byte {position}")
            }
            Self::Incomplete { state } => write!(f, "line ends {state}"),
            Self::JoltageCount { expected, actual } => {
                write!(f, "expected {expected} joltage values, found {actual}")
            }
        }
    }
}

impl std::error::Error for MachineParseError {}

/// Accumulates the digits of one number.
#[derive(Default)]
struct Digits {
    value: Option<u64>,
}

impl Digits {
    fn push(&mut self, digit: char, position: usize) -> Result<(), MachineParseError> {
        let d = u64::from(digit) - u64::from('0');
        let next = self
            .value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(d))
            .ok_or(MachineParseError::NumberTooLarge { position })?;
        self.value = Some(next);
        Ok(())
    }

    fn take(&mut self, position: usize) -> Result<u64, MachineParseError> {
        self.value
            .take()
            .ok_or(MachineParseError::MissingNumber { position })
    }
}

/// Parses one machine description with an explicit state machine.
///
/// # Errors
///
/// Returns the first [`MachineParseError`] encountered.
pub fn parse_machine(line: &str) -> Result<Machine, MachineParseError> {
    let mut state = ParseState::Start;
    let mut lights = 0u64;
    let mut light_count = 0usize;
    let mut buttons: Vec<u64> = Vec::new();
    let mut button = 0u64;
    let mut joltage: Vec<u64> = Vec::new();
    let mut digits = Digits::default();

    let light_bit = |index: u64, position: usize, lights: usize| {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < lights)
            .map(|i| 1u64 << i)
            .ok_or(MachineParseError::LightOutOfRange {
                position,
                index,
                lights,
            })
    };

    for (position, ch) in line.char_indices() {
        state = match (state, ch) {
            (ParseState::Start, '[') => ParseState::Lights,
            (ParseState::Lights, '.' | '#') => {
                if light_count == MAX_LIGHTS {
                    return Err(MachineParseError::TooManyLights { position });
                }
                if ch == '#' {
                    lights |= 1 << light_count;
                }
                light_count += 1;
                ParseState::Lights
            }
            (ParseState::Lights, ']') => ParseState::LightsClosed,
            (ParseState::LightsClosed | ParseState::ButtonClosed, ' ') => state,
            (ParseState::LightsClosed | ParseState::ButtonClosed, '(') => {
                if buttons.len() == MAX_BUTTONS {
                    return Err(MachineParseError::TooManyButtons { position });
                }
                ParseState::Button
            }
            (ParseState::Button | ParseState::Joltage, '0'..='9') => {
                digits.push(ch, position)?;
                state
            }
            (ParseState::Button, ',') => {
                button |= light_bit(digits.take(position)?, position, light_count)?;
                ParseState::Button
            }
            (ParseState::Button, ')') => {
                button |= light_bit(digits.take(position)?, position, light_count)?;
                buttons.push(std::mem::take(&mut button));
                ParseState::ButtonClosed
            }
            (ParseState::ButtonClosed, '{') => ParseState::Joltage,
            (ParseState::Joltage, ',') => {
                joltage.push(digits.take(position)?);
                ParseState::Joltage
            }
            (ParseState::Joltage, '}') => {
                joltage.push(digits.take(position)?);
                ParseState::Done
            }
            _ => {
                return Err(MachineParseError::UnexpectedChar {
                    ch,
                    position,
                    state,
                });
            }
        };
    }

    if state != ParseState::Done {
        return Err(MachineParseError::Incomplete { state });
    }
    if joltage.len() != light_count {
        return Err(MachineParseError::JoltageCount {
            expected: light_count,
            actual: joltage.len(),
        });
    }
    Ok(Machine {
        lights,
        light_count,
        buttons,
        joltage,
    })
}

// ---------------------------------------------------------------------------
// Solving
// ---------------------------------------------------------------------------

impl Machine {
    /// Fewest presses that turn the lights from all-off into the target
    /// pattern, or `None` if no combination of buttons reaches it.
    pub fn configure(&self) -> Option<u32> {
        // Parsing caps the button count well below 64.
        let subsets = 1u64 << self.buttons.len();
        (0..subsets)
            .filter(|&subset| {
                let pattern = self
                    .buttons
                    .iter()
                    .enumerate()
                    .filter(|&(b, _)| subset & (1 << b) != 0)
                    .fold(0u64, |acc, (_, &mask)| acc ^ mask);
                pattern == self.lights
            })
            .map(u64::count_ones)
            .min()
    }

    /// The button/counter system in augmented form: row `i` is counter `i`,
    /// column `j` is button `j`, and the last column is the target joltage.
    pub fn joltage_system(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.light_count, self.buttons.len() + 1);
        for (j, &mask) in self.buttons.iter().enumerate() {
            for i in 0..self.light_count {
                if mask & (1 << i) != 0 {
                    matrix[(i, j)] = 1.0;
                }
            }
        }
        for (i, &target) in self.joltage.iter().enumerate() {
            // Joltage targets are small; the conversion is exact.
            matrix[(i, self.buttons.len())] = target as f64;
        }
        matrix
    }

    /// Fewest presses that bring every counter to its target joltage.
    ///
    /// # Errors
    ///
    /// Propagates the [`SolveError`] of the linear solver.
    pub fn jolt(&self, config: &SolverConfig) -> Result<IntegerSolution, SolveError> {
        solve_min_sum(&self.joltage_system(), config)
    }
}

/// Totals for one machines run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachinesReport {
    /// Machines read.
    pub machines: usize,
    /// Sum of the fewest configure presses over all machines.
    pub configure_presses: u64,
    /// Sum of the fewest jolt presses over all machines.
    pub jolt_presses: i64,
}

/// Parses every non-blank line and solves both puzzles for each machine.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] (exit 2) for a malformed line.
/// - [`CliError::Unreachable`] or [`CliError::Unsolvable`] (exit 1) for a
///   machine without an answer.
pub fn solve_all(content: &str, config: &SolverConfig) -> Result<MachinesReport, CliError> {
    let mut report = MachinesReport {
        machines: 0,
        configure_presses: 0,
        jolt_presses: 0,
    };

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let machine = parse_machine(line).map_err(|e| CliError::ParseFailed {
            line: line_no,
            detail: e.to_string(),
        })?;

        let configure = machine
            .configure()
            .ok_or(CliError::Unreachable { line: line_no })?;
        let jolt = machine.jolt(config).map_err(|source| CliError::Unsolvable {
            line: line_no,
            source,
        })?;
        tracing::debug!(
            line = line_no,
            buttons = machine.buttons.len(),
            configure,
            jolt = jolt.total,
            "solved machine"
        );

        report.machines += 1;
        report.configure_presses += u64::from(configure);
        report.jolt_presses += jolt.total;
    }
    Ok(report)
}

/// Runs the `machines` command.
///
/// # Errors
///
/// See [`solve_all`]; writing to stdout may also fail with
/// [`CliError::IoError`].
pub fn run(content: &str, config: &SolverConfig, format: OutputFormat) -> Result<(), CliError> {
    let report = solve_all(content, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => print_json(&mut out, &report),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

fn print_human<W: Write>(w: &mut W, report: &MachinesReport) -> std::io::Result<()> {
    writeln!(
        w,
        "Configured all machines with {} presses",
        report.configure_presses
    )?;
    writeln!(w, "Jolted all machines with {} presses", report.jolt_presses)
}

fn print_json<W: Write>(w: &mut W, report: &MachinesReport) -> std::io::Result<()> {
    serde_json::to_writer(&mut *w, report)?;
    writeln!(w)
}
