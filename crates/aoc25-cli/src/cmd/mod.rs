/// Command module for the `aoc25` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// input text and parsed arguments and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure.
pub mod circuits;
pub mod machines;
