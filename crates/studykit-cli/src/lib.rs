// NOTE: studykit layering
//
// - studykit-types: static catalog and plain data (no behavior beyond lookups)
// - studykit-engine: pure functions over caller-supplied inputs, never logs
// - this crate: argument parsing, config, logging, rendering, file output
//
// Anything that touches the clock, the terminal, randomness or the
// filesystem lives here so the engine stays deterministic.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    Cli, Commands, ConfigCommand, DistCommand, LogLevel, OutputFormat, ScheduleArgs, SelectionArgs,
    TableArgs,
};
pub use commands::run;
