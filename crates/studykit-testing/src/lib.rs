//! Testing infrastructure for studykit integration tests.
//!
//! - `TestWorld`: isolated config path and working directory per test
//! - `fixtures`: sample distribution tables
//! - `assertions`: checks over the JSON envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
