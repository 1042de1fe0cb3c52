pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
