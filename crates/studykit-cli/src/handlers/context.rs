use crate::config::Config;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;

/// Loaded configuration plus the renderer every handler writes through.
pub struct HandlerContext {
    pub config: Config,
    pub config_path: PathBuf,
    renderer: ConsoleRenderer,
}

impl HandlerContext {
    pub fn new(config: Config, config_path: PathBuf, renderer: ConsoleRenderer) -> Self {
        Self {
            config,
            config_path,
            renderer,
        }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        self.renderer.render(view_model)
    }
}
