use super::HandlerContext;
use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, Guidance,
    StatusBadge,
};
use anyhow::{Result, bail};

pub fn handle_show(ctx: &HandlerContext) -> Result<()> {
    let content = ConfigViewModel {
        path: ctx.config_path.display().to_string(),
        exists: ctx.config_path.exists(),
        config: ctx.config.clone(),
        rendered: toml::to_string_pretty(&ctx.config)?,
    };

    let mut result = CommandResultViewModel::new(content);
    if !ctx.config_path.exists() {
        result = result.with_suggestion(
            Guidance::new("Write these defaults to disk").with_command("studykit config init"),
        );
    }
    ctx.render(result)
}

pub fn handle_path(ctx: &HandlerContext) -> Result<()> {
    ctx.render(CommandResultViewModel::new(ConfigPathViewModel {
        path: ctx.config_path.display().to_string(),
        exists: ctx.config_path.exists(),
    }))
}

pub fn handle_init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    let existed = path.exists();
    if existed && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    let badge = if existed {
        StatusBadge::success("Config overwritten with defaults")
    } else {
        StatusBadge::success("Config created")
    };
    let content = ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten: existed,
    };
    ctx.render(CommandResultViewModel::new(content).with_badge(badge))
}
