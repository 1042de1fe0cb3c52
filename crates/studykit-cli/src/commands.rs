use super::args::{Cli, Commands, ConfigCommand, DistCommand, OutputFormat};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, WelcomeViewModel};
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    // `config init` and `config path` must work even when the file is broken.
    let config = match &cli.command {
        Some(Commands::Config {
            command: ConfigCommand::Init { .. } | ConfigCommand::Path,
        }) => Config::default(),
        _ => Config::load_from(&config_path)?,
    };
    tracing::debug!(path = %config_path.display(), "config resolved");

    let json = matches!(cli.format, OutputFormat::Json);
    let color = !json && std::io::stdout().is_terminal();
    let ctx = HandlerContext::new(config, config_path, ConsoleRenderer::new(json, color));

    let Some(command) = cli.command else {
        return show_guidance(&ctx);
    };

    match command {
        Commands::Types { check } => handlers::catalog::handle_types(&ctx, check),

        Commands::Profile { code, all_tips } => {
            handlers::catalog::handle_profile(&ctx, code, all_tips)
        }

        Commands::Schedule(args) => handlers::schedule::handle(&ctx, args),

        Commands::Fortune => handlers::daily::handle_fortune(&ctx),

        Commands::Checklist { done } => handlers::daily::handle_checklist(&ctx, &done),

        Commands::Dist { command } => match command {
            DistCommand::Rows { table } => handlers::dist::handle_rows(&ctx, table),
            DistCommand::Categories { table, raw } => {
                handlers::dist::handle_categories(&ctx, table, raw)
            }
            DistCommand::Show {
                table,
                selection,
                top,
                output,
                bom,
            } => handlers::dist::handle_show(&ctx, table, selection, top, output, bom),
            DistCommand::Export {
                table,
                selection,
                output,
                bom,
            } => handlers::dist::handle_export(&ctx, table, selection, &output, bom),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
            ConfigCommand::Path => handlers::config::handle_path(&ctx),
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
        },
    }
}

fn show_guidance(ctx: &HandlerContext) -> Result<()> {
    let content = WelcomeViewModel {
        default_type: ctx.config.default_type.to_string(),
        config_path: ctx.config_path.display().to_string(),
    };
    let result = CommandResultViewModel::new(content)
        .with_suggestion(
            Guidance::new("See your type's study methods")
                .with_command(format!("studykit profile {}", ctx.config.default_type)),
        )
        .with_suggestion(Guidance::new("Plan today's sessions").with_command("studykit schedule"))
        .with_suggestion(
            Guidance::new("Chart a country's type distribution")
                .with_command("studykit dist show --file data.csv --key Japan"),
        );
    ctx.render(result)
}
