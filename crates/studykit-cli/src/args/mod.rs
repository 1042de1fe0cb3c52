// NOTE: Command Organization Rationale
//
// Why namespaced subcommands for tables but flat ones for the planner?
// - `dist` and `config` group several operations over the same input
// - profile/schedule/fortune/checklist are single actions; nesting them
//   would only add typing
// - Example: `dist show --file data.csv --key Japan` vs `schedule --focus 25`

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "studykit")]
#[command(about = "Personality-aware study planning and type distribution analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (default: platform config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
