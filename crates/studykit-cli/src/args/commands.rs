use clap::{Args, Subcommand};
use std::path::PathBuf;
use studykit_types::PersonalityType;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the 16 personality types")]
    Types {
        #[arg(long, help = "Validate the built-in catalog")]
        check: bool,
    },

    #[command(about = "Show study strengths, methods and tools for a type")]
    Profile {
        #[arg(help = "Four-letter type code (default: config default_type)")]
        code: Option<PersonalityType>,

        #[arg(long, help = "Show all six bonus tips, not just the type's three")]
        all_tips: bool,
    },

    #[command(about = "Plan back-to-back focus sessions")]
    Schedule(ScheduleArgs),

    #[command(about = "Draw today's study fortune")]
    Fortune,

    #[command(about = "Show today's study checklist")]
    Checklist {
        #[arg(long, value_delimiter = ',', help = "Completed item numbers, e.g. 1,3")]
        done: Vec<u8>,
    },

    #[command(about = "Analyze per-country type distributions from CSV")]
    Dist {
        #[command(subcommand)]
        command: DistCommand,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args)]
pub struct ScheduleArgs {
    #[arg(long, help = "Focus minutes per session")]
    pub focus: Option<u32>,

    #[arg(long = "break", help = "Break minutes after each session")]
    pub break_minutes: Option<u32>,

    #[arg(long, help = "Total study hours")]
    pub hours: Option<u32>,

    #[arg(long, help = "First session start, HH:MM today or YYYY-MM-DDTHH:MM")]
    pub start: Option<String>,

    #[arg(long, help = "Write the plan as CSV")]
    pub output: Option<PathBuf>,

    #[arg(long, requires = "output", help = "Prefix CSV output with a UTF-8 byte-order mark")]
    pub bom: bool,
}

#[derive(Args)]
pub struct TableArgs {
    #[arg(long, help = "CSV file with one row per country")]
    pub file: PathBuf,

    #[arg(long, help = "Row-key column (default: config distribution.key_column)")]
    pub key_column: Option<String>,

    #[arg(long, help = "Separator between type and variant in column names")]
    pub separator: Option<char>,
}

#[derive(Args)]
pub struct SelectionArgs {
    #[arg(long, help = "Row key to select, e.g. a country name")]
    pub key: String,

    #[arg(long, help = "Use raw columns instead of aggregated types")]
    pub raw: bool,

    #[arg(long, help = "Keep absolute values instead of shares")]
    pub no_normalize: bool,
}

#[derive(Subcommand)]
pub enum DistCommand {
    #[command(about = "List row keys")]
    Rows {
        #[command(flatten)]
        table: TableArgs,
    },

    #[command(about = "List categories")]
    Categories {
        #[command(flatten)]
        table: TableArgs,

        #[arg(long, help = "List raw columns instead of aggregated types")]
        raw: bool,
    },

    #[command(about = "Chart and rank one row")]
    Show {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, help = "Only show the N largest categories")]
        top: Option<usize>,

        #[arg(long, help = "Write the ranking as CSV")]
        output: Option<PathBuf>,

        #[arg(long, requires = "output", help = "Prefix CSV output with a UTF-8 byte-order mark")]
        bom: bool,
    },

    #[command(about = "Write one row as category,value CSV")]
    Export {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, help = "CSV file to write")]
        output: PathBuf,

        #[arg(long, help = "Prefix CSV output with a UTF-8 byte-order mark")]
        bom: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Print the configuration file path")]
    Path,

    #[command(about = "Write the default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
