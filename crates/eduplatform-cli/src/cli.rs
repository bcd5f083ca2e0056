use clap::{Args, Parser, Subcommand, ValueEnum};
use eduplatform_config::CONFIG_ENV_VAR;
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "eduplatform", version, about = "Browse the EduPlatform catalog")]
pub struct Cli {
    /// Config file (defaults to ./eduplatform.toml when present).
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Directory with courses.json, tutors.json, articles.json and dashboard.json.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print pretty JSON instead of one line per record.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log per-query row counts and sort decisions.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List courses.
    Courses {
        #[command(flatten)]
        listing: ListingArgs,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        level: Option<String>,
    },

    /// List tutors.
    Tutors {
        #[command(flatten)]
        listing: ListingArgs,

        #[arg(long)]
        subject: Option<String>,
    },

    /// List blog articles.
    Articles {
        #[command(flatten)]
        listing: ListingArgs,

        #[arg(long)]
        category: Option<String>,
    },

    /// Show one record in full.
    Show { kind: RecordKind, id: u32 },

    /// Load the data and report every validation issue.
    Validate,

    /// Learner progress summary and recommended courses.
    Dashboard {
        #[command(flatten)]
        listing: ListingArgs,

        #[arg(long)]
        category: Option<String>,
    },
}

///
/// ListingArgs
///

#[derive(Args, Debug)]
pub struct ListingArgs {
    /// Case-insensitive substring over the searchable text fields.
    #[arg(long)]
    pub search: Option<String>,

    /// Sort key; unknown or unsupported keys keep source order.
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RecordKind {
    Course,
    Tutor,
    Article,
}
