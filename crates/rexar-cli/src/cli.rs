//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rexar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract archive contents, expanding nested archives
    Extract(ExtractArgs),
    /// List archive contents without extraction
    List(ListArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Destination directory (default: archive path without extension)
    #[arg(short, long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Comma-separated file extensions to keep in the listing
    /// (default: all files)
    #[arg(short, long, value_name = "EXT,EXT,...")]
    pub extensions: Option<String>,

    /// Delete the source archive after successful extraction
    #[arg(long)]
    pub delete_source: bool,

    /// Overwrite files that already exist in the destination
    #[arg(long)]
    pub overwrite: bool,

    /// Extract members with unsafe paths instead of dropping them
    #[arg(long)]
    pub allow_unsafe: bool,

    /// Number of nested archives to expand across the whole run
    /// (negative: unlimited)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub recursion: i64,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
