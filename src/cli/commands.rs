use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mailpilot", about = concat!("mailpilot v", env!("CARGO_PKG_VERSION"), " - a keyboard-driven inbox"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List emails grouped by bucket
    List(ListArgs),
    /// Show per-category email counts
    Counts,
    /// Show one email with its layout and sender profile
    Show(ShowArgs),
    /// Show a contact profile by display name
    Contact(ContactArgs),
    /// List the command palette actions and their shortcuts
    Actions,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only emails in this category (important, shared, calendar, news,
    /// github, linear, engineering, other)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Email ID to show
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Sender display name, e.g. "Rahul Vohra"
    pub name: String,
}
