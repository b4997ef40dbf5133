use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "counsel")]
#[command(about = "Terminal chat client for the counselor assistant API")]
#[command(version)]
pub struct Args {
    /// Base URL of the assistant API (overrides COUNSEL_API_BASE and config file)
    #[arg(short = 'b', long, global = true)]
    pub base_url: Option<String>,

    /// Session language (en, hi)
    #[arg(short = 'l', long = "lang", global = true)]
    pub lang: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat (the default)
    Chat {
        /// Use a fixed user id instead of a random one
        #[arg(short = 'u', long)]
        user_id: Option<String>,
    },
    /// Check API health and readiness once
    Status,
    /// Clear the assistant's memory for a user id
    Reset {
        /// The user id whose conversation should be forgotten
        user_id: String,
    },
    /// List display languages
    Languages,
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
