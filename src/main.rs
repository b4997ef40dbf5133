use anyhow::Result;
use clap::Parser;

use counsel_cli::cli::commands::{chat, configure, reset, status};
use counsel_cli::cli::{Args, Command};
use counsel_cli::config::ResolveOptions;
use counsel_cli::i18n::print_languages;
use counsel_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_logging(args.verbose);

    let resolve = ResolveOptions {
        base_url: args.base_url,
        language: args.lang,
    };

    let code = match args.command {
        None => {
            chat::run_chat(chat::ChatOptions {
                resolve,
                user_id: None,
            })
            .await?;
            exitcode::OK
        }
        Some(Command::Chat { user_id }) => {
            chat::run_chat(chat::ChatOptions { resolve, user_id }).await?;
            exitcode::OK
        }
        Some(Command::Status) => status::run_status(&resolve).await?,
        Some(Command::Reset { user_id }) => reset::run_reset(&resolve, &user_id).await?,
        Some(Command::Languages) => {
            print_languages();
            exitcode::OK
        }
        Some(Command::Configure { show }) => {
            if show {
                configure::show_config()?;
            } else {
                configure::run_configure()?;
            }
            exitcode::OK
        }
    };

    if code != exitcode::OK {
        std::process::exit(code);
    }

    Ok(())
}
