use anyhow::Result;
use clap::Parser;

use dq_cli::cli::commands::{ask, chat, configure};
use dq_cli::cli::{Args, Command};
use dq_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat { file, endpoint }) => {
            let options = chat::ChatOptions { file, endpoint };
            chat::run_chat(options).await?;
        }
        None => {
            let options = ask::AskOptions {
                file: args.file,
                question: args.question,
                endpoint: args.endpoint,
            };
            ask::run_ask(options).await?;
        }
    }

    Ok(())
}
