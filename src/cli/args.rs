use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dq")]
#[command(about = "Chat with your documents from the command line")]
#[command(version)]
pub struct Args {
    /// Document to ask about (PDF, DOCX, or TXT)
    pub file: Option<String>,

    /// The question (reads from stdin if not provided)
    pub question: Option<String>,

    /// Backend endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure dq settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// Interactive chat mode
    Chat {
        /// Document to ask about (PDF, DOCX, or TXT)
        file: Option<String>,

        /// Backend endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
}
