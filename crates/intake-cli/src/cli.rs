use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::{
    self, draft::DraftArgs, list::ListArgs, submit::SubmitArgs, upload::UploadArgs,
    validate::ValidateArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "intake",
    about = "Website request intake: validate, save, and submit answers",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check an answers file against the per-step validation rules
    Validate(ValidateArgs),
    /// Save an answers file as a new draft row
    Draft(DraftArgs),
    /// Validate an answers file and submit it as the final request
    Submit(SubmitArgs),
    /// Upload design material files and print their references
    Upload(UploadArgs),
    /// List persisted requests, newest first
    List(ListArgs),
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Draft(args) => cmd::draft::run(args).await,
        Commands::Submit(args) => cmd::submit::run(args).await,
        Commands::Upload(args) => cmd::upload::run(args).await,
        Commands::List(args) => cmd::list::run(args).await,
    }
}
