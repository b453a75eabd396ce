use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use time::OffsetDateTime;

use intake_store::RequestRecord;
use intake_wizard::WizardSession;

use crate::cmd::{StoreArgs, load_answers};

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Answers file (JSON)
    #[arg(value_name = "answers.json")]
    pub answers: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: DraftArgs) -> Result<()> {
    let answers = load_answers(&args.answers)?;
    let session = WizardSession::with_answers(args.store.store()?, args.store.uploads()?, answers);

    // drafts save from any step, valid or not
    let ack = session.save_draft().await?;

    if args.store.dry_run {
        let record = RequestRecord::draft(session.answers(), OffsetDateTime::now_utc());
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        match ack.id {
            Some(id) => println!("draft saved: {id}"),
            None => println!("draft saved"),
        }
    }
    Ok(())
}
