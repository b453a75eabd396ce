use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use time::OffsetDateTime;

use intake_spec::{Step, validate_all};
use intake_store::RequestRecord;
use intake_wizard::WizardSession;

use crate::cmd::{StoreArgs, load_answers};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Answers file (JSON)
    #[arg(value_name = "answers.json")]
    pub answers: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: SubmitArgs) -> Result<()> {
    let answers = load_answers(&args.answers)?;

    let failing = validate_all(&answers);
    if !failing.is_empty() {
        for result in &failing {
            let step = result.step.expect("validation results carry their step");
            for error in &result.errors {
                eprintln!("{step}: {} ({})", error.message, error.field);
            }
        }
        bail!("answers are not complete enough to submit");
    }

    let mut session =
        WizardSession::with_answers(args.store.store()?, args.store.uploads()?, answers);
    session.go_to(Step::Review)?;
    let ack = session.submit().await?;

    if args.store.dry_run {
        let record = RequestRecord::submission(session.answers(), OffsetDateTime::now_utc());
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        match ack.id {
            Some(id) => println!("request submitted: {id}"),
            None => println!("request submitted"),
        }
    }
    Ok(())
}
