use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;

use intake_spec::{Step, validate_all, validate_step};

use crate::cmd::load_answers;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Answers file (JSON)
    #[arg(value_name = "answers.json")]
    pub answers: PathBuf,

    /// Check a single step (1-6) instead of all of them
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub step: Option<u8>,

    /// Emit the validation results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let answers = load_answers(&args.answers)?;

    let failing = match args.step {
        Some(index) => {
            let step = Step::from_index(index).expect("range-checked by clap");
            let result = validate_step(step, &answers);
            if result.is_valid() { Vec::new() } else { vec![result] }
        }
        None => validate_all(&answers),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&failing)?);
    } else {
        for result in &failing {
            let step = result.step.expect("validation results carry their step");
            for error in &result.errors {
                println!("{step}: {} ({})", error.message, error.field);
            }
        }
    }

    if failing.is_empty() {
        if !args.json {
            println!("ok");
        }
        Ok(())
    } else {
        let count: usize = failing.iter().map(|result| result.errors.len()).sum();
        bail!("{count} validation error(s)");
    }
}
