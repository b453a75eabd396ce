use anyhow::Result;
use clap::Args;
use time::format_description::well_known::Rfc3339;

use intake_store::RequestStore as _;

use crate::cmd::StoreArgs;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit the rows as JSON instead of a summary line per row
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Only show drafts, or only show submissions
    #[arg(long, conflicts_with = "submitted", default_value_t = false)]
    pub drafts: bool,
    #[arg(long, default_value_t = false)]
    pub submitted: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let store = args.store.store()?;
    let mut rows = store.fetch_all().await?;
    if args.drafts {
        rows.retain(|row| row.is_draft);
    } else if args.submitted {
        rows.retain(|row| !row.is_draft);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let kind = if row.is_draft { "draft" } else { "submitted" };
        let when = row.created_at.format(&Rfc3339)?;
        println!("{when}  {kind:9}  {}  <{}>", row.full_name, row.email);
    }
    tracing::debug!(rows = rows.len(), "listed request rows");
    Ok(())
}
