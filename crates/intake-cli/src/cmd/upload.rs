use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bytes::Bytes;
use clap::Args;

use intake_store::{UploadFile, check_upload};

use crate::cmd::StoreArgs;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Image files to upload (PNG or JPEG, under 5MB each)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: UploadArgs) -> Result<()> {
    let mut batch = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("{} has no usable file name", path.display()))?
            .to_string();
        let content_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            other => bail!(
                "{}: only PNG and JPEG images are allowed (got .{})",
                path.display(),
                other.unwrap_or("")
            ),
        };
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        batch.push(UploadFile::new(name, content_type, Bytes::from(bytes)));
    }

    // the whole batch must pass before any file is sent
    for file in &batch {
        check_upload(file).with_context(|| format!("{} was rejected", file.name))?;
    }

    let gateway = args.store.uploads()?;
    for file in &batch {
        let reference = gateway.upload(file).await?;
        println!("{reference}");
    }
    Ok(())
}
