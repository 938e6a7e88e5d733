use anyhow::Result;
use clap::Args;

use super::SourceArgs;
use crate::summary::print_image_summary;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let store = args.source.load()?;
    print_image_summary(store.image());
    Ok(())
}
