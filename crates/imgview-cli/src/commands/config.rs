use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use imgview_core::config::ViewerConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Validate this config file and print it with defaults filled in
    #[arg(long)]
    pub check: Option<PathBuf>,
}

/// Print the default (or a checked) viewer config as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = match &args.check {
        Some(path) => ViewerConfig::from_toml_file(path)
            .with_context(|| format!("Invalid config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}
