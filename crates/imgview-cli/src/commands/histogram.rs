use anyhow::{bail, Result};
use clap::Args;
use imgview_core::consts::DEFAULT_HISTOGRAM_BINS;
use imgview_core::histogram::Histogram;

use super::SourceArgs;
use crate::summary::print_histogram;

#[derive(Args)]
pub struct HistogramArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of bins per channel
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,

    /// Lower end of the binned range (default: image minimum)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f32>,

    /// Upper end of the binned range (default: image maximum)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f32>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    if args.bins == 0 {
        bail!("--bins must be at least 1");
    }
    let store = args.source.load()?;
    let image = store.image();

    let min = args.min.unwrap_or(image.min_value);
    let max = args.max.unwrap_or(image.max_value);
    let hist = Histogram::build(image, min, max, args.bins);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hist)?);
    } else {
        print_histogram(&image.filename, &hist);
    }
    Ok(())
}
