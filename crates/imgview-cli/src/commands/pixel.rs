use anyhow::{bail, Result};
use clap::Args;
use imgview_core::consts::DEFAULT_MAGNIFIER_SIZE;
use imgview_core::magnifier::{Magnifier, MagnifierView};
use imgview_core::view::ChannelMask;

use super::SourceArgs;
use crate::summary::{print_magnifier, print_pixel};

#[derive(Args)]
pub struct PixelArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Column, 0 = left edge
    #[arg(short)]
    pub x: usize,

    /// Row, 0 = top edge
    #[arg(short)]
    pub y: usize,

    /// Also print the magnified neighbourhood, remapped to the image range
    #[arg(long)]
    pub magnify: bool,

    /// Side of the neighbourhood grid (odd)
    #[arg(long, default_value_t = DEFAULT_MAGNIFIER_SIZE)]
    pub size: usize,
}

pub fn run(args: &PixelArgs) -> Result<()> {
    let store = args.source.load()?;
    let image = store.image();

    let Some(pixel) = store.pixel(args.x, args.y) else {
        bail!(
            "({}, {}) is outside the {}x{} image",
            args.x,
            args.y,
            image.width,
            image.height
        );
    };
    print_pixel((args.x, args.y), pixel);

    if args.magnify {
        if args.size % 2 == 0 {
            bail!("--size must be odd");
        }
        let view = MagnifierView {
            range_min: image.min_value,
            range_max: image.max_value,
            mask: ChannelMask::ALL,
        };
        let grid = Magnifier::sample(image, (args.x, args.y), args.size, &view);
        print_magnifier(&grid);
    }
    Ok(())
}
