mod common;

use common::{ramp_image, rgba_image};
use imgview_core::consts::PARALLEL_PIXEL_THRESHOLD;
use imgview_core::range::{auto_range, UNIT_RANGE};
use imgview_core::store::ImageStore;
use imgview_core::view::ChannelMask;

const RED_ONLY: ChannelMask = ChannelMask {
    r: true,
    g: false,
    b: false,
};

fn red_samples() -> ImageStore {
    let mut store = ImageStore::new();
    store.load(rgba_image(
        4,
        1,
        vec![
            0.1, 7.0, -3.0, 1.0, //
            0.5, 7.0, -3.0, 1.0, //
            0.9, 7.0, -3.0, 1.0, //
            f32::NAN, 7.0, -3.0, 1.0,
        ],
    ));
    store
}

#[test]
fn test_single_channel_skips_nan() {
    let store = red_samples();
    assert_eq!(auto_range(store.image(), RED_ONLY), Some((0.1, 0.9)));
}

#[test]
fn test_all_channels_use_global_range() {
    let store = red_samples();
    assert_eq!(auto_range(store.image(), ChannelMask::ALL), Some((-3.0, 7.0)));
}

#[test]
fn test_no_channels_gives_unit_range() {
    let store = red_samples();
    assert_eq!(auto_range(store.image(), ChannelMask::NONE), Some(UNIT_RANGE));
}

#[test]
fn test_two_channel_mask() {
    let store = red_samples();
    let mask = ChannelMask {
        r: true,
        g: false,
        b: true,
    };
    assert_eq!(auto_range(store.image(), mask), Some((-3.0, 0.9)));
}

#[test]
fn test_no_finite_sample_leaves_range_unchanged() {
    let mut store = ImageStore::new();
    store.load(rgba_image(1, 1, vec![f32::NAN, 0.5, 0.5, 1.0]));
    assert_eq!(auto_range(store.image(), RED_ONLY), None);
}

#[test]
fn test_parallel_scan_matches_expected_extremes() {
    let side = (PARALLEL_PIXEL_THRESHOLD as f64).sqrt() as usize + 1;
    let mut img = ramp_image(side, side);
    let last = img.pixels.len() - 4;
    img.pixels[last + 1] = 42.0;
    let mut store = ImageStore::new();
    store.load(img);

    let green = ChannelMask {
        r: false,
        g: true,
        b: false,
    };
    assert_eq!(auto_range(store.image(), green), Some((0.0, 42.0)));
    assert_eq!(auto_range(store.image(), RED_ONLY), Some((0.0, 1.0)));
}
