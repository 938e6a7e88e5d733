mod common;

use approx::assert_abs_diff_eq;
use glam::Vec2;

use common::ramp_image;
use imgview_core::store::ImageStore;
use imgview_core::view::transform::ndc_to_screen;
use imgview_core::view::{compute_transform, ChannelMask, ViewState};

const ORIGIN: Vec2 = Vec2::new(40.0, 25.0);
const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

// ---------------------------------------------------------------------------
// Mouse-anchored zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_keeps_point_under_cursor() {
    let image = Vec2::new(640.0, 480.0);
    let mice = [
        Vec2::new(440.0, 325.0),
        Vec2::new(100.0, 90.0),
        Vec2::new(777.0, 600.0),
        Vec2::new(300.5, 512.25),
    ];
    for mouse in mice {
        for wheel in [1.0, -1.0, 3.0, -2.5] {
            let mut view = ViewState::new();
            view.pan = Vec2::new(-30.0, 12.0);
            view.zoom = 1.7;
            let before = view.screen_to_image(mouse, ORIGIN, VIEWPORT, image);

            assert!(view.zoom_at(wheel, mouse, ORIGIN, VIEWPORT));
            let after = view.screen_to_image(mouse, ORIGIN, VIEWPORT, image);

            assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-3);
            assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_zoom_step_and_limits() {
    let mut view = ViewState::new();
    view.zoom_at(1.0, ORIGIN + VIEWPORT * 0.5, ORIGIN, VIEWPORT);
    assert_abs_diff_eq!(view.zoom, 1.1, epsilon = 1e-6);
    assert_eq!(view.pan, Vec2::ZERO);

    for _ in 0..200 {
        view.zoom_at(5.0, Vec2::new(10.0, 10.0), ORIGIN, VIEWPORT);
    }
    assert_eq!(view.zoom, 50.0);

    for _ in 0..200 {
        view.zoom_at(-5.0, Vec2::new(10.0, 10.0), ORIGIN, VIEWPORT);
    }
    assert_abs_diff_eq!(view.zoom, 0.1, epsilon = 1e-6);
}

#[test]
fn test_zoom_at_limit_changes_nothing() {
    let mut view = ViewState::new();
    view.zoom = 50.0;
    view.pan = Vec2::new(5.0, -7.0);
    assert!(!view.zoom_at(1.0, Vec2::new(123.0, 45.0), ORIGIN, VIEWPORT));
    assert_eq!(view.zoom, 50.0);
    assert_eq!(view.pan, Vec2::new(5.0, -7.0));
}

#[test]
fn test_set_zoom_is_not_clamped_to_wheel_range() {
    let mut view = ViewState::new();
    view.set_zoom(120.0);
    assert_eq!(view.zoom, 120.0);
    view.set_zoom(0.0);
    assert_eq!(view.zoom, 120.0);
    view.set_zoom(f32::NAN);
    assert_eq!(view.zoom, 120.0);
}

// ---------------------------------------------------------------------------
// Hit-testing
// ---------------------------------------------------------------------------

#[test]
fn test_centred_image_pixel_lookup() {
    let view = ViewState::new();
    let image = Vec2::new(200.0, 100.0);
    // Image occupies [300, 500) x [250, 350) relative to the origin.
    let hit = |x: f32, y: f32| {
        view.screen_to_image_pixel(ORIGIN + Vec2::new(x, y), ORIGIN, VIEWPORT, image)
    };

    assert_eq!(hit(300.0, 250.0), Some((0, 0)));
    assert_eq!(hit(499.9, 349.9), Some((199, 99)));
    assert_eq!(hit(500.0, 300.0), None);
    assert_eq!(hit(299.9, 300.0), None);
    assert_eq!(hit(400.0, 350.0), None);
}

#[test]
fn test_image_to_screen_inverts_hit_test() {
    let mut view = ViewState::new();
    view.zoom = 3.25;
    view.pan = Vec2::new(-41.0, 17.5);
    let image = Vec2::new(64.0, 48.0);
    for (px, py) in [(0usize, 0usize), (10, 20), (63, 47)] {
        let corner = view.image_to_screen(Vec2::new(px as f32, py as f32), ORIGIN, VIEWPORT, image);
        let centre = corner + Vec2::splat(view.zoom * 0.5);
        assert_eq!(view.screen_to_image_pixel(centre, ORIGIN, VIEWPORT, image), Some((px, py)));
    }
}

#[test]
fn test_render_and_hit_test_agree_on_placement() {
    let cases = [
        (Vec2::new(1920.0, 1080.0), Vec2::new(800.0, 600.0), 0.37, Vec2::new(12.0, -40.0)),
        (Vec2::new(33.0, 517.0), Vec2::new(640.0, 360.0), 2.0, Vec2::new(-100.0, 3.5)),
        (Vec2::new(4096.0, 16.0), Vec2::new(300.0, 900.0), 0.1, Vec2::ZERO),
        (Vec2::new(1.0, 1.0), Vec2::new(1000.0, 100.0), 50.0, Vec2::new(250.0, 25.0)),
    ];
    for (image, viewport, zoom, pan) in cases {
        let mut view = ViewState::new();
        view.set_zoom(zoom);
        view.pan = pan;

        let (top_left, bottom_right) =
            view.transform(image, viewport).screen_rect(ORIGIN, viewport);
        let expected_tl = view.image_to_screen(Vec2::ZERO, ORIGIN, viewport, image);
        let expected_br = view.image_to_screen(image, ORIGIN, viewport, image);

        assert_abs_diff_eq!(top_left.x, expected_tl.x, epsilon = 1e-2);
        assert_abs_diff_eq!(top_left.y, expected_tl.y, epsilon = 1e-2);
        assert_abs_diff_eq!(bottom_right.x, expected_br.x, epsilon = 1e-2);
        assert_abs_diff_eq!(bottom_right.y, expected_br.y, epsilon = 1e-2);
    }
}

#[test]
fn test_transform_scale_and_translation() {
    let t = compute_transform(
        Vec2::new(400.0, 150.0),
        Vec2::new(800.0, 600.0),
        2.0,
        Vec2::new(80.0, 30.0),
    );
    assert_abs_diff_eq!(t.scale().x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(t.scale().y, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(t.translation().x, 0.2, epsilon = 1e-6);
    assert_abs_diff_eq!(t.translation().y, -0.1, epsilon = 1e-6);

    let centre = ndc_to_screen(t.apply(Vec2::ZERO), Vec2::ZERO, Vec2::new(800.0, 600.0));
    assert_abs_diff_eq!(centre.x, 480.0, epsilon = 1e-3);
    assert_abs_diff_eq!(centre.y, 330.0, epsilon = 1e-3);
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

#[test]
fn test_reset_for_image_uses_detected_range() {
    let mut store = ImageStore::new();
    let mut img = ramp_image(4, 1);
    img.pixels[0] = -2.0;
    store.load(img);

    let mut view = ViewState::new();
    view.zoom = 7.0;
    view.pan = Vec2::new(3.0, 3.0);
    view.reset_for_image(store.image());

    assert_eq!(view.range_min, -2.0);
    assert_eq!(view.range_max, 1.0);
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.pan, Vec2::ZERO);
}

#[test]
fn test_clear_restores_zoom_and_pan() {
    let mut view = ViewState::new();
    view.zoom = 4.0;
    view.pan_by(Vec2::new(10.0, -4.0));
    view.pan_by(Vec2::new(1.0, 1.0));
    assert_eq!(view.pan, Vec2::new(11.0, -3.0));
    view.clear();
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.pan, Vec2::ZERO);
}

#[test]
fn test_render_params_shade() {
    let mut view = ViewState::new();
    view.set_range(-1.0, 3.0);
    view.mask = ChannelMask {
        r: true,
        g: false,
        b: true,
    };
    let params = view.render_params(Vec2::new(10.0, 10.0), VIEWPORT);
    assert_eq!(params.range_min, -1.0);
    assert_eq!(params.mask, view.mask);

    let out = params.shade([1.0, 1.0, 5.0, 0.5]);
    assert_eq!(out, [0.5, 0.0, 1.0, 0.5]);

    view.set_range(0.5, 0.5);
    let flat = view.render_params(Vec2::ONE, VIEWPORT).shade([0.25, 0.25, 2.0, 1.0]);
    assert_eq!(flat, [0.25, 0.0, 1.0, 1.0]);
}
