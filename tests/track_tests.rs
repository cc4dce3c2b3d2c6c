#![allow(missing_docs)]

use drift_evo::simulation::track::Track;
use drift_evo::simulation::vector2::Vector2;

const ROAD: [u8; 4] = [90, 90, 90, 255];
const WALL: [u8; 4] = [255, 255, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];

/// A `width`×`height` course: grey road with a one pixel white border.
fn bordered_raster(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            pixels.extend_from_slice(if border { &WALL } else { &ROAD });
        }
    }
    pixels
}

fn paint(pixels: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 4]) {
    let i = (y * width + x) * 4;
    pixels[i..i + 4].copy_from_slice(&color);
}

#[test]
fn test_origin_is_single_red_pixel() {
    let mut pixels = bordered_raster(20, 12);
    paint(&mut pixels, 20, 7, 4, RED);
    let track = Track::with_dimensions(20, 12, pixels).unwrap();

    assert_eq!(track.origin(), Vector2::new(7.0, 4.0));
    assert_eq!(track.find_origin(), Vector2::new(7.0, 4.0));
    assert!(track.origin_found());
}

#[test]
fn test_origin_uses_row_major_order() {
    let mut pixels = bordered_raster(20, 12);
    paint(&mut pixels, 20, 2, 6, RED);
    paint(&mut pixels, 20, 15, 3, RED);
    let track = Track::with_dimensions(20, 12, pixels).unwrap();

    assert_eq!(track.origin(), Vector2::new(15.0, 3.0));
}

#[test]
fn test_missing_origin_defaults_to_zero() {
    let mut pixels = bordered_raster(20, 12);
    // almost red is not red
    paint(&mut pixels, 20, 5, 5, [254, 0, 0, 255]);
    let track = Track::with_dimensions(20, 12, pixels).unwrap();

    assert_eq!(track.origin(), Vector2::zero());
    assert!(!track.origin_found());
}

#[test]
fn test_out_of_bounds_is_off_track() {
    // no walls at all, only the raster edge limits the course
    let track = Track::with_dimensions(10, 10, ROAD.repeat(100)).unwrap();

    assert!(track.off_track(Vector2::new(-1.0, 0.0)));
    assert!(track.off_track(Vector2::new(10.0, 0.0)));
    assert!(track.off_track(Vector2::new(0.0, 10.0)));
    assert!(track.off_track(Vector2::new(-0.5, 3.0)));
    assert!(!track.off_track(Vector2::new(0.0, 0.0)));
    assert!(!track.off_track(Vector2::new(9.99, 9.99)));
}

#[test]
fn test_only_pure_white_is_a_wall() {
    let mut pixels = ROAD.repeat(9);
    paint(&mut pixels, 3, 0, 0, WALL);
    paint(&mut pixels, 3, 1, 0, [255, 255, 254, 255]);
    paint(&mut pixels, 3, 2, 0, RED);
    let track = Track::with_dimensions(3, 3, pixels).unwrap();

    assert!(track.off_track(Vector2::new(0.0, 0.0)));
    assert!(!track.off_track(Vector2::new(1.0, 0.0)));
    assert!(!track.off_track(Vector2::new(2.0, 0.0)));
    assert!(!track.off_track(Vector2::new(1.0, 1.0)));
}

#[test]
fn test_raycast_stops_at_wall() {
    let track = Track::with_dimensions(50, 20, bordered_raster(50, 20)).unwrap();

    // steps land on x = 13, 16, ..., 49 where the wall is
    let distance = track.raycast(Vector2::new(10.0, 10.0), 0.0, 800.0, 3.0);
    assert_eq!(distance, 39.0);
}

#[test]
fn test_raycast_reaches_max_distance_on_open_road() {
    let track = Track::with_dimensions(50, 20, bordered_raster(50, 20)).unwrap();

    assert_eq!(track.raycast(Vector2::new(10.0, 10.0), 0.0, 20.0, 3.0), 20.0);
    assert_eq!(track.raycast(Vector2::new(10.0, 10.0), 0.0, 0.0, 3.0), 0.0);
}

#[test]
fn test_raycast_is_monotonic_and_quantized() {
    let track = Track::with_dimensions(50, 20, bordered_raster(50, 20)).unwrap();
    let step = 3.0;

    for angle in [0.0, 0.4, std::f64::consts::PI, -2.0] {
        let mut previous = 0.0;
        for max in (0..120).map(|m| m as f64 * 0.5) {
            let distance = track.raycast(Vector2::new(10.0, 10.0), angle, max, step);
            assert!(distance >= previous, "angle {angle}: {distance} < {previous}");
            assert!(
                distance == max || (distance / step).fract() == 0.0,
                "angle {angle}: {distance} is neither {max} nor a multiple of {step}"
            );
            previous = distance;
        }
    }
}

#[test]
fn test_raycast_from_off_track_point() {
    let track = Track::with_dimensions(50, 20, bordered_raster(50, 20)).unwrap();

    // the first sample is already outside the raster
    assert_eq!(track.raycast(Vector2::new(-5.0, 10.0), 0.0, 800.0, 3.0), 3.0);
}
