//! Raster race track: spawn origin, off-track test and ray casting.
//!
//! The course is an RGBA image. A pure red pixel marks the spawn origin,
//! pure white pixels are walls, and every other color is drivable.

use tracing::{debug, warn};

use super::error::SimError;
use super::vector2::Vector2;

/// Required width of a course image.
pub const COURSE_WIDTH: usize = 850;
/// Required height of a course image.
pub const COURSE_HEIGHT: usize = 450;

const ORIGIN_COLOR: [u8; 3] = [255, 0, 0];
const WALL_COLOR: [u8; 3] = [255, 255, 255];

/// A decoded course raster, read-only once built.
#[derive(Debug, Clone)]
pub struct Track {
    width: usize,
    height: usize,
    /// Row-major RGBA bytes.
    pixels: Vec<u8>,
    origin: Vector2,
    origin_found: bool,
}

impl Track {
    /// Builds a track from an 850×450 RGBA raster.
    ///
    /// Any other size is rejected.
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, SimError> {
        if width != COURSE_WIDTH || height != COURSE_HEIGHT {
            return Err(SimError::TrackDimensions {
                width,
                height,
                expected_width: COURSE_WIDTH,
                expected_height: COURSE_HEIGHT,
            });
        }
        Self::with_dimensions(width, height, pixels)
    }

    /// Builds a track of arbitrary size. Used by tests and tools; the
    /// simulation itself loads courses through [`Track::from_rgba`].
    pub fn with_dimensions(
        width: usize,
        height: usize,
        pixels: Vec<u8>,
    ) -> Result<Self, SimError> {
        let expected = width * height * 4;
        if pixels.len() != expected {
            return Err(SimError::RasterSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        let mut track = Self {
            width,
            height,
            pixels,
            origin: Vector2::zero(),
            origin_found: false,
        };

        match track.scan_origin() {
            Some(origin) => {
                debug!(%origin, "found course origin");
                track.origin = origin;
                track.origin_found = true;
            }
            None => warn!("course has no red origin pixel, spawning at (0, 0)"),
        }

        Ok(track)
    }

    /// Course width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Course height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major RGBA bytes, for drawing the background.
    pub fn raster(&self) -> &[u8] {
        &self.pixels
    }

    /// Spawn point. `(0, 0)` when the course has no origin pixel.
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Whether [`Track::origin`] came from an actual red pixel.
    pub fn origin_found(&self) -> bool {
        self.origin_found
    }

    /// Returns the first pure red pixel in row-major order, or `(0, 0)`.
    pub fn find_origin(&self) -> Vector2 {
        self.scan_origin().unwrap_or_default()
    }

    fn scan_origin(&self) -> Option<Vector2> {
        self.pixels
            .chunks_exact(4)
            .position(|px| px[..3] == ORIGIN_COLOR)
            .map(|index| {
                Vector2::new((index % self.width) as f64, (index / self.width) as f64)
            })
    }

    /// RGBA value at integer coordinates, `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// True if `point` is outside the raster or on a wall pixel.
    pub fn off_track(&self, point: Vector2) -> bool {
        if !(point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f64
            && point.y < self.height as f64)
        {
            return true;
        }
        match self.pixel(point.x as usize, point.y as usize) {
            Some(px) => px[..3] == WALL_COLOR,
            None => true,
        }
    }

    /// Marches from `origin` along `angle` until leaving the track.
    ///
    /// Returns the distance covered when the first off-track sample is hit,
    /// or `max_distance` if the ray never leaves the track. Precision is
    /// bounded by `step_size`.
    pub fn raycast(&self, origin: Vector2, angle: f64, max_distance: f64, step_size: f64) -> f64 {
        if !(step_size > 0.0) {
            return 0.0;
        }
        let step = Vector2::from_angle(angle).scale(step_size);
        let mut point = origin;
        let mut distance = 0.0;

        while distance < max_distance {
            point = point + step;
            distance += step_size;
            if self.off_track(point) {
                return distance.min(max_distance);
            }
        }

        max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: usize, height: usize) -> Vec<u8> {
        vec![0, 0, 0, 255].repeat(width * height)
    }

    #[test]
    fn rejects_wrong_course_size() {
        let err = Track::from_rgba(10, 10, blank(10, 10)).unwrap_err();
        assert!(matches!(err, SimError::TrackDimensions { width: 10, .. }));
    }

    #[test]
    fn accepts_course_size() {
        let track = Track::from_rgba(COURSE_WIDTH, COURSE_HEIGHT, blank(COURSE_WIDTH, COURSE_HEIGHT))
            .unwrap();
        assert_eq!(track.width(), COURSE_WIDTH);
        assert!(!track.origin_found());
    }

    #[test]
    fn rejects_short_buffer() {
        let err = Track::with_dimensions(4, 4, vec![0; 10]).unwrap_err();
        assert!(matches!(err, SimError::RasterSize { expected: 64, actual: 10, .. }));
    }

    #[test]
    fn fractional_points_sample_the_floor_pixel() {
        let mut pixels = blank(3, 3);
        let i = (3 + 1) * 4;
        pixels[i..i + 3].copy_from_slice(&[255, 255, 255]);
        let track = Track::with_dimensions(3, 3, pixels).unwrap();
        assert!(track.off_track(Vector2::new(1.9, 1.2)));
        assert!(!track.off_track(Vector2::new(0.9, 1.2)));
    }
}
