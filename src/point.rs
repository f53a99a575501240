use serde::{Deserialize, Serialize};

/// A pixel-space coordinate.
///
/// Generated boundary points always satisfy `0 <= y <= height`. Predicted points
/// carry whatever the model says, so `y` may be negative or past the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rounds to the nearest pixel, ties to even.
///
/// Out-of-range values saturate at the `i32` bounds and NaN maps to 0.
#[inline]
pub(crate) fn to_pixel(v: f64) -> i32 {
    v.round_ties_even() as i32
}
