//! Procedural ground-truth boundary.
//!
//! A cursor starts on the left edge at half height and walks right. Every move it
//! may turn a little, then steps forward with a vertical component exaggerated
//! eight times so the walk reads as a noisy, mostly-sloped line.

use std::iter::FusedIterator;

use crate::{
    UniformSource,
    point::{Point, to_pixel},
};

/// Percent chance, per move, that the heading changes.
pub const TURN_PERCENT: i32 = 20;

/// Heading deltas are drawn from `[-MAX_TURN, MAX_TURN)` degrees.
pub const MAX_TURN: i32 = 15;

/// The heading is clamped to `[-MAX_HEADING, MAX_HEADING]` degrees.
pub const MAX_HEADING: f64 = 45.0;

/// Step magnitudes are drawn from `[1, MAX_STEP)`.
pub const MAX_STEP: i32 = 5;

const RISE_SCALE: f64 = 8.0;

/// Added to every horizontal move so the walk always makes progress.
const MIN_ADVANCE: i32 = 5;

#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: i32,
    y: i32,
    heading: f64,
}

/// Lazy, finite random walk producing the boundary points.
///
/// The walk ends once the cursor reaches `width`; the last point yielded may lie
/// at or past it. A non-positive width or height yields nothing.
#[derive(Debug)]
pub struct BoundaryWalk<S> {
    source: S,
    width: i32,
    height: i32,
    cursor: Cursor,
}

/// Starts a boundary walk over a `width` x `height` domain.
pub fn generate<S: UniformSource>(width: i32, height: i32, source: S) -> BoundaryWalk<S> {
    BoundaryWalk::new(width, height, source)
}

impl<S: UniformSource> BoundaryWalk<S> {
    pub fn new(width: i32, height: i32, source: S) -> Self {
        Self {
            source,
            width,
            height,
            cursor: Cursor {
                x: 0,
                y: height / 2,
                heading: 0.0,
            },
        }
    }

    /// Current heading in degrees.
    pub fn heading(&self) -> f64 {
        self.cursor.heading
    }

    fn exhausted(&self) -> bool {
        self.width <= 0 || self.height <= 0 || self.cursor.x >= self.width
    }

    fn advance(&mut self) -> Point {
        let c = &mut self.cursor;

        if self.source.next_int(0, 100) < TURN_PERCENT {
            let turn = self.source.next_int(-MAX_TURN, MAX_TURN);
            c.heading = (c.heading + f64::from(turn)).clamp(-MAX_HEADING, MAX_HEADING);
        }

        let radians = c.heading.to_radians();
        let step = f64::from(self.source.next_int(1, MAX_STEP));

        c.y = c
            .y
            .saturating_add(to_pixel(radians.sin() * step * RISE_SCALE))
            .clamp(0, self.height);
        c.x = c
            .x
            .saturating_add(to_pixel(radians.cos() * step))
            .saturating_add(MIN_ADVANCE);

        Point::new(c.x, c.y)
    }
}

impl<S: UniformSource> Iterator for BoundaryWalk<S> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted() {
            return (0, Some(0));
        }
        // Each move advances x by more than MIN_ADVANCE and at most MIN_ADVANCE + MAX_STEP - 1.
        let remaining = (self.width - self.cursor.x) as usize;
        let per_move_max = (MIN_ADVANCE + MAX_STEP - 1) as usize;
        (remaining.div_ceil(per_move_max), Some(remaining.div_ceil(MIN_ADVANCE as usize)))
    }
}

impl<S: UniformSource> FusedIterator for BoundaryWalk<S> {}
