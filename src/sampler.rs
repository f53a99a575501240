use std::num::NonZeroUsize;

use crate::{
    BoundaryErr, ModelState, Result,
    point::{Point, to_pixel},
};

pub const DEFAULT_STRIDE: NonZeroUsize = NonZeroUsize::new(6).unwrap();

/// Evaluates the model every `stride` pixels across `[0, width)` and scales the
/// outputs back into pixel space.
///
/// Predicted `y` values are not clamped; drawing code decides what to do with
/// points that fall outside the domain.
///
/// # Errors
/// Returns `BoundaryErr::ZeroExtent` if `width` is zero and
/// `BoundaryErr::InvalidConfig` if `width` or `height` is negative.
pub fn sample(
    state: &ModelState,
    width: i32,
    height: i32,
    stride: NonZeroUsize,
) -> Result<Vec<Point>> {
    if width == 0 {
        return Err(BoundaryErr::ZeroExtent { what: "width" });
    }
    if width < 0 {
        return Err(BoundaryErr::invalid("width", format!("must be positive, got {width}")));
    }
    if height < 0 {
        return Err(BoundaryErr::invalid("height", format!("must be positive, got {height}")));
    }

    let w = f64::from(width);
    let h = f64::from(height);

    let points = (0..width)
        .step_by(stride.get())
        .map(|x| {
            let output = state.weight * f64::from(x) / w + state.bias;
            Point::new(x, to_pixel(output * h))
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(weight: f64, bias: f64) -> ModelState {
        ModelState {
            weight,
            bias,
            epoch: 0,
        }
    }

    #[test]
    fn count_depends_only_on_width_and_stride() {
        let points = sample(&ModelState::new(), 500, 300, DEFAULT_STRIDE).unwrap();
        assert_eq!(points.len(), 84);
        assert_eq!(points.first(), Some(&Point::new(0, 0)));
        assert_eq!(points.last().map(|p| p.x), Some(498));
        assert!(points.windows(2).all(|w| w[1].x - w[0].x == 6));
    }

    #[test]
    fn follows_the_line() {
        let points = sample(&line(1.0, 0.0), 100, 200, NonZeroUsize::new(25).unwrap()).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(25, 50),
                Point::new(50, 100),
                Point::new(75, 150),
            ]
        );
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let points = sample(&line(0.0, 1.5), 10, 100, NonZeroUsize::new(5).unwrap()).unwrap();
        assert!(points.iter().all(|p| p.y == 150));

        let points = sample(&line(0.0, -0.5), 10, 100, NonZeroUsize::new(5).unwrap()).unwrap();
        assert!(points.iter().all(|p| p.y == -50));
    }

    #[test]
    fn stride_larger_than_width_gives_one_point() {
        let points = sample(&line(0.0, 0.5), 10, 10, NonZeroUsize::new(50).unwrap()).unwrap();
        assert_eq!(points, vec![Point::new(0, 5)]);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(matches!(
            sample(&ModelState::new(), 0, 10, DEFAULT_STRIDE),
            Err(BoundaryErr::ZeroExtent { what: "width" })
        ));
    }
}
