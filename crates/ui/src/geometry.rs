use std::fmt::{self, Display, Formatter};

use gpui::{Bounds, Pixels, Size, point, px, size};

/// A enum for defining the side of the bar an indicator travels toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A trait for converting [`Pixels`] to `f32`.
pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: Pixels, end: Pixels, progress: f32) -> Pixels {
    start + (end - start) * progress
}

/// Interpolates every edge of a frame, `progress` is not clamped.
pub fn lerp_bounds(from: Bounds<Pixels>, to: Bounds<Pixels>, progress: f32) -> Bounds<Pixels> {
    Bounds::new(
        point(
            lerp(from.origin.x, to.origin.x, progress),
            lerp(from.origin.y, to.origin.y, progress),
        ),
        size(
            lerp(from.size.width, to.size.width, progress),
            lerp(from.size.height, to.size.height, progress),
        ),
    )
}

/// The determinate fill of a bar with the given size.
///
/// The width grows from the bar height (a circle at `0.0`) to the full bar
/// width at `1.0`. Values outside of `0.0..=1.0` extrapolate.
pub fn progress_frame(bar: Size<Pixels>, progress: f32) -> Bounds<Pixels> {
    Bounds::new(
        point(px(0.), px(0.)),
        size(lerp(bar.height, bar.width, progress), bar.height),
    )
}

/// The frame of the loading indicator resting against `side`.
pub fn bounce_frame(bar: Size<Pixels>, indicator_width: Pixels, side: Side) -> Bounds<Pixels> {
    let x = match side {
        Side::Left => px(0.),
        Side::Right => bar.width - indicator_width,
    };

    Bounds::new(point(x, px(0.)), size(indicator_width, bar.height))
}

/// Capsule radius for both the track and the indicator.
#[inline]
pub fn corner_radius(bar: Size<Pixels>) -> Pixels {
    bar.height / 2.
}

#[cfg(test)]
mod tests {
    use gpui::{Bounds, point, px, size};

    use super::{PixelsExt, Side, bounce_frame, corner_radius, lerp_bounds, progress_frame};

    #[test]
    fn test_side() {
        let left = Side::Left;
        let right = Side::Right;

        assert_eq!(left.flip(), right);
        assert_eq!(right.flip(), left);

        assert_eq!(left.to_string(), "Left");
        assert_eq!(right.to_string(), "Right");
    }

    #[test]
    fn test_progress_frame() {
        let bar = size(px(100.), px(10.));

        assert_eq!(
            progress_frame(bar, 0.),
            Bounds::new(point(px(0.), px(0.)), size(px(10.), px(10.)))
        );
        assert_eq!(
            progress_frame(bar, 0.5),
            Bounds::new(point(px(0.), px(0.)), size(px(55.), px(10.)))
        );
        assert_eq!(
            progress_frame(bar, 1.),
            Bounds::new(point(px(0.), px(0.)), size(px(100.), px(10.)))
        );
    }

    #[test]
    fn test_progress_frame_out_of_range() {
        let bar = size(px(100.), px(10.));

        assert_eq!(progress_frame(bar, 2.).size.width, px(190.));
        assert_eq!(progress_frame(bar, -1.).size.width, px(-80.));
        assert_eq!(progress_frame(bar, -1.).origin, point(px(0.), px(0.)));
    }

    #[test]
    fn test_bounce_frame() {
        let bar = size(px(100.), px(10.));

        assert_eq!(
            bounce_frame(bar, px(15.), Side::Right),
            Bounds::new(point(px(85.), px(0.)), size(px(15.), px(10.)))
        );
        assert_eq!(
            bounce_frame(bar, px(15.), Side::Left),
            Bounds::new(point(px(0.), px(0.)), size(px(15.), px(10.)))
        );
    }

    #[test]
    fn test_lerp_bounds() {
        let from = Bounds::new(point(px(0.), px(0.)), size(px(10.), px(10.)));
        let to = Bounds::new(point(px(40.), px(0.)), size(px(30.), px(10.)));

        assert_eq!(lerp_bounds(from, to, 0.), from);
        assert_eq!(lerp_bounds(from, to, 1.), to);

        let half = lerp_bounds(from, to, 0.5);
        assert_eq!(half.origin.x.as_f32(), 20.);
        assert_eq!(half.size.width.as_f32(), 20.);
    }

    #[test]
    fn test_corner_radius() {
        assert_eq!(corner_radius(size(px(100.), px(6.))), px(3.));
        assert_eq!(corner_radius(size(px(100.), px(0.))), px(0.));
    }
}
