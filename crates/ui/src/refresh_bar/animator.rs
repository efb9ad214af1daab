use std::time::Duration;

use gpui::{Bounds, Pixels};
use instant::Instant;

use crate::geometry::{Side, lerp_bounds};

/// Timing curve of a [`FrameAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    Linear,
    EaseInOut,
}

impl Curve {
    /// Maps a linear progress in `0.0..=1.0` onto the curve.
    pub fn apply(self, delta: f32) -> f32 {
        match self {
            Curve::Linear => gpui::linear(delta),
            Curve::EaseInOut => gpui::ease_in_out(delta),
        }
    }
}

/// What a running animation is for, decides what happens on completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// One traversal of the loading indicator toward a side.
    Bounce(Side),
    /// Easing into the fill of the given progress value.
    Transition(f32),
}

/// Animates the indicator frame from one rectangle to another.
#[derive(Debug, Clone)]
pub struct FrameAnimation {
    kind: AnimationKind,
    from: Bounds<Pixels>,
    to: Bounds<Pixels>,
    duration: Duration,
    curve: Curve,
    started_at: Instant,
}

impl FrameAnimation {
    pub fn new(
        kind: AnimationKind,
        from: Bounds<Pixels>,
        to: Bounds<Pixels>,
        duration: Duration,
        curve: Curve,
        started_at: Instant,
    ) -> Self {
        Self {
            kind,
            from,
            to,
            duration,
            curve,
            started_at,
        }
    }

    #[inline]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// The frame the animation ends on.
    #[inline]
    pub fn target(&self) -> Bounds<Pixels> {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    #[inline]
    pub fn finished_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Linear progress at `now`, clamped to `0.0..=1.0`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.;
        }
        if now <= self.started_at {
            return 0.;
        }

        let elapsed = now - self.started_at;
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.)
    }

    #[inline]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now >= self.finished_at()
    }

    /// The interpolated frame at `now`, with the curve applied.
    pub fn frame_at(&self, now: Instant) -> Bounds<Pixels> {
        let delta = self.progress_at(now);
        if delta >= 1. {
            return self.to;
        }

        lerp_bounds(self.from, self.to, self.curve.apply(delta))
    }

    /// Points the rest of the animation at a new target, keeping its timing.
    pub fn retarget(&mut self, to: Bounds<Pixels>) {
        self.to = to;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gpui::{Bounds, point, px, size};
    use instant::Instant;

    use super::{AnimationKind, Curve, FrameAnimation};
    use crate::geometry::{PixelsExt, Side};

    fn frame(x: f32, width: f32) -> Bounds<gpui::Pixels> {
        Bounds::new(point(px(x), px(0.)), size(px(width), px(10.)))
    }

    #[test]
    fn test_curve() {
        assert_eq!(Curve::Linear.apply(0.), 0.);
        assert_eq!(Curve::Linear.apply(0.25), 0.25);
        assert_eq!(Curve::Linear.apply(1.), 1.);
        assert!((Curve::EaseInOut.apply(0.)).abs() < 1e-4);
        assert!((Curve::EaseInOut.apply(1.) - 1.).abs() < 1e-4);
        assert!(Curve::EaseInOut.apply(0.1) < 0.1);
    }

    #[test]
    fn test_linear_frame_animation() {
        let start = Instant::now();
        let animation = FrameAnimation::new(
            AnimationKind::Bounce(Side::Right),
            frame(0., 15.),
            frame(85., 15.),
            Duration::from_millis(500),
            Curve::Linear,
            start,
        );

        assert_eq!(animation.kind(), AnimationKind::Bounce(Side::Right));
        assert_eq!(animation.frame_at(start), frame(0., 15.));
        assert!(!animation.is_finished_at(start));

        let half = animation.frame_at(start + Duration::from_millis(250));
        assert!((half.origin.x.as_f32() - 42.5).abs() < 0.01);
        assert_eq!(half.size.width, px(15.));

        let end = start + Duration::from_millis(500);
        assert!(animation.is_finished_at(end));
        assert_eq!(animation.finished_at(), end);
        assert_eq!(animation.frame_at(end), frame(85., 15.));
        assert_eq!(
            animation.frame_at(end + Duration::from_secs(3)),
            frame(85., 15.)
        );
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let start = Instant::now();
        let animation = FrameAnimation::new(
            AnimationKind::Transition(1.),
            frame(0., 15.),
            frame(0., 100.),
            Duration::ZERO,
            Curve::EaseInOut,
            start,
        );

        assert_eq!(animation.progress_at(start), 1.);
        assert!(animation.is_finished_at(start));
        assert_eq!(animation.frame_at(start), frame(0., 100.));
    }

    #[test]
    fn test_retarget() {
        let start = Instant::now();
        let mut animation = FrameAnimation::new(
            AnimationKind::Transition(1.),
            frame(0., 15.),
            frame(0., 100.),
            Duration::from_millis(200),
            Curve::EaseInOut,
            start,
        );

        animation.retarget(frame(0., 200.));
        assert_eq!(animation.target(), frame(0., 200.));
        assert_eq!(
            animation.frame_at(start + Duration::from_millis(200)),
            frame(0., 200.)
        );
    }
}
