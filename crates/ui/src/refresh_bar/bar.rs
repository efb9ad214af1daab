use std::{mem, rc::Rc, time::Duration};

use gpui::{Bounds, Hsla, Pixels, Size, px, rgb, size};
use instant::Instant;

use super::{
    AnimationKind, BarState, Clock, Curve, FrameAnimation, RefreshBarSettings, SystemClock,
};
use crate::geometry::{Side, bounce_frame, corner_radius, progress_frame};

/// Width of the bouncing indicator while loading.
pub const DEFAULT_LOADING_WIDTH: Pixels = px(15.);
/// Time of one traversal while loading.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);
/// Time to ease from the loading indicator into a progress fill.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

pub(crate) fn default_tint() -> Hsla {
    rgb(0x458FE5).into()
}

pub(crate) fn default_background() -> Hsla {
    rgb(0xCCCBCB).into()
}

/// An animated loading bar.
///
/// Shows either a determinate fill or a short indicator bouncing between the
/// edges. The bar does not draw anything itself: the host lays it out with
/// [`RefreshBar::layout`], calls [`RefreshBar::tick`] once per frame and
/// paints [`RefreshBar::indicator_frame`] over the track.
///
/// ```ignore
/// let mut bar = RefreshBar::new();
/// bar.layout(size(px(100.), px(10.)));
/// bar.set_state(BarState::Progress(0.5));
/// assert_eq!(bar.indicator_frame().size.width, px(55.));
/// ```
pub struct RefreshBar {
    state: BarState,
    loading_width: Pixels,
    duration: Duration,
    tint: Hsla,
    background: Hsla,
    bounds: Size<Pixels>,
    indicator: Bounds<Pixels>,
    bounce: Option<FrameAnimation>,
    transition: Option<FrameAnimation>,
    /// The progress value waiting for `transition` to complete.
    pending: Option<f32>,
    clock: Rc<dyn Clock>,
}

impl Default for RefreshBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshBar {
    /// Create a full bar driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            state: BarState::default(),
            loading_width: DEFAULT_LOADING_WIDTH,
            duration: DEFAULT_DURATION,
            tint: default_tint(),
            background: default_background(),
            bounds: Size::default(),
            indicator: Bounds::default(),
            bounce: None,
            transition: None,
            pending: None,
            clock: Rc::new(clock),
        }
    }

    /// Create a bar with the tunables and colors of `settings`.
    pub fn with_settings(settings: &RefreshBarSettings) -> Self {
        let mut bar = Self::new();
        bar.apply_settings(settings);
        bar
    }

    pub fn apply_settings(&mut self, settings: &RefreshBarSettings) {
        self.loading_width = settings.loading_width;
        self.duration = settings.duration();
        self.tint = settings.tint;
        self.background = settings.background;
    }

    /// The size the bar asks for when the host gives it none.
    pub fn intrinsic_size() -> Size<Pixels> {
        size(px(100.), px(6.))
    }

    #[inline]
    pub fn state(&self) -> BarState {
        self.state
    }

    /// Switch the display mode, animating between the two if needed.
    ///
    /// Assigning the current state does nothing.
    pub fn set_state(&mut self, state: BarState) {
        if state == self.state {
            return;
        }

        let now = self.clock.now();
        self.advance(now);

        let old = mem::replace(&mut self.state, state);
        tracing::debug!("refresh bar state: {} -> {}", old, state);

        match state {
            BarState::Loading => {
                self.transition = None;
                self.pending = None;
                self.start_bounce(Side::Right, now);
            }
            BarState::Progress(value) => {
                if old.is_loading() {
                    if let Some(bounce) = self.bounce.take() {
                        self.indicator = bounce.frame_at(now);
                    }
                    self.pending = None;
                    self.transition = Some(FrameAnimation::new(
                        AnimationKind::Transition(value),
                        self.indicator,
                        progress_frame(self.bounds, value),
                        TRANSITION_DURATION,
                        Curve::EaseInOut,
                        now,
                    ));
                } else if self.transition.is_some() {
                    tracing::trace!("refresh bar: defer progress {} after transition", value);
                    self.pending = Some(value);
                } else {
                    self.indicator = progress_frame(self.bounds, value);
                }
            }
        }
    }

    /// Recompute the frames for a new allotted size.
    ///
    /// A running bounce keeps its own target, the next traversal uses the new
    /// size. A bounce started before the first layout is moved onto the bar.
    pub fn layout(&mut self, bounds: Size<Pixels>) {
        if bounds == self.bounds {
            return;
        }
        let was_empty = self.bounds.width <= px(0.) || self.bounds.height <= px(0.);
        self.bounds = bounds;

        match self.state {
            BarState::Loading => {
                if was_empty {
                    self.relayout_bounce();
                }
            }
            BarState::Progress(value) => match self.transition.as_mut() {
                Some(transition) => {
                    if let AnimationKind::Transition(target) = transition.kind() {
                        transition.retarget(progress_frame(bounds, target));
                    }
                }
                None => self.indicator = progress_frame(bounds, value),
            },
        }
    }

    /// Advance the animations to the current time.
    ///
    /// Returns true while an animation is still running.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.advance(now);
        self.is_animating()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.bounce.is_some() || self.transition.is_some()
    }

    /// The frame of the indicator, relative to the bar origin.
    #[inline]
    pub fn indicator_frame(&self) -> Bounds<Pixels> {
        self.indicator
    }

    #[inline]
    pub fn bounds(&self) -> Size<Pixels> {
        self.bounds
    }

    /// Radius of the track and indicator corners.
    #[inline]
    pub fn corner_radius(&self) -> Pixels {
        corner_radius(self.bounds)
    }

    #[inline]
    pub fn tint(&self) -> Hsla {
        self.tint
    }

    pub fn set_tint(&mut self, color: impl Into<Hsla>) {
        self.tint = color.into();
    }

    #[inline]
    pub fn background(&self) -> Hsla {
        self.background
    }

    pub fn set_background(&mut self, color: impl Into<Hsla>) {
        self.background = color.into();
    }

    #[inline]
    pub fn loading_width(&self) -> Pixels {
        self.loading_width
    }

    /// Width of the indicator for the next loading traversal.
    pub fn set_loading_width(&mut self, width: Pixels) {
        self.loading_width = width;
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time of the next loading traversal.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    fn start_bounce(&mut self, toward: Side, started_at: Instant) {
        self.bounce = Some(FrameAnimation::new(
            AnimationKind::Bounce(toward),
            self.indicator,
            bounce_frame(self.bounds, self.loading_width, toward),
            self.duration,
            Curve::Linear,
            started_at,
        ));
    }

    /// Replays the in-flight traversal between the edges of the current bounds.
    fn relayout_bounce(&mut self) {
        let Some(bounce) = self.bounce.as_ref() else {
            return;
        };
        let AnimationKind::Bounce(side) = bounce.kind() else {
            return;
        };

        let animation = FrameAnimation::new(
            AnimationKind::Bounce(side),
            bounce_frame(self.bounds, self.loading_width, side.flip()),
            bounce_frame(self.bounds, self.loading_width, side),
            bounce.duration(),
            Curve::Linear,
            bounce.started_at(),
        );
        self.indicator = animation.frame_at(self.clock.now());
        self.bounce = Some(animation);
    }

    /// Starts the traversal following one that completed toward `side`,
    /// skipping over every traversal that fully elapsed since.
    fn continue_bounce(&mut self, side: Side, finished_at: Instant, now: Instant) {
        let mut toward = side.flip();
        let mut started_at = finished_at;

        // A zero duration would never catch up, one traversal per tick.
        if self.duration.is_zero() {
            self.start_bounce(toward, started_at);
            return;
        }

        let duration = self.duration.as_nanos();
        let skipped = (now - finished_at).as_nanos() / duration;
        if skipped > 0 {
            if skipped % 2 == 1 {
                toward = side;
            }
            self.indicator = bounce_frame(self.bounds, self.loading_width, toward.flip());
            started_at += Duration::from_nanos((duration * skipped) as u64);
        }

        self.start_bounce(toward, started_at);
        if let Some(bounce) = &self.bounce {
            self.indicator = bounce.frame_at(now);
        }
    }

    fn advance(&mut self, now: Instant) {
        if let Some(bounce) = self.bounce.take() {
            if bounce.is_finished_at(now) {
                self.indicator = bounce.target();
                if let (true, AnimationKind::Bounce(side)) =
                    (self.state.is_loading(), bounce.kind())
                {
                    tracing::trace!("refresh bar: traversal to {} completed", side);
                    self.continue_bounce(side, bounce.finished_at(), now);
                }
            } else {
                self.indicator = bounce.frame_at(now);
                self.bounce = Some(bounce);
            }
        }

        if let Some(transition) = self.transition.take() {
            if !transition.is_finished_at(now) {
                self.indicator = transition.frame_at(now);
                self.transition = Some(transition);
                return;
            }

            self.indicator = transition.target();
            if let Some(value) = self.pending.take() {
                tracing::trace!("refresh bar: apply deferred progress {}", value);
                self.indicator = progress_frame(self.bounds, value);
            }
        }
    }
}
