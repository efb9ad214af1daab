use std::time::Duration;

use gpui::{
    App, BorderStyle, Bounds, ElementId, Hsla, InteractiveElement as _, IntoElement,
    ParentElement, Pixels, Refineable as _, RenderOnce, StyleRefinement, Styled, Window, canvas,
    div, quad, transparent_black,
};

use super::{BarState, RefreshBar};

/// An animated loading bar element.
///
/// The [`RefreshBar`] behind it is kept in window state under the element id,
/// so animations survive re-renders as long as the id stays the same.
///
/// ```ignore
/// LoadingBar::new("download").value(0.4)
/// LoadingBar::new("sync").loading(true).color(cx.theme().blue)
/// ```
#[derive(IntoElement)]
pub struct LoadingBar {
    id: ElementId,
    style: StyleRefinement,
    state: BarState,
    color: Option<Hsla>,
    track_color: Option<Hsla>,
    loading_width: Option<Pixels>,
    duration: Option<Duration>,
}

impl LoadingBar {
    /// Create a new full loading bar.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleRefinement::default(),
            state: BarState::default(),
            color: None,
            track_color: None,
            loading_width: None,
            duration: None,
        }
    }

    /// Set the progress fraction, `0.0` to `1.0`.
    ///
    /// Values out of range are drawn as is.
    pub fn value(mut self, value: f32) -> Self {
        self.state = BarState::Progress(value);
        self
    }

    /// Show the bouncing loading animation instead of the progress.
    pub fn loading(mut self, loading: bool) -> Self {
        if loading {
            self.state = BarState::Loading;
        } else if self.state.is_loading() {
            self.state = BarState::default();
        }
        self
    }

    pub fn state(mut self, state: BarState) -> Self {
        self.state = state;
        self
    }

    /// Set the color of the indicator.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the color of the track behind the indicator.
    pub fn track_color(mut self, color: impl Into<Hsla>) -> Self {
        self.track_color = Some(color.into());
        self
    }

    pub fn loading_width(mut self, width: impl Into<Pixels>) -> Self {
        self.loading_width = Some(width.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl Styled for LoadingBar {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

struct PrepaintState {
    track: Bounds<Pixels>,
    indicator: Bounds<Pixels>,
    radius: Pixels,
    tint: Hsla,
    background: Hsla,
    animating: bool,
}

impl RenderOnce for LoadingBar {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let bar = window.use_keyed_state(self.id.clone(), cx, |_, _| RefreshBar::new());

        let state = self.state;
        let color = self.color;
        let track_color = self.track_color;
        let loading_width = self.loading_width;
        let duration = self.duration;

        let intrinsic = RefreshBar::intrinsic_size();
        let mut root = div()
            .id(self.id)
            .relative()
            .w(intrinsic.width)
            .h(intrinsic.height);
        root.style().refine(&self.style);

        root.child(
            canvas(
                move |bounds: Bounds<Pixels>, _: &mut Window, cx: &mut App| {
                    bar.update(cx, |bar, _| {
                        // Lay out first, so a new bar never animates on empty bounds.
                        bar.layout(bounds.size);
                        if let Some(color) = color {
                            bar.set_tint(color);
                        }
                        if let Some(color) = track_color {
                            bar.set_background(color);
                        }
                        if let Some(width) = loading_width {
                            bar.set_loading_width(width);
                        }
                        if let Some(duration) = duration {
                            bar.set_duration(duration);
                        }
                        bar.set_state(state);

                        let animating = bar.tick();
                        let frame = bar.indicator_frame();

                        PrepaintState {
                            track: bounds,
                            indicator: Bounds::new(bounds.origin + frame.origin, frame.size),
                            radius: bar.corner_radius(),
                            tint: bar.tint(),
                            background: bar.background(),
                            animating,
                        }
                    })
                },
                |_, prepaint: PrepaintState, window: &mut Window, _: &mut App| {
                    window.paint_quad(quad(
                        prepaint.track,
                        prepaint.radius,
                        prepaint.background,
                        gpui::Edges::default(),
                        transparent_black(),
                        BorderStyle::default(),
                    ));
                    window.paint_quad(quad(
                        prepaint.indicator,
                        prepaint.radius,
                        prepaint.tint,
                        gpui::Edges::default(),
                        transparent_black(),
                        BorderStyle::default(),
                    ));

                    if prepaint.animating {
                        window.request_animation_frame();
                    }
                },
            )
            .absolute()
            .size_full(),
        )
    }
}
