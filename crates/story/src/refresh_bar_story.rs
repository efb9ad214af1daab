use std::time::Duration;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, Focusable, IntoElement, ParentElement, Render,
    Styled, Window, div, px, rgb,
};
use refresh_bar::{BarState, LoadingBar, RefreshBarSettings};

use crate::{button, section};

pub struct RefreshBarStory {
    focus_handle: FocusHandle,
    state: BarState,
    settings: RefreshBarSettings,
}

impl RefreshBarStory {
    pub fn view(settings: RefreshBarSettings, window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(settings, window, cx))
    }

    fn new(settings: RefreshBarSettings, _: &mut Window, cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            state: BarState::Progress(0.5),
            settings,
        }
    }

    pub fn set_state(&mut self, state: BarState, cx: &mut Context<Self>) {
        self.state = state;
        cx.notify();
    }

    fn toggle_loading(&mut self, cx: &mut Context<Self>) {
        let state = match self.state {
            BarState::Loading => BarState::Progress(1.),
            BarState::Progress(_) => BarState::Loading,
        };
        self.set_state(state, cx);
    }
}

impl Focusable for RefreshBarStory {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RefreshBarStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = &self.settings;

        div()
            .flex()
            .flex_col()
            .size_full()
            .items_center()
            .gap_y_3()
            .p_6()
            .bg(rgb(0xFFFFFF))
            .child(
                section("Refresh Bar").max_w_96().child(
                    div()
                        .flex()
                        .flex_col()
                        .w_full()
                        .gap_3()
                        .items_center()
                        .child(
                            div()
                                .flex()
                                .gap_2()
                                .child(button("progress-0", "0%").on_click(cx.listener(
                                    |this, _, _, cx| this.set_state(BarState::Progress(0.), cx),
                                )))
                                .child(button("progress-25", "25%").on_click(cx.listener(
                                    |this, _, _, cx| this.set_state(BarState::Progress(0.25), cx),
                                )))
                                .child(button("progress-50", "50%").on_click(cx.listener(
                                    |this, _, _, cx| this.set_state(BarState::Progress(0.5), cx),
                                )))
                                .child(button("progress-100", "100%").on_click(cx.listener(
                                    |this, _, _, cx| this.set_state(BarState::Progress(1.), cx),
                                )))
                                .child(button("toggle-loading", "Loading").on_click(
                                    cx.listener(|this, _, _, cx| this.toggle_loading(cx)),
                                )),
                        )
                        .child(
                            LoadingBar::new("refresh-bar-1")
                                .state(self.state)
                                .color(settings.tint)
                                .track_color(settings.background)
                                .loading_width(settings.loading_width)
                                .duration(settings.duration()),
                        ),
                ),
            )
            .child(
                section("Custom Style").max_w_96().child(
                    LoadingBar::new("refresh-bar-2")
                        .state(self.state)
                        .w_full()
                        .h(px(16.))
                        .color(rgb(0x16A34A))
                        .track_color(rgb(0xDCFCE7))
                        .loading_width(px(48.))
                        .duration(Duration::from_millis(900)),
                ),
            )
    }
}
