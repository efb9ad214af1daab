mod refresh_bar_story;

use anyhow::Context as _;
use gpui::{
    App, Bounds, Div, Entity, InteractiveElement as _, ParentElement, Render,
    SharedString, Stateful, Styled, Window, WindowBounds, WindowKind, WindowOptions, div, px,
    rgb, size,
};
use refresh_bar::RefreshBarSettings;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub use refresh_bar_story::RefreshBarStory;

pub fn init(_: &mut App) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("refresh_bar=debug".parse().unwrap()),
        )
        .init();
}

/// Load the bar settings from a JSON file.
pub fn load_settings(path: &str) -> anyhow::Result<RefreshBarSettings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file: {}", path))?;
    RefreshBarSettings::from_json(&json)
}

pub fn create_new_window<F, V>(title: &str, crate_view_fn: F, cx: &mut App)
where
    V: Render,
    F: FnOnce(&mut Window, &mut App) -> Entity<V> + Send + 'static,
{
    let window_bounds = Bounds::centered(None, size(px(640.), px(480.)), cx);
    let title = SharedString::from(title.to_string());

    cx.spawn(async move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(window_bounds)),
            window_min_size: Some(gpui::Size {
                width: px(320.),
                height: px(240.),
            }),
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let window = cx
            .open_window(options, |window, cx| crate_view_fn(window, cx))
            .context("failed to open window")?;

        window
            .update(cx, |_, window, _| {
                window.activate_window();
                window.set_window_title(&title);
            })
            .context("failed to update window")?;

        Ok::<_, anyhow::Error>(())
    })
    .detach();
}

pub(crate) fn section(title: impl Into<SharedString>) -> Div {
    let title: SharedString = title.into();
    div()
        .flex()
        .flex_col()
        .w_full()
        .gap_3()
        .p_4()
        .rounded(px(8.))
        .border_1()
        .border_color(rgb(0xE4E4E7))
        .child(div().text_sm().child(title))
}

pub(crate) fn button(id: &'static str, label: impl Into<SharedString>) -> Stateful<Div> {
    let label: SharedString = label.into();
    div()
        .id(id)
        .px_3()
        .py_1()
        .rounded(px(6.))
        .border_1()
        .border_color(rgb(0xD4D4D8))
        .cursor_pointer()
        .child(label)
}
