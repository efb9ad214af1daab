use refresh_bar::RefreshBarSettings;
use refresh_bar_story::{RefreshBarStory, create_new_window, init, load_settings};

fn main() {
    let app = gpui_platform::application();

    // Parse `cargo run -- <settings.json>`
    let path = std::env::args().nth(1);

    app.run(move |cx| {
        init(cx);
        cx.activate(true);

        let settings = match path.as_deref().map(load_settings) {
            Some(Ok(settings)) => settings,
            Some(Err(err)) => {
                tracing::error!("{:#}, using defaults", err);
                RefreshBarSettings::default()
            }
            None => RefreshBarSettings::default(),
        };

        create_new_window(
            "Refresh Bar",
            move |window, cx| RefreshBarStory::view(settings, window, cx),
            cx,
        );
    });
}
