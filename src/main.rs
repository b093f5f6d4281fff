//! Lightspire - showcase for the Mallorn and SkinGenie apps
//! Built with iced: scramble headlines over a drifting wave backdrop

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use app::App;
use features::Settings;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Settings decide the window size, so they are loaded before boot
    let settings = Settings::load();
    let window = app::helpers::window_settings(&settings.window);

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window)
        .antialiasing(true)
        .run()
}
