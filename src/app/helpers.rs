//! Async helpers and window configuration

use iced::Size;

use crate::features::settings::WindowSettings;

/// Open `url` with the system handler.
/// `open::that` can block on some desktops, so it runs off the UI thread.
pub async fn open_url(url: String) -> anyhow::Result<()> {
    tracing::info!("Opening {}", url);
    tokio::task::spawn_blocking(move || open::that(&url)).await??;
    Ok(())
}

/// Smallest window the platform is allowed to open
pub const MIN_WINDOW_SIZE: Size = Size {
    width: 640.0,
    height: 480.0,
};

/// Size the main window actually opens at: the configured size, raised to
/// [`MIN_WINDOW_SIZE`]
pub fn initial_viewport(window: &WindowSettings) -> Size {
    Size::new(
        window.width.max(MIN_WINDOW_SIZE.width),
        window.height.max(MIN_WINDOW_SIZE.height),
    )
}

/// Main window settings. Close requests are routed through
/// `Message::RequestClose` so the backdrop is torn down first.
pub fn window_settings(window: &WindowSettings) -> iced::window::Settings {
    iced::window::Settings {
        size: initial_viewport(window),
        min_size: Some(MIN_WINDOW_SIZE),
        exit_on_close_request: false,
        #[cfg(target_os = "linux")]
        platform_specific: iced::window::settings::PlatformSpecific {
            application_id: "lightspire".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_uses_configured_size() {
        let window = WindowSettings {
            width: 1024.0,
            height: 700.0,
        };
        let settings = window_settings(&window);
        assert_eq!(settings.size, Size::new(1024.0, 700.0));
        assert!(!settings.exit_on_close_request);
    }

    #[test]
    fn undersized_window_is_raised_to_minimum() {
        let window = WindowSettings {
            width: 300.0,
            height: 900.0,
        };
        assert_eq!(initial_viewport(&window), Size::new(640.0, 900.0));
        assert_eq!(window_settings(&window).size, Size::new(640.0, 900.0));
    }
}
