//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::App;
use state::{CoreState, UiState};

/// Id of the scrollable holding the current page
pub const PAGE_SCROLL: &str = "page_scroll";

impl App {
    /// Create new application instance from loaded settings
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let viewport = helpers::initial_viewport(&settings.window);
        let core = CoreState::new(settings);

        let mut ui = UiState::new();
        ui.attach_background(viewport);
        if core.reduced_motion() {
            ui.fade.mount(true);
            ui.title.finish();
        }

        tracing::info!(
            "Starting on {:?} (reduced motion: {})",
            ui.page,
            core.reduced_motion()
        );

        (Self { core, ui }, Task::none())
    }

    /// Window title follows the current page
    pub fn title(&self) -> String {
        match self.ui.page.product() {
            Some(product) => format!("Lightspire - {}", product.name()),
            None => "Lightspire".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Subscriptions for frames, the scramble timer, resize, keyboard and close
    ///
    /// A subscription is only declared while its effect is running; dropping
    /// it from the batch stops the underlying task.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::keyboard;

        let reduced_motion = self.core.reduced_motion();

        // 1. Frame clock: waves plus fade/hover transitions
        let animation_sub = if subscription_logic::needs_frame_subscription(
            self.ui.background.needs_frames(),
            self.ui.has_active_animations(),
            reduced_motion,
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        // 2. Scramble timer, dropped once the title is revealed
        let scramble_sub =
            if subscription_logic::needs_scramble_timer(self.ui.title.is_running(), reduced_motion)
            {
                iced::time::every(self.core.settings.display.scramble_interval())
                    .map(|_| Message::ScrambleTick)
            } else {
                Subscription::none()
            };

        // 3. Resize listener, removed on teardown
        let resize_sub = if self.ui.background.listens_for_resize() {
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
        } else {
            Subscription::none()
        };

        // 4. Keyboard shortcuts
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 5. Window close
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        Subscription::batch([
            animation_sub,
            scramble_sub,
            resize_sub,
            keyboard_sub,
            close_request_sub,
        ])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default()).0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are needed for moving waves (unless motion is reduced) and for
    /// any running UI transition
    pub fn needs_frame_subscription(
        waves_running: bool,
        ui_animating: bool,
        reduced_motion: bool,
    ) -> bool {
        (waves_running && !reduced_motion) || ui_animating
    }

    pub fn needs_scramble_timer(scramble_running: bool, reduced_motion: bool) -> bool {
        scramble_running && !reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use super::*;

    mod property_frame_clock {
        use super::*;

        #[test]
        fn waves_keep_frames_running() {
            assert!(needs_frame_subscription(true, false, false));
        }

        #[test]
        fn reduced_motion_freezes_waves() {
            assert!(!needs_frame_subscription(true, false, true));
        }

        #[test]
        fn transitions_need_frames_even_with_reduced_motion() {
            assert!(needs_frame_subscription(false, true, true));
        }

        #[test]
        fn torn_down_and_idle_means_no_frames() {
            assert!(!needs_frame_subscription(false, false, false));
        }
    }

    mod property_scramble_timer {
        use super::*;

        #[test]
        fn timer_only_while_running() {
            assert!(needs_scramble_timer(true, false));
            assert!(!needs_scramble_timer(false, false));
        }

        #[test]
        fn reduced_motion_never_scrambles() {
            assert!(!needs_scramble_timer(true, true));
        }
    }

    #[test]
    fn boots_on_home_with_attached_background() {
        let app = App::default();
        assert_eq!(app.ui.page, crate::features::Page::Home);
        assert!(app.ui.background.needs_frames());
        assert!(app.ui.title.is_running());
        assert!(!app.ui.lightbox.is_open());
        assert_eq!(app.title(), "Lightspire");
    }

    #[test]
    fn backdrop_spans_the_clamped_window() {
        let mut settings = Settings::default();
        settings.window.width = 300.0;
        settings.window.height = 200.0;
        let (mut app, _) = App::new(settings);
        let _ = app.update(Message::AnimationTick);

        let polylines = app.ui.background.polylines();
        assert_eq!(polylines.len(), 2);
        for (_, points) in &polylines {
            let last = points.last().map(|p| p.x).unwrap_or(0.0);
            assert!(last >= 635.0, "waves stop at {last}");
        }
    }

    #[test]
    fn reduced_motion_boots_fully_revealed() {
        let mut settings = Settings::default();
        settings.display.reduced_motion = true;
        let (app, _) = App::new(settings);

        assert!(!app.ui.title.is_running());
        assert_eq!(app.ui.title.display(), app.ui.page.headline());
        assert!(app.ui.fade.is_mounted());
    }
}
