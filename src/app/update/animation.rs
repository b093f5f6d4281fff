// src/app/update/animation.rs
//! Frame and scramble timer handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle animation clock messages
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                let reduced_motion = self.core.reduced_motion();

                // First frame after a page is rendered mounts it
                if !self.ui.fade.is_mounted() {
                    self.ui.fade.mount(reduced_motion);
                }
                self.ui.fade.tick(now);

                self.ui.card_hover.tick(now);

                if !reduced_motion {
                    self.ui.background.tick();
                }
                Some(Task::none())
            }

            Message::ScrambleTick => {
                let was_running = self.ui.title.is_running();
                if !self.ui.title.tick(&mut rand::rng()) && was_running {
                    tracing::debug!("Headline revealed: {}", self.ui.title.display());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
