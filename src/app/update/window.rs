// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.ui.background.resize(*size);
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!("Close requested, shutting down");
                self.ui.background.teardown();
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
