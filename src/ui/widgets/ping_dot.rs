//! Status dot with an expanding ping ring

use iced::widget::canvas::{self, Frame, Geometry, Path, Program};
use iced::{Color, Element, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

/// Frames per ping at the usual 60 Hz frame clock
const PING_PERIOD: u64 = 60;

const DOT_RADIUS: f32 = 4.0;
const CANVAS_SIZE: f32 = 16.0;

/// Ping progress (0.0 to 1.0) for a frame counter
pub fn phase(frame: u64) -> f32 {
    (frame % PING_PERIOD) as f32 / PING_PERIOD as f32
}

struct PingDot {
    color: Color,
    phase: f32,
}

impl<Message> Program<Message> for PingDot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();

        // Ring grows to twice the dot while fading out
        let ring = Path::circle(center, DOT_RADIUS * (1.0 + self.phase));
        frame.fill(&ring, theme::with_alpha(self.color, 0.75 * (1.0 - self.phase)));
        frame.fill(&Path::circle(center, DOT_RADIUS), self.color);

        vec![frame.into_geometry()]
    }
}

pub fn view<'a, Message: 'a>(color: Color, phase: f32) -> Element<'a, Message> {
    canvas::Canvas::new(PingDot {
        color,
        phase: phase.clamp(0.0, 1.0),
    })
    .width(CANVAS_SIZE)
    .height(CANVAS_SIZE)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_every_period() {
        assert_eq!(phase(0), 0.0);
        assert_eq!(phase(30), 0.5);
        assert_eq!(phase(PING_PERIOD), 0.0);
        assert!(phase(PING_PERIOD - 1) < 1.0);
    }
}
