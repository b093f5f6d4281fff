//! Animated sine-wave backdrop
//!
//! Two translucent waves scroll horizontally behind every page. The vertical
//! position at `x` on frame `f` is
//!
//! ```text
//! y(x, f) = height / 2 + y_offset + amplitude * sin(x * frequency + f * speed)
//! ```
//!
//! sampled every [`SAMPLE_STEP`] logical pixels across the surface width.
//!
//! [`WaveBackground`] owns the surface size and the frame counter; the app
//! subscribes to window frames and resize events only while it is running.
//! [`WaveCanvas`] draws the current frame with iced's Canvas.

use std::f64::consts::TAU;

use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, color, mouse};

/// Horizontal distance between polyline samples
pub const SAMPLE_STEP: f32 = 5.0;

const STROKE_WIDTH: f32 = 2.0;

/// Parameters of one wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLine {
    pub color: Color,
    /// Phase advance per frame (radians)
    pub speed: f32,
    pub amplitude: f32,
    /// Phase advance per logical pixel (radians)
    pub frequency: f32,
    /// Offset from the vertical center
    pub y_offset: f32,
}

/// Violet and cyan waves
pub const WAVES: [WaveLine; 2] = [
    WaveLine {
        color: color!(0x8b5cf6, 0.15),
        speed: 0.002,
        amplitude: 50.0,
        frequency: 0.002,
        y_offset: 0.0,
    },
    WaveLine {
        color: color!(0x06b6d4, 0.1),
        speed: 0.003,
        amplitude: 70.0,
        frequency: 0.003,
        y_offset: 50.0,
    },
];

impl WaveLine {
    /// Phase contributed by the frame counter, wrapped to one turn
    fn frame_phase(&self, frame: u64) -> f32 {
        (frame as f64 * self.speed as f64).rem_euclid(TAU) as f32
    }

    /// Vertical position at `x` for a surface of `height`
    pub fn y_at(&self, x: f32, height: f32, frame: u64) -> f32 {
        height / 2.0
            + self.y_offset
            + (x * self.frequency + self.frame_phase(frame)).sin() * self.amplitude
    }

    /// Polyline across the surface width. Empty for a zero-area surface.
    pub fn sample(&self, surface: Size, frame: u64) -> Vec<Point> {
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return Vec::new();
        }

        let steps = (surface.width / SAMPLE_STEP).ceil() as usize;
        (0..steps)
            .map(|i| {
                let x = i as f32 * SAMPLE_STEP;
                Point::new(x, self.y_at(x, surface.height, frame))
            })
            .collect()
    }
}

/// Backdrop state: drawing surface, frame counter and run flag
#[derive(Debug, Clone)]
pub struct WaveBackground {
    surface: Option<Size>,
    frame: u64,
    running: bool,
    lines: &'static [WaveLine],
}

impl Default for WaveBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveBackground {
    pub fn new() -> Self {
        Self {
            surface: None,
            frame: 0,
            running: false,
            lines: &WAVES,
        }
    }

    /// Acquire a surface sized to the viewport and start animating
    pub fn attach(&mut self, viewport: Size) {
        tracing::debug!(
            "Wave backdrop attached at {}x{}",
            viewport.width,
            viewport.height
        );
        self.surface = Some(viewport);
        self.running = true;
    }

    /// Follow a viewport resize. Ignored once torn down.
    pub fn resize(&mut self, viewport: Size) {
        if !self.running {
            return;
        }
        self.surface = Some(viewport);
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if self.running && self.surface.is_some() {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    /// Stop the loop and release the surface
    pub fn teardown(&mut self) {
        if self.running {
            tracing::debug!("Wave backdrop torn down after {} frames", self.frame);
        }
        self.running = false;
        self.surface = None;
    }

    /// Whether the frame clock should be subscribed
    pub fn needs_frames(&self) -> bool {
        self.running && self.surface.is_some()
    }

    /// Whether resize events should be subscribed
    pub fn listens_for_resize(&self) -> bool {
        self.running
    }

    /// Frames drawn since attach
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[cfg(test)]
    pub fn surface(&self) -> Option<Size> {
        self.surface
    }

    /// One polyline per wave on the tracked surface
    #[cfg(test)]
    pub fn polylines(&self) -> Vec<(Color, Vec<Point>)> {
        match self.surface {
            Some(surface) => self.polylines_in(surface),
            None => Vec::new(),
        }
    }

    /// One polyline per wave across `viewport` for the current frame.
    /// Empty once torn down or for a zero-area viewport.
    pub fn polylines_in(&self, viewport: Size) -> Vec<(Color, Vec<Point>)> {
        if !self.running || self.surface.is_none() {
            return Vec::new();
        }

        self.lines
            .iter()
            .map(|line| (line.color, line.sample(viewport, self.frame)))
            .filter(|(_, points)| !points.is_empty())
            .collect()
    }
}

/// Canvas program drawing the current wave frame
pub struct WaveCanvas<'a> {
    background: &'a WaveBackground,
}

impl<'a> WaveCanvas<'a> {
    pub fn new(background: &'a WaveBackground) -> Self {
        Self { background }
    }
}

impl<Message> Program<Message> for WaveCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Sample against the real canvas bounds so the waves always span it
        let polylines = self.background.polylines_in(bounds.size());
        if polylines.is_empty() {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());
        for (color, points) in &polylines {
            let path = Path::new(|builder| {
                let mut points = points.iter();
                if let Some(first) = points.next() {
                    builder.move_to(*first);
                }
                for point in points {
                    builder.line_to(*point);
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(*color),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Full-window, non-interactive backdrop element
pub fn view<'a, Message: 'a>(background: &'a WaveBackground) -> Element<'a, Message> {
    canvas::Canvas::new(WaveCanvas::new(background))
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_x(polyline: &[Point]) -> f32 {
        polyline.last().map(|p| p.x).unwrap_or(-1.0)
    }

    #[test]
    fn formula_at_origin() {
        let line = WAVES[1];
        // sin(0) = 0, so the wave sits at center + offset
        assert_eq!(line.y_at(0.0, 600.0, 0), 300.0 + 50.0);
    }

    #[test]
    fn samples_every_five_pixels_across_width() {
        let points = WAVES[0].sample(Size::new(800.0, 600.0), 0);
        assert_eq!(points.len(), 160);
        assert_eq!(points[1].x - points[0].x, SAMPLE_STEP);
        assert_eq!(last_x(&points), 795.0);
    }

    #[test]
    fn zero_area_surface_draws_nothing() {
        assert!(WAVES[0].sample(Size::new(0.0, 600.0), 3).is_empty());
        assert!(WAVES[0].sample(Size::new(800.0, 0.0), 3).is_empty());
    }

    #[test]
    fn waves_stay_within_amplitude() {
        for line in WAVES {
            for point in line.sample(Size::new(1024.0, 768.0), 12_345) {
                let center = 384.0 + line.y_offset;
                assert!((point.y - center).abs() <= line.amplitude + 1e-3);
            }
        }
    }

    #[test]
    fn frames_move_the_wave() {
        let line = WAVES[0];
        let a = line.y_at(100.0, 600.0, 0);
        let b = line.y_at(100.0, 600.0, 500);
        assert!((a - b).abs() > 1e-3);
    }

    #[test]
    fn unattached_background_is_idle() {
        let mut background = WaveBackground::new();
        background.tick();
        assert_eq!(background.frame(), 0);
        assert!(!background.needs_frames());
        assert!(background.polylines().is_empty());
    }

    #[test]
    fn resize_replaces_surface_width() {
        let mut background = WaveBackground::new();
        background.attach(Size::new(800.0, 600.0));
        background.tick();
        for (_, polyline) in background.polylines() {
            assert_eq!(last_x(&polyline), 795.0);
        }

        background.resize(Size::new(1200.0, 900.0));
        background.tick();
        let polylines = background.polylines();
        assert_eq!(polylines.len(), 2);
        for (_, polyline) in &polylines {
            assert_eq!(last_x(polyline), 1195.0);
        }
        assert_eq!(background.surface(), Some(Size::new(1200.0, 900.0)));
    }

    #[test]
    fn canvas_bounds_decide_the_span() {
        let mut background = WaveBackground::new();
        background.attach(Size::new(640.0, 480.0));
        for (_, polyline) in background.polylines_in(Size::new(1000.0, 700.0)) {
            assert_eq!(last_x(&polyline), 995.0);
        }
        assert!(background.polylines_in(Size::ZERO).is_empty());
    }

    #[test]
    fn teardown_stops_drawing_and_listening() {
        let mut background = WaveBackground::new();
        background.attach(Size::new(800.0, 600.0));
        background.tick();
        background.tick();
        background.teardown();

        assert!(!background.needs_frames());
        assert!(!background.listens_for_resize());
        assert!(background.polylines().is_empty());
        assert!(background.polylines_in(Size::new(800.0, 600.0)).is_empty());

        background.tick();
        assert_eq!(background.frame(), 2);

        background.resize(Size::new(1200.0, 900.0));
        assert_eq!(background.surface(), None);
    }
}
