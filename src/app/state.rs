// src/app/state.rs
//! Application state definitions

use iced::Size;

use crate::features::{Lightbox, Page, ScrambleText, Settings, ThemeGallery};
use crate::ui::animation::{CardHover, PageFade};
use crate::ui::effects::waves::WaveBackground;

/// Main application state
pub struct App {
    /// Configuration loaded at startup
    pub core: CoreState,
    /// View state (page, effects, gallery, lightbox)
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn reduced_motion(&self) -> bool {
        self.settings.display.reduced_motion
    }
}

/// Everything the views read
pub struct UiState {
    /// The one page being shown
    pub page: Page,
    /// Mount flag and fade-in of the current page
    pub fade: PageFade,
    /// Scrambled headline of the current page
    pub title: ScrambleText,
    pub background: WaveBackground,
    /// Hero image selection on the Mallorn page
    pub gallery: ThemeGallery,
    pub lightbox: Lightbox,
    pub card_hover: CardHover,
}

impl UiState {
    pub fn new() -> Self {
        let page = Page::default();
        Self {
            page,
            fade: PageFade::new(),
            title: ScrambleText::new(page.headline()),
            background: WaveBackground::new(),
            gallery: ThemeGallery::default(),
            lightbox: Lightbox::default(),
            card_hover: CardHover::new(),
        }
    }

    /// Attach the wave backdrop to the initial viewport
    pub fn attach_background(&mut self, viewport: Size) {
        self.background.attach(viewport);
    }

    /// Whether short-lived UI animations still need frames
    pub fn has_active_animations(&self) -> bool {
        self.fade.is_pending() || self.card_hover.is_animating()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
