//! Lightbox selection: at most one screenshot shown full-window

use super::showcase::Screenshot;

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    open: Option<Screenshot>,
}

impl Lightbox {
    /// Show `shot`, replacing whatever was open
    pub fn open(&mut self, shot: Screenshot) {
        self.open = Some(shot);
    }

    /// Dismiss the overlay, returning the screenshot that was shown
    pub fn close(&mut self) -> Option<Screenshot> {
        self.open.take()
    }

    pub fn current(&self) -> Option<Screenshot> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gallery::MallornTheme;

    #[test]
    fn starts_closed() {
        assert!(!Lightbox::default().is_open());
    }

    #[test]
    fn second_open_replaces_first() {
        let mut lightbox = Lightbox::default();
        lightbox.open(Screenshot::Mallorn(MallornTheme::Mallorn));
        lightbox.open(Screenshot::Mallorn(MallornTheme::Aurora));
        assert_eq!(
            lightbox.current(),
            Some(Screenshot::Mallorn(MallornTheme::Aurora))
        );
    }

    #[test]
    fn close_clears() {
        let mut lightbox = Lightbox::default();
        lightbox.open(Screenshot::SkinGenieHero);
        assert_eq!(lightbox.close(), Some(Screenshot::SkinGenieHero));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.close(), None);
    }
}
