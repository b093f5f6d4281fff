//! Home page card highlight
//!
//! Every product card owns one transition. Hovering a card drives it towards
//! 1.0 and every other card towards 0.0, so a card the cursor just left fades
//! out from wherever it was while the new one fades in.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::Product;

const HOVER_DURATION: Duration = Duration::from_millis(400);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

fn idle() -> Animated<f32> {
    Animated::transition(0.0, hover_easing())
}

#[derive(Debug)]
pub struct CardHover {
    hovered: Option<Product>,
    cards: [(Product, Animated<f32>); 2],
}

impl Default for CardHover {
    fn default() -> Self {
        Self::new()
    }
}

impl CardHover {
    pub fn new() -> Self {
        Self {
            hovered: None,
            cards: Product::ALL.map(|product| (product, idle())),
        }
    }

    /// Point the highlight at `product`, or at nothing
    pub fn set_hovered(&mut self, product: Option<Product>) {
        if self.hovered == product {
            return;
        }
        self.hovered = product;
        for (card, animation) in &mut self.cards {
            let target = if Some(*card) == product { 1.0 } else { 0.0 };
            animation.update(target.into());
        }
    }

    #[cfg(test)]
    pub fn hovered(&self) -> Option<Product> {
        self.hovered
    }

    /// Highlight amount for a card (0.0 to 1.0)
    pub fn progress(&self, product: Product) -> f32 {
        self.cards
            .iter()
            .find(|(card, _)| *card == product)
            .map(|(_, animation)| animation.value().clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(|(_, animation)| animation.is_animating())
    }

    /// Drop every highlight immediately (the cards leave the screen)
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn tick(&mut self, now: Instant) {
        for (_, animation) in &mut self.cards {
            animation.tick(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_highlighted() {
        let hover = CardHover::new();
        assert_eq!(hover.hovered(), None);
        assert!(!hover.is_animating());
        for product in Product::ALL {
            assert_eq!(hover.progress(product), 0.0);
        }
    }

    #[test]
    fn moving_between_cards_animates_both() {
        let mut hover = CardHover::new();
        hover.set_hovered(Some(Product::Mallorn));
        hover.set_hovered(Some(Product::SkinGenie));

        assert_eq!(hover.hovered(), Some(Product::SkinGenie));
        assert!(hover.is_animating());
    }

    #[test]
    fn highlight_reaches_full_after_duration() {
        let mut hover = CardHover::new();
        hover.set_hovered(Some(Product::Mallorn));
        hover.tick(Instant::now() + HOVER_DURATION * 2);

        assert!(hover.progress(Product::Mallorn) > 0.99);
        assert_eq!(hover.progress(Product::SkinGenie), 0.0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut hover = CardHover::new();
        hover.set_hovered(Some(Product::SkinGenie));
        hover.clear();

        assert_eq!(hover.hovered(), None);
        assert_eq!(hover.progress(Product::SkinGenie), 0.0);
        assert!(!hover.is_animating());
    }
}
