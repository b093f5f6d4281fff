//! Page fade-in
//!
//! Each page starts unmounted and transparent. The first frame after it is
//! rendered mounts it and starts the fade towards full opacity.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const FADE_DURATION: Duration = Duration::from_millis(700);

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(FADE_DURATION)
}

#[derive(Debug)]
pub struct PageFade {
    mounted: bool,
    animation: Animated<f32>,
}

impl Default for PageFade {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFade {
    pub fn new() -> Self {
        Self {
            mounted: false,
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Unmount and go back to transparent (called on every navigation)
    pub fn reset(&mut self) {
        self.mounted = false;
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Mark the page mounted. With `instant` the page is fully opaque at once.
    pub fn mount(&mut self, instant: bool) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if instant {
            self.animation = Animated::transition(1.0, fade_easing());
        } else {
            self.animation.update(1.0.into());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Whether frames are still needed to finish the fade
    pub fn is_pending(&self) -> bool {
        !self.mounted || self.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unmounted_and_transparent() {
        let fade = PageFade::new();
        assert!(!fade.is_mounted());
        assert!(fade.is_pending());
        assert_eq!(fade.progress(), 0.0);
    }

    #[test]
    fn instant_mount_is_opaque() {
        let mut fade = PageFade::new();
        fade.mount(true);
        assert!(fade.is_mounted());
        assert_eq!(fade.progress(), 1.0);
        assert!(!fade.is_pending());
    }

    #[test]
    fn animated_mount_targets_opaque() {
        let mut fade = PageFade::new();
        fade.mount(false);
        assert!(fade.is_mounted());
        assert!(fade.is_animating() || fade.progress() > 0.0);
    }

    #[test]
    fn reset_unmounts() {
        let mut fade = PageFade::new();
        fade.mount(true);
        fade.reset();
        assert!(!fade.is_mounted());
        assert_eq!(fade.progress(), 0.0);
    }

    #[test]
    fn mounting_twice_keeps_first_transition() {
        let mut fade = PageFade::new();
        fade.mount(true);
        fade.mount(false);
        assert_eq!(fade.progress(), 1.0);
    }
}
