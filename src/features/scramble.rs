//! Decryption-style title reveal
//!
//! A fixed target string is revealed left to right. Positions that are not yet
//! revealed show a random symbol from [`SCRAMBLE_ALPHABET`] on every tick. The
//! revealed count grows by one third of a character per tick, so a full reveal
//! takes three ticks per character.

use rand::Rng;

/// Symbols drawn for positions that are not revealed yet
pub const SCRAMBLE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*";

/// Ticks needed to reveal one character
const TICKS_PER_CHAR: usize = 3;

/// Scramble reveal state for one title
#[derive(Debug, Clone)]
pub struct ScrambleText {
    target: String,
    chars: Vec<char>,
    /// Revealed count in thirds of a character
    ticks: usize,
    display: String,
    running: bool,
}

impl ScrambleText {
    /// Start a reveal of `target` with a fully scrambled first frame
    pub fn new(target: &str) -> Self {
        let mut scramble = Self {
            target: String::new(),
            chars: Vec::new(),
            ticks: 0,
            display: String::new(),
            running: false,
        };
        scramble.restart(target);
        scramble
    }

    /// Current frame
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Final text
    #[cfg(test)]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether further ticks will change the frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of characters shown as their true value
    #[cfg(test)]
    pub fn revealed(&self) -> f32 {
        (self.ticks as f32 / TICKS_PER_CHAR as f32).min(self.chars.len() as f32)
    }

    /// Advance one tick. Returns whether the reveal is still running.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.running {
            return false;
        }

        self.ticks += 1;
        if self.ticks >= self.chars.len() * TICKS_PER_CHAR {
            self.finish();
            return false;
        }

        self.render(rng);
        true
    }

    /// Reveal a new target. Returns false when the target is unchanged.
    pub fn set_target(&mut self, target: &str) -> bool {
        if self.target == target {
            return false;
        }
        self.restart(target);
        true
    }

    /// Jump straight to the final text
    pub fn finish(&mut self) {
        self.ticks = self.chars.len() * TICKS_PER_CHAR;
        self.display.clone_from(&self.target);
        self.running = false;
    }

    fn restart(&mut self, target: &str) {
        self.target = target.to_string();
        self.chars = target.chars().collect();
        self.ticks = 0;
        self.running = !self.chars.is_empty();
        self.render(&mut rand::rng());
    }

    fn render<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let ticks = self.ticks;
        self.display = self
            .chars
            .iter()
            .enumerate()
            .map(|(index, &c)| {
                if index * TICKS_PER_CHAR < ticks {
                    c
                } else {
                    random_symbol(rng)
                }
            })
            .collect();
    }
}

fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
    let symbols = SCRAMBLE_ALPHABET.as_bytes();
    symbols[rng.random_range(0..symbols.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TITLE: &str = "Tools that respect your intelligence.";

    #[test]
    fn reveal_completes_with_exact_target() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scramble = ScrambleText::new(TITLE);

        let mut ticks = 0;
        while scramble.tick(&mut rng) {
            ticks += 1;
            assert!(ticks < 1000, "reveal never finished");
        }

        assert_eq!(ticks + 1, TITLE.chars().count() * 3);
        assert_eq!(scramble.display(), TITLE);
        assert!(!scramble.is_running());
    }

    #[test]
    fn finished_reveal_is_stable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut scramble = ScrambleText::new("Mallorn");
        while scramble.tick(&mut rng) {}

        for _ in 0..10 {
            assert!(!scramble.tick(&mut rng));
            assert_eq!(scramble.display(), "Mallorn");
        }
    }

    #[test]
    fn frames_mix_revealed_and_alphabet_chars() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut scramble = ScrambleText::new(TITLE);
        let target: Vec<char> = TITLE.chars().collect();

        while scramble.is_running() {
            let revealed = scramble.revealed();
            let frame: Vec<char> = scramble.display().chars().collect();
            assert_eq!(frame.len(), target.len());

            for (index, c) in frame.iter().enumerate() {
                if (index as f32) < revealed {
                    assert_eq!(*c, target[index], "revealed position {index} differs");
                } else {
                    assert!(SCRAMBLE_ALPHABET.contains(*c), "unexpected symbol {c:?}");
                }
            }
            scramble.tick(&mut rng);
        }
    }

    #[test]
    fn revealed_count_grows_by_thirds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut scramble = ScrambleText::new("ABCD");
        assert_eq!(scramble.revealed(), 0.0);

        scramble.tick(&mut rng);
        scramble.tick(&mut rng);
        scramble.tick(&mut rng);
        assert_eq!(scramble.revealed(), 1.0);
        assert!(scramble.display().starts_with('A'));
    }

    #[test]
    fn new_target_restarts() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut scramble = ScrambleText::new("Home");
        while scramble.tick(&mut rng) {}

        assert!(scramble.set_target("Predictive Storage Defense"));
        assert!(scramble.is_running());
        assert_eq!(scramble.revealed(), 0.0);
        assert_eq!(scramble.target(), "Predictive Storage Defense");
        assert_eq!(
            scramble.display().chars().count(),
            "Predictive Storage Defense".chars().count()
        );
    }

    #[test]
    fn same_target_does_not_restart() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scramble = ScrambleText::new("Home");
        scramble.tick(&mut rng);
        scramble.tick(&mut rng);
        scramble.tick(&mut rng);

        assert!(!scramble.set_target("Home"));
        assert_eq!(scramble.revealed(), 1.0);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut scramble = ScrambleText::new(TITLE);
        scramble.finish();
        assert_eq!(scramble.display(), TITLE);
        assert!(!scramble.is_running());
    }

    #[test]
    fn empty_target_never_runs() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scramble = ScrambleText::new("");
        assert!(!scramble.is_running());
        assert!(!scramble.tick(&mut rng));
        assert_eq!(scramble.display(), "");
    }
}
