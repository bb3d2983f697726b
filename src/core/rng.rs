//! Seeded color picking for decorative card content.
//!
//! A card's color is its only random part. Seeding the picker means a stack
//! deals the same colors every time it is built from the same config.
//!
//! ```
//! use swipe_stack::core::{CardColor, StackRng};
//!
//! let palette = [CardColor::new("#FF6B6B"), CardColor::new("#6BCBFF")];
//! let mut rng = StackRng::new(42);
//! let color = rng.pick_color(&palette).unwrap();
//! assert!(palette.contains(color));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::card::CardColor;

/// ChaCha8-backed color picker.
#[derive(Clone, Debug)]
pub struct StackRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl StackRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this picker was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one color uniformly. `None` for an empty palette.
    pub fn pick_color<'a>(&mut self, palette: &'a [CardColor]) -> Option<&'a CardColor> {
        palette.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<CardColor> {
        ["#FF6B6B", "#6BCBFF", "#B6FF6B", "#FFD700", "#FF8C00", "#ADFF2F"]
            .iter()
            .map(|&c| CardColor::new(c))
            .collect()
    }

    fn deal(seed: u64, count: usize) -> Vec<CardColor> {
        let palette = palette();
        let mut rng = StackRng::new(seed);
        (0..count)
            .filter_map(|_| rng.pick_color(&palette).cloned())
            .collect()
    }

    #[test]
    fn test_same_seed_deals_same_colors() {
        assert_eq!(deal(42, 30), deal(42, 30));
        assert_eq!(StackRng::new(42).seed(), 42);
    }

    #[test]
    fn test_seed_changes_colors() {
        assert_ne!(deal(1, 30), deal(2, 30));
    }

    #[test]
    fn test_every_palette_color_is_dealt() {
        let dealt = deal(42, 300);
        for color in palette() {
            assert!(dealt.contains(&color), "{} never dealt", color);
        }
    }

    #[test]
    fn test_single_color_palette() {
        let palette = vec![CardColor::new("#000")];
        let mut rng = StackRng::new(9);
        for _ in 0..10 {
            assert_eq!(rng.pick_color(&palette), Some(&palette[0]));
        }
    }

    #[test]
    fn test_empty_palette() {
        let mut rng = StackRng::new(9);
        assert!(rng.pick_color(&[]).is_none());
    }
}
