//! Injectable random choice for phrase selection
//!
//! Every randomized decision in outline and prose generation goes through a
//! [`PhraseChooser`], so callers can swap the entropy-backed chooser for a
//! seeded or scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random choices for generation
pub trait PhraseChooser {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Return true with the given probability
    fn chance(&mut self, probability: f64) -> bool;
}

impl<C: PhraseChooser + ?Sized> PhraseChooser for Box<C> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Pick one phrase uniformly from a non-empty pool
pub fn pick<'a, C: PhraseChooser + ?Sized>(chooser: &mut C, pool: &[&'a str]) -> &'a str {
    match pool.len() {
        0 => "",
        len => pool[chooser.pick_index(len).min(len - 1)],
    }
}

/// Chooser backed by a `rand` RNG
#[derive(Debug, Clone)]
pub struct RngChooser<R: Rng = StdRng> {
    rng: R,
}

impl RngChooser<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PhraseChooser for RngChooser<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Deterministic chooser that always takes the same slot and coin result
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser {
    pub index: usize,
    pub coin: bool,
}

#[cfg(test)]
impl FixedChooser {
    pub fn first() -> Self {
        Self::default()
    }

    pub fn with_coin(mut self, coin: bool) -> Self {
        self.coin = coin;
        self
    }
}

#[cfg(test)]
impl PhraseChooser for FixedChooser {
    fn pick_index(&mut self, len: usize) -> usize {
        self.index % len
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.coin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_choosers_agree() {
        let pool = ["a", "b", "c", "d", "e"];
        let mut first = RngChooser::seeded(42);
        let mut second = RngChooser::seeded(42);

        let left: Vec<_> = (0..20).map(|_| pick(&mut first, &pool)).collect();
        let right: Vec<_> = (0..20).map(|_| pick(&mut second, &pool)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_fixed_chooser_wraps_index() {
        let mut chooser = FixedChooser { index: 4, coin: false };
        assert_eq!(pick(&mut chooser, &["x", "y", "z"]), "y");
        assert!(!chooser.chance(0.5));
    }

    #[test]
    fn test_pick_from_empty_pool_is_empty() {
        let mut chooser = FixedChooser::first();
        assert_eq!(pick(&mut chooser, &[]), "");
    }
}
