use anyhow::{ensure, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

/// Draws `count` distinct values from `0..pool` by repeatedly removing a
/// uniformly random remaining element from the deck. Equal seeds give equal
/// sequences.
pub fn draw(count: usize, pool: usize, seed: u64) -> Result<Vec<i64>> {
    ensure!(
        count <= pool,
        "cannot draw {} value(s) from a pool of {}",
        count,
        pool
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck: Vec<i64> = (0..pool as i64).collect();
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..deck.len());
        drawn.push(deck.remove(index));
    }
    debug!("drew {} of {} pooled value(s)", drawn.len(), pool);
    Ok(drawn)
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = draw(100, 255, 0).unwrap();
        let b = draw(100, 255, 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = draw(100, 255, 0).unwrap();
        let b = draw(100, 255, 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn values_are_distinct_and_in_range() {
        let mut drawn = draw(255, 255, 7).unwrap();
        drawn.sort_unstable();
        let expected: Vec<i64> = (0..255).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn overdraw_is_an_error() {
        let err = draw(256, 255, 0).unwrap_err();
        assert!(err.to_string().contains("pool of 255"));
    }

    #[test]
    fn zero_draw_is_empty() {
        assert!(draw(0, 255, 0).unwrap().is_empty());
    }
}
