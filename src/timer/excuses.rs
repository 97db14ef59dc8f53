//! The excuses shown while procrastinating.

use rand::seq::SliceRandom;
use rand::Rng;

/// Built-in excuses, in display order.
pub const EXCUSES: &[&str] = &[
    "Just five more minutes...",
    "I'll start after this one last scroll.",
    "Maybe tomorrow is better.",
    "Do I really need a timer?",
    "Let me reorganize my tabs first...",
    "Time is a flat circle—also a suggestion.",
    "Starting... soonish.",
    "Coffee first, productivity later.",
    "My plant needs an encouraging word.",
];

/// Pick one excuse uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXCUSES.choose(rng).copied().unwrap_or(EXCUSES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_returns_known_excuse() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(EXCUSES.contains(&pick(&mut rng)));
        }
    }

    #[test]
    fn test_pick_covers_the_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..2000).map(|_| pick(&mut rng)).collect();
        assert_eq!(seen.len(), EXCUSES.len());
    }

    #[test]
    fn test_excuses_are_single_line() {
        for excuse in EXCUSES {
            assert!(!excuse.is_empty());
            assert!(!excuse.contains('\n'));
        }
    }
}
