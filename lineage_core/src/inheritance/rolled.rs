//! Stochastic level-up rolls

use crate::types::{GrowthRates, Stat, StatVector};
use rand::Rng;

/// Points gained by one stat on a single level-up.
///
/// Every full 100% of growth is a guaranteed point; the remainder is the
/// chance of one more.
pub fn roll_level_up<R: Rng + ?Sized>(growth: u32, rng: &mut R) -> i32 {
    let guaranteed = (growth / 100) as i32;
    let remainder = growth % 100;
    let extra = if remainder > 0 && rng.gen_range(0..100) < remainder {
        1
    } else {
        0
    };
    guaranteed + extra
}

/// Roll every level-up from 1 to `level` and add the gains to
/// `base + modifiers`
pub fn roll_stats<R: Rng + ?Sized>(
    base: &StatVector,
    growth: &GrowthRates,
    modifiers: &StatVector,
    level: u32,
    rng: &mut R,
) -> StatVector {
    let mut stats = StatVector::from_fn(|stat| base[stat] + modifiers[stat]);
    for _ in 1..level.max(1) {
        for stat in Stat::ALL {
            stats[stat] += roll_level_up(growth.get(stat), rng);
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_growth_never_gains() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(roll_level_up(0, &mut rng), 0);
        }
    }

    #[test]
    fn test_full_growth_always_gains() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(roll_level_up(100, &mut rng), 1);
        }
    }

    #[test]
    fn test_growth_above_hundred_is_one_or_two() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let gain = roll_level_up(150, &mut rng);
            assert!(gain == 1 || gain == 2);
        }
    }

    #[test]
    fn test_rolled_stats_bounded_by_projection_extremes() {
        let base = StatVector {
            hp: 18,
            ..StatVector::genetic(6, 2, 5, 6, 5, 6, 2)
        };
        let growth = GrowthRates::flat(90, 60);
        let mods = StatVector::genetic(1, 0, 1, 1, 0, -1, 0);
        let mut rng = StdRng::seed_from_u64(42);

        let rolled = roll_stats(&base, &growth, &mods, 20, &mut rng);
        for stat in Stat::ALL {
            let floor = base[stat] + mods[stat];
            assert!(rolled[stat] >= floor, "{} below floor", stat);
            assert!(rolled[stat] <= floor + 19, "{} above ceiling", stat);
        }
    }

    #[test]
    fn test_level_one_rolls_nothing() {
        let base = StatVector::genetic(6, 2, 5, 6, 5, 6, 2);
        let mut rng = StdRng::seed_from_u64(1);
        let rolled = roll_stats(&base, &GrowthRates::flat(100, 100), &StatVector::ZERO, 1, &mut rng);
        assert_eq!(rolled, base);
    }

    #[test]
    fn test_same_seed_same_result() {
        let growth = GrowthRates::flat(70, 45);
        let a = roll_stats(&StatVector::ZERO, &growth, &StatVector::ZERO, 30, &mut StdRng::seed_from_u64(3));
        let b = roll_stats(&StatVector::ZERO, &growth, &StatVector::ZERO, 30, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
