//! Expected-value stat projection
//!
//! `stat = floor(base + growth * (level - 1) / 100 + modifier)`
//!
//! The sum is kept in hundredths of a point and floored once, so fractional
//! gains accumulated over several levels are never truncated per level.

use crate::types::{GrowthRates, Stat, StatVector};
use serde::{Deserialize, Serialize};

/// Projected stats of a unit at a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedStats {
    pub class_name: String,
    pub level: u32,
    pub stats: StatVector,
}

impl SimulatedStats {
    pub fn get(&self, stat: Stat) -> i32 {
        self.stats[stat]
    }
}

/// Expected stats at `level` from base stats, growth rates and modifiers.
///
/// The level is not validated: level 1 yields `base + modifier`, level 0
/// projects one level-up backwards. Results past the `i32` range saturate.
pub fn project_stats(
    base: &StatVector,
    growth: &GrowthRates,
    modifiers: &StatVector,
    level: u32,
) -> StatVector {
    let level_ups = i64::from(level) - 1;
    StatVector::from_fn(|stat| {
        let hundredths = (100 * i64::from(base[stat]))
            .saturating_add(i64::from(growth.get(stat)).saturating_mul(level_ups))
            .saturating_add(100 * i64::from(modifiers[stat]));
        let value = hundredths.div_euclid(100);
        i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
    })
}

/// Expected gain of one stat after `level - 1` level-ups, unfloored
pub fn expected_gain(growth: u32, level: u32) -> f64 {
    f64::from(growth) * (f64::from(level) - 1.0) / 100.0
}
