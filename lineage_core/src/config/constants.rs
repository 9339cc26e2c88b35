//! Inheritance constants configuration

use crate::heuristic::ArchetypeHeuristic;
use crate::types::GrowthRates;
use serde::{Deserialize, Serialize};

/// Tunable fallback values used by the inheritance engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InheritanceConstants {
    /// Flat bonus added to every genetic stat of a child
    #[serde(default = "default_universal_bonus")]
    pub universal_bonus: i32,
    /// Growth rates used for classes missing from the growth table
    #[serde(default = "default_fallback_growth")]
    pub fallback_growth: GrowthRates,
    /// Level the lab simulates when none is chosen
    #[serde(default = "default_level")]
    pub default_level: u32,
    #[serde(default = "default_min_level")]
    pub min_level: u32,
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    /// Class label shown for a child with no known default class
    #[serde(default = "default_unknown_class")]
    pub unknown_class: String,
    /// Approximate level-1 base stats per class archetype
    #[serde(default)]
    pub base_stats: ArchetypeHeuristic,
}

impl Default for InheritanceConstants {
    fn default() -> Self {
        InheritanceConstants {
            universal_bonus: default_universal_bonus(),
            fallback_growth: default_fallback_growth(),
            default_level: default_level(),
            min_level: default_min_level(),
            max_level: default_max_level(),
            unknown_class: default_unknown_class(),
            base_stats: ArchetypeHeuristic::default(),
        }
    }
}

impl InheritanceConstants {
    /// Clamp a requested level into `[min_level, max_level]`
    pub fn clamp_level(&self, level: u32) -> u32 {
        level.clamp(self.min_level, self.max_level.max(self.min_level))
    }
}

fn default_universal_bonus() -> i32 {
    1
}
fn default_fallback_growth() -> GrowthRates {
    GrowthRates::flat(50, 30)
}
fn default_level() -> u32 {
    20
}
fn default_min_level() -> u32 {
    1
}
fn default_max_level() -> u32 {
    99
}
fn default_unknown_class() -> String {
    "Unknown".to_string()
}
