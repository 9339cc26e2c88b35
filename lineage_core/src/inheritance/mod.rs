//! Inheritance Calculator
//!
//! Combines parent and child modifiers into child max-stat modifiers and
//! projects a child's stats at a level from class growth rates.
//!
//! Nothing here fails: unknown character names contribute zero modifiers and
//! unknown classes use the fallback growth profile.

mod growth;
mod modifiers;
mod rolled;

pub use growth::{expected_gain, project_stats, SimulatedStats};
pub use modifiers::{
    combine, compute_child_modifiers, explain_child_modifiers, Contribution, ModifierBreakdown,
};
pub use rolled::{roll_level_up, roll_stats};

use crate::config::InheritanceConstants;
use crate::heuristic::BaseStatEstimator;
use crate::tables::{GameData, GrowthTable, ModifierTable};
use crate::types::{GrowthRates, StatVector};
use rand::Rng;

/// Inheritance computations over a fixed set of tables
#[derive(Clone, Copy)]
pub struct InheritanceCalculator<'a> {
    parents: &'a ModifierTable,
    children: &'a ModifierTable,
    growth: &'a GrowthTable,
    estimator: &'a dyn BaseStatEstimator,
    fallback_growth: GrowthRates,
    bonus: i32,
}

impl<'a> InheritanceCalculator<'a> {
    /// Calculator using the constants' archetype heuristic for base stats
    pub fn new(data: &'a GameData, constants: &'a InheritanceConstants) -> Self {
        Self::with_estimator(data, constants, &constants.base_stats)
    }

    /// Calculator with a custom base-stat estimator
    pub fn with_estimator(
        data: &'a GameData,
        constants: &'a InheritanceConstants,
        estimator: &'a dyn BaseStatEstimator,
    ) -> Self {
        InheritanceCalculator {
            parents: &data.parent_modifiers,
            children: &data.child_modifiers,
            growth: &data.growth_rates,
            estimator,
            fallback_growth: constants.fallback_growth,
            bonus: constants.universal_bonus,
        }
    }

    /// `parent1 + parent2 + child_base + bonus` per genetic stat
    pub fn compute_child_modifiers(&self, parent1: &str, parent2: &str, child: &str) -> StatVector {
        compute_child_modifiers(self.parents, self.children, parent1, parent2, child, self.bonus)
    }

    /// Child modifiers with each contribution and its lookup status
    pub fn explain_child_modifiers(
        &self,
        parent1: &str,
        parent2: &str,
        child: &str,
    ) -> ModifierBreakdown {
        explain_child_modifiers(self.parents, self.children, parent1, parent2, child, self.bonus)
    }

    /// Growth rates for a class, fallback profile if unknown
    pub fn growth_for(&self, class_name: &str) -> GrowthRates {
        self.growth.resolve(class_name, self.fallback_growth)
    }

    /// Estimated level-1 base stats for a class
    pub fn base_stats_for(&self, class_name: &str) -> StatVector {
        self.estimator.estimate(class_name)
    }

    /// Expected stats of a child in `class_name` at `level`
    pub fn simulate_stats_at_level(
        &self,
        class_name: &str,
        child_modifiers: &StatVector,
        level: u32,
    ) -> SimulatedStats {
        let growth = self.growth_for(class_name);
        let base = self.base_stats_for(class_name);
        SimulatedStats {
            class_name: class_name.to_string(),
            level,
            stats: project_stats(&base, &growth, child_modifiers, level),
        }
    }

    /// One random outcome of leveling a child in `class_name` to `level`
    pub fn roll_stats_at_level<R: Rng + ?Sized>(
        &self,
        class_name: &str,
        child_modifiers: &StatVector,
        level: u32,
        rng: &mut R,
    ) -> SimulatedStats {
        let growth = self.growth_for(class_name);
        let base = self.base_stats_for(class_name);
        SimulatedStats {
            class_name: class_name.to_string(),
            level,
            stats: roll_stats(&base, &growth, child_modifiers, level, rng),
        }
    }
}
