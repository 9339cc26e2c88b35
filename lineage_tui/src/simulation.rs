//! Growth roll simulation utilities

use lineage_core::{InheritanceCalculator, Stat, StatVector};
use rand::Rng;

/// Spread of a child's stats over repeated random level-ups
pub struct GrowthSimulation {
    pub class_name: String,
    pub level: u32,
    pub trials: u32,
    /// Deterministic projection for comparison
    pub expected: StatVector,
    pub min: StatVector,
    pub max: StatVector,
    totals: [i64; Stat::ALL.len()],
}

impl GrowthSimulation {
    /// Roll `trials` independent level-ups to `level`
    pub fn run(
        calculator: &InheritanceCalculator<'_>,
        class_name: &str,
        child_modifiers: &StatVector,
        level: u32,
        trials: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let expected = calculator
            .simulate_stats_at_level(class_name, child_modifiers, level)
            .stats;

        let mut result = GrowthSimulation {
            class_name: class_name.to_string(),
            level,
            trials: 0,
            expected,
            min: expected,
            max: expected,
            totals: [0; Stat::ALL.len()],
        };

        for _ in 0..trials {
            let rolled = calculator
                .roll_stats_at_level(class_name, child_modifiers, level, rng)
                .stats;

            for (i, stat) in Stat::ALL.into_iter().enumerate() {
                let value = rolled[stat];
                result.totals[i] += i64::from(value);
                if result.trials == 0 || value < result.min[stat] {
                    result.min[stat] = value;
                }
                if result.trials == 0 || value > result.max[stat] {
                    result.max[stat] = value;
                }
            }
            result.trials += 1;
        }

        tracing::debug!(
            class_name,
            level,
            trials = result.trials,
            "growth simulation finished"
        );
        result
    }

    /// Average rolled value of a stat
    pub fn mean(&self, stat: Stat) -> f64 {
        if self.trials == 0 {
            return f64::from(self.expected[stat]);
        }
        let index = Stat::ALL.iter().position(|s| *s == stat).unwrap_or(0);
        self.totals[index] as f64 / f64::from(self.trials)
    }

    /// Width of the rolled range
    pub fn spread(&self, stat: Stat) -> i32 {
        self.max[stat] - self.min[stat]
    }
}
