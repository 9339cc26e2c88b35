//! Approximate level-1 base stats for a hypothetical child
//!
//! A simulated child has no canonical base stats, so the growth simulation
//! starts from a coarse per-archetype estimate picked by substring matching on
//! the class name. This is an approximation and is kept separate from the
//! official per-character tables.

use crate::types::{Stat, StatVector};
use serde::{Deserialize, Serialize};

/// Anything that can estimate level-1 base stats for a class
pub trait BaseStatEstimator: Send + Sync {
    /// Estimated base stats (HP included) for the given class name
    fn estimate(&self, class_name: &str) -> StatVector;
}

/// Partial stat record: only the `Some` fields are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatPatch {
    pub hp: Option<i32>,
    pub str: Option<i32>,
    pub mag: Option<i32>,
    pub skl: Option<i32>,
    pub spd: Option<i32>,
    pub lck: Option<i32>,
    pub def: Option<i32>,
    pub res: Option<i32>,
}

impl StatPatch {
    pub fn get(&self, stat: Stat) -> Option<i32> {
        match stat {
            Stat::Hp => self.hp,
            Stat::Str => self.str,
            Stat::Mag => self.mag,
            Stat::Skl => self.skl,
            Stat::Spd => self.spd,
            Stat::Lck => self.lck,
            Stat::Def => self.def,
            Stat::Res => self.res,
        }
    }

    /// Overwrite the patched stats of `target`
    pub fn apply(&self, target: &mut StatVector) {
        for stat in Stat::ALL {
            if let Some(value) = self.get(stat) {
                target[stat] = value;
            }
        }
    }
}

/// Archetype rule: applies when the class name contains any pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeRule {
    pub patterns: Vec<String>,
    pub overrides: StatPatch,
}

impl ArchetypeRule {
    pub fn matches(&self, class_name: &str) -> bool {
        self.patterns.iter().any(|p| class_name.contains(p.as_str()))
    }
}

/// Substring-matched archetype base stats.
///
/// Rules are applied in order on top of `default`; every matching rule is
/// applied, so later rules win on overlapping stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeHeuristic {
    #[serde(default = "default_base_stats")]
    pub default: StatVector,
    #[serde(default = "default_archetypes")]
    pub archetypes: Vec<ArchetypeRule>,
}

impl Default for ArchetypeHeuristic {
    fn default() -> Self {
        ArchetypeHeuristic {
            default: default_base_stats(),
            archetypes: default_archetypes(),
        }
    }
}

impl BaseStatEstimator for ArchetypeHeuristic {
    fn estimate(&self, class_name: &str) -> StatVector {
        let mut stats = self.default;
        for rule in &self.archetypes {
            if rule.matches(class_name) {
                rule.overrides.apply(&mut stats);
            }
        }
        stats
    }
}

fn default_base_stats() -> StatVector {
    StatVector {
        hp: 18,
        str: 6,
        mag: 2,
        skl: 5,
        spd: 6,
        lck: 5,
        def: 6,
        res: 2,
    }
}

fn default_archetypes() -> Vec<ArchetypeRule> {
    vec![
        // Magic-leaning casters and healers
        ArchetypeRule {
            patterns: vec!["Mage".to_string(), "Cleric".to_string()],
            overrides: StatPatch {
                str: Some(2),
                mag: Some(6),
                res: Some(5),
                ..StatPatch::default()
            },
        },
        // Armored
        ArchetypeRule {
            patterns: vec!["Knight".to_string()],
            overrides: StatPatch {
                def: Some(9),
                spd: Some(3),
                ..StatPatch::default()
            },
        },
    ]
}

/// Same base stats for every class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBaseStats(pub StatVector);

impl BaseStatEstimator for FixedBaseStats {
    fn estimate(&self, _class_name: &str) -> StatVector {
        self.0
    }
}
