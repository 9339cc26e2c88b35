//! Child max-stat modifier combination

use crate::tables::ModifierTable;
use crate::types::{Stat, StatVector};
use serde::{Deserialize, Serialize};

/// Combined child modifiers: `parent1 + parent2 + child_base + bonus` for
/// every genetic stat. HP is always zero.
///
/// Names missing from their table contribute the zero vector.
pub fn compute_child_modifiers(
    parents: &ModifierTable,
    children: &ModifierTable,
    parent1: &str,
    parent2: &str,
    child: &str,
    bonus: i32,
) -> StatVector {
    combine(
        &parents.lookup(parent1),
        &parents.lookup(parent2),
        &children.lookup(child),
        bonus,
    )
}

/// Per-stat sum of three modifier records plus a flat bonus
pub fn combine(p1: &StatVector, p2: &StatVector, child: &StatVector, bonus: i32) -> StatVector {
    let mut result = StatVector::ZERO;
    for stat in Stat::GENETIC {
        result[stat] = p1[stat] + p2[stat] + child[stat] + bonus;
    }
    result
}

/// One input of the modifier sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub name: String,
    pub modifiers: StatVector,
    /// False when the name was missing from its table
    pub known: bool,
}

impl Contribution {
    fn from_table(table: &ModifierTable, name: &str) -> Self {
        match table.get(name) {
            Some(modifiers) => Contribution {
                name: name.to_string(),
                modifiers: *modifiers,
                known: true,
            },
            None => Contribution {
                name: name.to_string(),
                modifiers: StatVector::ZERO,
                known: false,
            },
        }
    }
}

/// Step-by-step view of a child modifier computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierBreakdown {
    pub parent1: Contribution,
    pub parent2: Contribution,
    pub child: Contribution,
    pub bonus: i32,
    pub total: StatVector,
}

impl ModifierBreakdown {
    /// Names that fell back to the zero vector
    pub fn unresolved(&self) -> Vec<&str> {
        [&self.parent1, &self.parent2, &self.child]
            .into_iter()
            .filter(|c| !c.known)
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.parent1.known && self.parent2.known && self.child.known
    }
}

/// Same result as [`compute_child_modifiers`], with each contribution kept
pub fn explain_child_modifiers(
    parents: &ModifierTable,
    children: &ModifierTable,
    parent1: &str,
    parent2: &str,
    child: &str,
    bonus: i32,
) -> ModifierBreakdown {
    let parent1 = Contribution::from_table(parents, parent1);
    let parent2 = Contribution::from_table(parents, parent2);
    let child = Contribution::from_table(children, child);
    let total = combine(&parent1.modifiers, &parent2.modifiers, &child.modifiers, bonus);

    let breakdown = ModifierBreakdown {
        parent1,
        parent2,
        child,
        bonus,
        total,
    };
    if !breakdown.is_fully_resolved() {
        tracing::debug!(unresolved = ?breakdown.unresolved(), "child modifiers use zero-vector defaults");
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (ModifierTable, ModifierTable) {
        let parents: ModifierTable = [
            ("Father", StatVector::genetic(2, 0, 1, 0, 0, -1, 0)),
            ("Mother", StatVector::genetic(1, 1, 0, 2, 0, 0, -2)),
            ("Neutral", StatVector::ZERO),
        ]
        .into_iter()
        .collect();
        let children: ModifierTable = [("Kid", StatVector::genetic(0, 0, 1, 0, 1, 0, 0))]
            .into_iter()
            .collect();
        (parents, children)
    }

    #[test]
    fn test_additive_formula() {
        let (parents, children) = tables();
        let mods = compute_child_modifiers(&parents, &children, "Father", "Mother", "Kid", 1);
        // str: 2 + 1 + 0 + 1
        assert_eq!(mods.str, 4);
        assert_eq!(mods.mag, 2);
        assert_eq!(mods.skl, 3);
        assert_eq!(mods.spd, 3);
        assert_eq!(mods.lck, 2);
        assert_eq!(mods.def, 0);
        assert_eq!(mods.res, -1);
        assert_eq!(mods.hp, 0);
    }

    #[test]
    fn test_unknown_names_are_zero_vectors() {
        let (parents, children) = tables();
        let unknown = compute_child_modifiers(&parents, &children, "Stranger", "Mother", "Kid", 1);
        let neutral = compute_child_modifiers(&parents, &children, "Neutral", "Mother", "Kid", 1);
        assert_eq!(unknown, neutral);
    }

    #[test]
    fn test_all_unknown_yields_bonus_only() {
        let empty = ModifierTable::new();
        let mods = compute_child_modifiers(&empty, &empty, "a", "b", "c", 1);
        for stat in Stat::GENETIC {
            assert_eq!(mods[stat], 1);
        }
        assert_eq!(mods.hp, 0);
    }

    #[test]
    fn test_parent_order_does_not_matter() {
        let (parents, children) = tables();
        let a = compute_child_modifiers(&parents, &children, "Father", "Mother", "Kid", 1);
        let b = compute_child_modifiers(&parents, &children, "Mother", "Father", "Kid", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_breakdown_matches_compute() {
        let (parents, children) = tables();
        let breakdown = explain_child_modifiers(&parents, &children, "Father", "Ghost", "Kid", 1);
        let direct = compute_child_modifiers(&parents, &children, "Father", "Ghost", "Kid", 1);
        assert_eq!(breakdown.total, direct);
        assert_eq!(breakdown.unresolved(), vec!["Ghost"]);
        assert!(!breakdown.is_fully_resolved());
        assert!(breakdown.parent1.known);
    }
}
