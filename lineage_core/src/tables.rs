//! Read-only reference tables
//!
//! All tables are built once (usually from the TOML files in `config/`) and
//! never mutated afterwards, so a `GameData` can be shared freely between
//! threads.

use crate::types::{Gender, GrowthRates, Skill, StatVector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name → stat modifier lookup with a zero-vector default.
///
/// Used for both parent modifiers and child base modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierTable {
    entries: HashMap<String, StatVector>,
}

impl ModifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, modifiers: StatVector) {
        self.entries.insert(name.into(), modifiers);
    }

    /// Exact lookup, `None` when the name is not registered
    pub fn get(&self, name: &str) -> Option<&StatVector> {
        self.entries.get(name)
    }

    /// Lookup that degrades to the zero vector for unknown names
    pub fn lookup(&self, name: &str) -> StatVector {
        match self.entries.get(name) {
            Some(v) => *v,
            None => {
                tracing::debug!(name, "no modifier entry, using zero vector");
                StatVector::ZERO
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, StatVector)> for ModifierTable {
    fn from_iter<I: IntoIterator<Item = (S, StatVector)>>(iter: I) -> Self {
        ModifierTable {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Class → growth rates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthTable {
    entries: HashMap<String, GrowthRates>,
}

impl GrowthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class_name: impl Into<String>, rates: GrowthRates) {
        self.entries.insert(class_name.into(), rates);
    }

    pub fn get(&self, class_name: &str) -> Option<&GrowthRates> {
        self.entries.get(class_name)
    }

    /// Growth rates for a class, or `fallback` when the class is unknown
    pub fn resolve(&self, class_name: &str, fallback: GrowthRates) -> GrowthRates {
        match self.entries.get(class_name) {
            Some(rates) => *rates,
            None => {
                tracing::debug!(class_name, "no growth rates for class, using fallback profile");
                fallback
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, GrowthRates)> for GrowthTable {
    fn from_iter<I: IntoIterator<Item = (S, GrowthRates)>>(iter: I) -> Self {
        GrowthTable {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Class → skills the class teaches.
///
/// The list order is kept as given, but nothing relies on it being sorted by
/// unlock level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSkillTable {
    entries: HashMap<String, Vec<Skill>>,
}

impl ClassSkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class_name: impl Into<String>, skills: Vec<Skill>) {
        self.entries.insert(class_name.into(), skills);
    }

    /// Skills for a class; empty for unknown classes
    pub fn skills(&self, class_name: &str) -> &[Skill] {
        self.entries
            .get(class_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Skill>)> for ClassSkillTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Skill>)>>(iter: I) -> Self {
        ClassSkillTable {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Class tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassTier {
    #[default]
    Base,
    Promoted,
    Special,
    Dlc,
}

impl ClassTier {
    pub fn name(&self) -> &'static str {
        match self {
            ClassTier::Base => "Base",
            ClassTier::Promoted => "Promoted",
            ClassTier::Special => "Special",
            ClassTier::Dlc => "DLC",
        }
    }
}

/// One class entry as written in `classes.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    #[serde(default)]
    pub tier: ClassTier,
    #[serde(default)]
    pub promotes: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Classes without published growth rates fall back to the flat profile
    #[serde(default)]
    pub growth: Option<GrowthRates>,
}

/// A playable first-generation character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub gender: Gender,
    pub class: String,
    /// Max-stat modifiers passed to children; absent means zero contribution
    #[serde(default)]
    pub modifiers: Option<StatVector>,
}

/// A second-generation child unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDefinition {
    pub name: String,
    pub default_class: String,
    #[serde(default)]
    pub modifiers: Option<StatVector>,
}

/// Every reference table the inheritance engine reads
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub classes: Vec<ClassDefinition>,
    pub roster: Vec<RosterEntry>,
    pub children: Vec<ChildDefinition>,
    pub parent_modifiers: ModifierTable,
    pub child_modifiers: ModifierTable,
    pub growth_rates: GrowthTable,
    pub class_skills: ClassSkillTable,
    /// Parent name → child name
    pub parent_child: HashMap<String, String>,
    /// Character name → classes the character can reclass into
    pub class_trees: HashMap<String, Vec<String>>,
}

impl GameData {
    /// Build the lookup tables from class and character definitions
    pub fn new(
        classes: Vec<ClassDefinition>,
        roster: Vec<RosterEntry>,
        children: Vec<ChildDefinition>,
        parent_child: HashMap<String, String>,
        class_trees: HashMap<String, Vec<String>>,
    ) -> Self {
        let growth_rates = classes
            .iter()
            .filter_map(|c| c.growth.map(|g| (c.name.clone(), g)))
            .collect();
        let class_skills = classes
            .iter()
            .map(|c| (c.name.clone(), c.skills.clone()))
            .collect();
        let parent_modifiers = roster
            .iter()
            .filter_map(|r| r.modifiers.map(|m| (r.name.clone(), m)))
            .collect();
        let child_modifiers = children
            .iter()
            .filter_map(|c| c.modifiers.map(|m| (c.name.clone(), m)))
            .collect();

        GameData {
            classes,
            roster,
            children,
            parent_modifiers,
            child_modifiers,
            growth_rates,
            class_skills,
            parent_child,
            class_trees,
        }
    }

    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn character(&self, name: &str) -> Option<&RosterEntry> {
        self.roster.iter().find(|r| r.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&ChildDefinition> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Roster entries of one gender, in file order
    pub fn roster_by_gender(&self, gender: Gender) -> Vec<&RosterEntry> {
        self.roster.iter().filter(|r| r.gender == gender).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_lookup_defaults_to_zero() {
        let table: ModifierTable = [("Chrom", StatVector::genetic(1, 0, 1, 1, 1, -1, -2))]
            .into_iter()
            .collect();
        assert_eq!(table.lookup("Chrom").str, 1);
        assert_eq!(table.lookup("Nobody"), StatVector::ZERO);
        assert!(table.get("Nobody").is_none());
    }

    #[test]
    fn test_growth_resolve_fallback() {
        let table = GrowthTable::new();
        let fallback = GrowthRates::flat(50, 30);
        assert_eq!(table.resolve("Lord", fallback), fallback);
    }

    #[test]
    fn test_unknown_class_has_no_skills() {
        let table = ClassSkillTable::new();
        assert!(table.skills("NotARealClass").is_empty());
    }

    #[test]
    fn test_game_data_builds_lookup_tables() {
        let classes = vec![
            ClassDefinition {
                name: "Lord".to_string(),
                tier: ClassTier::Base,
                promotes: vec!["Great Lord".to_string()],
                skills: vec![Skill::new("Dual Strike+", 1), Skill::new("Charm", 10)],
                growth: Some(GrowthRates::flat(90, 60)),
            },
            ClassDefinition {
                name: "Bride".to_string(),
                tier: ClassTier::Dlc,
                promotes: vec![],
                skills: vec![],
                growth: None,
            },
        ];
        let roster = vec![RosterEntry {
            name: "Chrom".to_string(),
            gender: Gender::Male,
            class: "Lord".to_string(),
            modifiers: Some(StatVector::genetic(1, 0, 1, 1, 1, -1, -1)),
        }];
        let data = GameData::new(classes, roster, vec![], HashMap::new(), HashMap::new());

        assert_eq!(data.growth_rates.len(), 1);
        assert!(data.growth_rates.get("Bride").is_none());
        assert_eq!(data.class_skills.skills("Lord").len(), 2);
        assert!(data.class_skills.contains("Bride"));
        assert!(data.parent_modifiers.contains("Chrom"));
        assert_eq!(data.roster_by_gender(Gender::Female).len(), 0);
    }
}
