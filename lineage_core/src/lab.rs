//! Genetic lab: child previews from a father/mother selection

use crate::config::InheritanceConstants;
use crate::heuristic::BaseStatEstimator;
use crate::inheritance::{InheritanceCalculator, SimulatedStats};
use crate::skills::{predict_inherited_skill, resolve_inherited_skill};
use crate::tables::GameData;
use crate::types::{Parent, Skill, StatVector};
use serde::{Deserialize, Serialize};

/// What the user picked in the lab
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSelection {
    pub father: Option<Parent>,
    pub mother: Option<Parent>,
    /// Class the father is planned to be in when the child is born
    pub father_class: Option<String>,
    pub mother_class: Option<String>,
    /// Skill chosen by hand instead of the predicted one
    pub father_skill: Option<Skill>,
    pub mother_skill: Option<Skill>,
    pub level: u32,
}

impl LabSelection {
    pub fn new(father: Parent, mother: Parent, level: u32) -> Self {
        LabSelection {
            father: Some(father),
            mother: Some(mother),
            level,
            ..LabSelection::default()
        }
    }

    /// Replace the father and drop the overrides tied to the previous one
    pub fn set_father(&mut self, father: Parent) {
        self.father = Some(father);
        self.father_class = None;
        self.father_skill = None;
    }

    /// Replace the mother and drop the overrides tied to the previous one
    pub fn set_mother(&mut self, mother: Parent) {
        self.mother = Some(mother);
        self.mother_class = None;
        self.mother_skill = None;
    }
}

/// Computed child for a father/mother pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildPreview {
    pub name: String,
    pub class: String,
    /// Combined max-stat modifiers
    pub stats: StatVector,
    pub simulated: SimulatedStats,
    pub father_skill: Option<Skill>,
    pub mother_skill: Option<Skill>,
    /// Names that had no modifier entry and counted as zero
    #[serde(default)]
    pub unresolved: Vec<String>,
}

/// Child resolution and previews over a set of tables
pub struct GeneticLab<'a> {
    data: &'a GameData,
    constants: &'a InheritanceConstants,
    calculator: InheritanceCalculator<'a>,
}

impl<'a> GeneticLab<'a> {
    pub fn new(data: &'a GameData, constants: &'a InheritanceConstants) -> Self {
        GeneticLab {
            data,
            constants,
            calculator: InheritanceCalculator::new(data, constants),
        }
    }

    pub fn with_estimator(
        data: &'a GameData,
        constants: &'a InheritanceConstants,
        estimator: &'a dyn BaseStatEstimator,
    ) -> Self {
        GeneticLab {
            data,
            constants,
            calculator: InheritanceCalculator::with_estimator(data, constants, estimator),
        }
    }

    pub fn data(&self) -> &'a GameData {
        self.data
    }

    pub fn calculator(&self) -> &InheritanceCalculator<'a> {
        &self.calculator
    }

    /// Child of a pairing: the mother's mapping first, then the father's
    pub fn resolve_child(&self, father: &str, mother: &str) -> Option<&'a str> {
        self.data
            .parent_child
            .get(mother)
            .or_else(|| self.data.parent_child.get(father))
            .map(String::as_str)
    }

    /// Default class of a child, or the unknown-class label
    pub fn child_class(&self, child: &str) -> String {
        self.data
            .child(child)
            .map(|c| c.default_class.clone())
            .unwrap_or_else(|| self.constants.unknown_class.clone())
    }

    /// Preview the child of the selected pair.
    ///
    /// `None` until both parents are chosen and one of them maps to a child.
    /// The selection's level is clamped to the configured range here.
    pub fn preview(&self, selection: &LabSelection) -> Option<ChildPreview> {
        let father = selection.father.as_ref()?;
        let mother = selection.mother.as_ref()?;
        let child = self.resolve_child(&father.name, &mother.name)?;

        let breakdown = self
            .calculator
            .explain_child_modifiers(&father.name, &mother.name, child);
        let class = self.child_class(child);
        let level = self.constants.clamp_level(selection.level);
        let simulated = self
            .calculator
            .simulate_stats_at_level(&class, &breakdown.total, level);

        let father_skill = self.parent_skill(
            father,
            selection.father_class.as_deref(),
            selection.father_skill.as_ref(),
        );
        let mother_skill = self.parent_skill(
            mother,
            selection.mother_class.as_deref(),
            selection.mother_skill.as_ref(),
        );

        Some(ChildPreview {
            name: child.to_string(),
            class,
            stats: breakdown.total,
            simulated,
            father_skill,
            mother_skill,
            unresolved: breakdown.unresolved().into_iter().map(str::to_string).collect(),
        })
    }

    fn parent_skill(
        &self,
        parent: &Parent,
        class_override: Option<&str>,
        selected: Option<&Skill>,
    ) -> Option<Skill> {
        let effective = match class_override {
            Some(class) => Parent::new(parent.name.clone(), class),
            None => parent.clone(),
        };
        let predicted = predict_inherited_skill(&self.data.class_skills, &effective);
        resolve_inherited_skill(selected, predicted)
    }
}
