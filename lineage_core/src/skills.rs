//! Skill Predictor
//!
//! Predicts the skill a parent passes to a child as the highest-unlock-level
//! skill of the parent's current class. This is a static heuristic: it ignores
//! the parent's level and the skills the parent actually has equipped.

use crate::tables::{ClassDefinition, ClassSkillTable, GameData};
use crate::types::{Parent, Skill};

/// Highest-unlock-level skill of a class.
///
/// Ties on unlock level go to the later entry in the list. `None` for unknown
/// classes and classes without skills.
pub fn best_class_skill(classes: &ClassSkillTable, class_name: &str) -> Option<Skill> {
    classes
        .skills(class_name)
        .iter()
        .max_by_key(|s| s.unlock_level)
        .cloned()
}

/// Skill a parent is predicted to pass down, from the parent's current class
pub fn predict_inherited_skill(classes: &ClassSkillTable, parent: &Parent) -> Option<Skill> {
    let class_name = parent.class.as_deref()?;
    let skill = best_class_skill(classes, class_name);
    if skill.is_none() {
        tracing::debug!(parent = %parent.name, class_name, "no skills for class, nothing to predict");
    }
    skill
}

/// Skills a parent can pass down in its current class, or in `class_override`
/// when one is given
pub fn available_skills<'a>(
    classes: &'a ClassSkillTable,
    parent: &Parent,
    class_override: Option<&str>,
) -> &'a [Skill] {
    match class_override.or(parent.class.as_deref()) {
        Some(class_name) => classes.skills(class_name),
        None => &[],
    }
}

/// Classes a character can reach, limited to classes present in the table
pub fn available_classes<'a>(data: &'a GameData, character: &str) -> Vec<&'a ClassDefinition> {
    let Some(tree) = data.class_trees.get(character) else {
        return Vec::new();
    };
    data.classes
        .iter()
        .filter(|c| tree.iter().any(|name| *name == c.name))
        .collect()
}

/// A user-selected skill wins over the prediction
pub fn resolve_inherited_skill(selected: Option<&Skill>, predicted: Option<Skill>) -> Option<Skill> {
    selected.cloned().or(predicted)
}
