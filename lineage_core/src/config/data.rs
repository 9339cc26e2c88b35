//! Reference data loading (classes, characters, constants)

use super::{ConfigError, InheritanceConstants};
use crate::tables::{ChildDefinition, ClassDefinition, GameData, RosterEntry};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

const CLASSES_FILE: &str = "classes.toml";
const CHARACTERS_FILE: &str = "characters.toml";
const CONSTANTS_FILE: &str = "constants.toml";

/// Contents of `classes.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassesConfig {
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,
}

/// Contents of `characters.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharactersConfig {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
    #[serde(default)]
    pub children: Vec<ChildDefinition>,
    #[serde(default)]
    pub parent_child: HashMap<String, String>,
    #[serde(default)]
    pub class_trees: HashMap<String, Vec<String>>,
}

impl GameData {
    /// Load `classes.toml` and `characters.toml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<GameData, ConfigError> {
        load_game_data(dir)
    }
}

/// Load game data from a directory containing the data files
pub fn load_game_data(dir: &Path) -> Result<GameData, ConfigError> {
    let classes: ClassesConfig = super::load_toml(&dir.join(CLASSES_FILE))?;
    let characters: CharactersConfig = super::load_toml(&dir.join(CHARACTERS_FILE))?;
    let data = build(classes, characters)?;
    tracing::info!(
        dir = %dir.display(),
        classes = data.classes.len(),
        roster = data.roster.len(),
        children = data.children.len(),
        "loaded game data"
    );
    Ok(data)
}

/// Parse game data from the two TOML documents
pub fn parse_game_data(classes: &str, characters: &str) -> Result<GameData, ConfigError> {
    let classes: ClassesConfig = super::parse_toml(classes)?;
    let characters: CharactersConfig = super::parse_toml(characters)?;
    build(classes, characters)
}

/// Game data embedded in the crate
pub fn default_game_data() -> GameData {
    let classes = include_str!("../../config/classes.toml");
    let characters = include_str!("../../config/characters.toml");
    parse_game_data(classes, characters).unwrap_or_else(|e| {
        tracing::error!(error = %e, "embedded game data is invalid, using empty tables");
        GameData::default()
    })
}

/// Inheritance constants embedded in the crate
pub fn default_constants() -> InheritanceConstants {
    let toml = include_str!("../../config/constants.toml");
    super::parse_toml(toml).unwrap_or_else(|e: ConfigError| {
        tracing::error!(error = %e, "embedded constants are invalid, using built-in defaults");
        InheritanceConstants::default()
    })
}

impl InheritanceConstants {
    /// Load `constants.toml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<InheritanceConstants, ConfigError> {
        super::load_toml(&dir.join(CONSTANTS_FILE))
    }
}

fn build(classes: ClassesConfig, characters: CharactersConfig) -> Result<GameData, ConfigError> {
    validate(&classes, &characters)?;
    Ok(GameData::new(
        classes.classes,
        characters.roster,
        characters.children,
        characters.parent_child,
        characters.class_trees,
    ))
}

fn validate(classes: &ClassesConfig, characters: &CharactersConfig) -> Result<(), ConfigError> {
    let mut class_names = HashSet::new();
    for class in &classes.classes {
        if class.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "class with empty name".to_string(),
            ));
        }
        if !class_names.insert(class.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate class: {}",
                class.name
            )));
        }
        if let Some(skill) = class.skills.iter().find(|s| s.unlock_level == 0) {
            return Err(ConfigError::ValidationError(format!(
                "skill {} of class {} unlocks at level 0",
                skill.name, class.name
            )));
        }
    }

    let mut character_names = HashSet::new();
    for entry in &characters.roster {
        if !character_names.insert(entry.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate character: {}",
                entry.name
            )));
        }
        if !class_names.contains(entry.class.as_str()) {
            tracing::warn!(character = %entry.name, class = %entry.class, "roster class not in class table");
        }
    }

    let mut child_names = HashSet::new();
    for child in &characters.children {
        if !child_names.insert(child.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate child: {}",
                child.name
            )));
        }
    }

    for (parent, child) in &characters.parent_child {
        if !child_names.contains(child.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "parent {} maps to undefined child {}",
                parent, child
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    const CLASSES: &str = r#"
[[classes]]
name = "Lord"
tier = "base"
promotes = ["Great Lord"]
skills = [{ name = "Dual Strike+", level = 1 }, { name = "Charm", level = 10 }]
growth = { hp = 90, str = 60, mag = 20, skl = 60, spd = 60, lck = 70, def = 50, res = 40 }

[[classes]]
name = "Bride"
tier = "dlc"
skills = [{ name = "Rally Heart", level = 1 }, { name = "Bond", level = 15 }]
"#;

    const CHARACTERS: &str = r#"
[[roster]]
name = "Chrom"
gender = "male"
class = "Lord"
modifiers = { str = 1, skl = 1, spd = 1, lck = 1, def = -1, res = -2 }

[[children]]
name = "Lucina"
default_class = "Lord"
modifiers = { str = 1, skl = 1, spd = 1, res = -1 }

[parent_child]
"Chrom" = "Lucina"

[class_trees]
"Chrom" = ["Lord", "Great Lord"]
"#;

    #[test]
    fn test_parse_game_data() {
        let data = parse_game_data(CLASSES, CHARACTERS).unwrap();
        assert_eq!(data.classes.len(), 2);
        assert_eq!(data.roster[0].gender, Gender::Male);
        assert_eq!(data.parent_modifiers.lookup("Chrom").res, -2);
        assert_eq!(data.child_modifiers.lookup("Lucina").str, 1);
        assert!(data.growth_rates.get("Bride").is_none());
        assert_eq!(data.parent_child["Chrom"], "Lucina");
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let classes = r#"
[[classes]]
name = "Lord"

[[classes]]
name = "Lord"
"#;
        let err = parse_game_data(classes, "").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_child_target_rejected() {
        let characters = r#"
[parent_child]
"Chrom" = "Nobody"
"#;
        let err = parse_game_data(CLASSES, characters).unwrap_err();
        assert!(err.to_string().contains("Nobody"));
    }

    #[test]
    fn test_zero_unlock_level_rejected() {
        let classes = r#"
[[classes]]
name = "Lord"
skills = [{ name = "Charm", level = 0 }]
"#;
        assert!(parse_game_data(classes, "").is_err());
    }

    #[test]
    fn test_negative_growth_is_a_parse_error() {
        let classes = r#"
[[classes]]
name = "Lord"
growth = { str = -5 }
"#;
        let err = parse_game_data(classes, "").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_default_game_data_loads() {
        let data = default_game_data();
        assert!(data.classes.len() >= 40);
        assert!(data.class("Great Lord").is_some());
        assert!(data.character("Chrom").is_some());
        assert_eq!(data.child("Lucina").map(|c| c.default_class.as_str()), Some("Lord"));
        assert!(!data.parent_modifiers.is_empty());
        assert!(!data.child_modifiers.is_empty());
    }

    #[test]
    fn test_default_constants_match_builtin() {
        assert_eq!(default_constants(), InheritanceConstants::default());
    }

    #[test]
    fn test_load_missing_dir_is_io_error() {
        let err = load_game_data(Path::new("/nonexistent/lineage/config")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_load_crate_config_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let data = GameData::load_from_dir(&dir).unwrap();
        assert_eq!(data.classes.len(), default_game_data().classes.len());
        let constants = InheritanceConstants::load_from_dir(&dir).unwrap();
        assert_eq!(constants.universal_bonus, 1);
    }
}
