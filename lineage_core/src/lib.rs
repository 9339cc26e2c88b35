//! lineage_core - Inheritance simulation for second-generation units
//!
//! This library provides:
//! - Inheritance Calculator: child max-stat modifiers and level projections
//! - Skill Predictor: the skill a parent is expected to pass down
//! - GeneticLab: child resolution and previews for a father/mother pair
//! - PairingLog: saved pairing experiments
//! - Matchmaking: support-ranked pair suggestions among unmarried characters
//!
//! All computations are pure functions over read-only tables loaded from
//! TOML (see `config/`).

pub mod config;
pub mod heuristic;
pub mod inheritance;
pub mod lab;
pub mod matchmaking;
pub mod pairing;
pub mod prelude;
pub mod skills;
pub mod tables;
pub mod types;

// Re-export core types for convenience
pub use config::{default_constants, default_game_data, ConfigError, InheritanceConstants};
pub use heuristic::{ArchetypeHeuristic, ArchetypeRule, BaseStatEstimator, FixedBaseStats, StatPatch};
pub use inheritance::{InheritanceCalculator, ModifierBreakdown, SimulatedStats};
pub use lab::{ChildPreview, GeneticLab, LabSelection};
pub use matchmaking::{PairSuggestion, SupportRank, SupportRanks};
pub use pairing::{ExperimentKey, PairingExperiment, PairingLog, PairingStatus};
pub use skills::{available_classes, available_skills, predict_inherited_skill};
pub use tables::{
    ChildDefinition, ClassDefinition, ClassSkillTable, ClassTier, GameData, GrowthTable,
    ModifierTable, RosterEntry,
};
pub use types::{Gender, GrowthRates, Parent, Skill, Stat, StatVector};
