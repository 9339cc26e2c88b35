//! Prelude module for convenient imports
//!
//! ```rust
//! use lineage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Gender, GrowthRates, Parent, Skill, Stat, StatVector};

// Tables
pub use crate::tables::{ClassDefinition, GameData, RosterEntry};

// Inheritance
pub use crate::inheritance::{InheritanceCalculator, SimulatedStats};
pub use crate::skills::predict_inherited_skill;

// Lab
pub use crate::lab::{ChildPreview, GeneticLab, LabSelection};
pub use crate::matchmaking::{SupportRank, SupportRanks};
pub use crate::pairing::{ExperimentKey, PairingExperiment, PairingLog, PairingStatus};

// Config
pub use crate::config::{default_constants, default_game_data, InheritanceConstants};
