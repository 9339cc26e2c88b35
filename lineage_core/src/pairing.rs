//! Saved pairing experiments
//!
//! The JSON shape matches the pairing list the desktop app persists, so
//! exported files can be loaded back by either side. Records created outside
//! the lab (chat-added families) carry only a `familyId`, parents, child and
//! status; fields this crate does not model are kept and written back as-is.

use crate::lab::ChildPreview;
use crate::types::{Skill, StatVector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Support progress of a pairing, from a plan to a realized S rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PairingStatus {
    #[default]
    #[serde(alias = "planned", alias = "Planlandı")]
    Planned,
    #[serde(rename = "C Rank")]
    CRank,
    #[serde(rename = "B Rank")]
    BRank,
    #[serde(rename = "A Rank")]
    ARank,
    #[serde(rename = "S Rank", alias = "realized", alias = "Evli")]
    Realized,
}

impl PairingStatus {
    /// Realized pairings go back to planned, everything else becomes realized
    pub fn toggled(self) -> Self {
        match self {
            PairingStatus::Realized => PairingStatus::Planned,
            _ => PairingStatus::Realized,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PairingStatus::Planned => "Planned",
            PairingStatus::CRank => "C Rank",
            PairingStatus::BRank => "B Rank",
            PairingStatus::ARank => "A Rank",
            PairingStatus::Realized => "S Rank",
        }
    }
}

/// How an experiment is addressed: its numeric id, or its family id when the
/// record has none
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExperimentKey {
    Id(u64),
    Family(String),
}

impl fmt::Display for ExperimentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentKey::Id(id) => write!(f, "{}", id),
            ExperimentKey::Family(family_id) => f.write_str(family_id),
        }
    }
}

/// One saved father/mother/child experiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingExperiment {
    /// Zero when the record has no id
    #[serde(default, skip_serializing_if = "is_zero_id")]
    pub id: u64,
    #[serde(default)]
    pub family_id: String,
    #[serde(default)]
    pub parent1: String,
    #[serde(default)]
    pub parent2: String,
    #[serde(default)]
    pub child: String,
    /// Combined child modifiers
    #[serde(default)]
    pub stats: StatVector,
    /// Projected stats, flat like `stats`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_stats: Option<StatVector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_level: Option<u32>,
    #[serde(default)]
    pub father_skill: Option<Skill>,
    #[serde(default)]
    pub mother_skill: Option<Skill>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: PairingStatus,
    /// Fields written by other tools, round-tripped untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn is_zero_id(id: &u64) -> bool {
    *id == 0
}

impl PairingExperiment {
    /// Snapshot a preview as a planned experiment
    pub fn from_preview(
        id: u64,
        father: &str,
        mother: &str,
        preview: &ChildPreview,
        date: impl Into<String>,
    ) -> Self {
        PairingExperiment {
            id,
            family_id: format!("gen-lab-{}", id),
            parent1: father.to_string(),
            parent2: mother.to_string(),
            child: preview.name.clone(),
            stats: preview.stats,
            simulated_stats: Some(preview.simulated.stats),
            simulated_class: Some(preview.simulated.class_name.clone()),
            simulated_level: Some(preview.simulated.level),
            father_skill: preview.father_skill.clone(),
            mother_skill: preview.mother_skill.clone(),
            date: date.into(),
            status: PairingStatus::Planned,
            extra: serde_json::Map::new(),
        }
    }

    /// `id` when set, otherwise `familyId`
    pub fn key(&self) -> ExperimentKey {
        if self.id != 0 {
            ExperimentKey::Id(self.id)
        } else {
            ExperimentKey::Family(self.family_id.clone())
        }
    }
}

/// Saved experiments, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairingLog {
    experiments: Vec<PairingExperiment>,
}

impl PairingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn experiments(&self) -> &[PairingExperiment] {
        &self.experiments
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// An id greater than every id in the log
    pub fn next_id(&self) -> u64 {
        self.experiments.iter().map(|e| e.id).max().map_or(1, |id| id + 1)
    }

    /// Add an experiment at the front
    pub fn add(&mut self, experiment: PairingExperiment) {
        self.experiments.insert(0, experiment);
    }

    pub fn get(&self, key: &ExperimentKey) -> Option<&PairingExperiment> {
        self.experiments.iter().find(|e| e.key() == *key)
    }

    pub fn remove(&mut self, key: &ExperimentKey) -> Option<PairingExperiment> {
        let index = self.experiments.iter().position(|e| e.key() == *key)?;
        Some(self.experiments.remove(index))
    }

    /// Returns false when no experiment has this key
    pub fn set_status(&mut self, key: &ExperimentKey, status: PairingStatus) -> bool {
        match self.experiments.iter_mut().find(|e| e.key() == *key) {
            Some(experiment) => {
                experiment.status = status;
                true
            }
            None => false,
        }
    }

    /// Flip between planned and realized, returning the new status
    pub fn toggle_status(&mut self, key: &ExperimentKey) -> Option<PairingStatus> {
        let experiment = self.experiments.iter_mut().find(|e| e.key() == *key)?;
        experiment.status = experiment.status.toggled();
        Some(experiment.status)
    }

    pub fn planned(&self) -> impl Iterator<Item = &PairingExperiment> {
        self.experiments
            .iter()
            .filter(|e| e.status == PairingStatus::Planned)
    }

    pub fn realized(&self) -> impl Iterator<Item = &PairingExperiment> {
        self.experiments
            .iter()
            .filter(|e| e.status == PairingStatus::Realized)
    }

    /// Everyone who appears as a parent in any saved experiment
    pub fn married(&self) -> HashSet<&str> {
        self.experiments
            .iter()
            .flat_map(|e| [e.parent1.as_str(), e.parent2.as_str()])
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
