//! Smart pairing suggestions
//!
//! Suggests the next father/mother pair among characters not yet used in the
//! pairing log. Support rank weighs in first, random jitter breaks it up, and
//! the current selection is avoided so repeated suggestions move on.

use crate::lab::GeneticLab;
use crate::pairing::PairingLog;
use crate::types::Gender;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound (exclusive) of the random jitter added to every score
pub const JITTER: f64 = 100.0;

/// Support rank between two characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SupportRank {
    C,
    B,
    A,
    S,
}

impl SupportRank {
    pub fn score(self) -> f64 {
        match self {
            SupportRank::S => 100.0,
            SupportRank::A => 75.0,
            SupportRank::B => 50.0,
            SupportRank::C => 25.0,
        }
    }

    /// None -> C -> B -> A -> S -> None
    pub fn next(rank: Option<SupportRank>) -> Option<SupportRank> {
        match rank {
            None => Some(SupportRank::C),
            Some(SupportRank::C) => Some(SupportRank::B),
            Some(SupportRank::B) => Some(SupportRank::A),
            Some(SupportRank::A) => Some(SupportRank::S),
            Some(SupportRank::S) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupportRank::C => "C",
            SupportRank::B => "B",
            SupportRank::A => "A",
            SupportRank::S => "S",
        }
    }
}

/// Support ranks keyed by the two names sorted and joined with `-`
/// (`"Chrom-Sumia"`), the key format of the saved support list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportRanks {
    ranks: HashMap<String, SupportRank>,
}

impl SupportRanks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair_key(a: &str, b: &str) -> String {
        if a <= b {
            format!("{}-{}", a, b)
        } else {
            format!("{}-{}", b, a)
        }
    }

    pub fn get(&self, a: &str, b: &str) -> Option<SupportRank> {
        self.ranks.get(&Self::pair_key(a, b)).copied()
    }

    /// Set or clear the rank of a pair
    pub fn set(&mut self, a: &str, b: &str, rank: Option<SupportRank>) {
        let key = Self::pair_key(a, b);
        match rank {
            Some(rank) => {
                self.ranks.insert(key, rank);
            }
            None => {
                self.ranks.remove(&key);
            }
        }
    }

    /// Score of a pair before jitter; zero when unranked
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.get(a, b).map_or(0.0, SupportRank::score)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A suggested father/mother pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairSuggestion {
    pub father: String,
    pub mother: String,
    pub score: f64,
}

impl<'a> GeneticLab<'a> {
    /// Best pair among characters not yet in `log`.
    ///
    /// Each candidate scores its support rank plus jitter in `[0, JITTER)`.
    /// Pairs that share neither parent with `current` are preferred, then pairs
    /// that differ in at least one parent, then any pair. `None` when every
    /// father or every mother is already taken.
    pub fn suggest_pair<R: Rng + ?Sized>(
        &self,
        log: &PairingLog,
        ranks: &SupportRanks,
        current: (Option<&str>, Option<&str>),
        rng: &mut R,
    ) -> Option<PairSuggestion> {
        let married = log.married();
        let fathers: Vec<&str> = self
            .data()
            .roster_by_gender(Gender::Male)
            .into_iter()
            .map(|r| r.name.as_str())
            .filter(|name| !married.contains(name))
            .collect();
        let mothers: Vec<&str> = self
            .data()
            .roster_by_gender(Gender::Female)
            .into_iter()
            .map(|r| r.name.as_str())
            .filter(|name| !married.contains(name))
            .collect();

        let mut candidates = Vec::with_capacity(fathers.len() * mothers.len());
        for father in &fathers {
            for mother in &mothers {
                let score = ranks.score(father, mother) + rng.gen_range(0.0..JITTER);
                candidates.push(PairSuggestion {
                    father: father.to_string(),
                    mother: mother.to_string(),
                    score,
                });
            }
        }

        let (current_father, current_mother) = current;
        let both_differ = |p: &&PairSuggestion| {
            Some(p.father.as_str()) != current_father && Some(p.mother.as_str()) != current_mother
        };
        let one_differs = |p: &&PairSuggestion| {
            Some(p.father.as_str()) != current_father || Some(p.mother.as_str()) != current_mother
        };
        let best = |pool: Vec<&PairSuggestion>| {
            pool.into_iter()
                .max_by(|a, b| a.score.total_cmp(&b.score))
                .cloned()
        };

        let suggestion = best(candidates.iter().filter(both_differ).collect())
            .or_else(|| best(candidates.iter().filter(one_differs).collect()))
            .or_else(|| best(candidates.iter().collect()));

        match &suggestion {
            Some(pair) => tracing::debug!(
                father = %pair.father,
                mother = %pair.mother,
                score = pair.score,
                "suggested pair"
            ),
            None => tracing::debug!(
                fathers = fathers.len(),
                mothers = mothers.len(),
                "no unmarried pair left to suggest"
            ),
        }
        suggestion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_constants, default_game_data};
    use crate::pairing::{PairingExperiment, PairingStatus};
    use crate::types::StatVector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn married(father: &str, mother: &str, id: u64) -> PairingExperiment {
        PairingExperiment {
            id,
            family_id: format!("gen-lab-{}", id),
            parent1: father.to_string(),
            parent2: mother.to_string(),
            child: String::new(),
            stats: StatVector::ZERO,
            simulated_stats: None,
            simulated_class: None,
            simulated_level: None,
            father_skill: None,
            mother_skill: None,
            date: String::new(),
            status: PairingStatus::Realized,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        assert_eq!(SupportRanks::pair_key("Sumia", "Chrom"), "Chrom-Sumia");
        let mut ranks = SupportRanks::new();
        ranks.set("Sumia", "Chrom", Some(SupportRank::A));
        assert_eq!(ranks.get("Chrom", "Sumia"), Some(SupportRank::A));
        ranks.set("Chrom", "Sumia", None);
        assert!(ranks.is_empty());
    }

    #[test]
    fn test_rank_cycle() {
        let mut rank = None;
        let mut seen = Vec::new();
        for _ in 0..5 {
            rank = SupportRank::next(rank);
            seen.push(rank);
        }
        assert_eq!(
            seen,
            vec![
                Some(SupportRank::C),
                Some(SupportRank::B),
                Some(SupportRank::A),
                Some(SupportRank::S),
                None
            ]
        );
    }

    #[test]
    fn test_reads_saved_support_list() {
        let ranks = SupportRanks::from_json(r#"{"Chrom-Sumia": "S", "Frederick-Sully": "B"}"#).unwrap();
        assert_eq!(ranks.get("Sumia", "Chrom"), Some(SupportRank::S));
        assert_eq!(ranks.score("Sully", "Frederick"), 50.0);
        assert_eq!(ranks.score("Vaike", "Lissa"), 0.0);
    }

    #[test]
    fn test_married_characters_are_excluded() {
        let data = default_game_data();
        let constants = default_constants();
        let lab = GeneticLab::new(&data, &constants);
        let mut log = PairingLog::new();
        log.add(married("Chrom", "Sumia", 1));
        log.add(married("Frederick", "Cordelia", 2));

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pair = lab
                .suggest_pair(&log, &SupportRanks::new(), (None, None), &mut rng)
                .unwrap();
            assert!(!["Chrom", "Frederick"].contains(&pair.father.as_str()));
            assert!(!["Sumia", "Cordelia"].contains(&pair.mother.as_str()));
        }
    }

    #[test]
    fn test_s_rank_beats_unranked() {
        let data = default_game_data();
        let constants = default_constants();
        let lab = GeneticLab::new(&data, &constants);
        let mut ranks = SupportRanks::new();
        ranks.set("Gaius", "Maribelle", Some(SupportRank::S));

        // S scores at least 100, unranked pairs stay below 100
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pair = lab
                .suggest_pair(&PairingLog::new(), &ranks, (None, None), &mut rng)
                .unwrap();
            assert_eq!((pair.father.as_str(), pair.mother.as_str()), ("Gaius", "Maribelle"));
            assert!(pair.score >= 100.0);
        }
    }

    #[test]
    fn test_prefers_pair_differing_from_current() {
        let data = default_game_data();
        let constants = default_constants();
        let lab = GeneticLab::new(&data, &constants);
        let mut ranks = SupportRanks::new();
        ranks.set("Gaius", "Maribelle", Some(SupportRank::S));
        ranks.set("Gaius", "Lissa", Some(SupportRank::S));
        ranks.set("Henry", "Tharja", Some(SupportRank::A));

        let mut rng = StdRng::seed_from_u64(3);
        let pair = lab
            .suggest_pair(&PairingLog::new(), &ranks, (Some("Gaius"), Some("Maribelle")), &mut rng)
            .unwrap();
        assert_ne!(pair.father, "Gaius");
        assert_ne!(pair.mother, "Maribelle");
    }

    #[test]
    fn test_falls_back_to_one_parent_differing() {
        let data = default_game_data();
        let constants = default_constants();
        let lab = GeneticLab::new(&data, &constants);

        // Leave one father and two mothers unmarried
        let mut log = PairingLog::new();
        let fathers: Vec<String> = data
            .roster_by_gender(Gender::Male)
            .iter()
            .map(|r| r.name.clone())
            .collect();
        let mothers: Vec<String> = data
            .roster_by_gender(Gender::Female)
            .iter()
            .map(|r| r.name.clone())
            .collect();
        let mut id = 1;
        for father in fathers.iter().filter(|f| f.as_str() != "Chrom") {
            log.add(married(father, "", id));
            id += 1;
        }
        for mother in mothers.iter().filter(|m| !["Sumia", "Olivia"].contains(&m.as_str())) {
            log.add(married("", mother, id));
            id += 1;
        }

        let mut rng = StdRng::seed_from_u64(11);
        let pair = lab
            .suggest_pair(&log, &SupportRanks::new(), (Some("Chrom"), Some("Sumia")), &mut rng)
            .unwrap();
        assert_eq!(pair.father, "Chrom");
        assert_eq!(pair.mother, "Olivia");

        // Only the current pair left: it is suggested again
        log.add(married("", "Olivia", id));
        let pair = lab
            .suggest_pair(&log, &SupportRanks::new(), (Some("Chrom"), Some("Sumia")), &mut rng)
            .unwrap();
        assert_eq!((pair.father.as_str(), pair.mother.as_str()), ("Chrom", "Sumia"));
    }

    #[test]
    fn test_nothing_to_suggest_when_all_married() {
        let data = default_game_data();
        let constants = default_constants();
        let lab = GeneticLab::new(&data, &constants);
        let mut log = PairingLog::new();
        for (i, mother) in data.roster_by_gender(Gender::Female).iter().enumerate() {
            log.add(married("", &mother.name, i as u64 + 1));
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert!(lab
            .suggest_pair(&log, &SupportRanks::new(), (None, None), &mut rng)
            .is_none());
    }
}
