//! Core types: stat keys, stat vectors, growth rates and skills

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A unit stat key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hp,
    Str,
    Mag,
    Skl,
    Spd,
    Lck,
    Def,
    Res,
}

impl Stat {
    /// Every stat in display order (HP first)
    pub const ALL: [Stat; 8] = [
        Stat::Hp,
        Stat::Str,
        Stat::Mag,
        Stat::Skl,
        Stat::Spd,
        Stat::Lck,
        Stat::Def,
        Stat::Res,
    ];

    /// Stats that take part in genetic inheritance (HP has no modifier)
    pub const GENETIC: [Stat; 7] = [
        Stat::Str,
        Stat::Mag,
        Stat::Skl,
        Stat::Spd,
        Stat::Lck,
        Stat::Def,
        Stat::Res,
    ];

    /// Lowercase key used in data files
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Str => "str",
            Stat::Mag => "mag",
            Stat::Skl => "skl",
            Stat::Spd => "spd",
            Stat::Lck => "lck",
            Stat::Def => "def",
            Stat::Res => "res",
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Str => "Str",
            Stat::Mag => "Mag",
            Stat::Skl => "Skl",
            Stat::Spd => "Spd",
            Stat::Lck => "Lck",
            Stat::Def => "Def",
            Stat::Res => "Res",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One integer per stat.
///
/// Used for parent modifiers, child base modifiers, combined child modifiers
/// and simulated stats. Every key is optional when deserializing, so partial
/// records in data files read as zero for the missing stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatVector {
    pub hp: i32,
    pub str: i32,
    pub mag: i32,
    pub skl: i32,
    pub spd: i32,
    pub lck: i32,
    pub def: i32,
    pub res: i32,
}

impl StatVector {
    /// The all-zero vector
    pub const ZERO: StatVector = StatVector {
        hp: 0,
        str: 0,
        mag: 0,
        skl: 0,
        spd: 0,
        lck: 0,
        def: 0,
        res: 0,
    };

    /// Build a vector from the seven genetic stats, HP left at zero
    pub fn genetic(str: i32, mag: i32, skl: i32, spd: i32, lck: i32, def: i32, res: i32) -> Self {
        StatVector {
            hp: 0,
            str,
            mag,
            skl,
            spd,
            lck,
            def,
            res,
        }
    }

    /// Build a vector from a function over every stat
    pub fn from_fn(mut f: impl FnMut(Stat) -> i32) -> Self {
        let mut v = StatVector::ZERO;
        for stat in Stat::ALL {
            v[stat] = f(stat);
        }
        v
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self[stat]
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self[stat] = value;
    }

    /// Sum of the genetic stats
    pub fn genetic_total(&self) -> i32 {
        Stat::GENETIC.iter().map(|s| self[*s]).sum()
    }

    pub fn is_zero(&self) -> bool {
        *self == StatVector::ZERO
    }

    /// Iterate over `(stat, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.iter().map(move |s| (*s, self[*s]))
    }
}

impl Index<Stat> for StatVector {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        match stat {
            Stat::Hp => &self.hp,
            Stat::Str => &self.str,
            Stat::Mag => &self.mag,
            Stat::Skl => &self.skl,
            Stat::Spd => &self.spd,
            Stat::Lck => &self.lck,
            Stat::Def => &self.def,
            Stat::Res => &self.res,
        }
    }
}

impl IndexMut<Stat> for StatVector {
    fn index_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Str => &mut self.str,
            Stat::Mag => &mut self.mag,
            Stat::Skl => &mut self.skl,
            Stat::Spd => &mut self.spd,
            Stat::Lck => &mut self.lck,
            Stat::Def => &mut self.def,
            Stat::Res => &mut self.res,
        }
    }
}

/// Per-class growth rates in percent. Values above 100 are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthRates {
    pub hp: u32,
    pub str: u32,
    pub mag: u32,
    pub skl: u32,
    pub spd: u32,
    pub lck: u32,
    pub def: u32,
    pub res: u32,
}

impl GrowthRates {
    /// Same rate for every stat except HP
    pub const fn flat(hp: u32, others: u32) -> Self {
        GrowthRates {
            hp,
            str: others,
            mag: others,
            skl: others,
            spd: others,
            lck: others,
            def: others,
            res: others,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
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

    /// Sum of all rates, HP included
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// A class skill and the class level at which it unlocks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(rename = "level", alias = "lv", alias = "unlockLevel")]
    pub unlock_level: u32,
}

impl Skill {
    pub fn new(name: impl Into<String>, unlock_level: u32) -> Self {
        Skill {
            name: name.into(),
            unlock_level,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lv {})", self.name, self.unlock_level)
    }
}

/// Character gender, used to split the roster into fathers and mothers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Minimal parent record supplied by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
}

impl Parent {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Parent {
            name: name.into(),
            class: Some(class.into()),
        }
    }

    /// A parent with no assigned class
    pub fn unclassed(name: impl Into<String>) -> Self {
        Parent {
            name: name.into(),
            class: None,
        }
    }
}
