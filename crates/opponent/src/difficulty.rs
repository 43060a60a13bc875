//! Difficulty tiers and the limits and engine each one maps to.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chain_core::{Engine, SearchLimits};
use frequency_engine::FrequencyEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use tactical_engine::TacticalEngine;

/// How hard the opponent plays.
///
/// The first three tiers are one-ply policies: most common phrase, uniform
/// random, most obscure phrase. The insane tiers run the tactical engine
/// under increasing depth caps and time budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    InsaneMin,
    InsaneMid,
    InsaneMax,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "insane-min" => Ok(Self::InsaneMin),
            "insane-mid" => Ok(Self::InsaneMid),
            "insane-max" => Ok(Self::InsaneMax),
            other => Err(UnknownDifficulty(other.to_owned())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::InsaneMin => "insane-min",
            Self::InsaneMid => "insane-mid",
            Self::InsaneMax => "insane-max",
        };
        f.write_str(name)
    }
}

impl Difficulty {
    /// Search limits for this tier. The one-ply tiers ignore them.
    pub fn limits(self) -> SearchLimits {
        match self {
            Self::Easy | Self::Medium | Self::Hard => SearchLimits::depth(1),
            Self::InsaneMin => SearchLimits::timed(6, Duration::from_millis(1500)),
            Self::InsaneMid => SearchLimits::timed(8, Duration::from_millis(3000)),
            Self::InsaneMax => SearchLimits::timed(12, Duration::from_millis(5000)),
        }
    }

    /// Fresh engine for this tier.
    pub fn engine(self) -> Box<dyn Engine> {
        match self {
            Self::Easy => Box::new(FrequencyEngine::common()),
            Self::Medium => Box::new(RandomEngine::new()),
            Self::Hard => Box::new(FrequencyEngine::obscure()),
            Self::InsaneMin | Self::InsaneMid | Self::InsaneMax => Box::new(TacticalEngine::new()),
        }
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
