// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Unlock Conditions

//! Unlock gates as data. Buildings, upgrades, contracts, achievements and
//! story chains all describe their requirements with the same condition
//! tree, and one interpreter walks it. Evaluation is total: an id that does
//! not resolve against the state or catalog simply reads as zero/false, so
//! a malformed gate can never take the engine down.

use serde::{Serialize, Deserialize};

use crate::catalog::Catalog;
use crate::types::{GameState, Stage};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    Always,

    // Currency and counter thresholds
    LettersAtLeast { amount: f64 },
    LifetimeLettersAtLeast { amount: f64 },
    CreditsAtLeast { amount: f64 },
    StampsAtLeast { amount: u64 },
    LifetimeStampsAtLeast { amount: u64 },
    ShardsAtLeast { amount: u64 },
    ClicksAtLeast { amount: u64 },
    PrestigesAtLeast { amount: u32 },

    // Owned content
    BuildingCountAtLeast { building: String, count: u32 },
    EveryBuildingAtLeast { count: u32 },
    ResearchCompleted { research: String },
    ResearchCountAtLeast { count: usize },
    AllResearchCompleted,
    UpgradeCountAtLeast { count: usize },
    AllUpgradesPurchased,
    AnyMetaUpgradeMaxed,
    AllMetaUpgradesMaxed,

    // Progression
    StageUnlocked { stage: Stage },
    StageIs { stage: Stage },
    StoryChainCompleted { chain: String },
    StoryChainsCompletedAtLeast { count: usize },

    // Wall clock, relative to the start of the current run
    PlaytimeAtLeastHours { hours: f64 },
    StageReachedWithinMinutes { stage: Stage, minutes: f64 },

    // Combinators
    All { conditions: Vec<Condition> },
    Any { conditions: Vec<Condition> },
}

impl Condition {
    pub fn eval(&self, state: &GameState, catalog: &Catalog, now: f64) -> bool {
        match self {
            Self::Always => true,

            Self::LettersAtLeast { amount } => state.letters_delivered >= *amount,
            Self::LifetimeLettersAtLeast { amount } => {
                state.lifetime_letters_delivered >= *amount
            }
            Self::CreditsAtLeast { amount } => state.credits >= *amount,
            Self::StampsAtLeast { amount } => state.stamps >= *amount,
            Self::LifetimeStampsAtLeast { amount } => state.lifetime_stamps >= *amount,
            Self::ShardsAtLeast { amount } => state.shards >= *amount,
            Self::ClicksAtLeast { amount } => state.click_count >= *amount,
            Self::PrestigesAtLeast { amount } => state.total_prestiges >= *amount,

            Self::BuildingCountAtLeast { building, count } => {
                state.building_count(building) >= *count
            }
            Self::EveryBuildingAtLeast { count } => catalog
                .buildings
                .iter()
                .all(|b| state.building_count(&b.id) >= *count),
            Self::ResearchCompleted { research } => state.has_research(research),
            Self::ResearchCountAtLeast { count } => {
                state.completed_research.len() >= *count
            }
            Self::AllResearchCompleted => {
                state.completed_research.len() >= catalog.research.len()
            }
            Self::UpgradeCountAtLeast { count } => state.upgrades.len() >= *count,
            Self::AllUpgradesPurchased => state.upgrades.len() >= catalog.upgrades.len(),
            Self::AnyMetaUpgradeMaxed => catalog
                .meta_upgrades
                .iter()
                .any(|m| state.meta_level(&m.id) >= m.max_level),
            Self::AllMetaUpgradesMaxed => catalog
                .meta_upgrades
                .iter()
                .all(|m| state.meta_level(&m.id) >= m.max_level),

            Self::StageUnlocked { stage } => state.stage_unlocked(*stage),
            Self::StageIs { stage } => state.current_stage == *stage,
            Self::StoryChainCompleted { chain } => state
                .story_progress
                .get(chain)
                .map(|p| p.completed)
                .unwrap_or(false),
            Self::StoryChainsCompletedAtLeast { count } => {
                state.story_chains_completed() >= *count
            }

            Self::PlaytimeAtLeastHours { hours } => {
                (now - state.start_time) / 3600.0 >= *hours
            }
            Self::StageReachedWithinMinutes { stage, minutes } => {
                state.stage_unlocked(*stage) && (now - state.start_time) / 60.0 < *minutes
            }

            Self::All { conditions } => {
                conditions.iter().all(|c| c.eval(state, catalog, now))
            }
            Self::Any { conditions } => {
                conditions.iter().any(|c| c.eval(state, catalog, now))
            }
        }
    }

    // Shorthand constructors for the shipped catalog tables.

    pub fn letters(amount: f64) -> Self {
        Self::LettersAtLeast { amount }
    }

    pub fn stamps(amount: u64) -> Self {
        Self::StampsAtLeast { amount }
    }

    pub fn shards(amount: u64) -> Self {
        Self::ShardsAtLeast { amount }
    }

    pub fn clicks(amount: u64) -> Self {
        Self::ClicksAtLeast { amount }
    }

    pub fn prestiges(amount: u32) -> Self {
        Self::PrestigesAtLeast { amount }
    }

    pub fn building(building: &str, count: u32) -> Self {
        Self::BuildingCountAtLeast { building: building.into(), count }
    }

    pub fn research(research: &str) -> Self {
        Self::ResearchCompleted { research: research.into() }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Self::All { conditions }
    }
}

impl Default for Condition {
    fn default() -> Self { Condition::Always }
}
