// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Type Definitions

use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;

use crate::catalog::Catalog;

/// Save document schema version. Bump when a field changes meaning,
/// not when one is merely added (added fields deserialize via defaults).
pub const SAVE_VERSION: u32 = 1;

// ─── Stages ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Local = 0,
    Solar = 1,
    Interstellar = 2,
    Galactic = 3,
    Multiverse = 4,
}

impl Default for Stage {
    fn default() -> Self { Stage::Local }
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Local,
        Stage::Solar,
        Stage::Interstellar,
        Stage::Galactic,
        Stage::Multiverse,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Local => "Local Planet",
            Self::Solar => "Solar System",
            Self::Interstellar => "Interstellar",
            Self::Galactic => "Galactic",
            Self::Multiverse => "Multiverse",
        }
    }

    pub fn from_id(id: &str) -> Option<Stage> {
        match id {
            "Local" => Some(Self::Local),
            "Solar" => Some(Self::Solar),
            "Interstellar" => Some(Self::Interstellar),
            "Galactic" => Some(Self::Galactic),
            "Multiverse" => Some(Self::Multiverse),
            _ => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ─── Contract Run State ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContractStatus {
    Active,
    Completed,
    Failed,
}

impl ContractStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Counters for the contract currently underway. All run-scoped and zeroed
/// at activation, so progress from before the player signed is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContractProgress {
    pub delivered_this_run: f64,
    pub max_lps_this_run: f64,
    pub clicks_this_run: u64,
    pub started_at: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveContract {
    pub contract_id: String,
    pub status: ContractStatus,
    pub progress: ContractProgress,
}

// ─── Story Run State ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoryChainProgress {
    pub current_step: u32,
    pub completed: bool,
    pub times_completed: u32,
}

// ─── Route Allocations ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteAllocation {
    pub route_id: String,
    /// Percentage points, 0..=100.
    pub allocation: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageRoutes {
    pub allocations: Vec<RouteAllocation>,
}

// ─── Game State ──────────────────────────────────────────────────────────────

/// The whole progression state. Mutators take this by reference and return a
/// fresh value; nothing in the engine holds hidden state beyond it.
///
/// Missing fields in an older save document fall back to `Default`, which is
/// how the schema grows without migrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameState {
    pub version: u32,

    // Currencies
    pub credits: f64,
    pub total_credits_earned: f64,
    pub letters_delivered: f64,
    pub lifetime_letters_delivered: f64,
    pub stamps: u64,
    pub lifetime_stamps: u64,
    pub shards: u64,
    pub research_points: f64,

    // Run bookkeeping
    pub click_count: u64,
    pub start_time: f64,
    pub total_prestiges: u32,
    pub last_prestige_time: f64,

    // Owned content
    pub buildings: HashMap<String, u32>,
    pub upgrades: Vec<String>,
    pub meta_upgrades: HashMap<String, u32>,
    pub completed_research: Vec<String>,

    // Progression gates
    pub unlocked_stages: Vec<Stage>,
    pub current_stage: Stage,
    pub unlocked_achievements: Vec<String>,

    // Contracts
    pub contracts_unlocked: bool,
    pub active_contract: Option<ActiveContract>,
    pub completed_contracts: Vec<String>,
    pub failed_contracts: Vec<String>,
    pub total_contracts_completed: u32,

    // Story mail
    pub story_progress: HashMap<String, StoryChainProgress>,
    pub last_story_event_at: f64,
    pub story_chance_weight: f64,

    // Delivery routes
    pub routes_unlocked: bool,
    pub routes: HashMap<Stage, StageRoutes>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            version: SAVE_VERSION,
            credits: 0.0,
            total_credits_earned: 0.0,
            letters_delivered: 0.0,
            lifetime_letters_delivered: 0.0,
            stamps: 0,
            lifetime_stamps: 0,
            shards: 0,
            research_points: 0.0,
            click_count: 0,
            start_time: 0.0,
            total_prestiges: 0,
            last_prestige_time: 0.0,
            buildings: HashMap::new(),
            upgrades: Vec::new(),
            meta_upgrades: HashMap::new(),
            completed_research: Vec::new(),
            unlocked_stages: vec![Stage::Local],
            current_stage: Stage::Local,
            unlocked_achievements: Vec::new(),
            contracts_unlocked: false,
            active_contract: None,
            completed_contracts: Vec::new(),
            failed_contracts: Vec::new(),
            total_contracts_completed: 0,
            story_progress: HashMap::new(),
            last_story_event_at: 0.0,
            story_chance_weight: crate::story::STORY_CHANCE_WEIGHT,
            routes_unlocked: false,
            routes: HashMap::new(),
        }
    }
}

impl GameState {
    /// Fresh game at wall-clock `now`, with each stage's delivery budget
    /// split evenly across its routes.
    pub fn new(catalog: &Catalog, now: f64) -> Self {
        GameState {
            start_time: now,
            last_prestige_time: now,
            routes: crate::routes::default_allocations(catalog),
            ..Default::default()
        }
    }

    pub fn building_count(&self, id: &str) -> u32 {
        self.buildings.get(id).copied().unwrap_or(0)
    }

    pub fn total_buildings(&self) -> u32 {
        self.buildings.values().sum()
    }

    pub fn meta_level(&self, id: &str) -> u32 {
        self.meta_upgrades.get(id).copied().unwrap_or(0)
    }

    pub fn has_upgrade(&self, id: &str) -> bool {
        self.upgrades.iter().any(|u| u == id)
    }

    pub fn has_research(&self, id: &str) -> bool {
        self.completed_research.iter().any(|r| r == id)
    }

    pub fn stage_unlocked(&self, stage: Stage) -> bool {
        self.unlocked_stages.contains(&stage)
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.unlocked_achievements.iter().any(|a| a == id)
    }

    pub fn story_chains_completed(&self) -> usize {
        self.story_progress.values().filter(|p| p.completed).count()
    }
}
