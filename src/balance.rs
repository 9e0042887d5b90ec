// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Balance Formulas

//! Pure queries over `GameState`. Every function here is side-effect free
//! and safe to call at render frequency.

use crate::catalog::{Building, Catalog, UpgradeKind};
use crate::routes::{self, RouteChannel};
use crate::types::{GameState, Stage};

// Prestige currency yields.
pub const STAMPS_DIVISOR: f64 = 1_000_000_000.0;
pub const STAMP_REWARD_MULTIPLIER: f64 = 10.0;
pub const SHARDS_DIVISOR: f64 = 100.0;

// Per-stamp and per-shard multipliers.
pub const SHARD_MULTIPLIER_BASE: f64 = 1.5;
pub const STAMP_MULTIPLIER_POWER: f64 = 0.6;
pub const STAMP_MULTIPLIER_PER_STAMP: f64 = 0.1;

// Meta-upgrade effect sizes, per level.
pub const META_CLICK_BONUS: f64 = 0.05;
pub const META_AUTO_BONUS: f64 = 0.05;
pub const META_COST_REDUCTION: f64 = 0.02;
pub const META_RESEARCH_BONUS: f64 = 0.1;
pub const META_NETWORK_BONUS: f64 = 0.03;
pub const META_OFFLINE_BASE_SECONDS: f64 = 1800.0;

pub const CLICK_BASE_VALUE: f64 = 1.0;
pub const CLICK_POWER_PER_BUILDING: f64 = 0.1;

// Research point accrual follows a sublinear curve over letter output.
pub const RESEARCH_POINTS_POWER: f64 = 0.4;
pub const RESEARCH_BASE_MULTIPLIER: f64 = 0.5;

// Stage unlock thresholds. Letters are run-scoped; stamps and shards
// survive prestige, so a reset player keeps late stages open.
const SOLAR_LETTERS: f64 = 10_000.0;
const SOLAR_STAMPS: u64 = 5;
const INTERSTELLAR_LETTERS: f64 = 1_000_000.0;
const INTERSTELLAR_STAMPS: u64 = 20;
const INTERSTELLAR_SHARDS: u64 = 1;
const GALACTIC_LETTERS: f64 = 100_000_000.0;
const GALACTIC_STAMPS: u64 = 50;
const GALACTIC_SHARDS: u64 = 3;
const MULTIVERSE_LETTERS: f64 = 10_000_000_000.0;
const MULTIVERSE_STAMPS: u64 = 100;
const MULTIVERSE_SHARDS: u64 = 10;

// ---------------------------------------------------------------------------
// Research bonus tables
// ---------------------------------------------------------------------------

fn research_production_multiplier(id: &str) -> f64 {
    match id {
        "better_sorting" => 1.05,
        "advanced_sorting" => 1.1,
        "quantum_sorting" => 1.15,
        "logistics_ai" => 1.08,
        "parallel_processing" => 1.12,
        "time_dilation" => 1.2,
        "hive_consciousness" => 1.25,
        "dimensional_folding" => 2.0,
        "unified_field_theory" => 1.3,
        "universal_language" => 1.2,
        "probability_manipulation" => 1.4,
        "cosmic_awareness" => 2.0,
        "entropy_reversal" => 3.0,
        _ => 1.0,
    }
}

fn research_click_multiplier(id: &str) -> f64 {
    match id {
        "ergonomic_training" => 1.1,
        "bionic_enhancements" => 1.2,
        "neural_interface" => 1.15,
        "psychic_delivery" => 1.25,
        "omnipresence" => 2.0,
        "ascension" => 3.0,
        _ => 1.0,
    }
}

fn research_cost_multiplier(id: &str) -> f64 {
    match id {
        "route_optimization" => 0.95,
        "efficiency_protocols" => 0.90,
        "supply_chain" => 0.92,
        "zero_point_energy" => 0.85,
        "matter_synthesis" => 0.80,
        _ => 1.0,
    }
}

// A few research nodes discount one specific building.
fn building_research_cost_multiplier(state: &GameState, building_id: &str) -> f64 {
    let mut mult = 1.0;
    if building_id == "cryo_hauler" && state.has_research("cryogenic_preservation") {
        mult *= 0.9;
    }
    if building_id == "black_hole_router" && state.has_research("singularity_engineering") {
        mult *= 0.8;
    }
    mult
}

fn research_accelerator(id: &str) -> f64 {
    match id {
        "research_lab" | "research_network" => 2.0,
        "quantum_computing" => 3.0,
        _ => 1.0,
    }
}

fn research_production_product(state: &GameState) -> f64 {
    state
        .completed_research
        .iter()
        .map(|id| research_production_multiplier(id))
        .product()
}

fn research_click_product(state: &GameState) -> f64 {
    state
        .completed_research
        .iter()
        .map(|id| research_click_multiplier(id))
        .product()
}

fn research_cost_product(state: &GameState) -> f64 {
    state
        .completed_research
        .iter()
        .map(|id| research_cost_multiplier(id))
        .product()
}

// ---------------------------------------------------------------------------
// Prestige multipliers
// ---------------------------------------------------------------------------

pub fn shard_multiplier(state: &GameState) -> f64 {
    SHARD_MULTIPLIER_BASE.powi(state.shards as i32)
}

/// Display-facing per-stamp bonus curve. Not applied to production, which
/// scales through shards instead.
pub fn stamp_multiplier(state: &GameState) -> f64 {
    1.0 + (state.stamps as f64).powf(STAMP_MULTIPLIER_POWER) * STAMP_MULTIPLIER_PER_STAMP
}

// ---------------------------------------------------------------------------
// Costs
// ---------------------------------------------------------------------------

pub fn building_cost(building: &Building, owned: u32, state: &GameState) -> f64 {
    let meta_reduction = 1.0 - state.meta_level("cheaper_buildings") as f64 * META_COST_REDUCTION;
    (building.base_cost
        * building.cost_factor.powi(owned as i32)
        * research_cost_product(state)
        * building_research_cost_multiplier(state, &building.id)
        * meta_reduction)
        .floor()
}

pub fn meta_upgrade_cost(catalog: &Catalog, state: &GameState, id: &str) -> Option<u64> {
    let def = catalog.meta_upgrade(id)?;
    let level = state.meta_level(id);
    if level >= def.max_level {
        return None;
    }
    Some((def.base_cost as f64 * def.cost_multiplier.powi(level as i32)).floor() as u64)
}

// ---------------------------------------------------------------------------
// Production
// ---------------------------------------------------------------------------

pub fn global_multiplier(state: &GameState, catalog: &Catalog) -> f64 {
    let upgrade_product: f64 = catalog
        .upgrades
        .iter()
        .filter(|u| u.kind == UpgradeKind::Global && state.has_upgrade(&u.id))
        .map(|u| u.multiplier)
        .product();
    let meta_auto = 1.0 + state.meta_level("auto_power") as f64 * META_AUTO_BONUS;
    let meta_network = 1.0 + state.meta_level("network_expansion") as f64 * META_NETWORK_BONUS;
    upgrade_product
        * shard_multiplier(state)
        * meta_auto
        * meta_network
        * research_production_product(state)
}

fn building_upgrade_product(state: &GameState, catalog: &Catalog, building_id: &str) -> f64 {
    catalog
        .upgrades
        .iter()
        .filter(|u| {
            u.kind == UpgradeKind::Building
                && u.target.as_deref() == Some(building_id)
                && state.has_upgrade(&u.id)
        })
        .map(|u| u.multiplier)
        .product()
}

pub fn letters_per_second(state: &GameState, catalog: &Catalog) -> f64 {
    let base: f64 = catalog
        .buildings
        .iter()
        .map(|b| {
            let count = state.building_count(&b.id) as f64;
            b.base_production * count * building_upgrade_product(state, catalog, &b.id)
        })
        .sum();
    base * global_multiplier(state, catalog)
        * routes::route_multiplier(state, catalog, RouteChannel::Production)
}

pub fn click_value(state: &GameState, catalog: &Catalog) -> f64 {
    let upgrade_product: f64 = catalog
        .upgrades
        .iter()
        .filter(|u| u.kind == UpgradeKind::Click && state.has_upgrade(&u.id))
        .map(|u| u.multiplier)
        .product();
    let meta_click = 1.0 + state.meta_level("click_power") as f64 * META_CLICK_BONUS;
    (CLICK_BASE_VALUE * upgrade_product
        + state.total_buildings() as f64 * CLICK_POWER_PER_BUILDING)
        * shard_multiplier(state)
        * meta_click
        * research_click_product(state)
}

pub fn research_per_second(state: &GameState, catalog: &Catalog) -> f64 {
    let lps = letters_per_second(state, catalog).max(1.0);
    let accelerator: f64 = state
        .completed_research
        .iter()
        .map(|id| research_accelerator(id))
        .product();
    let meta_research = 1.0 + state.meta_level("research_speed") as f64 * META_RESEARCH_BONUS;
    lps.powf(RESEARCH_POINTS_POWER)
        * RESEARCH_BASE_MULTIPLIER
        * accelerator
        * meta_research
        * routes::route_multiplier(state, catalog, RouteChannel::Research)
}

// ---------------------------------------------------------------------------
// Prestige yields
// ---------------------------------------------------------------------------

pub fn stamps_earned(state: &GameState) -> u64 {
    let gross = ((state.letters_delivered / STAMPS_DIVISOR).powf(1.0 / 3.0)
        * STAMP_REWARD_MULTIPLIER)
        .floor() as u64;
    gross.saturating_sub(state.stamps)
}

pub fn shards_earned(state: &GameState) -> u64 {
    let gross = (state.lifetime_stamps as f64 / SHARDS_DIVISOR).sqrt().floor() as u64;
    gross.saturating_sub(state.shards)
}

pub fn offline_cap_seconds(state: &GameState) -> f64 {
    META_OFFLINE_BASE_SECONDS * (1.0 + state.meta_level("offline_time") as f64)
}

// ---------------------------------------------------------------------------
// Stage progression
// ---------------------------------------------------------------------------

pub fn stage_unlocked(state: &GameState, stage: Stage) -> bool {
    match stage {
        Stage::Local => true,
        Stage::Solar => {
            state.letters_delivered >= SOLAR_LETTERS || state.stamps >= SOLAR_STAMPS
        }
        Stage::Interstellar => {
            state.letters_delivered >= INTERSTELLAR_LETTERS
                || state.stamps >= INTERSTELLAR_STAMPS
                || state.shards >= INTERSTELLAR_SHARDS
        }
        Stage::Galactic => {
            state.letters_delivered >= GALACTIC_LETTERS
                || state.stamps >= GALACTIC_STAMPS
                || state.shards >= GALACTIC_SHARDS
        }
        Stage::Multiverse => {
            state.letters_delivered >= MULTIVERSE_LETTERS
                || state.stamps >= MULTIVERSE_STAMPS
                || state.shards >= MULTIVERSE_SHARDS
        }
    }
}

pub fn unlocked_stages(state: &GameState) -> Vec<Stage> {
    Stage::ALL
        .iter()
        .copied()
        .filter(|&s| stage_unlocked(state, s))
        .collect()
}

pub fn current_stage(state: &GameState) -> Stage {
    unlocked_stages(state).into_iter().last().unwrap_or(Stage::Local)
}
