// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Tick Loop

//! The per-interval advance. The host samples the engine on its own clock,
//! hands in the elapsed wall time, and gets back a fresh state plus
//! everything that happened during the slice.

use serde::Serialize;

use crate::achievements;
use crate::balance;
use crate::catalog::Catalog;
use crate::contracts::{self, ContractEvent};
use crate::routes;
use crate::types::GameState;

/// Everything a single tick produced.
#[derive(Debug, Clone, Serialize)]
pub struct TickOutcome {
    pub state: GameState,
    pub letters_per_second: f64,
    pub research_per_second: f64,
    pub completed_contract: Option<String>,
    pub failed_contract: Option<String>,
    pub new_achievements: Vec<String>,
}

/// Recomputes the derived progression gates from the counters. Stages are
/// re-derived every call; routes and contracts latch open once unlocked.
pub fn refresh_progression(state: &mut GameState) {
    state.unlocked_stages = balance::unlocked_stages(state);
    state.current_stage = balance::current_stage(state);
    if routes::should_unlock_routes(state) {
        state.routes_unlocked = true;
        state.contracts_unlocked = true;
    }
}

/// Advances the economy by `dt` seconds ending at wall-clock `now`.
pub fn tick(state: &GameState, catalog: &Catalog, dt: f64, now: f64) -> TickOutcome {
    let lps = balance::letters_per_second(state, catalog);
    let rps = balance::research_per_second(state, catalog);
    let delta_letters = lps * dt;

    let mut next = state.clone();
    next.credits += delta_letters;
    next.total_credits_earned += delta_letters;
    next.letters_delivered += delta_letters;
    next.lifetime_letters_delivered += delta_letters;
    next.research_points += rps * dt;

    let (mut next, contract_event) =
        contracts::update_progress(&next, catalog, delta_letters, lps, 0, now);
    refresh_progression(&mut next);
    let (next, new_achievements) = achievements::evaluate(&next, catalog, now);

    let (completed_contract, failed_contract) = match contract_event {
        ContractEvent::Completed(id) => (Some(id), None),
        ContractEvent::Failed(id) => (None, Some(id)),
        ContractEvent::None => (None, None),
    };
    TickOutcome {
        state: next,
        letters_per_second: lps,
        research_per_second: rps,
        completed_contract,
        failed_contract,
        new_achievements,
    }
}

/// Catch-up for time spent away, capped by the offline-time meta level.
/// Contracts do not advance while offline.
pub fn apply_offline(state: &GameState, catalog: &Catalog, elapsed_seconds: f64) -> GameState {
    let capped = elapsed_seconds.clamp(0.0, balance::offline_cap_seconds(state));
    if capped <= 0.0 {
        return state.clone();
    }
    let lps = balance::letters_per_second(state, catalog);
    let rps = balance::research_per_second(state, catalog);
    let delta = lps * capped;
    let mut next = state.clone();
    next.credits += delta;
    next.total_credits_earned += delta;
    next.letters_delivered += delta;
    next.lifetime_letters_delivered += delta;
    next.research_points += rps * capped;
    refresh_progression(&mut next);
    next
}
