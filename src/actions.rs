// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Player Actions

//! Purchase and prestige mutators. Every function here is total: an invalid
//! or unaffordable request returns the state unchanged, never an error.

use crate::balance;
use crate::catalog::Catalog;
use crate::contracts::{self, ContractEvent};
use crate::simulation;
use crate::types::GameState;

/// One press of the delivery button. Yield scales with click upgrades,
/// owned buildings, shards, and meta levels; the active contract sees the
/// letters and the click.
pub fn click(state: &GameState, catalog: &Catalog, now: f64) -> (GameState, ContractEvent) {
    let value = balance::click_value(state, catalog);
    let mut next = state.clone();
    next.credits += value;
    next.total_credits_earned += value;
    next.letters_delivered += value;
    next.lifetime_letters_delivered += value;
    next.click_count += 1;

    let lps = balance::letters_per_second(&next, catalog);
    let (mut next, event) = contracts::update_progress(&next, catalog, value, lps, 1, now);
    simulation::refresh_progression(&mut next);
    (next, event)
}

pub fn buy_building(state: &GameState, catalog: &Catalog, building_id: &str) -> GameState {
    let Some(building) = catalog.building(building_id) else {
        return state.clone();
    };
    let owned = state.building_count(building_id);
    let cost = balance::building_cost(building, owned, state);
    if state.credits < cost {
        return state.clone();
    }
    let mut next = state.clone();
    next.credits -= cost;
    *next.buildings.entry(building_id.to_string()).or_insert(0) += 1;
    next
}

pub fn buy_upgrade(state: &GameState, catalog: &Catalog, upgrade_id: &str) -> GameState {
    let Some(upgrade) = catalog.upgrade(upgrade_id) else {
        return state.clone();
    };
    if state.has_upgrade(upgrade_id) || state.credits < upgrade.cost {
        return state.clone();
    }
    let mut next = state.clone();
    next.credits -= upgrade.cost;
    next.upgrades.push(upgrade_id.to_string());
    next
}

pub fn buy_meta_upgrade(state: &GameState, catalog: &Catalog, meta_id: &str) -> GameState {
    let Some(cost) = balance::meta_upgrade_cost(catalog, state, meta_id) else {
        return state.clone();
    };
    if state.stamps < cost {
        return state.clone();
    }
    let mut next = state.clone();
    next.stamps -= cost;
    *next.meta_upgrades.entry(meta_id.to_string()).or_insert(0) += 1;
    next
}

pub fn buy_research(state: &GameState, catalog: &Catalog, research_id: &str) -> GameState {
    let Some(research) = catalog.research_node(research_id) else {
        return state.clone();
    };
    if state.has_research(research_id)
        || !research.prerequisites.iter().all(|p| state.has_research(p))
        || state.research_points < research.cost
    {
        return state.clone();
    }
    let mut next = state.clone();
    next.research_points -= research.cost;
    next.completed_research.push(research_id.to_string());
    next
}

/// Soft reset. Letters, credits, buildings, upgrades, and the active
/// contract go; stamps, shards, meta-upgrades, research, and history stay.
/// Refuses to fire when no stamps would be earned.
pub fn prestige(state: &GameState, catalog: &Catalog, now: f64) -> GameState {
    let earned = balance::stamps_earned(state);
    if earned == 0 {
        return state.clone();
    }
    let mut next = GameState::new(catalog, now);
    next.stamps = state.stamps + earned;
    next.lifetime_stamps = state.lifetime_stamps + earned;
    next.shards = state.shards;
    next.lifetime_letters_delivered = state.lifetime_letters_delivered;
    next.meta_upgrades = state.meta_upgrades.clone();
    next.completed_research = state.completed_research.clone();
    next.research_points = state.research_points;
    next.total_prestiges = state.total_prestiges + 1;
    next.completed_contracts = state.completed_contracts.clone();
    next.total_contracts_completed = state.total_contracts_completed;
    next.unlocked_achievements = state.unlocked_achievements.clone();
    next.story_progress = state.story_progress.clone();
    next.story_chance_weight = state.story_chance_weight;
    simulation::refresh_progression(&mut next);
    next
}

/// Hard reset. Stamps and meta-upgrades go too; only shards, research,
/// lifetime counters, and history survive. The prestige counter restarts.
pub fn hard_prestige(state: &GameState, catalog: &Catalog, now: f64) -> GameState {
    let earned = balance::shards_earned(state);
    if earned == 0 {
        return state.clone();
    }
    let mut next = GameState::new(catalog, now);
    next.shards = state.shards + earned;
    next.lifetime_stamps = state.lifetime_stamps;
    next.lifetime_letters_delivered = state.lifetime_letters_delivered;
    next.completed_research = state.completed_research.clone();
    next.research_points = state.research_points;
    next.completed_contracts = state.completed_contracts.clone();
    next.total_contracts_completed = state.total_contracts_completed;
    next.unlocked_achievements = state.unlocked_achievements.clone();
    next.story_progress = state.story_progress.clone();
    next.story_chance_weight = state.story_chance_weight;
    simulation::refresh_progression(&mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stage;

    fn setup() -> (GameState, Catalog) {
        let catalog = Catalog::standard();
        let state = GameState::new(&catalog, 0.0);
        (state, catalog)
    }

    #[test]
    fn test_click_accrues_all_counters() {
        let (state, catalog) = setup();
        let (state, _) = click(&state, &catalog, 0.0);
        assert_eq!(state.credits, 1.0);
        assert_eq!(state.letters_delivered, 1.0);
        assert_eq!(state.lifetime_letters_delivered, 1.0);
        assert_eq!(state.total_credits_earned, 1.0);
        assert_eq!(state.click_count, 1);
    }

    #[test]
    fn test_buy_building_spends_and_increments() {
        let (mut state, catalog) = setup();
        state.credits = 15.0;
        let state = buy_building(&state, &catalog, "pigeon");
        assert_eq!(state.credits, 5.0);
        assert_eq!(state.building_count("pigeon"), 1);
        // Second pigeon costs 11, unaffordable now.
        let same = buy_building(&state, &catalog, "pigeon");
        assert_eq!(same.building_count("pigeon"), 1);
        assert_eq!(same.credits, 5.0);
    }

    #[test]
    fn test_buy_upgrade_rejects_duplicates() {
        let (mut state, catalog) = setup();
        state.credits = 500.0;
        let state = buy_upgrade(&state, &catalog, "sneakers");
        assert!(state.has_upgrade("sneakers"));
        assert_eq!(state.credits, 400.0);
        let same = buy_upgrade(&state, &catalog, "sneakers");
        assert_eq!(same.credits, 400.0);
        assert_eq!(same.upgrades.len(), 1);
    }

    #[test]
    fn test_buy_meta_upgrade_walks_cost_curve() {
        let (mut state, catalog) = setup();
        state.stamps = 4;
        let state = buy_meta_upgrade(&state, &catalog, "click_power");
        assert_eq!(state.meta_level("click_power"), 1);
        assert_eq!(state.stamps, 3);
        // Level 2 costs floor(1 * 2.5) = 2.
        let state = buy_meta_upgrade(&state, &catalog, "click_power");
        assert_eq!(state.meta_level("click_power"), 2);
        assert_eq!(state.stamps, 1);
        let same = buy_meta_upgrade(&state, &catalog, "click_power");
        assert_eq!(same.meta_level("click_power"), 2);
    }

    #[test]
    fn test_buy_research_enforces_prerequisites() {
        let (mut state, catalog) = setup();
        state.research_points = 5_000.0;
        let same = buy_research(&state, &catalog, "advanced_sorting");
        assert!(!same.has_research("advanced_sorting"));
        let state = buy_research(&state, &catalog, "better_sorting");
        let state = buy_research(&state, &catalog, "advanced_sorting");
        assert!(state.has_research("advanced_sorting"));
        assert_eq!(state.research_points, 3_900.0);
    }

    #[test]
    fn test_prestige_resets_run_and_keeps_meta() {
        let (mut state, catalog) = setup();
        state.letters_delivered = 1_000_000_000.0;
        state.credits = 5e8;
        state.lifetime_letters_delivered = 1_000_000_000.0;
        state.buildings.insert("pigeon".into(), 40);
        state.upgrades.push("sneakers".into());
        state.meta_upgrades.insert("click_power".into(), 3);
        state.completed_research.push("better_sorting".into());
        state.shards = 2;
        state.unlocked_achievements.push("postal_rookie".into());

        let next = prestige(&state, &catalog, 500.0);
        assert_eq!(next.stamps, 10);
        assert_eq!(next.lifetime_stamps, 10);
        assert_eq!(next.letters_delivered, 0.0);
        assert_eq!(next.credits, 0.0);
        assert!(next.buildings.is_empty());
        assert!(next.upgrades.is_empty());
        assert_eq!(next.meta_level("click_power"), 3);
        assert!(next.has_research("better_sorting"));
        assert_eq!(next.shards, 2);
        assert_eq!(next.total_prestiges, 1);
        assert_eq!(next.lifetime_letters_delivered, 1_000_000_000.0);
        assert!(next.has_achievement("postal_rookie"));
        assert_eq!(next.start_time, 500.0);
        // 10 stamps keeps Solar open for the new run.
        assert!(next.unlocked_stages.contains(&Stage::Solar));
    }

    #[test]
    fn test_prestige_refuses_without_yield() {
        let (mut state, catalog) = setup();
        state.letters_delivered = 1_000.0;
        let same = prestige(&state, &catalog, 0.0);
        assert_eq!(same, state);
    }

    #[test]
    fn test_hard_prestige_wipes_stamps_and_meta() {
        let (mut state, catalog) = setup();
        state.lifetime_stamps = 400;
        state.stamps = 120;
        state.meta_upgrades.insert("auto_power".into(), 5);
        state.total_prestiges = 7;
        state.completed_research.push("better_sorting".into());

        let next = hard_prestige(&state, &catalog, 0.0);
        assert_eq!(next.shards, 2);
        assert_eq!(next.stamps, 0);
        assert!(next.meta_upgrades.is_empty());
        assert_eq!(next.total_prestiges, 0);
        assert_eq!(next.lifetime_stamps, 400);
        assert!(next.has_research("better_sorting"));
    }
}
