// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Delivery Routes

//! Per-stage route allocation. Each unlocked stage carries a handful of
//! routes; the player splits a 0..100 budget among them and the weighted
//! channel multipliers feed back into production and research.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::types::{GameState, RouteAllocation, Stage, StageRoutes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteChannel {
    Production,
    Research,
    EventChance,
}

/// Routes open up alongside the Solar stage.
pub fn should_unlock_routes(state: &GameState) -> bool {
    state.unlocked_stages.contains(&Stage::Solar)
}

/// Even split of the full budget across every route of each stage.
pub fn default_allocations(catalog: &Catalog) -> HashMap<Stage, StageRoutes> {
    let mut out = HashMap::new();
    for stage in Stage::ALL {
        let ids: Vec<&str> = catalog.routes_for_stage(stage).map(|r| r.id.as_str()).collect();
        if ids.is_empty() {
            continue;
        }
        let share = 100.0 / ids.len() as f64;
        out.insert(
            stage,
            StageRoutes {
                allocations: ids
                    .into_iter()
                    .map(|id| RouteAllocation { route_id: id.into(), allocation: share })
                    .collect(),
            },
        );
    }
    out
}

/// Weighted channel multiplier for the player's current stage.
///
/// Neutral (1.0) whenever routes are locked, the stage has no allocation
/// entry, or the budget sums to zero. Weights are not renormalized, so an
/// under-allocated budget dampens the multiplier.
pub fn route_multiplier(state: &GameState, catalog: &Catalog, channel: RouteChannel) -> f64 {
    if !state.routes_unlocked {
        return 1.0;
    }
    let Some(stage_routes) = state.routes.get(&state.current_stage) else {
        return 1.0;
    };
    if stage_routes.allocations.is_empty() {
        return 1.0;
    }

    let mut total_weighted = 0.0;
    let mut total_allocated = 0.0;
    for entry in &stage_routes.allocations {
        let Some(route) = catalog.route(&entry.route_id) else {
            continue;
        };
        let frac = entry.allocation / 100.0;
        let mult = match channel {
            RouteChannel::Production => route.production,
            RouteChannel::Research => route.research,
            RouteChannel::EventChance => route.event_chance,
        };
        total_weighted += frac * mult;
        total_allocated += frac;
    }
    if total_allocated <= 0.0 {
        return 1.0;
    }
    total_weighted
}

/// Sets one route's allocation, clamped to 0..=100. Unknown route ids are
/// ignored. Order of existing entries is preserved.
pub fn set_route_allocation(
    state: &GameState,
    catalog: &Catalog,
    route_id: &str,
    allocation: f64,
) -> GameState {
    let Some(route) = catalog.route(route_id) else {
        return state.clone();
    };
    let clamped = allocation.clamp(0.0, 100.0);
    let mut next = state.clone();
    let stage_routes = next.routes.entry(route.stage).or_default();
    match stage_routes.allocations.iter_mut().find(|a| a.route_id == route_id) {
        Some(entry) => entry.allocation = clamped,
        None => stage_routes
            .allocations
            .push(RouteAllocation { route_id: route_id.into(), allocation: clamped }),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameState, Catalog) {
        let catalog = Catalog::standard();
        let state = GameState::new(&catalog, 0.0);
        (state, catalog)
    }

    #[test]
    fn test_default_allocations_split_evenly() {
        let (state, _) = setup();
        for stage in Stage::ALL {
            let routes = state.routes.get(&stage).unwrap();
            assert_eq!(routes.allocations.len(), 4);
            for entry in &routes.allocations {
                assert_eq!(entry.allocation, 25.0);
            }
        }
    }

    #[test]
    fn test_multiplier_neutral_until_unlocked() {
        let (mut state, catalog) = setup();
        assert!(!state.routes_unlocked);
        assert_eq!(route_multiplier(&state, &catalog, RouteChannel::Production), 1.0);
        state.routes_unlocked = true;
        // Full even split over the Local routes.
        let expected = 0.25 * (1.15 + 0.95 + 1.10 + 0.90);
        let got = route_multiplier(&state, &catalog, RouteChannel::Production);
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_neutral_on_zero_budget() {
        let (mut state, catalog) = setup();
        state.routes_unlocked = true;
        for entry in &mut state.routes.get_mut(&Stage::Local).unwrap().allocations {
            entry.allocation = 0.0;
        }
        assert_eq!(route_multiplier(&state, &catalog, RouteChannel::Research), 1.0);
    }

    #[test]
    fn test_under_allocation_dampens() {
        let (mut state, catalog) = setup();
        state.routes_unlocked = true;
        // Only 50 of 100 on the strongest production route.
        let routes = state.routes.get_mut(&Stage::Local).unwrap();
        for entry in &mut routes.allocations {
            entry.allocation = if entry.route_id == "local_downtown" { 50.0 } else { 0.0 };
        }
        let got = route_multiplier(&state, &catalog, RouteChannel::Production);
        assert!((got - 0.575).abs() < 1e-9);
    }

    #[test]
    fn test_set_allocation_clamps_and_preserves_order() {
        let (state, catalog) = setup();
        let next = set_route_allocation(&state, &catalog, "local_suburbs", 250.0);
        let routes = next.routes.get(&Stage::Local).unwrap();
        assert_eq!(routes.allocations[1].route_id, "local_suburbs");
        assert_eq!(routes.allocations[1].allocation, 100.0);
        assert_eq!(routes.allocations[0].allocation, 25.0);
    }

    #[test]
    fn test_set_allocation_ignores_unknown_route() {
        let (state, catalog) = setup();
        let next = set_route_allocation(&state, &catalog, "route_66", 50.0);
        assert_eq!(next.routes, state.routes);
    }

    #[test]
    fn test_unknown_route_entries_skipped_in_multiplier() {
        let (mut state, catalog) = setup();
        state.routes_unlocked = true;
        state
            .routes
            .get_mut(&Stage::Local)
            .unwrap()
            .allocations
            .push(RouteAllocation { route_id: "ghost_route".into(), allocation: 100.0 });
        let expected = 0.25 * (1.15 + 0.95 + 1.10 + 0.90);
        let got = route_multiplier(&state, &catalog, RouteChannel::Production);
        assert!((got - expected).abs() < 1e-9);
    }
}
