// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Achievement Tracker

use crate::catalog::Catalog;
use crate::types::GameState;

/// Sweeps the catalog and grants every newly satisfied achievement.
///
/// Grants are permanent. Conditions are only consulted for achievements the
/// player does not yet hold, so a condition that later turns false (letters
/// reset by prestige, say) never revokes anything.
pub fn evaluate(state: &GameState, catalog: &Catalog, now: f64) -> (GameState, Vec<String>) {
    let mut newly_unlocked = Vec::new();
    for achievement in &catalog.achievements {
        if !state.has_achievement(&achievement.id)
            && achievement.condition.eval(state, catalog, now)
        {
            newly_unlocked.push(achievement.id.clone());
        }
    }
    if newly_unlocked.is_empty() {
        return (state.clone(), newly_unlocked);
    }
    let mut next = state.clone();
    next.unlocked_achievements.extend(newly_unlocked.iter().cloned());
    (next, newly_unlocked)
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
    fn test_fresh_state_unlocks_nothing() {
        let (state, catalog) = setup();
        let (next, unlocked) = evaluate(&state, &catalog, 0.0);
        assert!(unlocked.is_empty());
        assert!(next.unlocked_achievements.is_empty());
    }

    #[test]
    fn test_letter_milestones_unlock_in_one_sweep() {
        let (mut state, catalog) = setup();
        state.letters_delivered = 1_500.0;
        let (next, unlocked) = evaluate(&state, &catalog, 0.0);
        assert!(unlocked.contains(&"first_steps".to_string()));
        assert!(unlocked.contains(&"postal_rookie".to_string()));
        assert!(unlocked.contains(&"automated_delivery".to_string()));
        assert!(next.has_achievement("postal_rookie"));
    }

    #[test]
    fn test_grants_survive_condition_turning_false() {
        let (mut state, catalog) = setup();
        state.letters_delivered = 2_000.0;
        let (mut state, _) = evaluate(&state, &catalog, 0.0);
        state.letters_delivered = 0.0;
        let (next, unlocked) = evaluate(&state, &catalog, 0.0);
        assert!(unlocked.is_empty());
        assert!(next.has_achievement("postal_rookie"));
    }

    #[test]
    fn test_speed_demon_requires_fast_solar() {
        let (mut state, catalog) = setup();
        state.unlocked_stages = vec![Stage::Local, Stage::Solar];
        let (_, unlocked) = evaluate(&state, &catalog, 240.0);
        assert!(unlocked.contains(&"speed_demon".to_string()));
        let (_, late) = evaluate(&state, &catalog, 600.0);
        assert!(!late.contains(&"speed_demon".to_string()));
    }

    #[test]
    fn test_meta_master_on_maxed_meta() {
        let (mut state, catalog) = setup();
        state.meta_upgrades.insert("click_power".into(), 20);
        let (_, unlocked) = evaluate(&state, &catalog, 0.0);
        assert!(unlocked.contains(&"meta_master".to_string()));
        assert!(!unlocked.contains(&"perfectionist".to_string()));
    }
}
