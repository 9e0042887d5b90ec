// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Save Documents

//! JSON persistence. A save is the serialized `GameState`; restoring merges
//! the document over defaults, so fields added after the save was written
//! simply come up at their defaults.

use thiserror::Error;

use crate::catalog::Catalog;
use crate::simulation;
use crate::types::{GameState, SAVE_VERSION};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("malformed save document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("save version {found} is newer than supported version {supported}")]
    VersionTooNew { found: u32, supported: u32 },
}

pub fn snapshot(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a save document and patches it up to the current schema: version
/// stamped, missing route tables refilled, progression gates re-derived.
pub fn restore(raw: &str, catalog: &Catalog) -> Result<GameState, SaveError> {
    let mut state: GameState = serde_json::from_str(raw)?;
    if state.version > SAVE_VERSION {
        return Err(SaveError::VersionTooNew { found: state.version, supported: SAVE_VERSION });
    }
    state.version = SAVE_VERSION;

    // Saves written before routes shipped have no allocation tables.
    let defaults = crate::routes::default_allocations(catalog);
    for (stage, routes) in defaults {
        state.routes.entry(stage).or_insert(routes);
    }

    simulation::refresh_progression(&mut state);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stage;

    #[test]
    fn test_round_trip_preserves_state() {
        let catalog = Catalog::standard();
        let mut state = GameState::new(&catalog, 100.0);
        state.credits = 1234.5;
        state.buildings.insert("pigeon".into(), 7);
        state.upgrades.push("sneakers".into());
        let raw = snapshot(&state).unwrap();
        let restored = restore(&raw, &catalog).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_partial_document_comes_up_at_defaults() {
        let catalog = Catalog::standard();
        let restored = restore(r#"{"stamps": 6, "lifetime_stamps": 6}"#, &catalog).unwrap();
        assert_eq!(restored.stamps, 6);
        assert_eq!(restored.version, SAVE_VERSION);
        // Route tables are refilled and stage gates re-derived.
        assert_eq!(restored.routes.len(), 5);
        assert!(restored.unlocked_stages.contains(&Stage::Solar));
        assert!(restored.routes_unlocked);
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let catalog = Catalog::standard();
        assert!(matches!(restore("not json", &catalog), Err(SaveError::Malformed(_))));
    }

    #[test]
    fn test_future_version_is_rejected() {
        let catalog = Catalog::standard();
        let raw = format!(r#"{{"version": {}}}"#, SAVE_VERSION + 1);
        assert!(matches!(
            restore(&raw, &catalog),
            Err(SaveError::VersionTooNew { .. })
        ));
    }
}
