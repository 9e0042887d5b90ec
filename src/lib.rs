// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot")

pub mod types;
pub mod condition;
pub mod catalog;
pub mod content;
pub mod balance;
pub mod routes;
pub mod contracts;
pub mod story;
pub mod achievements;
pub mod actions;
pub mod simulation;
pub mod save;

pub use catalog::Catalog;
pub use simulation::TickOutcome;
pub use types::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// The whole engine behind one handle: a catalog loaded once and the current
/// state snapshot. Host time (`now`, seconds) is always passed in; the engine
/// never reads a clock, so runs replay deterministically.
#[wasm_bindgen]
pub struct PostalEngine {
    state: GameState,
    catalog: Catalog,
}

#[wasm_bindgen]
impl PostalEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(now: f64) -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let catalog = Catalog::standard();
        let state = GameState::new(&catalog, now);
        Self { state, catalog }
    }

    /// Advances the economy by `dt` seconds ending at `now` and returns the
    /// tick report (new state included).
    pub fn tick(&mut self, dt: f64, now: f64) -> JsValue {
        let outcome = simulation::tick(&self.state, &self.catalog, dt, now);
        self.state = outcome.state.clone();
        serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
    }

    /// Presses the delivery button once. Returns the id of any contract the
    /// click settled, or null.
    pub fn click(&mut self, now: f64) -> JsValue {
        let (state, event) = actions::click(&self.state, &self.catalog, now);
        self.state = state;
        match event {
            contracts::ContractEvent::Completed(id) | contracts::ContractEvent::Failed(id) => {
                serde_wasm_bindgen::to_value(&id).unwrap_or(JsValue::NULL)
            }
            contracts::ContractEvent::None => JsValue::NULL,
        }
    }

    /// Pays out capped catch-up production for `elapsed_seconds` spent away.
    pub fn apply_offline(&mut self, elapsed_seconds: f64) {
        self.state = simulation::apply_offline(&self.state, &self.catalog, elapsed_seconds);
    }

    // Purchases. All no-ops when unaffordable or unknown.

    pub fn buy_building(&mut self, building_id: &str) {
        self.state = actions::buy_building(&self.state, &self.catalog, building_id);
    }

    pub fn buy_upgrade(&mut self, upgrade_id: &str) {
        self.state = actions::buy_upgrade(&self.state, &self.catalog, upgrade_id);
    }

    pub fn buy_meta_upgrade(&mut self, meta_id: &str) {
        self.state = actions::buy_meta_upgrade(&self.state, &self.catalog, meta_id);
    }

    pub fn buy_research(&mut self, research_id: &str) {
        self.state = actions::buy_research(&self.state, &self.catalog, research_id);
    }

    pub fn prestige(&mut self, now: f64) {
        self.state = actions::prestige(&self.state, &self.catalog, now);
    }

    pub fn hard_prestige(&mut self, now: f64) {
        self.state = actions::hard_prestige(&self.state, &self.catalog, now);
    }

    // Contracts.

    pub fn activate_contract(&mut self, contract_id: &str, now: f64) {
        self.state = contracts::activate_contract(&self.state, &self.catalog, contract_id, now);
    }

    pub fn abandon_contract(&mut self) {
        self.state = contracts::abandon_contract(&self.state);
    }

    pub fn available_contracts(&self, now: f64) -> JsValue {
        let available = contracts::available_contracts(&self.state, &self.catalog, now);
        serde_wasm_bindgen::to_value(&available).unwrap_or(JsValue::NULL)
    }

    // Routes.

    pub fn set_route_allocation(&mut self, route_id: &str, allocation: f64) {
        self.state = routes::set_route_allocation(&self.state, &self.catalog, route_id, allocation);
    }

    pub fn route_production_multiplier(&self) -> f64 {
        routes::route_multiplier(&self.state, &self.catalog, routes::RouteChannel::Production)
    }

    pub fn route_research_multiplier(&self) -> f64 {
        routes::route_multiplier(&self.state, &self.catalog, routes::RouteChannel::Research)
    }

    // Story mail. The host supplies uniform rolls in [0, 1) so replays stay
    // deterministic across the wasm boundary.

    pub fn should_offer_story(&self, now: f64, roll: f64) -> bool {
        story::should_offer_story(&self.state, &self.catalog, now, roll)
    }

    /// Picks an eligible chain id for the given roll, or null.
    pub fn pick_story_chain(&self, now: f64, roll: f64) -> JsValue {
        match story::pick_story_chain(&self.state, &self.catalog, now, roll) {
            Some(chain) => serde_wasm_bindgen::to_value(&chain.id).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    pub fn advance_story(&mut self, chain_id: &str, now: f64) {
        self.state = story::advance_story(&self.state, &self.catalog, chain_id, now);
    }

    // Read-side queries. Safe at render frequency.

    pub fn state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.state).unwrap_or(JsValue::NULL)
    }

    pub fn catalog(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.catalog).unwrap_or(JsValue::NULL)
    }

    pub fn letters_per_second(&self) -> f64 {
        balance::letters_per_second(&self.state, &self.catalog)
    }

    pub fn research_per_second(&self) -> f64 {
        balance::research_per_second(&self.state, &self.catalog)
    }

    pub fn click_value(&self) -> f64 {
        balance::click_value(&self.state, &self.catalog)
    }

    pub fn building_cost(&self, building_id: &str) -> f64 {
        match self.catalog.building(building_id) {
            Some(b) => balance::building_cost(b, self.state.building_count(building_id), &self.state),
            None => f64::NAN,
        }
    }

    /// Next level's stamp price, or -1 when maxed or unknown.
    pub fn meta_upgrade_cost(&self, meta_id: &str) -> f64 {
        match balance::meta_upgrade_cost(&self.catalog, &self.state, meta_id) {
            Some(cost) => cost as f64,
            None => -1.0,
        }
    }

    pub fn stamps_earned(&self) -> f64 {
        balance::stamps_earned(&self.state) as f64
    }

    pub fn shards_earned(&self) -> f64 {
        balance::shards_earned(&self.state) as f64
    }

    pub fn stamp_multiplier(&self) -> f64 {
        balance::stamp_multiplier(&self.state)
    }

    // Persistence.

    pub fn snapshot(&self) -> Option<String> {
        save::snapshot(&self.state).ok()
    }

    /// Loads a save document. Leaves the current state untouched and returns
    /// false when it cannot be parsed.
    pub fn load(&mut self, raw: &str) -> bool {
        match save::restore(raw, &self.catalog) {
            Ok(state) => {
                self.state = state;
                true
            }
            Err(err) => {
                log(&format!("postal-engine: rejected save: {err}"));
                false
            }
        }
    }

    /// Back to a fresh run, wiping all progress.
    pub fn reset(&mut self, now: f64) {
        *self = PostalEngine::new(now);
    }
}
