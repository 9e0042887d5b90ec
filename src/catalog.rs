// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Content Catalog

//! Immutable content definitions. The catalog is data, not behavior: every
//! gate is a [`Condition`] tree and every contract objective a closed enum,
//! so the interpreters in `balance`, `contracts` and `achievements` are the
//! only places rules execute.

use serde::{Serialize, Deserialize};
use std::collections::HashSet;

use crate::condition::Condition;
use crate::types::Stage;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub stage: Stage,
    pub base_cost: f64,
    pub base_production: f64,
    pub cost_factor: f64,
    #[serde(default)]
    pub unlock: Condition,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpgradeKind {
    Click,
    Global,
    Building,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub stage: Stage,
    pub cost: f64,
    pub kind: UpgradeKind,
    /// Target building id; only meaningful for `UpgradeKind::Building`.
    #[serde(default)]
    pub target: Option<String>,
    pub multiplier: f64,
    #[serde(default)]
    pub unlock: Condition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaUpgrade {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub base_cost: u64,
    pub cost_multiplier: f64,
    pub max_level: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResearchCategory {
    Production,
    Click,
    Cost,
    Research,
    Advanced,
    Specialized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Research {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub category: ResearchCategory,
    pub cost: f64,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Closed set of contract objectives. Evaluation matches exhaustively, so a
/// new objective kind is a compile error everywhere it matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractObjective {
    /// Deliver `target` letters while the contract is active.
    DeliverTotal { target: f64 },
    /// Peak letters-per-second observed while active must reach `target`.
    DeliverRate { target: f64 },
    /// Clicks while active must reach `target`.
    ClickCount { target: u64 },
    /// DeliverTotal with a deadline; exceeding it fails the contract.
    TimeLimit { target: f64, limit_seconds: f64 },
    /// Owning even one of the named building fails the contract.
    NoBuilding { building_id: String },
    /// Aspirational: prestige clears the active contract before this could
    /// settle, so it never completes. Kept for save compatibility.
    PrestigeStamps { target: u64 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContractReward {
    pub credits: f64,
    pub stamps: u64,
    pub research_points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDef {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub stage: Stage,
    #[serde(default)]
    pub unlock: Condition,
    pub objectives: Vec<ContractObjective>,
    pub reward: ContractReward,
    #[serde(default)]
    pub repeatable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub stage: Stage,
    pub production: f64,
    pub research: f64,
    pub event_chance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AchievementCategory {
    Progression,
    Production,
    Buildings,
    Clicks,
    Prestige,
    Speed,
    Collection,
    Special,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AchievementRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub category: AchievementCategory,
    pub rarity: AchievementRarity,
    #[serde(default)]
    pub secret: bool,
    pub condition: Condition,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryReward {
    pub stamps: u64,
    pub research_points: f64,
    pub cosmetic_title: Option<String>,
    pub achievement_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryChain {
    pub id: String,
    pub title: String,
    pub stage: Stage,
    #[serde(default)]
    pub unlock: Condition,
    pub total_steps: u32,
    pub reward: StoryReward,
    #[serde(default)]
    pub repeatable: bool,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate {entity} id `{id}`")]
    DuplicateId { entity: &'static str, id: String },
    #[error("{entity} `{id}` references unknown {referenced} `{reference}`")]
    DanglingReference {
        entity: &'static str,
        id: String,
        referenced: &'static str,
        reference: String,
    },
    #[error("contract `{0}` has no objectives")]
    EmptyObjectives(String),
    #[error("story chain `{0}` must have at least 2 steps")]
    DegenerateChain(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub buildings: Vec<Building>,
    pub upgrades: Vec<Upgrade>,
    pub meta_upgrades: Vec<MetaUpgrade>,
    pub research: Vec<Research>,
    pub contracts: Vec<ContractDef>,
    pub routes: Vec<Route>,
    pub achievements: Vec<Achievement>,
    pub story_chains: Vec<StoryChain>,
}

impl Catalog {
    /// The shipped content tables. Verified by `test_standard_catalog_is_valid`.
    pub fn standard() -> Catalog {
        crate::content::standard()
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn upgrade(&self, id: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.id == id)
    }

    pub fn meta_upgrade(&self, id: &str) -> Option<&MetaUpgrade> {
        self.meta_upgrades.iter().find(|m| m.id == id)
    }

    pub fn research_node(&self, id: &str) -> Option<&Research> {
        self.research.iter().find(|r| r.id == id)
    }

    pub fn contract(&self, id: &str) -> Option<&ContractDef> {
        self.contracts.iter().find(|c| c.id == id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn story_chain(&self, id: &str) -> Option<&StoryChain> {
        self.story_chains.iter().find(|c| c.id == id)
    }

    pub fn routes_for_stage(&self, stage: Stage) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(move |r| r.stage == stage)
    }

    /// Structural checks on the content tables. Run once at load for custom
    /// content; the standard catalog is checked in tests.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_unique("building", self.buildings.iter().map(|b| b.id.as_str()))?;
        check_unique("upgrade", self.upgrades.iter().map(|u| u.id.as_str()))?;
        check_unique("meta-upgrade", self.meta_upgrades.iter().map(|m| m.id.as_str()))?;
        check_unique("research", self.research.iter().map(|r| r.id.as_str()))?;
        check_unique("contract", self.contracts.iter().map(|c| c.id.as_str()))?;
        check_unique("route", self.routes.iter().map(|r| r.id.as_str()))?;
        check_unique("achievement", self.achievements.iter().map(|a| a.id.as_str()))?;
        check_unique("story chain", self.story_chains.iter().map(|c| c.id.as_str()))?;

        for upgrade in &self.upgrades {
            match (&upgrade.kind, &upgrade.target) {
                (UpgradeKind::Building, Some(target)) => {
                    if self.building(target).is_none() {
                        return Err(CatalogError::DanglingReference {
                            entity: "upgrade",
                            id: upgrade.id.clone(),
                            referenced: "building",
                            reference: target.clone(),
                        });
                    }
                }
                (UpgradeKind::Building, None) => {
                    return Err(CatalogError::DanglingReference {
                        entity: "upgrade",
                        id: upgrade.id.clone(),
                        referenced: "building",
                        reference: String::from("<missing target>"),
                    });
                }
                _ => {}
            }
        }

        for node in &self.research {
            for prereq in &node.prerequisites {
                if self.research_node(prereq).is_none() {
                    return Err(CatalogError::DanglingReference {
                        entity: "research",
                        id: node.id.clone(),
                        referenced: "research",
                        reference: prereq.clone(),
                    });
                }
            }
        }

        for contract in &self.contracts {
            if contract.objectives.is_empty() {
                return Err(CatalogError::EmptyObjectives(contract.id.clone()));
            }
            for objective in &contract.objectives {
                if let ContractObjective::NoBuilding { building_id } = objective {
                    if self.building(building_id).is_none() {
                        return Err(CatalogError::DanglingReference {
                            entity: "contract",
                            id: contract.id.clone(),
                            referenced: "building",
                            reference: building_id.clone(),
                        });
                    }
                }
            }
        }

        for chain in &self.story_chains {
            if chain.total_steps < 2 {
                return Err(CatalogError::DegenerateChain(chain.id.clone()));
            }
            if let Some(achievement_id) = &chain.reward.achievement_id {
                if !self.achievements.iter().any(|a| &a.id == achievement_id) {
                    return Err(CatalogError::DanglingReference {
                        entity: "story chain",
                        id: chain.id.clone(),
                        referenced: "achievement",
                        reference: achievement_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn check_unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { entity, id: id.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::standard();
        catalog.validate().unwrap();
        assert_eq!(catalog.buildings.len(), 23);
        assert_eq!(catalog.upgrades.len(), 16);
        assert_eq!(catalog.meta_upgrades.len(), 6);
        assert_eq!(catalog.research.len(), 31);
        assert_eq!(catalog.contracts.len(), 33);
        assert_eq!(catalog.routes.len(), 20);
        assert_eq!(catalog.story_chains.len(), 6);
    }

    #[test]
    fn test_four_routes_per_stage() {
        let catalog = Catalog::standard();
        for stage in Stage::ALL {
            assert_eq!(catalog.routes_for_stage(stage).count(), 4, "stage {stage:?}");
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::standard();
        let clone = catalog.buildings[0].clone();
        catalog.buildings.push(clone);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId { entity: "building", .. })
        ));
    }

    #[test]
    fn test_dangling_upgrade_target_rejected() {
        let mut catalog = Catalog::standard();
        let upgrade = catalog
            .upgrades
            .iter_mut()
            .find(|u| u.kind == UpgradeKind::Building)
            .unwrap();
        upgrade.target = Some(String::from("phantom_depot"));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_empty_objectives_rejected() {
        let mut catalog = Catalog::standard();
        catalog.contracts[0].objectives.clear();
        assert!(matches!(catalog.validate(), Err(CatalogError::EmptyObjectives(_))));
    }

    #[test]
    fn test_research_prerequisites_resolve() {
        let catalog = Catalog::standard();
        for node in &catalog.research {
            for prereq in &node.prerequisites {
                assert!(catalog.research_node(prereq).is_some(), "{}", node.id);
            }
        }
    }
}
