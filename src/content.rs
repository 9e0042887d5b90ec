// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Cosmic Postal Simulation Suite ("The Depot") - Shipped Content Tables

//! The standard catalog. Pure data; tune numbers here, not in the engine.

use crate::catalog::*;
use crate::condition::Condition;
use crate::types::Stage;

fn building(
    id: &str,
    name: &str,
    flavor: &str,
    stage: Stage,
    base_cost: f64,
    base_production: f64,
    cost_factor: f64,
    unlock: Condition,
) -> Building {
    Building {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        stage,
        base_cost,
        base_production,
        cost_factor,
        unlock,
    }
}

fn upgrade(
    id: &str,
    name: &str,
    flavor: &str,
    stage: Stage,
    cost: f64,
    kind: UpgradeKind,
    target: Option<&str>,
    multiplier: f64,
    unlock: Condition,
) -> Upgrade {
    Upgrade {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        stage,
        cost,
        kind,
        target: target.map(String::from),
        multiplier,
        unlock,
    }
}

fn meta(
    id: &str,
    name: &str,
    flavor: &str,
    base_cost: u64,
    cost_multiplier: f64,
    max_level: u32,
) -> MetaUpgrade {
    MetaUpgrade {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        base_cost,
        cost_multiplier,
        max_level,
    }
}

fn research(
    id: &str,
    name: &str,
    flavor: &str,
    category: ResearchCategory,
    cost: f64,
    prerequisites: &[&str],
) -> Research {
    Research {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        category,
        cost,
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
    }
}

fn route(
    id: &str,
    name: &str,
    flavor: &str,
    stage: Stage,
    production: f64,
    research: f64,
    event_chance: f64,
) -> Route {
    Route {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        stage,
        production,
        research,
        event_chance,
    }
}

fn contract(
    id: &str,
    name: &str,
    flavor: &str,
    stage: Stage,
    unlock: Condition,
    objectives: Vec<ContractObjective>,
    reward: ContractReward,
    repeatable: bool,
) -> ContractDef {
    ContractDef {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        stage,
        unlock,
        objectives,
        reward,
        repeatable,
    }
}

fn reward(credits: f64, stamps: u64, research_points: f64) -> ContractReward {
    ContractReward { credits, stamps, research_points }
}

fn achievement(
    id: &str,
    name: &str,
    flavor: &str,
    category: AchievementCategory,
    rarity: AchievementRarity,
    secret: bool,
    condition: Condition,
) -> Achievement {
    Achievement {
        id: id.into(),
        name: name.into(),
        flavor: flavor.into(),
        category,
        rarity,
        secret,
        condition,
    }
}

pub(crate) fn standard() -> Catalog {
    Catalog {
        buildings: buildings(),
        upgrades: upgrades(),
        meta_upgrades: meta_upgrades(),
        research: research_tree(),
        contracts: contracts(),
        routes: routes(),
        achievements: achievements(),
        story_chains: story_chains(),
    }
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

fn buildings() -> Vec<Building> {
    use Condition as C;
    use Stage::*;
    vec![
        building("pigeon", "Messenger Pigeon", "Reliable, organic, biodegradable unit.", Local, 10.0, 0.1, 1.15, C::Always),
        building("mailbox", "Corner Mailbox", "Passive collection point. Graffiti included.", Local, 25.0, 0.3, 1.15, C::Always),
        building("paper_boy", "Paper Route", "Throwing aim is 50/50 at best.", Local, 60.0, 0.8, 1.16, C::Always),
        building("bike_courier", "Bike Courier", "Fixed gear, fueled by espresso.", Local, 150.0, 2.0, 1.16, C::Always),
        building("mail_truck", "Mail Truck", "Neither snow nor rain nor gloom of night.", Local, 600.0, 8.0, 1.17, C::Always),
        building("sorting_center", "Auto-Sort Center", "Now with 20% fewer crushed packages.", Local, 2_000.0, 20.0, 1.18, C::letters(500.0)),
        building("drone_fleet", "Drone Fleet", "Blocking out the sun, one parcel at a time.", Solar, 10_000.0, 50.0, 1.20, C::Always),
        building("orbital_cannon", "Orbital Cannon", "Yeet the mail into low earth orbit.", Solar, 50_000.0, 150.0, 1.21, C::Always),
        building("lunar_base", "Lunar Sorting Base", "Low gravity means stamps stick better.", Solar, 200_000.0, 500.0, 1.22, C::Always),
        building("space_elevator", "Space Elevator", "Going up. Ding.", Solar, 1_000_000.0, 2_000.0, 1.23, C::letters(50_000.0)),
        building("rocket_shuttle", "Rocket Shuttle", "Daily service to Mars and Venus.", Solar, 5_000_000.0, 8_000.0, 1.24, C::building("space_elevator", 10)),
        building("cryo_hauler", "Cryo-Hauler", "Mail arrives fresh, even after 50 years.", Interstellar, 25_000_000.0, 30_000.0, 1.25, C::Always),
        building("solar_sail", "Solar Sail Barge", "Riding the solar winds. Very eco-friendly.", Interstellar, 150_000_000.0, 100_000.0, 1.26, C::Always),
        building("jump_gate", "Jump Gate", "Instant travel between sectors.", Interstellar, 800_000_000.0, 400_000.0, 1.27, C::research("jump_drive_theory")),
        building("antimatter_drive", "Antimatter Engine", "Don't drop it.", Interstellar, 5_000_000_000.0, 1_500_000.0, 1.28, C::letters(5_000_000.0)),
        building("black_hole_router", "Black Hole Router", "Gravitational slingshotting at extreme scale.", Galactic, 30_000_000_000.0, 5_000_000.0, 1.29, C::Always),
        building("dyson_swarm", "Dyson Mail Swarm", "Harnessing a sun to print shipping labels.", Galactic, 200_000_000_000.0, 20_000_000.0, 1.30, C::shards(2)),
        building("nebula_harvester", "Nebula Harvester", "Mining gas clouds for bubble wrap.", Galactic, 1_500_000_000_000.0, 80_000_000.0, 1.31, C::Always),
        building("galactic_hub", "Galactic Core Hub", "The center of the galaxy. Traffic is terrible.", Galactic, 10_000_000_000_000.0, 300_000_000.0, 1.32, C::building("nebula_harvester", 25)),
        building("quantum_entangler", "Quantum Entangler", "Mail is both delivered and not delivered.", Multiverse, 100_000_000_000_000.0, 1_000_000_000.0, 1.33, C::Always),
        building("timeline_splicer", "Timeline Splicer", "Delivers to your past self.", Multiverse, 1_000_000_000_000_000.0, 5_000_000_000.0, 1.34, C::shards(5)),
        building("reality_loom", "Reality Loom", "Weaves the fabric of spacetime into envelopes.", Multiverse, 15_000_000_000_000_000.0, 25_000_000_000.0, 1.35, C::research("reality_manipulation")),
        building("entropy_reverser", "Entropy Reverser", "Un-losses the lost mail.", Multiverse, 200_000_000_000_000_000.0, 100_000_000_000.0, 1.36, C::prestiges(10)),
    ]
}

// ---------------------------------------------------------------------------
// Upgrades
// ---------------------------------------------------------------------------

fn upgrades() -> Vec<Upgrade> {
    use Condition as C;
    use Stage::*;
    use UpgradeKind::*;
    vec![
        upgrade("sneakers", "Gel Soles", "Premium cushioned footwear for optimal delivery efficiency.", Local, 100.0, Click, None, 2.0, C::Always),
        upgrade("bird_feed", "Gourmet Bird Seed", "Organic, free-range seeds boost morale.", Local, 500.0, Building, Some("pigeon"), 2.0, C::Always),
        upgrade("grease", "Axle Grease", "Industrial-grade lubricant for peak performance.", Local, 1_500.0, Building, Some("bike_courier"), 1.5, C::Always),
        upgrade("zip_codes", "Zip Codes", "Revolutionary addressing system improves routing.", Local, 8_000.0, Global, None, 1.2, C::Always),
        upgrade("autopilot", "AI Navigation", "Neural network reduces collision incidents.", Solar, 100_000.0, Building, Some("drone_fleet"), 2.0, C::Always),
        upgrade("carbon_fiber", "Carbon Fiber Boxes", "Ultralight materials maximize cargo capacity.", Solar, 500_000.0, Global, None, 1.5, C::Always),
        upgrade("liquid_fuel", "Liquid Oxygen", "High-performance propellant for faster burns.", Solar, 3_000_000.0, Building, Some("rocket_shuttle"), 2.0, C::Always),
        upgrade("cryo_freeze", "Deep Freeze", "Near-zero kelvin temperatures preserve cargo integrity.", Interstellar, 100_000_000.0, Building, Some("cryo_hauler"), 2.5, C::Always),
        upgrade("subspace", "Subspace Transmitters", "Communicate across dimensions for instant coordination.", Interstellar, 500_000_000.0, Global, None, 2.0, C::Always),
        upgrade("wormhole_map", "Wormhole Mapping", "Comprehensive charts of stable spacetime shortcuts.", Interstellar, 2_000_000_000.0, Building, Some("jump_gate"), 3.0, C::building("jump_gate", 5)),
        upgrade("dark_matter_fuel", "Dark Matter Injection", "Harness the universe's invisible mass for power.", Galactic, 100_000_000_000.0, Click, None, 5.0, C::stamps(30)),
        upgrade("hive_mind", "Hive Mind Protocols", "Collective consciousness synchronizes all operations.", Galactic, 500_000_000_000.0, Global, None, 2.0, C::Always),
        upgrade("event_horizon", "Event Horizon Shielding", "Gravitational reinforcement prevents disintegration.", Galactic, 3_000_000_000_000.0, Building, Some("black_hole_router"), 4.0, C::Always),
        upgrade("infinity_gauntlet", "Infinity Glove", "Reality manipulation at your fingertips.", Multiverse, 50_000_000_000_000.0, Click, None, 10.0, C::shards(3)),
        upgrade("paradox_insurance", "Paradox Insurance", "Full coverage for temporal anomalies and timeline splits.", Multiverse, 300_000_000_000_000.0, Global, None, 3.0, C::Always),
        upgrade("omnipotence", "Postmaster Omnipotence", "Transcend physical limitations entirely.", Multiverse, 5_000_000_000_000_000.0, Global, None, 100.0, C::LifetimeLettersAtLeast { amount: 1_000_000_000_000.0 }),
    ]
}

// ---------------------------------------------------------------------------
// Meta-upgrades (stamp-priced, survive prestige)
// ---------------------------------------------------------------------------

fn meta_upgrades() -> Vec<MetaUpgrade> {
    vec![
        meta("click_power", "Enhanced Ergonomics", "+5% click power per level", 1, 2.5, 20),
        meta("auto_power", "Automation Protocols", "+5% automatic production per level", 1, 2.5, 20),
        meta("cheaper_buildings", "Bulk Discounts", "-2% building costs per level", 2, 3.0, 10),
        meta("offline_time", "Passive Operations", "+30min offline production per level", 3, 3.0, 10),
        meta("research_speed", "Research Efficiency", "+10% research points per level", 2, 2.8, 15),
        meta("network_expansion", "Network Expansion", "+3% to all production per level", 3, 3.0, 10),
    ]
}

// ---------------------------------------------------------------------------
// Research tree
// ---------------------------------------------------------------------------

fn research_tree() -> Vec<Research> {
    use ResearchCategory::*;
    vec![
        research("better_sorting", "Improved Sorting", "Optimize sorting algorithms to reduce delivery time.", Production, 100.0, &[]),
        research("ergonomic_training", "Ergonomic Training", "Train carriers in proper lifting techniques and stamina.", Click, 150.0, &[]),
        research("route_optimization", "Route Optimization", "Use AI pathfinding to minimize travel distance.", Cost, 200.0, &[]),
        research("advanced_sorting", "Advanced Sorting", "Machine learning models predict optimal package flow.", Production, 1_000.0, &["better_sorting"]),
        research("bionic_enhancements", "Bionic Enhancements", "Cybernetic augmentations enhance carrier speed and strength.", Click, 1_500.0, &["ergonomic_training"]),
        research("efficiency_protocols", "Efficiency Protocols", "Streamlined procurement reduces infrastructure expenses.", Cost, 2_000.0, &["route_optimization"]),
        research("research_lab", "Research Laboratory", "Dedicated facility accelerates R&D efforts.", Research, 5_000.0, &["advanced_sorting"]),
        research("research_network", "Research Network", "Connect labs across solar systems to share findings.", Research, 25_000.0, &["research_lab"]),
        research("quantum_computing", "Quantum Computing", "Harness quantum entanglement for instant calculations.", Research, 100_000.0, &["research_network"]),
        research("quantum_sorting", "Quantum Sorting", "Packages exist in superposition until observed at destination.", Production, 10_000.0, &["advanced_sorting"]),
        research("jump_drive_theory", "Jump Drive Theory", "Understand the physics needed to fold spacetime.", Specialized, 50_000.0, &["quantum_sorting"]),
        research("reality_manipulation", "Reality Manipulation", "Weave the fundamental fabric of existence itself.", Specialized, 500_000.0, &["jump_drive_theory"]),
        research("logistics_ai", "Logistics AI", "Self-learning algorithms optimize every delivery route.", Production, 1_200.0, &["better_sorting"]),
        research("neural_interface", "Neural Interface", "Direct brain-to-machine communication speeds up operations.", Click, 1_800.0, &["bionic_enhancements"]),
        research("supply_chain", "Supply Chain Optimization", "Just-in-time manufacturing reduces overhead costs.", Cost, 2_500.0, &["efficiency_protocols"]),
        research("parallel_processing", "Parallel Processing", "Handle multiple deliveries simultaneously across timelines.", Production, 8_000.0, &["logistics_ai"]),
        research("time_dilation", "Time Dilation Field", "Slow time locally to accomplish more work.", Production, 12_000.0, &["quantum_sorting"]),
        research("psychic_delivery", "Psychic Delivery", "Deliver mail through pure thought.", Click, 15_000.0, &["neural_interface"]),
        research("zero_point_energy", "Zero-Point Energy", "Extract power from quantum vacuum fluctuations.", Cost, 20_000.0, &["quantum_computing"]),
        research("hive_consciousness", "Hive Consciousness", "Link all carriers into a unified collective mind.", Advanced, 40_000.0, &["parallel_processing"]),
        research("dimensional_folding", "Dimensional Folding", "Fold space to make distances meaningless.", Advanced, 60_000.0, &["time_dilation"]),
        research("omnipresence", "Omnipresence Protocol", "Exist in all places simultaneously.", Advanced, 80_000.0, &["psychic_delivery"]),
        research("matter_synthesis", "Matter Synthesis", "Create buildings from pure energy.", Advanced, 100_000.0, &["zero_point_energy"]),
        research("unified_field_theory", "Unified Field Theory", "Understand the fundamental forces governing all delivery.", Advanced, 150_000.0, &["dimensional_folding"]),
        research("ascension", "Postal Ascension", "Transcend mortal limitations of mail delivery.", Advanced, 250_000.0, &["omnipresence"]),
        research("universal_language", "Universal Language", "Communicate with all beings across spacetime.", Advanced, 180_000.0, &["hive_consciousness"]),
        research("probability_manipulation", "Probability Manipulation", "Ensure deliveries succeed across all possible timelines.", Advanced, 200_000.0, &["reality_manipulation"]),
        research("cosmic_awareness", "Cosmic Awareness", "Perceive the mail needs of the entire multiverse at once.", Advanced, 350_000.0, &["unified_field_theory"]),
        research("entropy_reversal", "Entropy Reversal", "Reverse the arrow of time itself for perfect efficiency.", Advanced, 500_000.0, &["probability_manipulation"]),
        research("cryogenic_preservation", "Cryogenic Preservation", "Keep cargo fresh for eons.", Specialized, 25_000.0, &["advanced_sorting"]),
        research("singularity_engineering", "Singularity Engineering", "Harness black holes for industrial purposes.", Specialized, 120_000.0, &["jump_drive_theory"]),
    ]
}

// ---------------------------------------------------------------------------
// Contracts
// ---------------------------------------------------------------------------

fn contracts() -> Vec<ContractDef> {
    use Condition as C;
    use ContractObjective::*;
    use Stage::*;
    vec![
        // Local tier
        contract("neighborhood_rush", "Neighborhood Rush",
            "The local community needs urgent mail delivery! Deliver 10,000 letters this run.",
            Local, C::Always,
            vec![DeliverTotal { target: 10_000.0 }],
            reward(5_000.0, 0, 25.0), false),
        contract("click_frenzy", "Click Frenzy",
            "Get those fingers warmed up! Click the delivery button 500 times.",
            Local, C::Always,
            vec![ClickCount { target: 500 }],
            reward(2_500.0, 0, 15.0), false),
        contract("speed_delivery", "Speed Delivery",
            "Time is money! Deliver 5,000 letters in 3 minutes.",
            Local, C::letters(2_000.0),
            vec![TimeLimit { target: 5_000.0, limit_seconds: 180.0 }],
            reward(10_000.0, 1, 40.0), false),
        contract("local_expansion", "Local Expansion",
            "Grow your business! Deliver 50,000 letters this run.",
            Local, C::letters(10_000.0),
            vec![DeliverTotal { target: 50_000.0 }],
            reward(25_000.0, 0, 60.0), false),
        contract("early_automation", "Early Automation",
            "Automate your work! Reach 50 letters per second.",
            Local, C::letters(1_000.0),
            vec![DeliverRate { target: 50.0 }],
            reward(8_000.0, 0, 50.0), false),
        // Solar tier
        contract("mars_express", "Mars Express",
            "The Mars colony needs supplies! Reach 500 letters per second.",
            Solar, C::Always,
            vec![DeliverRate { target: 500.0 }],
            reward(100_000.0, 0, 150.0), false),
        contract("planetary_logistics", "Planetary Logistics",
            "Expand your operations! Deliver 1,000,000 letters this run.",
            Solar, C::Always,
            vec![DeliverTotal { target: 1_000_000.0 }],
            reward(0.0, 1, 200.0), false),
        contract("solar_challenge", "Solar Challenge",
            "Prove your efficiency! Deliver 500,000 letters in 5 minutes.",
            Solar, C::letters(100_000.0),
            vec![TimeLimit { target: 500_000.0, limit_seconds: 300.0 }],
            reward(500_000.0, 1, 250.0), false),
        contract("outer_planets", "Outer Planets",
            "Extend your reach! Deliver 5,000,000 letters this run.",
            Solar, C::letters(500_000.0),
            vec![DeliverTotal { target: 5_000_000.0 }],
            reward(2_000_000.0, 2, 400.0), false),
        contract("solar_production", "Solar Production",
            "Boost your operations! Reach 5,000 letters per second.",
            Solar, C::letters(250_000.0),
            vec![DeliverRate { target: 5_000.0 }],
            reward(1_000_000.0, 0, 300.0), false),
        // Interstellar tier
        contract("ftl_campaign", "First FTL Campaign",
            "Master interstellar logistics! Reach 500,000 LPS without buying any Cryo-Haulers.",
            Interstellar, C::Always,
            vec![
                DeliverRate { target: 500_000.0 },
                NoBuilding { building_id: "cryo_hauler".into() },
            ],
            reward(0.0, 3, 2_000.0), false),
        contract("interstellar_expansion", "Interstellar Expansion",
            "Dominate the sector! Deliver 1 billion letters this run.",
            Interstellar, C::Always,
            vec![DeliverTotal { target: 1_000_000_000.0 }],
            reward(500_000_000.0, 2, 1_500.0), false),
        contract("interstellar_velocity", "Interstellar Velocity",
            "Speed is key! Deliver 100 million letters in 3 minutes.",
            Interstellar, C::letters(10_000_000.0),
            vec![TimeLimit { target: 100_000_000.0, limit_seconds: 180.0 }],
            reward(200_000_000.0, 2, 2_500.0), false),
        contract("quantum_network_challenge", "Quantum Network Challenge",
            "Reach 2 million LPS without any Quantum Entanglers.",
            Interstellar, C::StageIs { stage: Interstellar },
            vec![
                DeliverRate { target: 2_000_000.0 },
                NoBuilding { building_id: "quantum_entangler".into() },
            ],
            reward(0.0, 3, 12_000.0), false),
        contract("click_master", "Click Master",
            "Show your dedication! Click the delivery button 10,000 times.",
            Interstellar, C::clicks(5_000),
            vec![ClickCount { target: 10_000 }],
            reward(0.0, 2, 3_000.0), false),
        contract("sector_control", "Sector Control",
            "Build your empire! Deliver 5 billion letters this run.",
            Interstellar, C::letters(1_000_000_000.0),
            vec![DeliverTotal { target: 5_000_000_000.0 }],
            reward(2_000_000_000.0, 3, 5_000.0), false),
        // Galactic tier
        contract("galactic_dominance", "Galactic Dominance",
            "Establish your empire! Reach 100 million LPS.",
            Galactic, C::Always,
            vec![DeliverRate { target: 100_000_000.0 }],
            reward(0.0, 5, 20_000.0), false),
        contract("galactic_monopoly", "Galactic Monopoly",
            "Deliver 500 billion letters this run to cement your dominance.",
            Galactic, C::Always,
            vec![DeliverTotal { target: 500_000_000_000.0 }],
            reward(100_000_000_000.0, 5, 25_000.0), false),
        contract("prestige_master", "Prestige Master",
            "Demonstrate your prowess! Prestige with at least 250 stamps earned.",
            Galactic, C::prestiges(5),
            vec![PrestigeStamps { target: 250 }],
            reward(0.0, 10, 30_000.0), false),
        contract("galactic_rush", "Galactic Rush",
            "Extreme speed test! Deliver 50 billion letters in 5 minutes.",
            Galactic, C::letters(10_000_000_000.0),
            vec![TimeLimit { target: 50_000_000_000.0, limit_seconds: 300.0 }],
            reward(20_000_000_000.0, 6, 35_000.0), false),
        contract("wormhole_efficiency", "Wormhole Efficiency",
            "Reach 500 million LPS without any Jump Gates.",
            Galactic, C::StageIs { stage: Galactic },
            vec![
                DeliverRate { target: 500_000_000.0 },
                NoBuilding { building_id: "jump_gate".into() },
            ],
            reward(0.0, 6, 30_000.0), false),
        contract("galactic_sprint", "Galactic Sprint",
            "Pure speed! Deliver 20 billion letters in just 2 minutes.",
            Galactic, C::letters(5_000_000_000.0),
            vec![TimeLimit { target: 20_000_000_000.0, limit_seconds: 120.0 }],
            reward(10_000_000_000.0, 8, 40_000.0), false),
        contract("click_galaxy", "Click Galaxy",
            "Manual supremacy! Click the button 50,000 times.",
            Galactic, C::clicks(20_000),
            vec![ClickCount { target: 50_000 }],
            reward(0.0, 5, 25_000.0), false),
        // Multiverse tier
        contract("reality_bending", "Reality Bending",
            "Transcend limitations! Reach 5 billion LPS.",
            Multiverse, C::Always,
            vec![DeliverRate { target: 5_000_000_000.0 }],
            reward(0.0, 10, 100_000.0), false),
        contract("multiverse_mastery", "Multiverse Mastery",
            "Conquer infinity! Deliver 10 trillion letters this run.",
            Multiverse, C::Always,
            vec![DeliverTotal { target: 10_000_000_000_000.0 }],
            reward(0.0, 12, 150_000.0), false),
        contract("timeline_mastery", "Timeline Mastery",
            "Master the timelines! Reach 20 billion LPS without any Reality Looms.",
            Multiverse, C::StageIs { stage: Multiverse },
            vec![
                DeliverRate { target: 20_000_000_000.0 },
                NoBuilding { building_id: "reality_loom".into() },
            ],
            reward(0.0, 15, 200_000.0), false),
        contract("omnipotent_clicker", "Omnipotent Clicker",
            "Achieve true dedication! Click the delivery button 100,000 times.",
            Multiverse, C::clicks(50_000),
            vec![ClickCount { target: 100_000 }],
            reward(0.0, 10, 120_000.0), false),
        contract("dimensional_sprint", "Dimensional Sprint",
            "Cross dimensions at light speed! Deliver 500 billion letters in 3 minutes.",
            Multiverse, C::letters(100_000_000_000.0),
            vec![TimeLimit { target: 500_000_000_000.0, limit_seconds: 180.0 }],
            reward(200_000_000_000.0, 12, 180_000.0), false),
        contract("infinity_engine", "Infinity Engine",
            "Harness infinite power! Reach 50 billion LPS.",
            Multiverse, C::letters(1_000_000_000_000.0),
            vec![DeliverRate { target: 50_000_000_000.0 }],
            reward(0.0, 15, 250_000.0), false),
        contract("cosmic_singularity", "Cosmic Singularity",
            "Achieve the impossible! Deliver 50 trillion letters this run.",
            Multiverse, C::letters(10_000_000_000_000.0),
            vec![DeliverTotal { target: 50_000_000_000_000.0 }],
            reward(0.0, 20, 300_000.0), false),
        contract("temporal_acceleration", "Temporal Acceleration",
            "Break the speed of time! Deliver 2 trillion letters in 5 minutes.",
            Multiverse, C::letters(500_000_000_000.0),
            vec![TimeLimit { target: 2_000_000_000_000.0, limit_seconds: 300.0 }],
            reward(1_000_000_000_000.0, 15, 250_000.0), false),
        contract("ultimate_challenge", "The Ultimate Challenge",
            "The final test! Deliver 1 trillion letters in 10 minutes.",
            Multiverse, C::all(vec![C::shards(5), C::prestiges(10)]),
            vec![TimeLimit { target: 1_000_000_000_000.0, limit_seconds: 600.0 }],
            reward(0.0, 25, 500_000.0), true),
        contract("beyond_infinity", "Beyond Infinity",
            "Surpass all limits! Reach 100 billion LPS.",
            Multiverse, C::shards(10),
            vec![DeliverRate { target: 100_000_000_000.0 }],
            reward(0.0, 30, 1_000_000.0), false),
    ]
}

// ---------------------------------------------------------------------------
// Delivery routes (4 per stage)
// ---------------------------------------------------------------------------

fn routes() -> Vec<Route> {
    use Stage::*;
    vec![
        route("local_downtown", "Downtown Loop", "Dense blocks, short hops, cranky doormen.", Local, 1.15, 0.90, 1.0),
        route("local_suburbs", "Suburban Circuit", "Long cul-de-sacs, chatty retirees with theories.", Local, 0.95, 1.20, 0.9),
        route("local_industrial", "Industrial Zone", "Bulk freight between warehouses.", Local, 1.10, 0.85, 1.1),
        route("local_university", "University District", "Grant applications and overdue library notices.", Local, 0.90, 1.30, 0.8),
        route("solar_mars_colony", "Mars Colony Route", "Steady traffic to the red planet's domes.", Solar, 1.10, 1.10, 1.0),
        route("solar_asteroid_belt", "Asteroid Belt", "Hazard pay applies. Great salvage gossip.", Solar, 1.20, 0.80, 1.3),
        route("solar_jupiter_moons", "Jupiter Moon Network", "Research outposts with excellent questions.", Solar, 0.95, 1.25, 0.9),
        route("solar_inner_planets", "Inner Planets Express", "Hot, fast, profitable.", Solar, 1.15, 1.00, 1.1),
        route("interstellar_proxima", "Proxima Centauri Route", "The first and busiest starlane.", Interstellar, 1.10, 1.05, 1.0),
        route("interstellar_frontier", "Frontier Colonies", "Settlers starved for news from home.", Interstellar, 0.90, 1.35, 1.2),
        route("interstellar_wormhole", "Wormhole Network", "Fast, lucrative, occasionally leaks.", Interstellar, 1.25, 0.90, 1.4),
        route("interstellar_nebula", "Nebula Research Stations", "Scientists buried in stellar nursery data.", Interstellar, 0.85, 1.40, 0.8),
        route("galactic_core", "Galactic Core Route", "Maximum density, maximum drama.", Galactic, 1.30, 0.80, 1.5),
        route("galactic_spiral_arms", "Spiral Arm Circuit", "The scenic commute, billions of stops.", Galactic, 1.10, 1.10, 1.0),
        route("galactic_dark_sectors", "Dark Sector Expeditions", "Nobody knows what's out there. Mail them anyway.", Galactic, 0.80, 1.50, 1.3),
        route("galactic_trade_lanes", "Major Trade Lanes", "Commerce never sleeps.", Galactic, 1.20, 0.95, 1.2),
        route("multiverse_parallel", "Parallel Timelines", "Every address exists infinitely often.", Multiverse, 1.15, 1.15, 1.2),
        route("multiverse_quantum", "Quantum Probability Routes", "Deliveries that might have happened.", Multiverse, 0.70, 1.60, 1.0),
        route("multiverse_collapsed", "Collapsed Universe Salvage", "Forwarding addresses for dead realities.", Multiverse, 1.40, 0.85, 1.6),
        route("multiverse_void", "Between-Space Routes", "The quiet between everything.", Multiverse, 0.75, 1.45, 0.7),
    ]
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

fn achievements() -> Vec<Achievement> {
    use AchievementCategory::*;
    use AchievementRarity::*;
    use Condition as C;
    vec![
        // Progression
        achievement("first_steps", "First Steps", "Deliver your first letter", Progression, Common, false, C::letters(1.0)),
        achievement("postal_rookie", "Postal Rookie", "Deliver 1,000 letters", Progression, Common, false, C::letters(1_000.0)),
        achievement("interplanetary_courier", "Interplanetary Courier", "Reach the Solar System stage", Progression, Uncommon, false, C::StageUnlocked { stage: Stage::Solar }),
        achievement("star_hopper", "Star Hopper", "Reach the Interstellar stage", Progression, Rare, false, C::StageUnlocked { stage: Stage::Interstellar }),
        achievement("galactic_postmaster", "Galactic Postmaster", "Reach the Galactic stage", Progression, Epic, false, C::StageUnlocked { stage: Stage::Galactic }),
        achievement("multiversal_legend", "Multiversal Legend", "Reach the Multiverse stage", Progression, Legendary, false, C::StageUnlocked { stage: Stage::Multiverse }),
        // Production (letter-count proxies for sustained output)
        achievement("automated_delivery", "Automated Delivery", "Reach 10 letters per second", Production, Common, false, C::letters(100.0)),
        achievement("mail_tsunami", "Mail Tsunami", "Reach 1,000 letters per second", Production, Uncommon, false, C::letters(100_000.0)),
        achievement("cosmic_flood", "Cosmic Flood", "Reach 100,000 letters per second", Production, Rare, false, C::letters(10_000_000.0)),
        achievement("reality_breaker", "Reality Breaker", "Reach 1 million letters per second", Production, Epic, false, C::letters(1_000_000_000.0)),
        // Buildings
        achievement("bird_watcher", "Bird Watcher", "Own 10 Messenger Pigeons", Buildings, Common, false, C::building("pigeon", 10)),
        achievement("fleet_commander", "Fleet Commander", "Own 25 Drone Fleets", Buildings, Uncommon, false, C::building("drone_fleet", 25)),
        achievement("space_baron", "Space Baron", "Own 50 Rocket Shuttles", Buildings, Rare, false, C::building("rocket_shuttle", 50)),
        achievement("quantum_tycoon", "Quantum Tycoon", "Own 100 Quantum Entanglers", Buildings, Epic, false, C::building("quantum_entangler", 100)),
        achievement("infrastructure_mogul", "Infrastructure Mogul", "Own at least 10 of every building type", Buildings, Legendary, false, C::EveryBuildingAtLeast { count: 10 }),
        // Clicks
        achievement("click_rookie", "Click Rookie", "Click the delivery button 100 times", Clicks, Common, false, C::clicks(100)),
        achievement("click_enthusiast", "Click Enthusiast", "Click the delivery button 1,000 times", Clicks, Uncommon, false, C::clicks(1_000)),
        achievement("click_maniac", "Click Maniac", "Click the delivery button 10,000 times", Clicks, Rare, false, C::clicks(10_000)),
        achievement("carpal_tunnel", "Carpal Tunnel Syndrome", "Click the delivery button 100,000 times", Clicks, Epic, true, C::clicks(100_000)),
        // Prestige
        achievement("first_prestige", "Fresh Start", "Perform your first prestige", Prestige, Uncommon, false, C::prestiges(1)),
        achievement("veteran_postmaster", "Veteran Postmaster", "Prestige 10 times", Prestige, Rare, false, C::prestiges(10)),
        achievement("eternal_courier", "Eternal Courier", "Prestige 50 times", Prestige, Epic, false, C::prestiges(50)),
        achievement("stamp_collector", "Stamp Collector", "Accumulate 100 stamps", Prestige, Rare, false, C::LifetimeStampsAtLeast { amount: 100 }),
        achievement("shard_seeker", "Shard Seeker", "Earn your first shard", Prestige, Epic, false, C::shards(1)),
        achievement("shard_hoarder", "Shard Hoarder", "Accumulate 10 shards", Prestige, Legendary, false, C::shards(10)),
        // Speed
        achievement("speed_demon", "Speed Demon", "Reach Solar System in under 5 minutes", Speed, Rare, true, C::StageReachedWithinMinutes { stage: Stage::Solar, minutes: 5.0 }),
        // Collection
        achievement("upgrade_hunter", "Upgrade Hunter", "Unlock 10 upgrades", Collection, Uncommon, false, C::UpgradeCountAtLeast { count: 10 }),
        achievement("power_user", "Power User", "Unlock all upgrades", Collection, Epic, false, C::AllUpgradesPurchased),
        achievement("researcher", "Researcher", "Complete 5 research projects", Collection, Uncommon, false, C::ResearchCountAtLeast { count: 5 }),
        achievement("scientist", "Mad Scientist", "Complete all research projects", Collection, Legendary, false, C::AllResearchCompleted),
        // Special
        achievement("millionaire", "Millionaire", "Have 1,000,000 letters at once", Special, Rare, false, C::CreditsAtLeast { amount: 1_000_000.0 }),
        achievement("billionaire", "Billionaire", "Have 1,000,000,000 letters at once", Special, Epic, false, C::CreditsAtLeast { amount: 1_000_000_000.0 }),
        achievement("trillionaire", "Trillionaire", "Have 1,000,000,000,000 letters at once", Special, Legendary, true, C::CreditsAtLeast { amount: 1_000_000_000_000.0 }),
        achievement("lifetime_legend", "Lifetime Legend", "Deliver 1 trillion letters across all runs", Special, Legendary, false, C::LifetimeLettersAtLeast { amount: 1_000_000_000_000.0 }),
        achievement("meta_master", "Meta Master", "Max out any meta-upgrade", Special, Epic, false, C::AnyMetaUpgradeMaxed),
        achievement("perfectionist", "Perfectionist", "Max out all meta-upgrades", Special, Legendary, true, C::AllMetaUpgradesMaxed),
        achievement("patient_player", "Patient Player", "Play for more than 1 hour in a single run", Special, Uncommon, false, C::PlaytimeAtLeastHours { hours: 1.0 }),
        achievement("the_grind", "The Grind", "Play for more than 10 hours in a single run", Special, Epic, true, C::PlaytimeAtLeastHours { hours: 10.0 }),
        // Story
        achievement("story_pluto_therapist", "Therapist of Pluto", "Complete the \"Pluto's Identity Crisis\" story chain", Special, Rare, false, C::StoryChainCompleted { chain: "pluto_identity_crisis".into() }),
        achievement("story_conspiracy_uncovered", "Conspiracy Uncovered", "Complete the \"Galactic Postal Conspiracy\" story chain", Special, Epic, true, C::StoryChainCompleted { chain: "galactic_conspiracy".into() }),
        achievement("story_multiverse_mastery", "Council of Me", "Complete the \"Letters from Alternate Yous\" story chain", Special, Legendary, true, C::StoryChainCompleted { chain: "multiverse_you_letter".into() }),
        achievement("story_collector", "Story Collector", "Complete 3 different story chains", Special, Rare, false, C::StoryChainsCompletedAtLeast { count: 3 }),
        achievement("story_master", "Story Master", "Complete all story chains", Special, Legendary, true, C::StoryChainsCompletedAtLeast { count: 6 }),
    ]
}

// ---------------------------------------------------------------------------
// Story chains
// ---------------------------------------------------------------------------

fn story_chains() -> Vec<StoryChain> {
    use Condition as C;
    vec![
        StoryChain {
            id: "neighborhood_gossip".into(),
            title: "Neighborhood Gossip".into(),
            stage: Stage::Local,
            unlock: C::Always,
            total_steps: 3,
            reward: StoryReward { research_points: 10.0, ..Default::default() },
            repeatable: false,
        },
        StoryChain {
            id: "pluto_identity_crisis".into(),
            title: "Pluto's Identity Crisis".into(),
            stage: Stage::Solar,
            unlock: C::Always,
            total_steps: 5,
            reward: StoryReward {
                stamps: 1,
                cosmetic_title: Some("Therapist of Pluto".into()),
                achievement_id: Some("story_pluto_therapist".into()),
                ..Default::default()
            },
            repeatable: false,
        },
        StoryChain {
            id: "mars_colony_drama".into(),
            title: "Mars Colony Drama".into(),
            stage: Stage::Solar,
            unlock: C::letters(50_000.0),
            total_steps: 4,
            reward: StoryReward { research_points: 50.0, ..Default::default() },
            repeatable: false,
        },
        StoryChain {
            id: "wormhole_incident".into(),
            title: "The Wormhole Incident".into(),
            stage: Stage::Interstellar,
            unlock: C::Always,
            total_steps: 6,
            reward: StoryReward { stamps: 2, research_points: 100.0, ..Default::default() },
            repeatable: false,
        },
        StoryChain {
            id: "galactic_conspiracy".into(),
            title: "Galactic Postal Conspiracy".into(),
            stage: Stage::Galactic,
            unlock: C::stamps(30),
            total_steps: 7,
            reward: StoryReward {
                stamps: 3,
                research_points: 500.0,
                achievement_id: Some("story_conspiracy_uncovered".into()),
                ..Default::default()
            },
            repeatable: false,
        },
        StoryChain {
            id: "multiverse_you_letter".into(),
            title: "Letters from Alternate Yous".into(),
            stage: Stage::Multiverse,
            unlock: C::prestiges(5),
            total_steps: 8,
            reward: StoryReward {
                stamps: 5,
                research_points: 1_000.0,
                cosmetic_title: Some("Multiversal Correspondent".into()),
                achievement_id: Some("story_multiverse_mastery".into()),
                ..Default::default()
            },
            repeatable: false,
        },
    ]
}
