//! Configuration loading and access for the loot system.
//!
//! This module provides functionality to load the loot configuration
//! documents from JSON files, including loot categories, spawn locations,
//! rarity multipliers, progression scaling and tier/economy scaling.
//!
//! # Example
//!
//! ```no_run
//! use loot_config::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rpg_overhaul").unwrap();
//! println!("{} loot categories", loader.loot_categories().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BiomeSpecialDrops, EconomyTierBasedLoot, EquipmentByTier, LootCategory, LootConfig,
    ProgressionBand, ProgressionScaling, QuantityRange, SpawnLocation, SpecialEvent, SpecialEvents,
    TierLootConfig, TierLootMap, WeaponRarityScaling, ZombieDropTier,
};
