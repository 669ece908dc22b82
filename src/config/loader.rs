//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the loot
//! configuration documents from JSON files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{LootError, LootResult};

use super::types::{
    BiomeSpecialDrops, EconomyTierBasedLoot, EquipmentByTier, LootCategory, LootConfig,
    ProgressionScaling, QuantityRange, SpawnLocation, SpecialEvents, TierLootConfig,
    TierLootMap, WeaponRarityScaling, ZombieDropTier,
};
use std::collections::HashMap;

/// Loads and provides access to the loot configuration.
///
/// The `ConfigLoader` reads the three JSON documents from a configuration
/// directory once, during construction, and hands out references to the
/// parsed data for the rest of its lifetime. Construct it during startup
/// and share it with consumers; the documents are never re-read and never
/// mutated after a successful load.
///
/// # Directory Structure
///
/// The configuration directory should contain:
/// ```text
/// config/rpg_overhaul/
/// ├── loot_config.json             # Categories, locations, progression
/// ├── economy_tier_based_loot.json # Economy and weapon rarity scaling
/// └── tier_based_loot.json         # Per-tier drop rules
/// ```
///
/// # Example
///
/// ```no_run
/// use loot_config::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rpg_overhaul").unwrap();
///
/// let category = loader.get_loot_category("weapons_ranged").unwrap();
/// println!("Category: {}", category.description);
///
/// let multiplier = loader.rarity_multiplier("legendary").unwrap();
/// println!("Legendary multiplier: {multiplier}");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    loot: LootConfig,
    economy: EconomyTierBasedLoot,
    tiers: TierLootMap,
}

impl ConfigLoader {
    /// Loads the three configuration documents from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///   (e.g., "./config/rpg_overhaul")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any document is missing or unreadable ([`LootError::ConfigNotFound`])
    /// - Any document contains invalid JSON ([`LootError::ConfigParseError`])
    ///
    /// A failed load constructs nothing, so a later call against a corrected
    /// directory succeeds.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use loot_config::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/rpg_overhaul")?;
    /// # Ok::<(), loot_config::error::LootError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> LootResult<Self> {
        let path = path.as_ref();

        let loot = Self::load_json::<LootConfig>(&path.join("loot_config.json"))?;
        let economy =
            Self::load_json::<EconomyTierBasedLoot>(&path.join("economy_tier_based_loot.json"))?;
        let tiers = Self::load_json::<TierLootMap>(&path.join("tier_based_loot.json"))?;

        debug!(
            categories = loot.loot_categories.len(),
            locations = loot.spawn_locations.len(),
            tiers = tiers.len(),
            "loaded loot configuration from {}",
            path.display()
        );

        Ok(Self {
            loot,
            economy,
            tiers,
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> LootResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LootError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| LootError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the full `loot_config.json` document.
    pub fn loot_config(&self) -> &LootConfig {
        &self.loot
    }

    /// Returns the full `economy_tier_based_loot.json` document.
    pub fn economy_config(&self) -> &EconomyTierBasedLoot {
        &self.economy
    }

    /// Returns all loot categories.
    pub fn loot_categories(&self) -> &HashMap<String, LootCategory> {
        &self.loot.loot_categories
    }

    /// Returns all spawn locations.
    pub fn spawn_locations(&self) -> &HashMap<String, SpawnLocation> {
        &self.loot.spawn_locations
    }

    /// Returns the rarity name to stat multiplier map.
    pub fn rarity_multipliers(&self) -> &HashMap<String, f64> {
        &self.loot.rarity_multipliers
    }

    /// Returns the four progression bands.
    pub fn progression_scaling(&self) -> &ProgressionScaling {
        &self.loot.progression_scaling
    }

    /// Returns the zombie tier to drop rules map.
    pub fn zombie_drops(&self) -> &HashMap<String, ZombieDropTier> {
        &self.loot.zombie_drops
    }

    /// Returns the three special events.
    pub fn special_events(&self) -> &SpecialEvents {
        &self.loot.special_events
    }

    /// Returns the loot tier to weapon rarity scaling map.
    pub fn weapon_rarity_scaling(&self) -> &HashMap<String, WeaponRarityScaling> {
        &self.economy.weapon_rarity_scaling
    }

    /// Returns the loot tier to equipment pool map.
    pub fn equipment_by_tier(&self) -> &HashMap<String, EquipmentByTier> {
        &self.economy.equipment_by_tier
    }

    /// Returns the biome to special drops map.
    pub fn special_drops_by_biome(&self) -> &HashMap<String, BiomeSpecialDrops> {
        &self.economy.special_drops_by_biome
    }

    /// Returns the loot tier to economic value scalar map.
    pub fn economic_scaling(&self) -> &HashMap<String, f64> {
        &self.economy.economic_scaling
    }

    /// Returns the loot tier to item-count range map.
    pub fn loot_quantity_scaling(&self) -> &HashMap<String, QuantityRange> {
        &self.economy.loot_quantity_scaling
    }

    /// Returns the tier name to tier loot rules map.
    pub fn tier_loot(&self) -> &TierLootMap {
        &self.tiers
    }

    /// Gets a loot category by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The category name (e.g., "weapons_ranged")
    ///
    /// # Returns
    ///
    /// Returns the category if found, or `CategoryNotFound` error.
    pub fn get_loot_category(&self, name: &str) -> LootResult<&LootCategory> {
        self.loot
            .loot_categories
            .get(name)
            .ok_or_else(|| LootError::CategoryNotFound {
                name: name.to_string(),
            })
    }

    /// Gets a spawn location by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The spawn location name (e.g., "military")
    ///
    /// # Returns
    ///
    /// Returns the location if found, or `SpawnLocationNotFound` error.
    pub fn get_spawn_location(&self, name: &str) -> LootResult<&SpawnLocation> {
        self.loot
            .spawn_locations
            .get(name)
            .ok_or_else(|| {
                warn!("no location config found for {name}");
                LootError::SpawnLocationNotFound {
                    name: name.to_string(),
                }
            })
    }

    /// Gets the tier loot rules for a tier name.
    ///
    /// # Arguments
    ///
    /// * `tier` - The tier name (e.g., "tier_3")
    ///
    /// # Returns
    ///
    /// Returns the tier rules if found, or `TierNotFound` error.
    pub fn get_tier_loot(&self, tier: &str) -> LootResult<&TierLootConfig> {
        self.tiers.get(tier).ok_or_else(|| {
            warn!("no tier configuration found for {tier}");
            LootError::TierNotFound {
                tier: tier.to_string(),
            }
        })
    }

    /// Gets the stat multiplier for a rarity name, if the rarity is listed.
    pub fn rarity_multiplier(&self, rarity: &str) -> Option<f64> {
        self.loot.rarity_multipliers.get(rarity).copied()
    }
}
