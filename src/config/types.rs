//! Configuration types for the loot system.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the three JSON configuration documents.

use serde::Deserialize;
use std::collections::HashMap;

/// A loot category from `loot_config.json`.
///
/// Categories gate what kind of items can appear in a container, based on
/// the player's gamestage and the location being looted.
#[derive(Debug, Clone, Deserialize)]
pub struct LootCategory {
    /// A description of the category.
    pub description: String,
    /// Spawn location names this category may appear in. An empty list
    /// means the category is eligible everywhere.
    pub spawn_locations: Vec<String>,
    /// Minimum gamestage (inclusive) at which this category spawns.
    pub gamestage_min: u32,
    /// Maximum gamestage (inclusive) at which this category spawns.
    pub gamestage_max: u32,
    /// Base probability that the category is considered for a roll.
    pub base_probability: f64,
}

impl LootCategory {
    /// Returns true if this category can spawn at the given gamestage and
    /// location.
    ///
    /// Gamestage bounds are inclusive. An empty `spawn_locations` list
    /// matches any location.
    pub fn eligible(&self, gamestage: u32, location: &str) -> bool {
        if gamestage < self.gamestage_min || gamestage > self.gamestage_max {
            return false;
        }
        self.spawn_locations.is_empty() || self.spawn_locations.iter().any(|l| l == location)
    }
}

/// A spawn location from `loot_config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpawnLocation {
    /// Container types found at this location.
    pub containers: Vec<String>,
    /// Base loot stage contributed by the location.
    pub base_loot_stage: u32,
    /// Abundance factor applied to loot quantity at this location.
    pub loot_abundance: f64,
}

/// One progression band: a contiguous gamestage range with its quality bias
/// and rarity penalty.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressionBand {
    /// Inclusive `[min, max]` gamestage range covered by this band.
    pub gamestage_range: [u32; 2],
    /// Inclusive `[min, max]` quality bias applied inside this band.
    pub quality_bias: [u32; 2],
    /// Penalty subtracted from rarity rolls inside this band.
    pub rarity_penalty: f64,
}

impl ProgressionBand {
    /// Returns true if the gamestage falls inside this band's range.
    pub fn contains(&self, gamestage: u32) -> bool {
        gamestage >= self.gamestage_range[0] && gamestage <= self.gamestage_range[1]
    }
}

/// The four fixed progression bands from `loot_config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressionScaling {
    /// Early game band.
    pub early_game: ProgressionBand,
    /// Mid game band.
    pub mid_game: ProgressionBand,
    /// Late game band.
    pub late_game: ProgressionBand,
    /// End game band.
    pub end_game: ProgressionBand,
}

impl ProgressionScaling {
    /// Returns the band whose gamestage range contains the given gamestage,
    /// checking bands in progression order.
    pub fn band_for(&self, gamestage: u32) -> Option<&ProgressionBand> {
        [
            &self.early_game,
            &self.mid_game,
            &self.late_game,
            &self.end_game,
        ]
        .into_iter()
        .find(|band| band.contains(gamestage))
    }
}

/// Drop rules for one zombie tier from `loot_config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZombieDropTier {
    /// Difficulty tiers of zombies that use these rules.
    pub difficulty_tiers: Vec<u32>,
    /// Loot category names eligible to drop from this tier.
    pub drop_categories: Vec<String>,
    /// Chance that a kill drops anything at all.
    pub drop_chance: f64,
    /// Maximum number of items a single kill may drop.
    pub max_items: u32,
    /// Per-item drop chance overrides for special drops.
    pub special_drops: Option<HashMap<String, f64>>,
}

/// A special loot event from `loot_config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialEvent {
    /// Category names guaranteed to be present in the event's loot.
    pub guaranteed_categories: Option<Vec<String>>,
    /// Multiplier applied on top of normal loot rolls during the event.
    pub bonus_multiplier: f64,
    /// Minimum gamestage before the event can fire. Absent means the event
    /// is always active.
    pub min_gamestage: Option<u32>,
}

impl SpecialEvent {
    /// Returns true if the event is active at the given gamestage.
    pub fn active_at(&self, gamestage: u32) -> bool {
        self.min_gamestage.is_none_or(|min| gamestage >= min)
    }
}

/// The three fixed special events.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialEvents {
    /// Airdropped supply crates.
    pub supply_drops: SpecialEvent,
    /// Trader quest reward chests.
    pub trader_quests: SpecialEvent,
    /// End-of-dungeon loot rooms.
    pub dungeon_loot: SpecialEvent,
}

/// The `loot_config.json` document.
#[derive(Debug, Clone, Deserialize)]
pub struct LootConfig {
    /// Map of category name to category rules.
    pub loot_categories: HashMap<String, LootCategory>,
    /// Map of spawn location name to location rules.
    pub spawn_locations: HashMap<String, SpawnLocation>,
    /// Map of rarity name to stat multiplier.
    pub rarity_multipliers: HashMap<String, f64>,
    /// The four fixed progression bands.
    pub progression_scaling: ProgressionScaling,
    /// Map of zombie tier name to drop rules.
    pub zombie_drops: HashMap<String, ZombieDropTier>,
    /// The three fixed special events.
    pub special_events: SpecialEvents,
}

/// Weapon rarity scaling for one loot tier from
/// `economy_tier_based_loot.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponRarityScaling {
    /// Chance that a weapon drops at all in this tier.
    pub drop_chance: f64,
    /// A description of the tier's weapon pool.
    pub description: String,
    /// Map of rarity name to roll weight within this tier.
    pub rarity_weights: HashMap<String, f64>,
}

/// Equipment pools for one loot tier from `economy_tier_based_loot.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentByTier {
    /// Armor piece names in this tier's pool.
    pub armor_pieces: Vec<String>,
    /// Accessory names in this tier's pool.
    pub accessories: Vec<String>,
    /// Weapon names in this tier's pool.
    pub weapons: Vec<String>,
    /// Inclusive `[min, max]` quality range for equipment in this tier.
    pub quality_range: [u32; 2],
}

/// Rarity-bucketed special drops for one biome.
#[derive(Debug, Clone, Deserialize)]
pub struct BiomeSpecialDrops {
    /// Common special drop item names.
    pub common: Vec<String>,
    /// Uncommon special drop item names.
    pub uncommon: Vec<String>,
    /// Rare special drop item names.
    pub rare: Vec<String>,
}

/// An inclusive item-count range.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantityRange {
    /// Minimum item count.
    pub min: u32,
    /// Maximum item count.
    pub max: u32,
}

/// The `economy_tier_based_loot.json` document.
#[derive(Debug, Clone, Deserialize)]
pub struct EconomyTierBasedLoot {
    /// Map of loot tier name to weapon rarity scaling.
    pub weapon_rarity_scaling: HashMap<String, WeaponRarityScaling>,
    /// Map of loot tier name to equipment pools.
    pub equipment_by_tier: HashMap<String, EquipmentByTier>,
    /// Map of biome name to special drops.
    pub special_drops_by_biome: HashMap<String, BiomeSpecialDrops>,
    /// Map of loot tier name to economic value scalar.
    pub economic_scaling: HashMap<String, f64>,
    /// Map of loot tier name to item-count range.
    pub loot_quantity_scaling: HashMap<String, QuantityRange>,
}

/// The `tier_based_loot.json` document: a flat map of tier name to
/// [`TierLootConfig`].
pub type TierLootMap = HashMap<String, TierLootConfig>;

/// Loot rules for one tier from `tier_based_loot.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TierLootConfig {
    /// Chance that the tier produces a drop.
    pub drop_chance: f64,
    /// Maximum number of items the tier may produce.
    pub max_items: u32,
    /// Inclusive `[min, max]` quality range for items in this tier.
    pub quality_range: [u32; 2],
    /// Loot group names rolled for this tier.
    pub loot_groups: Vec<String>,
}
