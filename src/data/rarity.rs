//! The five-tier rarity table.
//!
//! Rarity data is compiled in rather than loaded from disk: every build of
//! the mod uses the same tier ladder.

use serde::{Deserialize, Serialize};

/// An item rarity tier.
///
/// Tiers are ordered: stat multiplier and mod slot count increase with
/// rarity while base drop chance decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Baseline gear, no stat bonus.
    Common,
    /// Slightly improved gear.
    Uncommon,
    /// Strong gear with multiple mod slots.
    Rare,
    /// Top-end manufactured gear.
    Epic,
    /// Unique, best-in-slot gear.
    Legendary,
}

impl Rarity {
    /// All tiers in ascending rarity order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Looks up a tier by its lowercase name.
    ///
    /// Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Rarity> {
        match name {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// The lowercase name used in configuration documents.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Display color as a hex string, used for item icon tinting.
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#FFFFFF",
            Rarity::Uncommon => "#00FF00",
            Rarity::Rare => "#0080FF",
            Rarity::Epic => "#9932CC",
            Rarity::Legendary => "#FF8C00",
        }
    }

    /// Multiplier applied to base item stats at this rarity.
    pub fn stat_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.15,
            Rarity::Rare => 1.3,
            Rarity::Epic => 1.5,
            Rarity::Legendary => 1.75,
        }
    }

    /// Number of modification slots items of this rarity carry.
    pub fn mod_slots(&self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::Epic => 4,
            Rarity::Legendary => 5,
        }
    }

    /// Base chance that a drop rolls at this rarity.
    pub fn drop_chance(&self) -> f64 {
        match self {
            Rarity::Common => 0.6,
            Rarity::Uncommon => 0.25,
            Rarity::Rare => 0.1,
            Rarity::Epic => 0.04,
            Rarity::Legendary => 0.01,
        }
    }
}
