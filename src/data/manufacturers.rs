//! The static manufacturer table.
//!
//! Manufacturers brand generated equipment and skew its stats. The table is
//! a fixed enumeration compiled into the binary; lookups of unknown names
//! return `None` rather than failing.

use super::rarity::Rarity;

/// A manufacturer of in-game equipment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manufacturer {
    /// The manufacturer's name, as referenced by item definitions.
    pub name: &'static str,
    /// The rarity tier this manufacturer's gear rolls at.
    pub tier: Rarity,
    /// Specialization tags describing what the manufacturer produces.
    pub specialization: &'static [&'static str],
    /// Sparse stat-name to modifier-delta mapping. Positive deltas buff the
    /// stat, negative deltas nerf it.
    pub stat_modifiers: &'static [(&'static str, f64)],
    /// Flavor description.
    pub description: &'static str,
}

/// All known manufacturers.
static MANUFACTURERS: [Manufacturer; 12] = [
    // Military grade
    Manufacturer {
        name: "MilSpec",
        tier: Rarity::Uncommon,
        specialization: &["weapons", "armor", "tactical"],
        stat_modifiers: &[("durability", 0.15), ("damage", 0.1), ("accuracy", 0.05)],
        description: "Military specification equipment with enhanced durability",
    },
    Manufacturer {
        name: "TactiCool",
        tier: Rarity::Rare,
        specialization: &["weapons", "mods"],
        stat_modifiers: &[
            ("reload_speed", 0.2),
            ("aim_speed", 0.15),
            ("magazine_size", 0.1),
        ],
        description: "Tactical equipment focused on operational efficiency",
    },
    // Survival and craftsmanship
    Manufacturer {
        name: "Handmade",
        tier: Rarity::Common,
        specialization: &["tools", "melee", "basic"],
        stat_modifiers: &[
            ("durability", -0.1),
            ("repairability", 0.2),
            ("crafting_speed", 0.15),
        ],
        description: "Handcrafted items that are easy to repair and modify",
    },
    Manufacturer {
        name: "Improvised",
        tier: Rarity::Common,
        specialization: &["tools", "weapons", "basic"],
        stat_modifiers: &[
            ("durability", -0.2),
            ("damage", -0.1),
            ("economic_value", -0.3),
        ],
        description: "Makeshift equipment cobbled together from scrap",
    },
    // High-tech
    Manufacturer {
        name: "Bandit",
        tier: Rarity::Epic,
        specialization: &["weapons", "explosives"],
        stat_modifiers: &[("damage", 0.25), ("fire_rate", 0.15), ("accuracy", -0.1)],
        description: "High damage weapons with aggressive modifications",
    },
    Manufacturer {
        name: "Jakobs",
        tier: Rarity::Rare,
        specialization: &["weapons", "precision"],
        stat_modifiers: &[
            ("damage", 0.2),
            ("accuracy", 0.15),
            ("critical_chance", 0.1),
        ],
        description: "Precision firearms with exceptional stopping power",
    },
    Manufacturer {
        name: "Hyperion",
        tier: Rarity::Epic,
        specialization: &["weapons", "shields", "tech"],
        stat_modifiers: &[
            ("accuracy", 0.3),
            ("stability", 0.25),
            ("shield_capacity", 0.2),
        ],
        description: "High-tech equipment with superior accuracy systems",
    },
    // Specialty
    Manufacturer {
        name: "Dahl",
        tier: Rarity::Uncommon,
        specialization: &["weapons", "military"],
        stat_modifiers: &[
            ("burst_fire_rate", 0.3),
            ("stability", 0.15),
            ("recoil", -0.2),
        ],
        description: "Military contractor specializing in burst-fire weapons",
    },
    Manufacturer {
        name: "Tediore",
        tier: Rarity::Common,
        specialization: &["weapons", "disposable"],
        stat_modifiers: &[
            ("reload_speed", 0.4),
            ("durability", -0.15),
            ("economic_value", -0.2),
        ],
        description: "Disposable weapons with unique reload mechanics",
    },
    Manufacturer {
        name: "Maliwan",
        tier: Rarity::Rare,
        specialization: &["weapons", "elemental"],
        stat_modifiers: &[
            ("elemental_damage", 0.35),
            ("elemental_chance", 0.25),
            ("damage", -0.1),
        ],
        description: "Elemental weapons manufacturer",
    },
    Manufacturer {
        name: "Vladof",
        tier: Rarity::Uncommon,
        specialization: &["weapons", "automatic"],
        stat_modifiers: &[
            ("fire_rate", 0.35),
            ("magazine_size", 0.25),
            ("accuracy", -0.15),
        ],
        description: "High fire-rate automatic weapons",
    },
    // Legendary tier
    Manufacturer {
        name: "Pearlescent",
        tier: Rarity::Legendary,
        specialization: &["weapons", "unique"],
        stat_modifiers: &[
            ("all_stats", 0.15),
            ("damage", 0.3),
            ("durability", 0.3),
            ("critical_chance", 0.2),
        ],
        description: "Ultra-rare manufacturer producing legendary equipment",
    },
];

impl Manufacturer {
    /// Returns all known manufacturers.
    pub fn all() -> &'static [Manufacturer] {
        &MANUFACTURERS
    }

    /// Looks up a manufacturer by name.
    ///
    /// Unknown names return `None`.
    pub fn lookup(name: &str) -> Option<&'static Manufacturer> {
        MANUFACTURERS.iter().find(|m| m.name == name)
    }

    /// Returns all manufacturers whose gear rolls at the given tier.
    pub fn in_tier(tier: Rarity) -> impl Iterator<Item = &'static Manufacturer> {
        MANUFACTURERS.iter().filter(move |m| m.tier == tier)
    }

    /// Returns the modifier delta for a stat, if this manufacturer
    /// modifies it.
    pub fn stat_modifier(&self, stat: &str) -> Option<f64> {
        self.stat_modifiers
            .iter()
            .find(|(name, _)| *name == stat)
            .map(|(_, delta)| *delta)
    }

    /// Returns true if the manufacturer carries the given specialization
    /// tag.
    pub fn specializes_in(&self, tag: &str) -> bool {
        self.specialization.contains(&tag)
    }
}
