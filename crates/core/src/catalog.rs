//! Character roster: ordinary pair characters, tiered special cards, bosses.
//!
//! Pure data, the deck builder draws from it. Image refs are opaque strings
//! handed through to whatever renders the cards.

use memory_match_types::{BossId, CharacterId};

/// An ordinary character worth one point per matched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: &'static str,
    pub image: &'static str,
}

/// A special character with an elevated, tiered point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCharacter {
    pub id: CharacterId,
    pub name: &'static str,
    pub image: &'static str,
    pub point_value: u32,
}

/// A boss selectable in boss battle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boss {
    pub id: BossId,
    pub name: &'static str,
}

const ORDINARY: &[Character] = &[
    Character { id: 1, name: "Stormcaller", image: "assets/cards/stormcaller.png" },
    Character { id: 2, name: "Night Warden", image: "assets/cards/night_warden.png" },
    Character { id: 3, name: "Scarlet Archer", image: "assets/cards/scarlet_archer.png" },
    Character { id: 4, name: "Iron Sentinel", image: "assets/cards/iron_sentinel.png" },
    Character { id: 5, name: "Tide Singer", image: "assets/cards/tide_singer.png" },
    Character { id: 6, name: "Ember Fox", image: "assets/cards/ember_fox.png" },
    Character { id: 7, name: "Frost Monk", image: "assets/cards/frost_monk.png" },
    Character { id: 8, name: "Sky Herald", image: "assets/cards/sky_herald.png" },
    Character { id: 9, name: "Stone Golem", image: "assets/cards/stone_golem.png" },
    Character { id: 10, name: "Shadow Dancer", image: "assets/cards/shadow_dancer.png" },
    Character { id: 11, name: "Sun Priestess", image: "assets/cards/sun_priestess.png" },
    Character { id: 12, name: "Rune Smith", image: "assets/cards/rune_smith.png" },
    Character { id: 13, name: "Wild Tracker", image: "assets/cards/wild_tracker.png" },
    Character { id: 14, name: "Gale Rider", image: "assets/cards/gale_rider.png" },
    Character { id: 15, name: "Moon Blade", image: "assets/cards/moon_blade.png" },
    Character { id: 16, name: "Ash Wanderer", image: "assets/cards/ash_wanderer.png" },
    Character { id: 17, name: "Star Cartographer", image: "assets/cards/star_cartographer.png" },
    Character { id: 18, name: "Thorn Witch", image: "assets/cards/thorn_witch.png" },
];

/// Special characters in ascending point-tier order.
const SPECIAL: &[SpecialCharacter] = &[
    SpecialCharacter {
        id: 101,
        name: "Ascendant Phoenix",
        image: "assets/cards/ascendant_phoenix.png",
        point_value: 10_000,
    },
    SpecialCharacter {
        id: 102,
        name: "Leviathan Sovereign",
        image: "assets/cards/leviathan_sovereign.png",
        point_value: 20_000,
    },
    SpecialCharacter {
        id: 103,
        name: "Celestial Arbiter",
        image: "assets/cards/celestial_arbiter.png",
        point_value: 30_000,
    },
    SpecialCharacter {
        id: 104,
        name: "Eternal Overlord",
        image: "assets/cards/eternal_overlord.png",
        point_value: 50_000,
    },
];

const BOSSES: &[Boss] = &[
    Boss { id: 1, name: "Grave Tyrant" },
    Boss { id: 2, name: "Void Empress" },
    Boss { id: 3, name: "Molten King" },
    Boss { id: 4, name: "Plague Herald" },
    Boss { id: 5, name: "Storm Colossus" },
];

/// The full roster a session deals from.
#[derive(Debug, Clone)]
pub struct Catalog {
    ordinary: &'static [Character],
    special: &'static [SpecialCharacter],
    bosses: &'static [Boss],
}

impl Catalog {
    /// The built-in roster.
    pub fn standard() -> Self {
        Self {
            ordinary: ORDINARY,
            special: SPECIAL,
            bosses: BOSSES,
        }
    }

    pub fn ordinary(&self) -> &[Character] {
        self.ordinary
    }

    pub fn special(&self) -> &[SpecialCharacter] {
        self.special
    }

    pub fn bosses(&self) -> &[Boss] {
        self.bosses
    }

    pub fn boss(&self, id: BossId) -> Option<&Boss> {
        self.bosses.iter().find(|b| b.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<_> = catalog
            .ordinary()
            .iter()
            .map(|c| c.id)
            .chain(catalog.special().iter().map(|s| s.id))
            .collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_special_tiers_ascending() {
        let catalog = Catalog::standard();
        let tiers: Vec<_> = catalog.special().iter().map(|s| s.point_value).collect();
        assert_eq!(tiers, vec![10_000, 20_000, 30_000, 50_000]);
    }

    #[test]
    fn test_boss_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.boss(1).map(|b| b.name), Some("Grave Tyrant"));
        assert!(catalog.boss(99).is_none());
    }
}
