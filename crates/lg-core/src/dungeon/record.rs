//! Persisted dungeon state.
//!
//! A `DungeonRecord` captures everything needed to rebuild a `DungeonMap`
//! without re-running generation. Live enemies hold shared weapon
//! templates, so persistence goes through snapshots that store ids and
//! rolled stats and re-resolve the templates against the content registry
//! on load.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Coord, Direction, DungeonMap, Room};
use crate::content::{ContentError, ContentRegistry};
use crate::enemy::{Enemy, Position};

/// Saved state of one spawned enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub archetype_id: String,
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub speed: f64,
    pub pos: Position,
    pub is_charging_attack: bool,
}

impl EnemySnapshot {
    pub fn of(enemy: &Enemy) -> Self {
        Self {
            archetype_id: enemy.archetype_id.clone(),
            health: enemy.health,
            max_health: enemy.max_health,
            strength: enemy.strength,
            dexterity: enemy.dexterity,
            speed: enemy.speed,
            pos: enemy.pos,
            is_charging_attack: enemy.is_charging_attack,
        }
    }

    /// Rebuild a live enemy: rolled stats from the snapshot, template data
    /// (name, drops, weapon) from the registry.
    pub fn restore(&self, registry: &ContentRegistry) -> Result<Enemy, ContentError> {
        let archetype = registry
            .archetype(&self.archetype_id)
            .ok_or_else(|| ContentError::UnknownArchetype(self.archetype_id.clone()))?;
        let weapon = registry
            .weapon(&archetype.weapon_id)
            .cloned()
            .ok_or_else(|| ContentError::UnknownWeapon {
                archetype: self.archetype_id.clone(),
                weapon_id: archetype.weapon_id.clone(),
            })?;

        Ok(Enemy {
            archetype_id: self.archetype_id.clone(),
            name: archetype.name.clone(),
            health: self.health,
            max_health: self.max_health,
            strength: self.strength,
            dexterity: self.dexterity,
            speed: self.speed,
            sight_radius: archetype.sight_radius,
            gold_drop_range: archetype.gold_drop_range,
            item_drops: archetype.item_drops.clone(),
            weapon,
            pos: self.pos,
            is_charging_attack: self.is_charging_attack,
        })
    }
}

/// Saved state of one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub width: i32,
    pub height: i32,
    pub enemies: Vec<EnemySnapshot>,
}

/// Serializable image of a whole dungeon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonRecord {
    pub num_rooms: usize,
    pub entry_direction: Direction,
    /// Room records keyed by stringified "x:y" coordinates
    #[serde(with = "coord_map_serde")]
    pub rooms: HashMap<Coord, RoomRecord>,
    /// Explored set as coordinate pairs, sorted for stable output
    pub explored_rooms: Vec<Coord>,
}

/// Serde helper for HashMap<Coord, RoomRecord> - JSON requires string keys.
/// Serializes each coordinate as "x:y".
mod coord_map_serde {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;

    pub fn serialize<S>(
        map: &HashMap<Coord, RoomRecord>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut ser_map = serializer.serialize_map(Some(map.len()))?;
        for (coord, room) in map {
            let key = format!("{}:{}", coord.0, coord.1);
            ser_map.serialize_entry(&key, room)?;
        }
        ser_map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<Coord, RoomRecord>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CoordMapVisitor;

        impl<'de> Visitor<'de> for CoordMapVisitor {
            type Value = HashMap<Coord, RoomRecord>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map with \"x:y\" string keys")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut map = HashMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, RoomRecord>()? {
                    let parts: Vec<&str> = key.split(':').collect();
                    if parts.len() != 2 {
                        return Err(de::Error::custom(format!("invalid coord key: {}", key)));
                    }
                    let x: i32 = parts[0].parse().map_err(de::Error::custom)?;
                    let y: i32 = parts[1].parse().map_err(de::Error::custom)?;
                    map.insert((x, y), value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(CoordMapVisitor)
    }
}

impl DungeonMap {
    /// Snapshot the dungeon into its persistable record.
    pub fn to_record(&self) -> DungeonRecord {
        let rooms = self
            .rooms
            .iter()
            .map(|(coord, room)| {
                (
                    *coord,
                    RoomRecord {
                        width: room.width(),
                        height: room.height(),
                        enemies: room.enemies.iter().map(EnemySnapshot::of).collect(),
                    },
                )
            })
            .collect();

        let mut explored_rooms: Vec<Coord> = self.explored.iter().copied().collect();
        explored_rooms.sort_unstable();

        DungeonRecord {
            num_rooms: self.num_rooms,
            entry_direction: self.entry_direction,
            rooms,
            explored_rooms,
        }
    }

    /// Rebuild a dungeon from its record without re-running generation.
    ///
    /// The cursor starts at the origin; hosts re-seat it with
    /// `set_current`. A loaded room with no enemies left is cleared.
    pub fn from_record(
        record: &DungeonRecord,
        registry: &ContentRegistry,
    ) -> Result<Self, ContentError> {
        let mut rooms = HashMap::with_capacity(record.rooms.len());
        for (coord, room_record) in &record.rooms {
            let mut room = Room::empty(room_record.width, room_record.height);
            for snapshot in &room_record.enemies {
                room.enemies.push(snapshot.restore(registry)?);
            }
            room.cleared = room.enemies.is_empty();
            rooms.insert(*coord, room);
        }

        Ok(DungeonMap {
            rooms,
            explored: record.explored_rooms.iter().copied().collect::<HashSet<_>>(),
            entry_direction: record.entry_direction,
            num_rooms: record.num_rooms,
            current: (0, 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyArchetype;
    use crate::item::Weapon;

    fn test_registry() -> ContentRegistry {
        let mut registry = ContentRegistry::new();
        registry.add_weapon("claws", Weapon::new("Claws", (1, 3), 0.0, 1.0));
        registry.add_archetype(
            "goblin",
            EnemyArchetype {
                name: "goblin".to_string(),
                health_range: (8, 14),
                strength_range: (2, 4),
                dexterity_range: (3, 6),
                speed_range: (1.0, 2.5),
                sight_radius: 150,
                gold_drop_range: (1, 5),
                item_drops: Vec::new(),
                weapon_id: "claws".to_string(),
            },
        );
        registry
    }

    fn test_snapshot() -> EnemySnapshot {
        EnemySnapshot {
            archetype_id: "goblin".to_string(),
            health: 9,
            max_health: 12,
            strength: 3,
            dexterity: 4,
            speed: 1.75,
            pos: Position::new(420, 300),
            is_charging_attack: true,
        }
    }

    #[test]
    fn test_snapshot_restore_resolves_templates() {
        let registry = test_registry();
        let enemy = test_snapshot().restore(&registry).unwrap();
        assert_eq!(enemy.name, "goblin");
        assert_eq!(enemy.health, 9);
        assert_eq!(enemy.max_health, 12);
        assert_eq!(enemy.weapon.name, "Claws");
        assert_eq!(enemy.gold_drop_range, (1, 5));
        assert!(enemy.is_charging_attack);
    }

    #[test]
    fn test_snapshot_restore_unknown_archetype() {
        let registry = ContentRegistry::new();
        let err = test_snapshot().restore(&registry).unwrap_err();
        assert_eq!(err, ContentError::UnknownArchetype("goblin".to_string()));
    }

    #[test]
    fn test_coord_keys_round_trip() {
        let record = DungeonRecord {
            num_rooms: 2,
            entry_direction: Direction::North,
            rooms: HashMap::from([
                ((0, 0), RoomRecord { width: 800, height: 600, enemies: vec![] }),
                ((-3, 7), RoomRecord { width: 800, height: 600, enemies: vec![test_snapshot()] }),
            ]),
            explored_rooms: vec![(0, 0)],
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"0:0\""));
        assert!(json.contains("\"-3:7\""));

        let parsed: DungeonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
