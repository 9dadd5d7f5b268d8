use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room categories with their fixed nightly rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
}

impl RoomCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
        }
    }

    /// Nightly rate in whole currency units
    pub fn nightly_rate(&self) -> i64 {
        match self {
            Self::Standard => 2500,
            Self::Deluxe => 4800,
            Self::Suite => 9500,
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: u32,
    category: RoomCategory,
    description: String,
    available: bool,
}

impl Room {
    pub fn new(number: u32, category: RoomCategory, description: impl Into<String>) -> Self {
        Self {
            number,
            category,
            description: description.into(),
            available: true,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

const STANDARD_ROOMS: [(u32, &str); 5] = [
    (101, "Garden View"),
    (102, "Pool View"),
    (103, "City View"),
    (104, "Garden View"),
    (105, "Pool View"),
];

const DELUXE_ROOMS: [(u32, &str); 5] = [
    (201, "Ocean View"),
    (202, "Mountain View"),
    (203, "Balcony"),
    (204, "Skyline View"),
    (205, "Sea Breeze"),
];

const SUITE_ROOMS: [(u32, &str); 3] = [
    (301, "Presidential"),
    (302, "Honeymoon Suite"),
    (303, "Penthouse"),
];

/// Fixed room catalog keyed by room number, in seed order
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: IndexMap<u32, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: IndexMap::new(),
        }
    }

    /// Registry populated with the hotel's 13 rooms, all available
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.initialize();
        registry
    }

    /// Populate the fixed catalog. Existing rooms with the same number are replaced.
    pub fn initialize(&mut self) {
        let seed = [
            (RoomCategory::Standard, &STANDARD_ROOMS[..]),
            (RoomCategory::Deluxe, &DELUXE_ROOMS[..]),
            (RoomCategory::Suite, &SUITE_ROOMS[..]),
        ];

        for (category, rooms) in seed {
            for &(number, description) in rooms {
                self.insert(Room::new(number, category, description));
            }
        }
    }

    pub fn insert(&mut self, room: Room) {
        self.rooms.insert(room.number, room);
    }

    pub fn find(&self, number: u32) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Available rooms, optionally restricted to one category
    pub fn search(&self, category: Option<RoomCategory>) -> Vec<&Room> {
        self.rooms
            .values()
            .filter(|room| room.available && category.map_or(true, |c| room.category == c))
            .collect()
    }

    pub fn set_availability(&mut self, number: u32, available: bool) -> Result<(), RoomError> {
        let room = self.rooms.get_mut(&number).ok_or(RoomError::NotFound(number))?;
        room.available = available;
        tracing::debug!(room = number, available, "Room availability updated");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.rooms.values().filter(|room| room.available).count()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("Room {0} does not exist")]
    NotFound(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let registry = RoomRegistry::seeded();

        assert_eq!(registry.len(), 13);
        assert_eq!(registry.available_count(), 13);
        assert_eq!(registry.search(Some(RoomCategory::Standard)).len(), 5);
        assert_eq!(registry.search(Some(RoomCategory::Deluxe)).len(), 5);
        assert_eq!(registry.search(Some(RoomCategory::Suite)).len(), 3);

        let suite = registry.find(302).unwrap();
        assert_eq!(suite.category(), RoomCategory::Suite);
        assert_eq!(suite.description(), "Honeymoon Suite");
    }

    #[test]
    fn test_search_skips_occupied_and_keeps_order() {
        let mut registry = RoomRegistry::seeded();
        registry.set_availability(102, false).unwrap();

        let numbers: Vec<u32> = registry
            .search(Some(RoomCategory::Standard))
            .iter()
            .map(|room| room.number())
            .collect();
        assert_eq!(numbers, vec![101, 103, 104, 105]);

        let all = registry.search(None);
        assert_eq!(all.len(), 12);
        assert_eq!(all.first().unwrap().number(), 101);
        assert_eq!(all.last().unwrap().number(), 303);
    }

    #[test]
    fn test_unknown_room() {
        let mut registry = RoomRegistry::seeded();

        assert!(registry.find(999).is_none());
        assert_eq!(registry.set_availability(999, false), Err(RoomError::NotFound(999)));
    }

    #[test]
    fn test_category_rates() {
        assert_eq!(RoomCategory::Standard.nightly_rate(), 2500);
        assert_eq!(RoomCategory::Deluxe.nightly_rate(), 4800);
        assert_eq!(RoomCategory::Suite.nightly_rate(), 9500);
        assert_eq!(RoomCategory::Deluxe.to_string(), "Deluxe");
    }
}
