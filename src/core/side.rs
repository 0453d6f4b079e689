//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A round is always a duel: the human `Player` against the `Bot`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexable by `Side`, so per-side data (hands,
//! caravans) never needs a lookup or an `Option`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human side, driven by the host UI.
    Player,
    /// The computer side, driven by a bot policy.
    Bot,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Bot];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Bot,
            Side::Bot => Side::Player,
        }
    }

    /// Storage slot for this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Bot => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Bot => write!(f, "bot"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use caravan_engine::core::{Side, SideMap};
///
/// let mut delivered: SideMap<u32> = SideMap::with_default();
/// delivered[Side::Bot] += 1;
///
/// assert_eq!(delivered[Side::Player], 0);
/// assert_eq!(delivered[Side::Bot], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Bot)],
        }
    }

    /// Create a map from the player's and the bot's values.
    pub fn from_pair(player: T, bot: T) -> Self {
        Self { data: [player, bot] }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow `side` and its opponent mutably at once, in that order.
    ///
    /// A face card leaves the acting side's hand and lands on the
    /// opponent's caravan in the same play.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [player, bot] = &mut self.data;
        match side {
            Side::Player => (player, bot),
            Side::Bot => (bot, player),
        }
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Bot);
        assert_eq!(Side::Bot.opponent(), Side::Player);
        assert_eq!(Side::Bot.opponent().opponent(), Side::Bot);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Bot), "bot");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Bot], 10);
    }

    #[test]
    fn test_side_map_split_mut() {
        let mut map: SideMap<Vec<i32>> = SideMap::with_default();

        let (me, other) = map.split_mut(Side::Bot);
        me.push(1);
        other.push(2);

        assert_eq!(map[Side::Bot], vec![1]);
        assert_eq!(map[Side::Player], vec![2]);
    }

    #[test]
    fn test_side_map_iter() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &0), (Side::Bot, &1)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map: SideMap<i32> = SideMap::new(|s| s.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
