//! The two logical entities and the swap resolution shared by every
//! first/second call site.
//!
//! Rendering places things in a *first* and a *second* slot (top/bottom,
//! left/right, base layer/clipped layer, left/right logo). Which entity lands
//! in which slot depends only on a swap flag, and [`resolve_assignment`] is
//! the one place that flag is interpreted. Images, offsets, and scales are
//! then looked up by the resolved [`Entity`], so they cannot drift apart.

use core::ops::{Index, IndexMut};

/// One of the two logical sides of a composition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    Game1,
    Game2,
}

impl Entity {
    /// Both entities in hit-test priority order.
    pub const ALL: [Entity; 2] = [Entity::Game1, Entity::Game2];

    /// The other entity.
    pub const fn other(self) -> Self {
        match self {
            Entity::Game1 => Entity::Game2,
            Entity::Game2 => Entity::Game1,
        }
    }

    /// Stable key name (`"game1"` / `"game2"`).
    pub const fn name(self) -> &'static str {
        match self {
            Entity::Game1 => "game1",
            Entity::Game2 => "game2",
        }
    }
}

impl core::fmt::Display for Entity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Positional slot in a split or logo layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Top, left, the diagonal base layer, or the left/upper logo.
    First,
    /// Bottom, right, the diagonal clipped layer, or the right/lower logo.
    Second,
}

/// Which entity occupies each slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub first: Entity,
    pub second: Entity,
}

impl Assignment {
    /// Entity placed in `slot`.
    pub const fn at(&self, slot: Slot) -> Entity {
        match slot {
            Slot::First => self.first,
            Slot::Second => self.second,
        }
    }

    /// Slot occupied by `entity`.
    pub fn slot_of(&self, entity: Entity) -> Slot {
        if self.first == entity {
            Slot::First
        } else {
            Slot::Second
        }
    }

    /// `(slot, entity)` pairs in drawing order.
    pub const fn slots(&self) -> [(Slot, Entity); 2] {
        [(Slot::First, self.first), (Slot::Second, self.second)]
    }
}

/// Resolve a swap flag into a slot assignment.
///
/// `game1` is first unless `swap` is set.
pub const fn resolve_assignment(swap: bool) -> Assignment {
    let first = if swap { Entity::Game2 } else { Entity::Game1 };
    Assignment {
        first,
        second: first.other(),
    }
}

/// A value per entity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair<T> {
    pub game1: T,
    pub game2: T,
}

impl<T> Pair<T> {
    /// Create a pair.
    pub const fn new(game1: T, game2: T) -> Self {
        Self { game1, game2 }
    }

    /// Value for `entity`.
    pub fn get(&self, entity: Entity) -> &T {
        match entity {
            Entity::Game1 => &self.game1,
            Entity::Game2 => &self.game2,
        }
    }

    /// Mutable value for `entity`.
    pub fn get_mut(&mut self, entity: Entity) -> &mut T {
        match entity {
            Entity::Game1 => &mut self.game1,
            Entity::Game2 => &mut self.game2,
        }
    }

    /// Borrow both values.
    pub fn as_ref(&self) -> Pair<&T> {
        Pair {
            game1: &self.game1,
            game2: &self.game2,
        }
    }

    /// Transform both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair {
            game1: f(self.game1),
            game2: f(self.game2),
        }
    }

    /// Exchange the two values.
    pub fn swapped(self) -> Self {
        Self {
            game1: self.game2,
            game2: self.game1,
        }
    }
}

impl<T: Clone> Pair<T> {
    /// The same value for both entities.
    pub fn splat(value: T) -> Self {
        Self {
            game1: value.clone(),
            game2: value,
        }
    }
}

impl<T> Index<Entity> for Pair<T> {
    type Output = T;

    fn index(&self, entity: Entity) -> &T {
        self.get(entity)
    }
}

impl<T> IndexMut<Entity> for Pair<T> {
    fn index_mut(&mut self, entity: Entity) -> &mut T {
        self.get_mut(entity)
    }
}
