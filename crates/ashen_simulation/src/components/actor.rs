//! Actor kind markers + faction

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Basic melee enemy
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Enemy;

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Boss;

/// Phase 3 helper spawned by the boss
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ShadowClone;

/// Which side a hit surface belongs to. Weapons only hit the other side.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[reflect(Component)]
pub enum Faction {
    Player,
    #[default]
    Hostile,
}

impl Faction {
    pub fn is_hostile_to(&self, other: Faction) -> bool {
        *self != other
    }
}

/// Kind tag carried by notifications (death, damage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ActorKind {
    Player,
    Enemy,
    Boss,
    ShadowClone,
}
