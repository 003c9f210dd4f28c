//! Outbound notifications for the engine/game layer (spawns, audio cues,
//! end-of-fight signals). The core never plays sounds or instantiates
//! prefabs itself; shockwaves and clones are the exception, they are
//! simulated here and also announced.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SpawnKind {
    /// Coin drop from a dead enemy
    Loot,
    Shockwave,
    ShadowClone,
    /// Ground marker shown during the charge telegraph
    ChargeWarning,
    DashEffect,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: SpawnKind,
    pub position: Vec2,
    /// Entity that caused the spawn
    pub source: Option<Entity>,
    /// Destroy the spawned object after this many seconds
    pub lifetime: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum CueKind {
    Hurt,
    Death,
    /// Boss phase change
    Roar,
    Charge,
    Spin,
    Dash,
    Swing,
    Shockwave,
}

/// Audio/VFX hook.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatCue {
    pub entity: Entity,
    pub cue: CueKind,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossDefeated {
    pub boss: Entity,
}

/// Player death has played out; the run counter and scene transition are
/// handled by whoever listens.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDefeated {
    pub player: Entity,
}
