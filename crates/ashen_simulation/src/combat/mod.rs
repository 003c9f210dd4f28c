//! Combat: health, damage, stun, death
//!
//! Hit surfaces produce `HitLanded` (engine callbacks or the headless
//! overlap pass); the systems here turn them into health changes and apply
//! the consequences. Four actor kinds share one `Damageable` contract and
//! differ only in tuning:
//!
//! - Player: control lock + i-frames after every hit
//! - Enemy: stunned by every hit, drops loot
//! - Boss: stunned only by heavy hits, announces its defeat
//! - ShadowClone: never stunned, just vanishes
//!
//! Порядок выполнения (FixedUpdate):
//! 1. Hits: apply_hits / apply_stun_requests (per kind)
//! 2. Status: stun, i-frames, hit flash timers
//! 3. Cleanup: death linger → follow-up → despawn

use bevy::prelude::*;

pub mod damage;
pub mod death;
pub mod events;
pub mod health;
pub mod status;
pub mod vitals;


pub use damage::{
    apply_hits, apply_stun_requests, cancel_control, stun_actor, ActorDied, DamageDealt, Dead, HitLanded,
    StunRequest,
};
pub use death::{tick_death_lingers, DeathLinger};
pub use events::{BossDefeated, CombatCue, CueKind, PlayerDefeated, SpawnKind, SpawnRequest};
pub use health::{knockback_impulse, scaled_damage, Damageable, DeathFollowUp, Health, HitProfile, HitReport};
pub use status::{tick_hit_flashes, tick_invulnerability, tick_stuns, HitFlash, Invulnerability, Stun};
pub use vitals::{BossVitals, CloneVitals, EnemyVitals, PlayerVitals};

use crate::SimulationSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HitLanded>()
            .add_event::<StunRequest>()
            .add_event::<DamageDealt>()
            .add_event::<ActorDied>()
            .add_event::<SpawnRequest>()
            .add_event::<CombatCue>()
            .add_event::<BossDefeated>()
            .add_event::<PlayerDefeated>();

        app.add_systems(
            FixedUpdate,
            (
                apply_hits::<PlayerVitals>,
                apply_hits::<EnemyVitals>,
                apply_hits::<BossVitals>,
                apply_hits::<CloneVitals>,
                apply_stun_requests::<PlayerVitals>,
                apply_stun_requests::<EnemyVitals>,
                apply_stun_requests::<BossVitals>,
                apply_stun_requests::<CloneVitals>,
            )
                .chain()
                .in_set(SimulationSet::Hits),
        );

        app.add_systems(
            FixedUpdate,
            (tick_stuns, tick_invulnerability, tick_hit_flashes)
                .chain()
                .in_set(SimulationSet::Status),
        );

        app.add_systems(FixedUpdate, tick_death_lingers.in_set(SimulationSet::Cleanup));
    }
}
