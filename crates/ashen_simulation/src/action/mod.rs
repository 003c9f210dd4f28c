//! Action scheduling
//!
//! Decision systems hand an `ActionPlan` to the actor's `ActionScheduler`;
//! the scheduler owns velocity, hit surface, pivot and tint until the plan
//! finishes or is cancelled (stun, death, a newer plan).

use bevy::prelude::*;

pub mod plan;
pub mod rig;
pub mod scheduler;
pub mod signals;
pub mod systems;


pub use plan::{
    ActionKind, ActionPhase, ActionPlan, ChargePlan, ComboPlan, DashPlan, LungePlan, SlashPlan, SpinPlan,
    SwingPlan,
};
pub use rig::{ActionContext, ActionEvent, ActorRig};
pub use scheduler::{ActionHandle, ActionScheduler};
pub use signals::{ActionSignal, ActionSignalEvent};
pub use systems::{deliver_action_signals, publish_action_events, tick_action_schedulers};

use crate::SimulationSet;

pub struct ActionPlugin;

impl Plugin for ActionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ActionSignalEvent>();

        app.add_systems(
            FixedUpdate,
            (deliver_action_signals, tick_action_schedulers)
                .chain()
                .in_set(SimulationSet::Actions),
        );
    }
}
