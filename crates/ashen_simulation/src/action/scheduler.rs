//! ActionScheduler: one interruptible timed action per actor.
//!
//! An action is an explicit stage machine `{stage, elapsed}` advanced by
//! `tick(dt)`. Time left over when a stage ends is carried into the next
//! stage, so results do not depend on the tick rate. Cancelling drops the
//! state and resets the rig synchronously.
//!
//! ```text
//! Combo:  [Windup → Active → Follow → Wait]×N ──(StepFinished | timeout)──→ Recovery
//! Charge: Telegraph → Burst
//! Spin:   Spin (pivot 0 → 360°)
//! Dash:   Windup → Travel (swept, stops on obstacle / near target)
//! Swing:  Windup → Strike → Reset → Recovery
//! Lunge:  Windup → Burst → Recovery
//! Slash:  Slash
//! ```

use bevy::color::Alpha;
use bevy::prelude::*;

use super::plan::{ActionKind, ActionPhase, ActionPlan, DashPlan};
use super::rig::{ActionContext, ActionEvent, ActorRig};
use super::signals::ActionSignal;
use crate::combat::{CueKind, SpawnKind};
use crate::components::TELEGRAPH_COLOR;
use crate::logger;

/// Stage transitions allowed per tick; zero-length stages cannot spin forever.
const MAX_TRANSITIONS_PER_TICK: usize = 32;

const CHARGE_TELEGRAPH_ALPHA: f32 = 0.8;
const DASH_WINDUP_ALPHA: f32 = 0.35;
const SPIN_DEGREES: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct ActionHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    ComboWindup(usize),
    ComboActive(usize),
    ComboFollow(usize),
    /// Swing animation done, waiting for `StepFinished` or the timeout
    ComboWait(usize),
    ComboRecovery,
    ChargeTelegraph,
    ChargeBurst,
    Spin,
    DashWindup,
    DashTravel(Vec2),
    SwingWindup,
    SwingStrike,
    SwingReset,
    LungeWindup,
    LungeBurst,
    Recovery,
    Slash,
}

impl Stage {
    fn combo_step(&self) -> Option<usize> {
        match *self {
            Stage::ComboWindup(i) | Stage::ComboActive(i) | Stage::ComboFollow(i) | Stage::ComboWait(i) => Some(i),
            _ => None,
        }
    }

    fn phase(&self) -> ActionPhase {
        match self {
            Stage::ComboWindup(_)
            | Stage::ChargeTelegraph
            | Stage::DashWindup
            | Stage::SwingWindup
            | Stage::LungeWindup => ActionPhase::Windup,
            Stage::ComboActive(_)
            | Stage::ChargeBurst
            | Stage::Spin
            | Stage::DashTravel(_)
            | Stage::SwingStrike
            | Stage::LungeBurst
            | Stage::Slash => ActionPhase::Active,
            Stage::ComboFollow(_)
            | Stage::ComboWait(_)
            | Stage::ComboRecovery
            | Stage::SwingReset
            | Stage::Recovery => ActionPhase::Recovery,
        }
    }
}

enum Step {
    /// Tick budget used up inside the current stage
    Running,
    /// Stage changed; keep spending the leftover budget
    Continue,
    Done,
}

#[derive(Debug, Clone)]
struct ActiveAction {
    handle: ActionHandle,
    plan: ActionPlan,
    stage: Stage,
    /// Seconds spent in the current stage
    elapsed: f32,
    /// Seconds since the current combo swing started (timeout clock)
    swing_elapsed: f32,
    /// Latched `StepFinished` for the current combo swing
    step_finished: bool,
    /// Remaining combo lunge time; steering stops when it runs out
    lunge_remaining: f32,
    /// Pivot angle when the current pivot sweep started
    pivot_from: f32,
}

impl ActiveAction {
    fn new(handle: ActionHandle, plan: ActionPlan) -> Self {
        let stage = match &plan {
            ActionPlan::Combo(_) => Stage::ComboWindup(0),
            ActionPlan::Charge(_) => Stage::ChargeTelegraph,
            ActionPlan::Spin(_) => Stage::Spin,
            ActionPlan::Dash(_) => Stage::DashWindup,
            ActionPlan::Swing(_) => Stage::SwingWindup,
            ActionPlan::Lunge(_) => Stage::LungeWindup,
            ActionPlan::Slash(_) => Stage::Slash,
        };
        Self {
            handle,
            plan,
            stage,
            elapsed: 0.0,
            swing_elapsed: 0.0,
            step_finished: false,
            lunge_remaining: 0.0,
            pivot_from: 0.0,
        }
    }

    fn stage_duration(&self) -> f32 {
        let duration = match (&self.plan, self.stage) {
            (ActionPlan::Combo(p), Stage::ComboWindup(i)) => p.steps.get(i).map_or(0.0, |s| s.windup),
            (ActionPlan::Combo(p), Stage::ComboActive(i)) => p.steps.get(i).map_or(0.0, |s| s.active),
            (ActionPlan::Combo(p), Stage::ComboFollow(i)) => p.steps.get(i).map_or(0.0, |s| s.recovery),
            (ActionPlan::Combo(_), Stage::ComboWait(_)) => f32::INFINITY,
            (ActionPlan::Combo(p), Stage::ComboRecovery) => p.recovery,
            (ActionPlan::Charge(p), Stage::ChargeTelegraph) => p.telegraph,
            (ActionPlan::Charge(p), Stage::ChargeBurst) => p.duration,
            (ActionPlan::Spin(p), Stage::Spin) => p.duration,
            (ActionPlan::Dash(p), Stage::DashWindup) => p.dash.windup,
            (ActionPlan::Dash(p), Stage::DashTravel(_)) => p.dash.duration,
            (ActionPlan::Swing(p), Stage::SwingWindup) => p.swing.windup,
            (ActionPlan::Swing(p), Stage::SwingStrike) => p.swing.strike,
            (ActionPlan::Swing(p), Stage::SwingReset) => p.swing.reset,
            (ActionPlan::Swing(p), Stage::Recovery) => p.recovery,
            (ActionPlan::Lunge(p), Stage::LungeWindup) => p.lunge.windup,
            (ActionPlan::Lunge(p), Stage::LungeBurst) => p.lunge.duration,
            (ActionPlan::Lunge(p), Stage::Recovery) => p.recovery,
            (ActionPlan::Slash(p), Stage::Slash) => p.duration,
            _ => 0.0,
        };
        duration.max(0.0)
    }

    /// Time left before the combo swing times out.
    fn swing_timeout_left(&self) -> Option<f32> {
        match (&self.plan, self.stage.combo_step()) {
            (ActionPlan::Combo(p), Some(_)) => Some((p.step_timeout - self.swing_elapsed).max(0.0)),
            _ => None,
        }
    }

    fn set_stage(&mut self, stage: Stage, rig: &ActorRig) {
        self.stage = stage;
        self.elapsed = 0.0;
        self.pivot_from = rig.pivot();
    }

    // ------------------------------------------------------------------------
    // Entry effects
    // ------------------------------------------------------------------------

    /// Runs when the action starts (first stage entry).
    fn begin(&mut self, rig: &mut ActorRig, ctx: &mut ActionContext) -> Step {
        match self.plan.clone() {
            ActionPlan::Combo(_) => {
                rig.tint.restore();
                rig.stop();
                rig.set_hit_surface(false);
                return self.begin_swing(0, rig, ctx);
            }
            ActionPlan::Charge(plan) => {
                ctx.spawn(SpawnKind::ChargeWarning, rig.body.position, Some(plan.telegraph));
                rig.tint.set(TELEGRAPH_COLOR.with_alpha(CHARGE_TELEGRAPH_ALPHA));
                ctx.cue(CueKind::Charge);
            }
            ActionPlan::Spin(_) => {
                ctx.cue(CueKind::Spin);
                rig.stop();
                rig.set_pivot(0.0);
                rig.set_hit_surface(true);
            }
            ActionPlan::Dash(_) => {
                if let Some(target) = ctx.target {
                    rig.body.face_towards(target);
                }
                ctx.spawn(SpawnKind::DashEffect, rig.body.position, None);
                ctx.cue(CueKind::Dash);
                rig.tint.set_base_alpha(DASH_WINDUP_ALPHA);
            }
            ActionPlan::Swing(_) => {
                rig.stop();
                ctx.cue(CueKind::Swing);
            }
            ActionPlan::Lunge(_) => {
                rig.stop();
                rig.set_pivot(0.0);
                rig.tint.set(TELEGRAPH_COLOR);
            }
            ActionPlan::Slash(_) => {
                rig.stop();
                rig.set_hit_surface(true);
                ctx.cue(CueKind::Swing);
            }
        }
        self.pivot_from = rig.pivot();
        Step::Continue
    }

    /// Re-aim + angle check at the start of every combo swing.
    fn begin_swing(&mut self, step: usize, rig: &mut ActorRig, ctx: &mut ActionContext) -> Step {
        let ActionPlan::Combo(plan) = &self.plan else {
            return Step::Done;
        };
        let (max_angle, reface) = (plan.max_angle, plan.reface_max_degrees);
        if step >= plan.steps.len() {
            return self.enter_combo_recovery(rig);
        }

        rig.tint.restore();
        if let Some(target) = ctx.target {
            rig.body.turn_towards(target, reface);
            if rig.body.angle_to(target).is_some_and(|angle| angle > max_angle) {
                logger::log(&format!("🔄 Combo aborted at swing {}: target behind", step + 1));
                return self.enter_combo_recovery(rig);
            }
        }

        self.step_finished = false;
        self.swing_elapsed = 0.0;
        self.set_stage(Stage::ComboWindup(step), rig);
        ctx.cue(CueKind::Swing);
        Step::Continue
    }

    fn end_swing(&mut self, step: usize, rig: &mut ActorRig, ctx: &mut ActionContext) -> Step {
        rig.stop();
        rig.set_hit_surface(false);
        self.lunge_remaining = 0.0;
        self.begin_swing(step + 1, rig, ctx)
    }

    fn enter_combo_recovery(&mut self, rig: &mut ActorRig) -> Step {
        rig.stop();
        rig.set_hit_surface(false);
        self.lunge_remaining = 0.0;
        self.set_stage(Stage::ComboRecovery, rig);
        Step::Continue
    }

    // ------------------------------------------------------------------------
    // Advancing
    // ------------------------------------------------------------------------

    fn advance(&mut self, budget: &mut f32, rig: &mut ActorRig, ctx: &mut ActionContext) -> Step {
        if let Some(step) = self.stage.combo_step() {
            if self.step_finished {
                return self.end_swing(step, rig, ctx);
            }
        }

        let mut left = (self.stage_duration() - self.elapsed).max(0.0);
        let mut timed_out = false;
        if let Some(timeout_left) = self.swing_timeout_left() {
            if timeout_left <= left {
                left = timeout_left;
                timed_out = true;
            }
        }

        let used = budget.min(left);
        self.elapsed += used;
        self.swing_elapsed += used;
        *budget -= used;

        if self.during(used, rig, ctx) {
            return self.finish_stage(rig, ctx);
        }
        if used < left {
            return Step::Running;
        }
        if timed_out {
            if let Some(step) = self.stage.combo_step() {
                logger::log(&format!("⏱️ Combo swing {} timed out", step + 1));
                return self.end_swing(step, rig, ctx);
            }
        }
        self.finish_stage(rig, ctx)
    }

    /// Continuous effects for `used` seconds. Returns true to cut the stage short.
    fn during(&mut self, used: f32, rig: &mut ActorRig, ctx: &mut ActionContext) -> bool {
        if self.lunge_remaining > 0.0 {
            self.lunge_remaining -= used;
            if self.lunge_remaining <= 0.0 {
                self.lunge_remaining = 0.0;
                rig.stop();
            }
        }

        let progress = {
            let duration = self.stage_duration();
            if duration > f32::EPSILON && duration.is_finite() {
                (self.elapsed / duration).clamp(0.0, 1.0)
            } else {
                1.0
            }
        };

        match (&self.plan, self.stage) {
            (ActionPlan::Spin(_), Stage::Spin) => {
                rig.set_pivot(SPIN_DEGREES * progress);
                false
            }
            (ActionPlan::Swing(plan), Stage::SwingWindup) => {
                rig.set_pivot(lerp(self.pivot_from, plan.swing.windup_angle, progress));
                false
            }
            (ActionPlan::Swing(plan), Stage::SwingStrike) => {
                rig.set_pivot(lerp(self.pivot_from, plan.swing.strike_angle, progress));
                false
            }
            (ActionPlan::Swing(_), Stage::SwingReset) => {
                rig.set_pivot(lerp(self.pivot_from, 0.0, progress));
                false
            }
            (ActionPlan::Dash(plan), Stage::DashTravel(direction)) => {
                dash_step(plan.dash.speed * used, direction, plan, rig, ctx)
            }
            _ => false,
        }
    }

    /// Exit effects of the current stage + entry of the next one.
    fn finish_stage(&mut self, rig: &mut ActorRig, ctx: &mut ActionContext) -> Step {
        let plan = self.plan.clone();
        match (plan, self.stage) {
            (ActionPlan::Combo(plan), Stage::ComboWindup(i)) => {
                rig.set_hit_surface(true);
                if let Some(step) = plan.steps.get(i) {
                    if step.lunge_time > 0.0 && step.lunge_speed > 0.0 {
                        rig.launch(step.lunge_speed);
                        self.lunge_remaining = step.lunge_time;
                    }
                }
                self.set_stage(Stage::ComboActive(i), rig);
                Step::Continue
            }
            (ActionPlan::Combo(_), Stage::ComboActive(i)) => {
                rig.set_hit_surface(false);
                self.set_stage(Stage::ComboFollow(i), rig);
                Step::Continue
            }
            (ActionPlan::Combo(_), Stage::ComboFollow(i)) => {
                self.set_stage(Stage::ComboWait(i), rig);
                Step::Continue
            }
            (ActionPlan::Combo(_), Stage::ComboWait(i)) => self.end_swing(i, rig, ctx),
            (ActionPlan::Combo(_), Stage::ComboRecovery) => Step::Done,

            (ActionPlan::Charge(plan), Stage::ChargeTelegraph) => {
                rig.launch(plan.speed);
                rig.set_hit_surface(true);
                self.set_stage(Stage::ChargeBurst, rig);
                Step::Continue
            }
            (ActionPlan::Charge(_), Stage::ChargeBurst) => {
                rig.stop();
                rig.set_hit_surface(false);
                rig.tint.restore();
                Step::Done
            }

            (ActionPlan::Spin(_), Stage::Spin) => {
                rig.set_pivot(0.0);
                rig.set_hit_surface(false);
                Step::Done
            }

            (ActionPlan::Dash(plan), Stage::DashWindup) => {
                rig.tint.restore();
                let direction = rig.body.facing;
                rig.set_hit_surface(plan.dash.deals_damage);
                self.set_stage(Stage::DashTravel(direction), rig);
                Step::Continue
            }
            (ActionPlan::Dash(_), Stage::DashTravel(_)) => {
                rig.stop();
                rig.set_hit_surface(false);
                Step::Done
            }

            (ActionPlan::Swing(plan), Stage::SwingWindup) => {
                rig.set_pivot(plan.swing.windup_angle);
                rig.set_hit_surface(true);
                self.set_stage(Stage::SwingStrike, rig);
                Step::Continue
            }
            (ActionPlan::Swing(plan), Stage::SwingStrike) => {
                rig.set_pivot(plan.swing.strike_angle);
                self.set_stage(Stage::SwingReset, rig);
                Step::Continue
            }
            (ActionPlan::Swing(_), Stage::SwingReset) => {
                rig.set_pivot(0.0);
                rig.set_hit_surface(false);
                self.set_stage(Stage::Recovery, rig);
                Step::Continue
            }

            (ActionPlan::Lunge(plan), Stage::LungeWindup) => {
                if let Some(target) = ctx.target {
                    rig.body.face_towards(target);
                }
                rig.set_hit_surface(true);
                rig.launch(plan.lunge.speed);
                self.set_stage(Stage::LungeBurst, rig);
                Step::Continue
            }
            (ActionPlan::Lunge(_), Stage::LungeBurst) => {
                rig.stop();
                rig.set_hit_surface(false);
                rig.tint.restore();
                self.set_stage(Stage::Recovery, rig);
                Step::Continue
            }

            (ActionPlan::Swing(_) | ActionPlan::Lunge(_), Stage::Recovery) => Step::Done,

            (ActionPlan::Slash(_), Stage::Slash) => {
                rig.set_hit_surface(false);
                Step::Done
            }

            // Stage/plan mismatch cannot be built through `ActiveAction::new`
            _ => Step::Done,
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// One swept dash step. Returns true when the dash must stop.
fn dash_step(
    distance: f32,
    direction: Vec2,
    plan: &DashPlan,
    rig: &mut ActorRig,
    ctx: &ActionContext,
) -> bool {
    if let Some(target) = ctx.target {
        if rig.body.position.distance(target) <= plan.dash.stop_distance {
            return true;
        }
    }
    if distance <= 0.0 {
        return false;
    }

    let from = rig.body.position;
    if let Some(hit) = ctx
        .spatial
        .circle_cast(from, plan.dash.cast_radius, direction, distance, plan.obstacle_mask)
    {
        rig.body.position = hit.centroid;
        return true;
    }
    rig.body.position = from + direction * distance;
    false
}

// ============================================================================
// Scheduler component
// ============================================================================

#[derive(Component, Debug, Default)]
pub struct ActionScheduler {
    active: Option<ActiveAction>,
    next_handle: u64,
}

impl ActionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_performing(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_kind(&self) -> Option<ActionKind> {
        self.active.as_ref().map(|active| active.plan.kind())
    }

    pub fn current_handle(&self) -> Option<ActionHandle> {
        self.active.as_ref().map(|active| active.handle)
    }

    pub fn phase(&self) -> Option<ActionPhase> {
        self.active.as_ref().map(|active| active.stage.phase())
    }

    /// 0-based index of the running combo swing.
    pub fn combo_step(&self) -> Option<usize> {
        self.active.as_ref().and_then(|active| active.stage.combo_step())
    }

    /// Starts `plan`, cancelling whatever was running.
    pub fn start(&mut self, plan: ActionPlan, rig: &mut ActorRig, ctx: &mut ActionContext) -> ActionHandle {
        self.cancel(rig);

        self.next_handle += 1;
        let handle = ActionHandle(self.next_handle);
        let kind = plan.kind();
        let mut active = ActiveAction::new(handle, plan);

        logger::log(&format!("⚔️ Action {:?} started ({:?})", kind, handle));

        match active.begin(rig, ctx) {
            Step::Done => self.complete(kind, rig, ctx),
            _ => self.active = Some(active),
        }
        handle
    }

    /// Drops the running action. Safe to call at any time.
    pub fn cancel(&mut self, rig: &mut ActorRig) {
        if let Some(active) = self.active.take() {
            logger::log(&format!("🛑 Action {:?} cancelled ({:?})", active.plan.kind(), active.handle));
        }
        rig.reset();
    }

    pub fn tick(&mut self, dt: f32, rig: &mut ActorRig, ctx: &mut ActionContext) {
        let Some(mut active) = self.active.take() else {
            return;
        };

        let mut budget = dt.max(0.0);
        for _ in 0..MAX_TRANSITIONS_PER_TICK {
            match active.advance(&mut budget, rig, ctx) {
                Step::Running => break,
                Step::Continue => continue,
                Step::Done => {
                    self.complete(active.plan.kind(), rig, ctx);
                    return;
                }
            }
        }
        self.active = Some(active);
    }

    /// External animation signal.
    pub fn signal(&mut self, signal: ActionSignal, rig: &mut ActorRig) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        match signal {
            ActionSignal::StepFinished => {
                if active.stage.combo_step().is_some() {
                    active.step_finished = true;
                }
            }
            ActionSignal::HitSurfaceOn => rig.set_hit_surface(true),
            ActionSignal::HitSurfaceOff => rig.set_hit_surface(false),
            ActionSignal::Lunge(speed) => rig.launch(speed),
            ActionSignal::StopMovement => rig.stop(),
        }
    }

    fn complete(&mut self, kind: ActionKind, rig: &mut ActorRig, ctx: &mut ActionContext) {
        rig.stop();
        rig.set_hit_surface(false);
        self.active = None;
        ctx.events.push(ActionEvent::Finished(kind));
    }
}
