//! Per-action cooldown gates.

use bevy::prelude::*;

use crate::action::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Cooldown {
    pub kind: ActionKind,
    pub duration: f32,
    /// `None` = never used, ready immediately
    pub last_used_at: Option<f32>,
}

impl Cooldown {
    pub fn is_ready(&self, now: f32) -> bool {
        match self.last_used_at {
            Some(last) => now >= last + self.duration,
            None => true,
        }
    }

    pub fn remaining(&self, now: f32) -> f32 {
        match self.last_used_at {
            Some(last) => (last + self.duration - now).max(0.0),
            None => 0.0,
        }
    }
}

/// Cooldown table keyed by `ActionKind`. Kinds without an entry are always
/// ready.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Cooldowns {
    entries: Vec<Cooldown>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// New entry, ready until first used. Replaces an existing entry of the same kind.
    pub fn with(mut self, kind: ActionKind, duration: f32) -> Self {
        self.entries.retain(|entry| entry.kind != kind);
        self.entries.push(Cooldown {
            kind,
            duration: duration.max(0.0),
            last_used_at: None,
        });
        self
    }

    pub fn get(&self, kind: ActionKind) -> Option<&Cooldown> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    pub fn is_ready(&self, kind: ActionKind, now: f32) -> bool {
        self.get(kind).is_none_or(|entry| entry.is_ready(now))
    }

    pub fn remaining(&self, kind: ActionKind, now: f32) -> f32 {
        self.get(kind).map_or(0.0, |entry| entry.remaining(now))
    }

    /// Stamped when the action starts, not when it ends.
    pub fn mark_used(&mut self, kind: ActionKind, now: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.kind == kind) {
            entry.last_used_at = Some(now);
        }
    }
}
