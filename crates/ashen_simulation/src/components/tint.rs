//! Sprite tint
//!
//! `base` is the current phase baseline (white, then the boss phase colors).
//! Flashes, telegraphs and stuns overwrite `current`; `restore` goes back to
//! the baseline.

use bevy::color::Alpha;
use bevy::prelude::*;

pub const HIT_FLASH_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const STUN_COLOR: Color = Color::srgb(1.0, 0.92, 0.016);
pub const DEATH_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
pub const TELEGRAPH_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const PHASE2_COLOR: Color = Color::srgb(1.0, 0.7, 0.7);
pub const PHASE3_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);
pub const SHADOW_COLOR: Color = Color::srgba(0.3, 0.3, 0.5, 0.7);

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Tint {
    pub base: Color,
    pub current: Color,
}

impl Default for Tint {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Tint {
    pub fn new(base: Color) -> Self {
        Self { base, current: base }
    }

    pub fn set(&mut self, color: Color) {
        self.current = color;
    }

    /// Baseline color at a different alpha (dash fade-out).
    pub fn set_base_alpha(&mut self, alpha: f32) {
        self.current = self.base.with_alpha(alpha.clamp(0.0, 1.0));
    }

    pub fn restore(&mut self) {
        self.current = self.base;
    }

    /// New phase baseline; later restores come back to this color.
    pub fn set_base(&mut self, color: Color) {
        self.base = color;
        self.current = color;
    }

    pub fn is_baseline(&self) -> bool {
        self.current == self.base
    }
}
