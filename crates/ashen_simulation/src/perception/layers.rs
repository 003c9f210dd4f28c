//! Collision layer bitmasks
//!
//! The host engine maps these onto its own physics layers. The core only
//! needs them to build query masks (line of sight, dash sweeps).

// ============================================================================
// Layers (what an object is)
// ============================================================================

/// Walls, pillars, props that block sight and dashes
pub const LAYER_OBSTACLES: u32 = 0b100; // 4

/// Hazards (shockwaves, warnings); never block anything
pub const LAYER_HAZARDS: u32 = 0b1000; // 8

// ============================================================================
// Masks (what a query hits)
// ============================================================================

/// Line of sight: only static geometry occludes
pub const MASK_LINE_OF_SIGHT: u32 = LAYER_OBSTACLES;

/// Dash sweep: stops on obstacles, passes through actors
pub const MASK_DASH: u32 = LAYER_OBSTACLES;
