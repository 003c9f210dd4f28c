//! Spatial queries: line of sight + swept circle casts.
//!
//! The simulation never talks to a physics engine directly. Everything it
//! asks about the static world goes through `SpatialQuery`; the engine
//! installs its own implementation in the `Spatial` resource, headless runs
//! use the built-in `ObstacleMap`.

use bevy::prelude::*;

/// Directions shorter than this are treated as "no direction".
const DIRECTION_EPSILON: f32 = 1e-6;

/// First obstacle touched by a swept circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    /// Travelled distance before contact
    pub distance: f32,
    /// Circle centre at the moment of contact
    pub centroid: Vec2,
}

pub trait SpatialQuery: Send + Sync {
    /// Is the straight segment `from → to` blocked by anything on `mask`?
    fn segment_blocked(&self, from: Vec2, to: Vec2, mask: u32) -> bool;

    /// Sweep a circle of `radius` from `origin` along `direction` (unit) for
    /// up to `distance`; returns the first contact with `mask`.
    fn circle_cast(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Vec2,
        distance: f32,
        mask: u32,
    ) -> Option<CastHit>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleShape {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned box
    Rect { min: Vec2, max: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub shape: ObstacleShape,
    pub layers: u32,
}

/// Static obstacle set (headless stand-in for the engine's physics scene).
#[derive(Debug, Clone, Default)]
pub struct ObstacleMap {
    obstacles: Vec<Obstacle>,
}

impl ObstacleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_circle(mut self, center: Vec2, radius: f32, layers: u32) -> Self {
        self.add(Obstacle {
            shape: ObstacleShape::Circle {
                center,
                radius: radius.max(0.0),
            },
            layers,
        });
        self
    }

    pub fn with_rect(mut self, a: Vec2, b: Vec2, layers: u32) -> Self {
        self.add(Obstacle {
            shape: ObstacleShape::Rect {
                min: a.min(b),
                max: a.max(b),
            },
            layers,
        });
        self
    }

    pub fn add(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    fn matching(&self, mask: u32) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(move |o| o.layers & mask != 0)
    }
}

impl SpatialQuery for ObstacleMap {
    fn segment_blocked(&self, from: Vec2, to: Vec2, mask: u32) -> bool {
        self.matching(mask).any(|obstacle| match obstacle.shape {
            ObstacleShape::Circle { center, radius } => {
                closest_point_on_segment(from, to, center).distance_squared(center) < radius * radius
            }
            ObstacleShape::Rect { min, max } => segment_hits_rect(from, to, min, max),
        })
    }

    fn circle_cast(
        &self,
        origin: Vec2,
        radius: f32,
        direction: Vec2,
        distance: f32,
        mask: u32,
    ) -> Option<CastHit> {
        if direction.length_squared() < DIRECTION_EPSILON || distance < 0.0 {
            return None;
        }
        let dir = direction.normalize();
        let radius = radius.max(0.0);

        // Minkowski sum: sweep a point against obstacles inflated by `radius`.
        let nearest = self
            .matching(mask)
            .filter_map(|obstacle| match obstacle.shape {
                ObstacleShape::Circle { center, radius: r } => {
                    ray_circle(origin, dir, center, r + radius)
                }
                ObstacleShape::Rect { min, max } => {
                    ray_rect(origin, dir, min - Vec2::splat(radius), max + Vec2::splat(radius))
                }
            })
            .filter(|t| *t <= distance)
            .fold(None, |best: Option<f32>, t| Some(best.map_or(t, |b| b.min(t))))?;

        Some(CastHit {
            distance: nearest,
            centroid: origin + dir * nearest,
        })
    }
}

/// Engine-facing handle to whatever answers spatial queries.
#[derive(Resource)]
pub struct Spatial(pub Box<dyn SpatialQuery>);

impl Spatial {
    pub fn new(query: impl SpatialQuery + 'static) -> Self {
        Self(Box::new(query))
    }

    pub fn query(&self) -> &dyn SpatialQuery {
        self.0.as_ref()
    }
}

impl Default for Spatial {
    fn default() -> Self {
        Self::new(ObstacleMap::new())
    }
}

// ============================================================================
// Geometry helpers
// ============================================================================

fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < DIRECTION_EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Slab test over t ∈ [0, 1].
fn segment_hits_rect(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> bool {
    let delta = to - from;
    let mut t_enter = 0.0f32;
    let mut t_exit = 1.0f32;

    for axis in 0..2 {
        let (origin, d, lo, hi) = (from[axis], delta[axis], min[axis], max[axis]);
        if d.abs() < DIRECTION_EPSILON {
            if origin < lo || origin > hi {
                return false;
            }
            continue;
        }
        let (mut t0, mut t1) = ((lo - origin) / d, (hi - origin) / d);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return false;
        }
    }
    true
}

/// Distance along the unit ray to the circle, 0 if the origin is already inside.
fn ray_circle(origin: Vec2, dir: Vec2, center: Vec2, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let c = to_origin.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let b = to_origin.dot(dir);
    if b > 0.0 {
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    Some(-b - discriminant.sqrt())
}

fn ray_rect(origin: Vec2, dir: Vec2, min: Vec2, max: Vec2) -> Option<f32> {
    let mut t_enter = 0.0f32;
    let mut t_exit = f32::INFINITY;

    for axis in 0..2 {
        let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
        if d.abs() < DIRECTION_EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let (mut t0, mut t1) = ((lo - o) / d, (hi - o) / d);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }
    Some(t_enter)
}
