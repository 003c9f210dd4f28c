//! ObstacleMap query tests

#[cfg(test)]
mod tests {
    use super::super::layers::*;
    use super::super::spatial::*;
    use bevy::prelude::*;

    fn pillar_map() -> ObstacleMap {
        ObstacleMap::new()
            .with_circle(Vec2::new(5.0, 0.0), 1.0, LAYER_OBSTACLES)
            .with_rect(Vec2::new(-3.0, 4.0), Vec2::new(3.0, 5.0), LAYER_OBSTACLES)
            .with_circle(Vec2::new(0.0, -5.0), 1.0, LAYER_HAZARDS)
    }

    #[test]
    fn test_segment_blocked_by_circle() {
        let map = pillar_map();
        assert!(map.segment_blocked(Vec2::ZERO, Vec2::new(10.0, 0.0), MASK_LINE_OF_SIGHT));
        assert!(!map.segment_blocked(Vec2::ZERO, Vec2::new(3.0, 0.0), MASK_LINE_OF_SIGHT));
    }

    #[test]
    fn test_segment_blocked_by_rect() {
        let map = pillar_map();
        assert!(map.segment_blocked(Vec2::ZERO, Vec2::new(0.0, 10.0), MASK_LINE_OF_SIGHT));
        assert!(!map.segment_blocked(Vec2::new(-5.0, 0.0), Vec2::new(-5.0, 10.0), MASK_LINE_OF_SIGHT));
    }

    #[test]
    fn test_mask_filters_layers() {
        let map = pillar_map();
        // Hazard circle sits on the path but is not on the sight mask
        assert!(!map.segment_blocked(Vec2::ZERO, Vec2::new(0.0, -10.0), MASK_LINE_OF_SIGHT));
        assert!(map.segment_blocked(Vec2::ZERO, Vec2::new(0.0, -10.0), LAYER_HAZARDS));
    }

    #[test]
    fn test_circle_cast_stops_at_inflated_contact() {
        let map = ObstacleMap::new().with_circle(Vec2::new(5.0, 0.0), 1.0, LAYER_OBSTACLES);
        let hit = map
            .circle_cast(Vec2::ZERO, 0.5, Vec2::X, 10.0, MASK_DASH)
            .expect("dash sweep should hit the pillar");

        assert!((hit.distance - 3.5).abs() < 1e-4);
        assert!((hit.centroid - Vec2::new(3.5, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_circle_cast_out_of_reach() {
        let map = ObstacleMap::new().with_rect(Vec2::new(4.0, -1.0), Vec2::new(6.0, 1.0), LAYER_OBSTACLES);
        assert!(map.circle_cast(Vec2::ZERO, 0.4, Vec2::X, 2.0, MASK_DASH).is_none());

        let hit = map.circle_cast(Vec2::ZERO, 0.4, Vec2::X, 5.0, MASK_DASH);
        assert!(hit.is_some_and(|h| (h.distance - 3.6).abs() < 1e-4));
    }

    #[test]
    fn test_circle_cast_zero_direction_is_noop() {
        let map = pillar_map();
        assert!(map.circle_cast(Vec2::ZERO, 0.4, Vec2::ZERO, 5.0, MASK_DASH).is_none());
    }

    #[test]
    fn test_spatial_default_is_open_field() {
        let spatial = Spatial::default();
        assert!(!spatial.query().segment_blocked(Vec2::ZERO, Vec2::splat(100.0), u32::MAX));
    }
}
