//! ThreatMemory + AggroGate tests

#[cfg(test)]
mod tests {
    use super::super::aggro::*;
    use super::super::layers::*;
    use super::super::memory::*;
    use super::super::spatial::*;
    use bevy::prelude::*;

    const DT: f32 = 0.1;

    #[test]
    fn test_sighting_doubles_range_and_refreshes_timer() {
        let map = ObstacleMap::new();
        let mut memory = ThreatMemory::new(10.0, 10.0);

        let perception = memory.evaluate(Vec2::ZERO, Vec2::new(8.0, 0.0), &map, MASK_LINE_OF_SIGHT, DT);

        assert!(perception.can_see);
        assert_eq!(perception.distance, 8.0);
        assert_eq!(memory.detection_range, 20.0);
        assert_eq!(memory.alert_timer, 10.0);
        assert_eq!(memory.last_seen_position, Some(Vec2::new(8.0, 0.0)));

        // Heightened range: 15m is now visible
        assert!(memory.evaluate(Vec2::ZERO, Vec2::new(15.0, 0.0), &map, MASK_LINE_OF_SIGHT, DT).can_see);
    }

    #[test]
    fn test_out_of_range_is_not_seen() {
        let map = ObstacleMap::new();
        let mut memory = ThreatMemory::new(10.0, 10.0);

        let perception = memory.evaluate(Vec2::ZERO, Vec2::new(10.0, 0.0), &map, MASK_LINE_OF_SIGHT, DT);
        assert!(!perception.can_see, "visibility requires distance < range");
        assert!(!memory.is_aware());
    }

    #[test]
    fn test_wall_blocks_sight() {
        let map = ObstacleMap::new().with_rect(Vec2::new(2.0, -1.0), Vec2::new(3.0, 1.0), LAYER_OBSTACLES);
        let mut memory = ThreatMemory::new(10.0, 10.0);

        assert!(!memory.evaluate(Vec2::ZERO, Vec2::new(5.0, 0.0), &map, MASK_LINE_OF_SIGHT, DT).can_see);
    }

    #[test]
    fn test_alert_timer_decays_monotonically_then_range_resets() {
        let open = ObstacleMap::new();
        let walled = ObstacleMap::new().with_rect(Vec2::new(2.0, -1.0), Vec2::new(3.0, 1.0), LAYER_OBSTACLES);
        let mut memory = ThreatMemory::new(10.0, 1.0);

        memory.evaluate(Vec2::ZERO, Vec2::new(5.0, 0.0), &open, MASK_LINE_OF_SIGHT, DT);
        assert!(memory.is_aware());

        let mut previous = memory.alert_timer;
        let mut ticks = 0;
        while memory.alert_timer > 0.0 {
            memory.evaluate(Vec2::ZERO, Vec2::new(5.0, 0.0), &walled, MASK_LINE_OF_SIGHT, DT);
            assert!(memory.alert_timer < previous, "timer must strictly decrease");
            assert!(memory.pursuit_target().is_some() || memory.alert_timer == 0.0);
            previous = memory.alert_timer;
            ticks += 1;
            assert!(ticks < 100, "timer never reached zero");
        }

        assert_eq!(memory.alert_timer, 0.0);
        assert_eq!(memory.detection_range, memory.base_detection_range);
        assert!(!memory.is_aware());
        assert!(memory.pursuit_target().is_none());
    }

    #[test]
    fn test_forget_tick_decays_without_target() {
        let map = ObstacleMap::new();
        let mut memory = ThreatMemory::new(10.0, 0.15);
        memory.evaluate(Vec2::ZERO, Vec2::X, &map, MASK_LINE_OF_SIGHT, DT);

        memory.forget_tick(DT);
        assert!(memory.is_aware());
        memory.forget_tick(DT);
        assert!(!memory.is_aware());
        assert_eq!(memory.detection_range, 10.0);
    }

    #[test]
    fn test_aggro_hysteresis() {
        let mut gate = AggroGate::new(12.0, 40.0);

        assert_eq!(gate.update(20.0), None);
        assert_eq!(gate.update(12.0), Some(AggroChange::Acquired));
        // Inside the band: stays targeting
        assert_eq!(gate.update(30.0), None);
        assert!(gate.is_targeting());
        assert_eq!(gate.update(40.0), Some(AggroChange::Dropped));
        assert_eq!(gate.update(30.0), None);
        assert!(!gate.is_targeting());
    }

    #[test]
    fn test_aggro_band_enforced() {
        let gate = AggroGate::new(12.0, 5.0);
        assert!(gate.disengage_range() > gate.aggro_range());
    }

    #[test]
    fn test_aggro_release() {
        let mut gate = AggroGate::new(12.0, 40.0);
        assert_eq!(gate.release(), None);
        gate.update(1.0);
        assert_eq!(gate.release(), Some(AggroChange::Dropped));
    }
}
