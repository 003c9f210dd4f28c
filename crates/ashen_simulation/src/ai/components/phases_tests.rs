//! Tests for phase tracking, hazard timing and cooldown gates.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::action::ActionKind;
    use crate::config::BossConfig;

    #[test]
    fn test_phase2_fires_once() {
        let mut tracker = BossPhaseTracker::new();

        assert!(tracker.evaluate(0.8).is_empty());
        assert_eq!(tracker.evaluate(0.5), vec![BossPhase::Phase2]);
        assert!(tracker.evaluate(0.45).is_empty());
        assert!(tracker.evaluate(0.3).is_empty());
        assert_eq!(tracker.phase, BossPhase::Phase2);
    }

    #[test]
    fn test_both_phases_on_one_tick() {
        let mut tracker = BossPhaseTracker::new();

        assert_eq!(tracker.evaluate(0.2), vec![BossPhase::Phase2, BossPhase::Phase3]);
        assert_eq!(tracker.phase, BossPhase::Phase3);
        assert!(tracker.evaluate(0.0).is_empty());
    }

    #[test]
    fn test_phase_never_goes_back() {
        let mut tracker = BossPhaseTracker::new();
        tracker.evaluate(0.1);

        // Healing above the thresholds does not undo anything
        assert!(tracker.evaluate(1.0).is_empty());
        assert_eq!(tracker.phase, BossPhase::Phase3);
    }

    #[test]
    fn test_hazard_loop_waits_delay_plus_interval() {
        let mut hazard = HazardLoop::new(1.0, 8.0);

        let mut elapsed = 0.0;
        let mut fired_at = Vec::new();
        for _ in 0..1000 {
            elapsed += 0.02;
            if hazard.tick(0.02) {
                fired_at.push(elapsed);
            }
        }

        assert_eq!(fired_at.len(), 2);
        assert!((fired_at[0] - 9.0_f32).abs() < 0.05, "first at {}", fired_at[0]);
        assert!((fired_at[1] - 17.0_f32).abs() < 0.05, "second at {}", fired_at[1]);
    }

    #[test]
    fn test_cooldown_ready_at_exact_boundary() {
        let mut cooldowns = Cooldowns::new().with(ActionKind::Combo, 3.0);
        assert!(cooldowns.is_ready(ActionKind::Combo, 0.0));

        cooldowns.mark_used(ActionKind::Combo, 2.0);
        assert!(!cooldowns.is_ready(ActionKind::Combo, 4.99));
        assert!(cooldowns.is_ready(ActionKind::Combo, 5.0));
        assert_eq!(cooldowns.remaining(ActionKind::Combo, 4.0), 1.0);

        // No entry → no gate
        assert!(cooldowns.is_ready(ActionKind::Spin, 0.0));
    }

    #[test]
    fn test_boss_attacks_ready_regardless_of_spawn_time() {
        let mut brain = BossBrain::new(&BossConfig::default());

        for now in [0.0, 0.5, 20.0] {
            assert!(brain.cooldowns.is_ready(ActionKind::Dash, now), "dash at t={now}");
            assert!(brain.cooldowns.is_ready(ActionKind::Combo, now));
        }

        // Gate only starts counting once the dash is used
        brain.cooldowns.mark_used(ActionKind::Dash, 20.0);
        assert!(!brain.cooldowns.is_ready(ActionKind::Dash, 29.9));
        assert!(brain.cooldowns.is_ready(ActionKind::Dash, 30.0));
    }
}
