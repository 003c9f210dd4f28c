//! Tests for the decision policies.

#[cfg(test)]
mod tests {
    use super::super::components::{CloneBrain, Cooldowns};
    use super::super::policy::*;
    use crate::action::ActionKind;
    use crate::config::{BossConfig, CloneConfig, EnemyConfig};
    use crate::perception::{Perception, ThreatMemory};
    use bevy::prelude::*;

    fn all_ready(config: &BossConfig) -> Cooldowns {
        Cooldowns::new()
            .with(ActionKind::Combo, config.cooldowns.combo)
            .with(ActionKind::Charge, config.cooldowns.charge)
            .with(ActionKind::Spin, config.cooldowns.spin)
            .with(ActionKind::Dash, config.cooldowns.dash)
    }

    fn kinds(candidates: &[Candidate]) -> Vec<ActionKind> {
        candidates.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_boss_close_range_candidates() {
        let config = BossConfig::default();
        let candidates = boss_candidates(1.0, &config, &all_ready(&config), 0.0);

        assert_eq!(kinds(&candidates), vec![ActionKind::Combo, ActionKind::Spin]);
        // lerp(2.2, 1.2, 1/3)
        assert!((candidates[0].weight - 1.8667).abs() < 1e-3);
    }

    #[test]
    fn test_boss_melee_edge_allows_charge() {
        let config = BossConfig::default();
        let candidates = boss_candidates(3.0, &config, &all_ready(&config), 0.0);

        assert_eq!(
            kinds(&candidates),
            vec![ActionKind::Combo, ActionKind::Spin, ActionKind::Charge]
        );
        let charge = candidates[2];
        assert!((charge.weight - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_boss_far_candidates() {
        let config = BossConfig::default();
        let candidates = boss_candidates(11.0, &config, &all_ready(&config), 0.0);

        assert_eq!(kinds(&candidates), vec![ActionKind::Dash]);
        // inverse_lerp(10, 12, 11) = 0.5 → lerp(0.8, 1.6, 0.5)
        assert!((candidates[0].weight - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_cooldowns_remove_candidates() {
        let config = BossConfig::default();
        let mut cooldowns = all_ready(&config);
        cooldowns.mark_used(ActionKind::Combo, 10.0);
        cooldowns.mark_used(ActionKind::Spin, 10.0);

        assert!(boss_candidates(1.0, &config, &cooldowns, 11.0).is_empty());
        assert_eq!(
            kinds(&boss_candidates(1.0, &config, &cooldowns, 13.0)),
            vec![ActionKind::Combo]
        );
    }

    #[test]
    fn test_pick_weighted_bounds() {
        let candidates = [
            Candidate { kind: ActionKind::Combo, weight: 1.0 },
            Candidate { kind: ActionKind::Spin, weight: 3.0 },
        ];

        assert_eq!(pick_weighted(&candidates, 0.0), Some(ActionKind::Combo));
        assert_eq!(pick_weighted(&candidates, 0.25), Some(ActionKind::Combo));
        assert_eq!(pick_weighted(&candidates, 0.26), Some(ActionKind::Spin));
        assert_eq!(pick_weighted(&candidates, 0.999), Some(ActionKind::Spin));
        assert_eq!(pick_weighted(&[], 0.5), None);
    }

    #[test]
    fn test_zero_weight_still_pickable() {
        let candidates = [
            Candidate { kind: ActionKind::Charge, weight: 0.0 },
            Candidate { kind: ActionKind::Dash, weight: 0.0 },
        ];

        assert_eq!(pick_weighted(&candidates, 0.1), Some(ActionKind::Charge));
        assert_eq!(pick_weighted(&candidates, 0.9), Some(ActionKind::Dash));
    }

    #[test]
    fn test_chase_velocity_slows_and_stops() {
        let far = chase_velocity(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.5, 1.8, 0.25);
        assert_eq!(far, Vec2::new(2.5, 0.0));

        let near = chase_velocity(Vec2::ZERO, Vec2::new(1.925, 0.0), 2.5, 1.8, 0.25);
        assert!((near.x - 1.25).abs() < 1e-3, "near = {:?}", near);

        assert_eq!(chase_velocity(Vec2::ZERO, Vec2::new(1.8, 0.0), 2.5, 1.8, 0.25), Vec2::ZERO);
        assert_eq!(chase_velocity(Vec2::ZERO, Vec2::ZERO, 2.5, 0.0, 0.25), Vec2::ZERO);
    }

    #[test]
    fn test_enemy_bands() {
        let config = EnemyConfig::default();
        let memory = ThreatMemory::new(config.detect_range, config.alert_duration);
        let seen = |distance| Some(Perception { can_see: true, distance });

        assert_eq!(enemy_band(seen(8.0), &memory, &config), EnemyBand::LongRush);
        assert_eq!(enemy_band(seen(6.0), &memory, &config), EnemyBand::Approach);
        assert_eq!(enemy_band(seen(2.0), &memory, &config), EnemyBand::Melee);
        assert_eq!(enemy_band(None, &memory, &config), EnemyBand::Idle);
    }

    #[test]
    fn test_enemy_investigates_memory_only() {
        let config = EnemyConfig::default();
        let mut memory = ThreatMemory::new(config.detect_range, config.alert_duration);
        memory.last_seen_position = Some(Vec2::new(4.0, 4.0));
        memory.alert_timer = 3.0;

        let hidden = Some(Perception { can_see: false, distance: 5.0 });
        assert_eq!(
            enemy_band(hidden, &memory, &config),
            EnemyBand::Investigate(Vec2::new(4.0, 4.0))
        );

        memory.alert_timer = 0.0;
        assert_eq!(enemy_band(hidden, &memory, &config), EnemyBand::Idle);
    }

    #[test]
    fn test_melee_coin_flip() {
        assert_eq!(melee_choice(0.9), ActionKind::Swing);
        assert_eq!(melee_choice(0.5), ActionKind::ShortLunge);
        assert_eq!(melee_choice(0.0), ActionKind::ShortLunge);
    }

    #[test]
    fn test_clone_slash_gate() {
        let config = CloneConfig::default();
        let mut brain = CloneBrain::new(&config);

        assert!(clone_should_slash(2.0, &config, &brain.cooldowns, 0.0));
        assert!(!clone_should_slash(3.0, &config, &brain.cooldowns, 0.0));

        brain.cooldowns.mark_used(ActionKind::Slash, 1.0);
        assert!(!clone_should_slash(2.0, &config, &brain.cooldowns, 2.5));
        assert!(clone_should_slash(2.0, &config, &brain.cooldowns, 3.0));
    }
}
