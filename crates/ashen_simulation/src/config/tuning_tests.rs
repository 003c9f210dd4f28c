//! Tests for tuning defaults and JSON overrides.

#[cfg(test)]
mod tests {
    use super::super::tuning::*;

    #[test]
    fn test_boss_defaults() {
        let boss = BossConfig::default();
        assert_eq!(boss.combo.len(), 3);
        assert_eq!(boss.stun_threshold, 3);
        assert!(boss.disengage_range > boss.aggro_range);
        assert_eq!(boss.cooldowns.dash, 10.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "boss": { "move_speed": 4.0 }, "enemy": { "max_health": 5 } }"#;
        let tuning = CombatTuning::from_json(json).expect("valid tuning json");

        assert_eq!(tuning.boss.move_speed, 4.0);
        assert_eq!(tuning.boss.charge_speed, BossConfig::default().charge_speed);
        assert_eq!(tuning.enemy.max_health, 5);
        assert_eq!(tuning.enemy.long_rush, EnemyConfig::default().long_rush);
        assert_eq!(tuning.player, PlayerConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(CombatTuning::from_json("{ boss: ").is_err());
    }
}
