//! Body / Weapon / Tint tests

#[cfg(test)]
mod tests {
    use super::super::*;
    use bevy::prelude::*;

    #[test]
    fn test_turn_towards_is_rate_limited() {
        let mut body = Body::new(Vec2::ZERO, 0.5);
        body.facing = Vec2::Y;

        // Target straight behind: 180°, limited to 60° per call
        let behind = Vec2::new(0.0, -5.0);
        body.turn_towards(behind, 60.0);
        let residual = body.angle_to(behind).unwrap_or(f32::NAN);
        assert!((residual - 120.0).abs() < 1e-3, "residual {}", residual);

        // Small correction completes in one call
        let mut body = Body::new(Vec2::ZERO, 0.5);
        body.turn_towards(Vec2::new(1.0, 10.0), 60.0);
        assert!(body.angle_to(Vec2::new(1.0, 10.0)).is_some_and(|a| a < 1e-3));
    }

    #[test]
    fn test_apply_impulse_replaces_steering() {
        let mut body = Body::new(Vec2::ZERO, 0.5);
        body.velocity = Vec2::new(3.0, 0.0);

        body.apply_impulse(Vec2::new(0.0, 8.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.knockback, Vec2::new(0.0, 8.0));

        // Zero impulse leaves steering alone
        body.velocity = Vec2::X;
        body.apply_impulse(Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::X);
    }

    #[test]
    fn test_face_towards_self_position_is_ignored() {
        let mut body = Body::new(Vec2::new(2.0, 2.0), 0.5);
        assert!(!body.face_towards(Vec2::new(2.0, 2.0)));
        assert_eq!(body.facing, Vec2::Y);
    }

    #[test]
    fn test_weapon_tip_follows_pivot() {
        let body = Body::new(Vec2::ZERO, 0.5);
        let mut weapon = Weapon::new(1, 2.0, 0.5);

        assert!((weapon.tip(&body) - Vec2::new(0.0, 2.0)).length() < 1e-4);
        weapon.pivot_degrees = 90.0;
        assert!((weapon.tip(&body) - Vec2::new(-2.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_weapon_hit_list_resets_per_activation() {
        let mut weapon = Weapon::new(1, 1.0, 0.5);
        let target = Entity::from_raw(7);

        weapon.set_enabled(true);
        assert!(weapon.register_hit(target));
        assert!(!weapon.register_hit(target));

        // Re-enabling while on keeps the list
        weapon.set_enabled(true);
        assert!(!weapon.register_hit(target));

        weapon.set_enabled(false);
        weapon.set_enabled(true);
        assert!(weapon.register_hit(target));
    }

    #[test]
    fn test_tint_restores_to_phase_baseline() {
        let mut tint = Tint::default();
        tint.set(HIT_FLASH_COLOR);
        tint.set_base(PHASE2_COLOR);
        tint.set(STUN_COLOR);
        tint.restore();
        assert_eq!(tint.current, PHASE2_COLOR);
        assert!(tint.is_baseline());
    }
}
