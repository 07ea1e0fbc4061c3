//! Unit tests for npc-core.

use glam::{Quat, Vec3};

use crate::{AgentId, AgentRng, SimClock, Tick, math};

// ── math ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod math_helpers {
    use super::*;

    #[test]
    fn flatten_dir_zeroes_y_and_normalizes() {
        let d = math::flatten_dir(Vec3::new(3.0, 7.0, 4.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert_eq!(d.y, 0.0);
        assert!((d.x - 0.6).abs() < 1e-6);
        assert!((d.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn flatten_dir_degenerate_is_zero() {
        assert_eq!(math::flatten_dir(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(math::flatten_dir(Vec3::Y * 5.0), Vec3::ZERO);
    }

    #[test]
    fn look_rotation_faces_direction() {
        let rot = math::look_rotation_flat(Vec3::X);
        let fwd = math::forward(rot);
        assert!((fwd - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn look_rotation_ignores_vertical_component() {
        let rot = math::look_rotation_flat(Vec3::new(0.0, 3.0, 1.0));
        let fwd = math::forward(rot);
        assert!((fwd - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn look_rotation_degenerate_is_identity() {
        assert_eq!(math::look_rotation_flat(Vec3::Y), Quat::IDENTITY);
    }

    #[test]
    fn rotate_towards_full_t_reaches_target() {
        let target = math::look_rotation_flat(Vec3::X);
        let got = math::rotate_towards(Quat::IDENTITY, target, 5.0); // clamped to 1
        assert!((math::forward(got) - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn rotate_towards_partial_t_moves_partway() {
        let target = math::look_rotation_flat(Vec3::X);
        let got = math::rotate_towards(Quat::IDENTITY, target, 0.5);
        let angle = math::angle_between_flat_deg(math::forward(got), Vec3::Z);
        assert!(angle > 10.0 && angle < 80.0);
    }

    #[test]
    fn angle_between_flat_perpendicular() {
        let a = math::angle_between_flat_deg(Vec3::Z, Vec3::X);
        assert!((a - 90.0).abs() < 1e-3);
    }

    #[test]
    fn angle_between_flat_degenerate_is_zero() {
        assert_eq!(math::angle_between_flat_deg(Vec3::ZERO, Vec3::X), 0.0);
    }

    #[test]
    fn rotate_dir_y_quarter_turn() {
        let d = math::rotate_dir_y(Vec3::Z, 90.0);
        assert!((d - Vec3::X).length() < 1e-5);
    }
}

// ── rng ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_rng {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let seq_a: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn unit_dir_xz_is_horizontal_unit() {
        let mut rng = AgentRng::new(7, AgentId(0));
        for _ in 0..32 {
            let d = rng.unit_dir_xz();
            assert_eq!(d.y, 0.0);
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }
}

// ── time ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed() {
        let mut clock = SimClock::new(0.02);
        for _ in 0..50 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(50));
        assert!((clock.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn frame_reflects_fixed_dt() {
        let clock = SimClock::new(0.02);
        let frame = clock.frame();
        assert_eq!(frame.dt_secs, 0.02);
        assert_eq!(frame.now_secs, 0.0);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.02);
        assert_eq!(clock.ticks_for_secs(0.1), 5);
        assert_eq!(clock.ticks_for_secs(0.11), 6);
    }
}
