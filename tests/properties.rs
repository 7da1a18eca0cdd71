//! Algebraic properties of the sprite model

use blob_arena::sim::{Body, Disc, Star};
use blob_arena::{RandomSource, SimRng};
use glam::DVec2;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -0.5f64..1.5
}

fn radius() -> impl Strategy<Value = f64> {
    0.001f64..0.3
}

fn far_coord() -> impl Strategy<Value = f64> {
    prop_oneof![-20.0f64..20.0, -1e12f64..1e12, -1e17f64..1e17, Just(1e17), Just(-1e17)]
}

fn disc_strategy() -> impl Strategy<Value = Disc> {
    (coord(), coord(), radius()).prop_map(|(x, y, r)| Disc::new(DVec2::new(x, y), r).unwrap())
}

proptest! {
    #[test]
    fn set_size_of_own_size_keeps_radius(d in disc_strategy()) {
        let mut round_trip = d.clone();
        round_trip.set_size(d.size()).unwrap();
        prop_assert!((round_trip.radius() - d.radius()).abs() <= 1e-12 * d.radius().max(1.0));
    }

    #[test]
    fn touching_is_symmetric(a in disc_strategy(), b in disc_strategy()) {
        prop_assert_eq!(a.touching(&b), b.touching(&a));
    }

    #[test]
    fn covering_implies_touching(
        a in disc_strategy(),
        angle in 0.0f64..std::f64::consts::TAU,
        shrink in 0.01f64..0.99,
        depth in 0.0f64..0.99,
    ) {
        // b sits strictly inside a
        let b_radius = a.radius() * shrink;
        let offset = (a.radius() - b_radius) * depth;
        let b = Disc::new(a.pos() + DVec2::from_angle(angle) * offset, b_radius).unwrap();
        prop_assert!(a.covering(&b));
        prop_assert!(a.touching(&b));
        prop_assert!(b.touching(&a));
    }

    #[test]
    fn aim_towards_damps_only_inside_radius(
        d in disc_strategy(),
        angle in 0.0f64..std::f64::consts::TAU,
        reach in 0.0f64..3.0,
        speed in 0.01f64..2.0,
    ) {
        let mut d = d;
        let dist = reach * d.radius();
        let target = d.pos() + DVec2::from_angle(angle) * dist;
        d.aim_towards(target, speed);
        let actual = (target - d.pos()).length();
        if actual < d.radius() {
            let expected = speed * actual / d.radius();
            prop_assert!((d.speed() - expected).abs() < 1e-9);
            prop_assert!(d.speed() <= speed + 1e-12);
        } else {
            prop_assert!((d.speed() - speed).abs() < 1e-9);
        }
    }

    #[test]
    fn wrap_converges_and_is_idempotent(
        x in far_coord(),
        y in far_coord(),
        r in radius(),
    ) {
        let mut d = Disc::new(DVec2::new(x, y), r).unwrap();
        d.wrap();
        let p = d.pos();
        prop_assert!(p.x >= -r && p.x <= 1.0 + r);
        prop_assert!(p.y >= -r && p.y <= 1.0 + r);

        d.wrap();
        prop_assert_eq!(d.pos(), p);
    }

    #[test]
    fn bounce_flips_outward_vx_only(
        y in 0.3f64..0.7,
        r in 0.01f64..0.2,
        overshoot in 0.0001f64..0.1,
        vx in 0.001f64..1.0,
        vy in -1.0f64..1.0,
    ) {
        let x = 1.0 - r + overshoot;
        let mut d = Disc::new(DVec2::new(x, y), r)
            .unwrap()
            .with_velocity(DVec2::new(vx, vy));
        d.bounce();
        prop_assert_eq!(d.vel(), DVec2::new(-vx, vy));
    }

    #[test]
    fn set_speed_never_leaves_disc_stationary(
        d in disc_strategy(),
        speed in 0.001f64..5.0,
        seed in any::<u64>(),
    ) {
        let mut rng = SimRng::new(seed);
        let mut d = d;
        d.set_speed(speed, &mut rng);
        prop_assert!(d.vel().is_finite());
        prop_assert!((d.speed() - speed).abs() < 1e-9);
    }

    #[test]
    fn aim_away_is_always_finite(d in disc_strategy(), seed in any::<u64>(), jitter in 0.0f64..0.002) {
        let mut rng = SimRng::new(seed);
        let mut d = d;
        let target = d.pos() + rng.random_direction() * jitter;
        d.aim_away_from(target, 0.1, &mut rng);
        prop_assert!(d.vel().is_finite());
        prop_assert!((d.speed() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn star_boundary_alternates_radii(
        x in coord(),
        y in coord(),
        r in radius(),
        points in 3u32..40,
    ) {
        let star = Star::new(DVec2::new(x, y), r, points).unwrap();
        prop_assert_eq!(star.boundary().len(), 2 * points as usize);
        for (i, v) in star.boundary().iter().enumerate() {
            let expected = if i % 2 == 0 { r * 1.2 } else { r * 0.8 };
            prop_assert!(((*v - star.pos()).length() - expected).abs() < 1e-9);
        }
    }
}
