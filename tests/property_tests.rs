use proptest::prelude::*;
use stardrift::models::config::{ClusterConfig, MotionPolicy};
use stardrift::models::ship::Ship;
use stardrift::models::starfield::Starfield;
use stardrift::models::vector::Vector;
use stardrift::render::context::DrawingContext;
use stardrift::render::recording::RecordingSurface;

fn motion() -> impl Strategy<Value = MotionPolicy> {
    prop_oneof![Just(MotionPolicy::Drift), Just(MotionPolicy::Steer)]
}

fn all_in_bounds(field: &Starfield) -> bool {
    field
        .stars()
        .all(|s| s.x >= 0.0 && s.x < field.width() && s.y >= 0.0 && s.y < field.height())
}

proptest! {
    /// Property: Generated stars always lie on the surface
    #[test]
    fn generated_stars_in_bounds(
        seed in any::<u64>(),
        width in 1.0f64..4000.0,
        height in 1.0f64..4000.0,
        count in 0usize..200,
    ) {
        let mut field = Starfield::new(width, height, MotionPolicy::Drift, seed).unwrap();
        field.generate_cluster(ClusterConfig::new(2.0).with_count(count));

        prop_assert_eq!(field.clusters()[0].len(), count);
        prop_assert!(all_in_bounds(&field));
    }

    /// Property: No star escapes the surface, whatever the velocity
    #[test]
    fn update_keeps_stars_in_bounds(
        seed in any::<u64>(),
        motion in motion(),
        vx in -5000.0f64..5000.0,
        vy in -5000.0f64..5000.0,
        radius in 0.5f64..8.0,
        frames in 1usize..40,
    ) {
        let mut field = Starfield::new(640.0, 480.0, motion, seed).unwrap();
        field.generate_cluster(
            ClusterConfig::new(radius).with_count(20).with_velocity(Vector::new(vx, vy)),
        );
        field.update_velocity(vx, vy);

        for _ in 0..frames {
            field.update();
            prop_assert!(all_in_bounds(&field), "star escaped with velocity ({}, {})", vx, vy);
        }
    }

    /// Property: Steering twice with the same heading equals steering once
    #[test]
    fn steering_is_idempotent(
        seed in any::<u64>(),
        motion in motion(),
        angle in -10.0f64..10.0,
    ) {
        let mut field = Starfield::new(800.0, 600.0, motion, seed).unwrap();
        field.generate_cluster(ClusterConfig::new(4.0).with_velocity(Vector::new(4.0, 4.0)));
        field.generate_cluster(ClusterConfig::new(1.0).with_velocity(Vector::new(2.0, -2.0)));

        field.steer(angle);
        let once: Vec<Vector> = field.clusters().iter().map(|c| c.velocity).collect();
        field.steer(angle);
        let twice: Vec<Vector> = field.clusters().iter().map(|c| c.velocity).collect();

        prop_assert_eq!(once, twice);
    }

    /// Property: Drift keeps each cluster's speed magnitude
    #[test]
    fn drift_preserves_speed(angle in -10.0f64..10.0) {
        let mut field = Starfield::new(800.0, 600.0, MotionPolicy::Drift, 3).unwrap();
        field.generate_cluster(ClusterConfig::new(3.0).with_velocity(Vector::new(3.0, -3.0)));

        field.update_direction(angle);

        let v = field.clusters()[0].velocity;
        prop_assert_eq!(v.x.abs(), 3.0);
        prop_assert_eq!(v.y.abs(), 3.0);
    }

    /// Property: Rendering the ship leaves the transform where it found it
    #[test]
    fn ship_render_restores_transform(
        angle in -100.0f64..100.0,
        size in 1.0f64..200.0,
        width in 1.0f64..4000.0,
        height in 1.0f64..4000.0,
    ) {
        let mut ship = Ship::new(size, width, height);
        ship.set_angle(angle);
        let mut ctx = DrawingContext::new(RecordingSurface::new());

        ship.render(&mut ctx);

        prop_assert!(ctx.transform().is_identity(1e-6), "{:?}", ctx.transform());
    }
}
