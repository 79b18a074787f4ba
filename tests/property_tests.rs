//! Property tests for the closed-form flight and the controller laws.

use proptest::prelude::*;
use trajectory_sim::core::kinematics::{EARTH_GRAVITY_MPS2, position, time_of_flight};
use trajectory_sim::core::{
    LaunchParameters, ManualClock, RecordingRenderer, SimConfig, SimulationController,
    SimulationMode,
};

const G: f64 = EARTH_GRAVITY_MPS2;

proptest! {
    /// The landing time puts the projectile back on the ground.
    #[test]
    fn lands_at_ground_level(
        speed in 0.0f64..200.0,
        angle in 0.0f64..360.0,
        y0 in 0.0f64..100.0,
    ) {
        let params = LaunchParameters::new(speed, angle, 0.0, y0);
        let t_land = time_of_flight(params, G);
        prop_assert!(t_land >= 0.0);

        let (_, y) = position(params, G, t_land);
        let scale = 1.0 + speed * speed / G + y0;
        prop_assert!(y.abs() <= 1e-9 * scale, "y={y} at t={t_land}");
    }

    /// Time zero is exactly the launch point.
    #[test]
    fn starts_at_launch_point(
        speed in 0.0f64..200.0,
        angle in -360.0f64..360.0,
        x0 in -100.0f64..100.0,
        y0 in 0.0f64..100.0,
    ) {
        let params = LaunchParameters::new(speed, angle, x0, y0);
        prop_assert_eq!(position(params, G, 0.0), (x0, y0));
    }

    /// Upward launches from the ground stay above it until they land.
    #[test]
    fn upward_flight_stays_above_ground(
        speed in 0.1f64..100.0,
        angle in 1.0f64..179.0,
        fraction in 0.0f64..=1.0,
    ) {
        let params = LaunchParameters::new(speed, angle, 0.0, 0.0);
        let t_land = time_of_flight(params, G);
        let (_, y) = position(params, G, t_land * fraction);
        prop_assert!(y >= -1e-9 * (1.0 + speed * speed), "y={y}");
    }

    /// Ticking any time after landing gives the landing position.
    #[test]
    fn late_tick_is_clamped(
        speed in 0.0f64..60.0,
        angle in 0.0f64..180.0,
        y0 in 0.0f64..20.0,
        overshoot in 0.0f64..1.0e6,
    ) {
        let params = LaunchParameters::new(speed, angle, 0.0, y0);
        let clock = ManualClock::new(0.0);

        let mut late = SimulationController::new(SimConfig::default(), RecordingRenderer::default(), &clock);
        late.launch(params).expect("valid launch");
        let total = late.flight().map(|f| f.total_flight_time_s).unwrap_or_default();
        let a = late.tick(total + overshoot).expect("playing");

        let mut exact = SimulationController::new(SimConfig::default(), RecordingRenderer::default(), &clock);
        exact.launch(params).expect("valid launch");
        let b = exact.tick(total).expect("playing");

        prop_assert_eq!((a.x_m, a.y_m), (b.x_m, b.y_m));
        prop_assert_eq!(late.mode(), SimulationMode::Waiting);
    }

    /// Vertical launches never drift sideways.
    #[test]
    fn vertical_launch_has_no_drift(
        speed in 0.0f64..100.0,
        x0 in -50.0f64..50.0,
        fraction in 0.0f64..=1.0,
    ) {
        let params = LaunchParameters::new(speed, 90.0, x0, 0.0);
        let t = time_of_flight(params, G) * fraction;
        let (x, _) = position(params, G, t);
        prop_assert!((x - x0).abs() < 1e-9);
    }
}
