use glam::DVec3;
use proptest::prelude::*;
use starplot_rs::api::{StarplotConfig, StarplotEngine};
use starplot_rs::core::{AxisLayout, compare_clockwise, default_direction, ease_step, map_to_point};
use starplot_rs::render::InMemoryScene;
use std::cmp::Ordering;

fn heading_deg(direction: DVec3) -> f64 {
    direction.x.atan2(direction.z).to_degrees().rem_euclid(360.0)
}

proptest! {
    #[test]
    fn value_at_axis_max_lands_on_the_endpoint(
        x in -10.0f64..10.0,
        z in -10.0f64..10.0,
        axis_max in 1e-3f64..1e6
    ) {
        let endpoint = DVec3::new(x, 0.0, z);
        let point = map_to_point(axis_max, endpoint, axis_max).expect("valid max");
        prop_assert_eq!(point, endpoint);

        let origin = map_to_point(0.0, endpoint, axis_max).expect("valid max");
        prop_assert_eq!(origin, DVec3::ZERO);
    }

    #[test]
    fn ease_step_never_overshoots(
        current in -1e6f64..1e6,
        target in -1e6f64..1e6,
        divisor in 1.0f64..100.0
    ) {
        let next = ease_step(current, target, divisor);
        let tolerance = 1e-9 * (1.0 + current.abs() + target.abs());
        let (low, high) = if current <= target { (current, target) } else { (target, current) };
        prop_assert!(next >= low - tolerance);
        prop_assert!(next <= high + tolerance);
    }

    #[test]
    fn ease_step_moves_toward_the_target(
        current in -1e3f64..1e3,
        gap in 1e-3f64..1e3,
        above in any::<bool>(),
        divisor in 1.0f64..60.0
    ) {
        let target = if above { current + gap } else { current - gap };
        let next = ease_step(current, target, divisor);
        prop_assert!((target - next).abs() < (target - current).abs());
    }

    #[test]
    fn ease_step_at_target_is_a_fixed_point(value in -1e6f64..1e6, divisor in 1.0f64..100.0) {
        prop_assert_eq!(ease_step(value, value, divisor), value);
    }

    #[test]
    fn default_layout_is_evenly_spaced(axis_count in 3usize..24) {
        let step = 360.0 / axis_count as f64;
        for index in 0..axis_count {
            let direction = default_direction(index, axis_count);
            let expected = (step * index as f64).rem_euclid(360.0);
            let delta = (heading_deg(direction) - expected).rem_euclid(360.0);
            prop_assert!(delta < 1e-9 || 360.0 - delta < 1e-9);
            prop_assert!((direction.length() - 0.9).abs() < 1e-12);
            prop_assert!(direction.y.abs() < 1e-12);
        }
    }

    #[test]
    fn resolved_default_layout_is_sorted_clockwise(axis_count in 3usize..24, radius in 0.1f64..10.0) {
        let layout = AxisLayout::circular(axis_count, radius).expect("layout");
        let directions = layout.directions();
        for pair in directions.windows(2) {
            prop_assert_ne!(compare_clockwise(pair[0], pair[1]), Ordering::Greater);
        }

        let mut resorted = directions.to_vec();
        resorted.sort_by(|a, b| compare_clockwise(*a, *b));
        prop_assert_eq!(resorted.as_slice(), directions);
        prop_assert!((layout.bounding_scale() - 0.9 * radius).abs() < 1e-9 * radius);
    }

    #[test]
    fn repeated_updates_converge_on_the_target(
        targets in proptest::collection::vec(-500.0f64..500.0, 5)
    ) {
        let config = StarplotConfig::new("prop", 5, vec![0.0; 5], vec![500.0; 5]);
        let mut engine = StarplotEngine::new(InMemoryScene::default(), config).expect("engine init");
        for _ in 0..1_500 {
            engine.update(&targets).expect("update");
        }
        for (current, target) in engine.current_data().iter().zip(&targets) {
            prop_assert!((current - target).abs() <= 1e-9 * (1.0 + target.abs()));
        }
    }
}
