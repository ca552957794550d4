use boid_flock::params::{BoundaryMode, FlockConfig, UpdateMode};
use boid_flock::rules::{alignment, cohesion, separation};
use boid_flock::{initialize_population, nearest_indices, nearest_neighbours, step_simulation, Boid, Vector2};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn boid(px: f64, py: f64, vx: f64, vy: f64) -> Boid {
    Boid::new(Vector2::new(px, py), Vector2::new(vx, vy))
}

fn pair_config() -> FlockConfig {
    FlockConfig {
        neighbor_count: 2,
        proximity_threshold: 25.0,
        ..FlockConfig::default()
    }
}

#[test]
fn two_boids_rule_contributions_have_expected_signs() {
    let a = boid(0.0, 0.0, 0.0, 0.0);
    let b = boid(10.0, 0.0, 0.0, 0.0);
    let population = [a, b];
    let config = pair_config();

    let near_a = nearest_neighbours(&a, &population, config.neighbor_count);
    let near_b = nearest_neighbours(&b, &population, config.neighbor_count);

    // Separation pushes them apart
    assert_eq!(separation(&near_a, &a, config.proximity_threshold), Vector2::new(-10.0, 0.0));
    assert_eq!(separation(&near_b, &b, config.proximity_threshold), Vector2::new(10.0, 0.0));

    // Cohesion pulls them together, much more weakly
    assert_eq!(cohesion(&near_a, &a, config.cohesion_damping), Vector2::new(0.05, 0.0));
    assert_eq!(cohesion(&near_b, &b, config.cohesion_damping), Vector2::new(-0.05, 0.0));

    // Nobody is moving yet
    assert_eq!(alignment(&near_a, &a, config.alignment_damping), Vector2::ZERO);
}

#[test]
fn two_boids_after_one_sequential_tick() {
    let mut population = vec![boid(0.0, 0.0, 0.0, 0.0), boid(10.0, 0.0, 0.0, 0.0)];
    step_simulation(&mut population, &pair_config());

    // Boid 0: -9.95 clamped to -5, moves to x = -5, wraps to 1280 - 5
    assert!((population[0].velocity.x + 5.0).abs() < 1e-9);
    assert_eq!(population[0].velocity.y, 0.0);
    assert!((population[0].position.x - 1275.0).abs() < 1e-9);

    // Boid 1 sees boid 0 already on the far side: cohesion (642.5 - 10) / 100
    // plus alignment (-2.5 / 20) gives +6.2, clamped to +5
    assert!((population[1].velocity.x - 5.0).abs() < 1e-9);
    assert!((population[1].position.x - 15.0).abs() < 1e-9);
}

#[test]
fn two_boids_after_one_simultaneous_tick() {
    let config = FlockConfig {
        update_mode: UpdateMode::Simultaneous,
        max_speed: 50.0,
        ..pair_config()
    };
    let mut population = vec![boid(100.0, 100.0, 0.0, 0.0), boid(110.0, 100.0, 0.0, 0.0)];
    step_simulation(&mut population, &config);

    // Each gets the mirror image of the other's nudge: separation 10, cohesion 0.05
    assert!((population[0].velocity.x + 9.95).abs() < 1e-9);
    assert!((population[1].velocity.x - 9.95).abs() < 1e-9);
    assert!((population[0].position.x - 90.05).abs() < 1e-9);
    assert!((population[1].position.x - 119.95).abs() < 1e-9);
}

#[test]
fn stepping_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let start = initialize_population(60, 1280.0, 760.0, &mut rng);
    let config = FlockConfig::default();

    let mut a = start.clone();
    let mut b = start.clone();
    for _ in 0..50 {
        step_simulation(&mut a, &config);
        step_simulation(&mut b, &config);
    }
    assert_eq!(a, b);
}

#[test]
fn reflect_wrap_through_a_full_tick() {
    let config = FlockConfig {
        neighbor_count: 1,
        ..FlockConfig::default()
    };

    let mut left = vec![boid(1.0, 300.0, -4.0, 0.0)];
    step_simulation(&mut left, &config);
    assert_eq!(left[0].position, Vector2::new(1277.0, 300.0));

    let mut right = vec![boid(1279.0, 300.0, 4.0, 0.0)];
    step_simulation(&mut right, &config);
    assert_eq!(right[0].position, Vector2::new(-3.0, 300.0));

    let mut torus = vec![boid(1279.0, 300.0, 4.0, 0.0)];
    step_simulation(
        &mut torus,
        &FlockConfig {
            boundary_mode: BoundaryMode::Torus,
            ..config
        },
    );
    assert_eq!(torus[0].position, Vector2::new(3.0, 300.0));
}

fn arb_boid() -> impl Strategy<Value = Boid> {
    (0.0..1280.0f64, 0.0..760.0f64, -20.0..20.0f64, -20.0..20.0f64)
        .prop_map(|(px, py, vx, vy)| boid(px, py, vx, vy))
}

proptest! {
    #[test]
    fn speed_never_exceeds_max_after_a_tick(
        mut population in prop::collection::vec(arb_boid(), 1..40),
        simultaneous in any::<bool>(),
    ) {
        let config = FlockConfig {
            update_mode: if simultaneous { UpdateMode::Simultaneous } else { UpdateMode::Sequential },
            ..FlockConfig::default()
        };
        step_simulation(&mut population, &config);
        for b in &population {
            prop_assert!(b.velocity.length() <= config.max_speed + 1e-9);
        }
    }

    #[test]
    fn neighbours_are_sorted_and_start_with_the_target(
        population in prop::collection::vec(arb_boid(), 7..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.index(population.len());
        let ranked = nearest_indices(population[target].position, &population, 7);

        prop_assert_eq!(ranked.len(), 7);
        prop_assert_eq!(ranked[0].distance, 0.0);
        prop_assert_eq!(population[ranked[0].index].position, population[target].position);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn torus_keeps_every_boid_inside_the_world(
        mut population in prop::collection::vec(arb_boid(), 1..30),
    ) {
        let config = FlockConfig {
            boundary_mode: BoundaryMode::Torus,
            ..FlockConfig::default()
        };
        for _ in 0..5 {
            step_simulation(&mut population, &config);
        }
        for b in &population {
            prop_assert!((0.0..config.world_width).contains(&b.position.x));
            prop_assert!((0.0..config.world_height).contains(&b.position.y));
        }
    }
}
