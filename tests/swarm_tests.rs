#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use seeker::simulation::params::Params;
use seeker::simulation::swarm::Swarm;
use seeker::simulation::world::{Ground, WorldGrid};

fn create_test_params() -> Params {
    Params {
        n_seeker: 10,
        ..Params::default()
    }
}

fn open_world(width: usize, height: usize, scale: f32) -> WorldGrid {
    WorldGrid::from_cells(width, height, vec![Ground::Way; width * height], scale).unwrap()
}

#[test]
fn test_swarm_creation() {
    let params = create_test_params();
    let world = open_world(20, 20, params.map_scale);
    let mut rng = StdRng::seed_from_u64(1);

    let swarm = Swarm::new(&params, &world, &mut rng).unwrap();

    assert_eq!(swarm.seekers.len(), params.n_seeker);
    assert_eq!(swarm.time, 0.0);
    assert_eq!(swarm.alive_count(), params.n_seeker);

    let input_count = swarm.perception().total_input_size(&params);
    for seeker in &swarm.seekers {
        assert!(seeker.is_alive());
        assert_eq!(seeker.pos, world.center());
        assert_eq!(seeker.brain.input_size(), input_count);
        assert_eq!(seeker.brain.output_size(), 2);
    }
}

#[test]
fn test_swarm_step_advances_time_and_seekers() {
    let params = create_test_params();
    let world = open_world(20, 20, params.map_scale);
    let mut rng = StdRng::seed_from_u64(2);

    let mut swarm = Swarm::new(&params, &world, &mut rng).unwrap();

    let dt = 0.05;
    for _ in 0..10 {
        swarm.step(&world, &params, dt);
    }

    assert!((swarm.time - 0.5).abs() < 0.001);

    // Nothing to crash into near the center of an open world
    assert_eq!(swarm.alive_count(), params.n_seeker);
    for seeker in &swarm.seekers {
        assert!(seeker.age >= 0.5);
        assert!(seeker.distance_travelled > 0.0);
    }
}

#[test]
fn test_swarm_counts_dead_seekers() {
    let params = create_test_params();
    let world = open_world(20, 20, params.map_scale);
    let mut rng = StdRng::seed_from_u64(3);

    let mut swarm = Swarm::new(&params, &world, &mut rng).unwrap();

    swarm.seekers[0].kill();
    swarm.seekers[1].kill();
    assert_eq!(swarm.alive_count(), params.n_seeker - 2);

    // Dead seekers are kept for the caller to score
    swarm.step(&world, &params, 0.05);
    assert_eq!(swarm.seekers.len(), params.n_seeker);
    assert_eq!(swarm.alive_count(), params.n_seeker - 2);
}
