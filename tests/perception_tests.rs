#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seeker::simulation::params::Params;
use seeker::simulation::seeker::{Perception, Seeker, Sense, Vision};
use seeker::simulation::world::{Ground, WorldGrid};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn pos(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

fn open_world(width: usize, height: usize, scale: f32) -> WorldGrid {
    WorldGrid::from_cells(width, height, vec![Ground::Way; width * height], scale).unwrap()
}

/// Open world with one full-height obstacle column at cell `wall_x`.
fn world_with_wall_column(width: usize, height: usize, scale: f32, wall_x: usize) -> WorldGrid {
    let mut cells = vec![Ground::Way; width * height];
    for y in 0..height {
        cells[y * width + wall_x] = Ground::Obstacle;
    }
    WorldGrid::from_cells(width, height, cells, scale).unwrap()
}

#[test]
fn test_perception_size_matches_brain_input() {
    let params = Params::default();
    let world = open_world(20, 20, params.map_scale);
    let perception = Perception::default();

    // vision rays + heading(2) + position encoding(4)
    let expected = params.num_vision_directions + 6;
    assert_eq!(perception.total_input_size(&params), expected);
    assert_eq!(perception.senses().len(), 2);

    let mut seeker = Seeker::new_random(0, &world.center(), expected, &params, &mut rng(1)).unwrap();
    let stimulus = perception.perceive(&seeker, &world, &params);
    assert_eq!(stimulus.len(), expected);

    let outputs = seeker.brain.think(&stimulus).unwrap();
    assert_eq!(outputs.len(), 2);
}

#[test]
fn test_vision_sees_nothing_in_open_world() {
    let params = Params::default();
    let world = open_world(40, 40, params.map_scale);
    let vision = Vision::new();

    let mut seeker =
        Seeker::new_random(0, &world.center(), params.num_vision_directions, &params, &mut rng(2))
            .unwrap();
    seeker.rot = 0.0;

    let outputs = vision.sense(&seeker, &world, &params);
    assert_eq!(outputs.len(), params.num_vision_directions);
    for &value in &outputs {
        assert_eq!(value, 0.0);
    }
}

#[test]
fn test_vision_proximity_orders_walls() {
    let params = Params::default();
    // Wall column at world x in [150, 160)
    let world = world_with_wall_column(30, 20, params.map_scale, 15);
    let vision = Vision::new();

    let mut near =
        Seeker::new_random(0, &pos(120.0, 105.0), params.num_vision_directions, &params, &mut rng(3))
            .unwrap();
    near.rot = 0.0;
    let mut far = near.clone();
    far.pos = pos(100.0, 105.0);

    let near_outputs = vision.sense(&near, &world, &params);
    let far_outputs = vision.sense(&far, &world, &params);

    // Center ray looks straight down +x at the wall
    let center = params.num_vision_directions / 2;
    assert!(far_outputs[center] > 0.0);
    assert!(near_outputs[center] > far_outputs[center]);

    for &value in near_outputs.iter().chain(far_outputs.iter()) {
        assert!((0.0..=1.0).contains(&value));
    }
}

#[test]
fn test_vision_directions_fan_across_field_of_view() {
    let params = Params::default();
    let world = open_world(10, 10, params.map_scale);
    let mut seeker =
        Seeker::new_random(0, &world.center(), params.num_vision_directions, &params, &mut rng(4))
            .unwrap();
    seeker.rot = 0.3;

    let single = seeker.vision_directions(params.fov, 1);
    assert_eq!(single.len(), 1);
    assert!((single[0][0] - 0.3f32.cos()).abs() < 1e-6);
    assert!((single[0][1] - 0.3f32.sin()).abs() < 1e-6);

    let fan = seeker.vision_directions(params.fov, 5);
    assert_eq!(fan.len(), 5);
    let first_angle = 0.3 - params.fov / 2.0;
    assert!((fan[0][0] - first_angle.cos()).abs() < 1e-6);
    assert!((fan[0][1] - first_angle.sin()).abs() < 1e-6);
    // Center ray points along the heading
    assert!((fan[2][0] - 0.3f32.cos()).abs() < 1e-6);
    assert!((fan[2][1] - 0.3f32.sin()).abs() < 1e-6);
}

#[test]
fn test_seeker_moves_in_open_world() {
    let params = Params::default();
    let world = open_world(20, 20, params.map_scale);
    let perception = Perception::default();
    let input_count = perception.total_input_size(&params);

    let mut seeker =
        Seeker::new_random(0, &world.center(), input_count, &params, &mut rng(5)).unwrap();
    let spawn = seeker.pos.clone();

    for _ in 0..5 {
        seeker.step(&world, &perception, &params, 0.05).unwrap();
    }

    assert!(seeker.is_alive());
    assert!(seeker.age >= 0.25);
    // Thrust is a sigmoid output, so the seeker always creeps forward
    assert!(seeker.distance_travelled > 0.0);
    assert_ne!(seeker.pos, spawn);
}

#[test]
fn test_seeker_dies_on_obstacle_and_stops_moving() {
    let params = Params::default();
    let world = WorldGrid::from_cells(3, 3, vec![Ground::Obstacle; 9], params.map_scale).unwrap();
    let perception = Perception::default();
    let input_count = perception.total_input_size(&params);

    let mut seeker =
        Seeker::new_random(0, &world.center(), input_count, &params, &mut rng(6)).unwrap();

    seeker.step(&world, &perception, &params, 0.05).unwrap();
    assert!(!seeker.is_alive());

    let resting = seeker.pos.clone();
    let age = seeker.age;
    seeker.step(&world, &perception, &params, 0.05).unwrap();
    assert_eq!(seeker.pos, resting);
    assert_eq!(seeker.age, age);
}
