#![allow(missing_docs)]

use drift_evo::simulation::error::SimError;
use drift_evo::simulation::input::ManualInput;
use drift_evo::simulation::params::Params;
use drift_evo::simulation::track::Track;
use drift_evo::simulation::trainer::TrainerPhase;
use drift_evo::simulation::vector2::Vector2;
use drift_evo::simulation::world::{Mode, World};

fn create_test_params() -> Params {
    Params {
        num_cars: 8,
        num_best_reproduce: 2,
        rng_seed: Some(7),
        ..Params::default()
    }
}

/// Open 40×20 course with a one-pixel white border and the origin at (20, 10).
fn open_course() -> Track {
    let (width, height) = (40, 20);
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let color: [u8; 4] = if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                [255, 255, 255, 255]
            } else if (x, y) == (20, 10) {
                [255, 0, 0, 255]
            } else {
                [80, 80, 80, 255]
            };
            pixels.extend_from_slice(&color);
        }
    }
    Track::with_dimensions(width, height, pixels).unwrap()
}

fn throttle() -> ManualInput {
    ManualInput {
        up: true,
        ..ManualInput::default()
    }
}

#[test]
fn test_invalid_params_are_rejected() {
    let params = Params {
        num_best_reproduce: 0,
        ..create_test_params()
    };
    assert!(matches!(
        World::new(params, Mode::Population),
        Err(SimError::Config(_))
    ));
}

#[test]
fn test_tick_before_load_does_nothing() {
    let mut world = World::new(create_test_params(), Mode::Population).unwrap();

    world.tick(0.1, &ManualInput::default()).unwrap();
    world.frame(1.0, &ManualInput::default()).unwrap();

    assert!(!world.is_ready());
    assert!(world.cars().is_empty());
    assert!(world.track().is_none());
    assert!(world.trainer().is_none());
}

#[test]
fn test_track_loads_once() {
    let mut world = World::new(create_test_params(), Mode::Population).unwrap();

    world.load_track(open_course()).unwrap();
    assert!(world.is_ready());

    let second = world.load_track(open_course());
    assert!(matches!(second, Err(SimError::TrackAlreadyLoaded)));
}

#[test]
fn test_population_spawns_at_origin() {
    let params = create_test_params();
    let mut world = World::new(params.clone(), Mode::Population).unwrap();
    world.load_track(open_course()).unwrap();

    let cars = world.cars();
    assert_eq!(cars.len(), params.num_cars);
    for car in &cars {
        assert_eq!(car.position, Vector2::new(20.0, 10.0));
        assert_eq!(car.heading, 0.0);
        assert!(car.alive);
    }

    let trainer = world.trainer().unwrap();
    assert_eq!(trainer.generation(), 0);
    assert_eq!(trainer.phase(), TrainerPhase::Running);
    assert!(world.manual_car().is_none());
}

#[test]
fn test_paused_world_is_frozen() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.load_track(open_course()).unwrap();

    world.set_paused(true);
    world.tick(0.05, &throttle()).unwrap();
    world.frame(1.0, &throttle()).unwrap();
    world.frame(2.0, &throttle()).unwrap();

    assert!(world.is_paused());
    let car = world.manual_car().unwrap();
    assert_eq!(car.position, Vector2::new(20.0, 10.0));
    assert_eq!(car.velocity, Vector2::zero());
}

#[test]
fn test_resume_does_not_replay_paused_time() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.load_track(open_course()).unwrap();

    world.frame(0.0, &ManualInput::default()).unwrap();
    world.set_paused(true);
    world.set_paused(false);
    world.frame(100.0, &throttle()).unwrap();

    let car = world.manual_car().unwrap();
    assert_eq!(car.position, Vector2::new(20.0, 10.0));
    assert_eq!(car.velocity, Vector2::zero());
}

#[test]
fn test_resume_keeps_car_velocity() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.load_track(open_course()).unwrap();

    let mut now = 0.0;
    for _ in 0..10 {
        world.frame(now, &throttle()).unwrap();
        now += 0.016;
    }
    let before = *world.manual_car().unwrap();
    assert!(before.velocity.magnitude() > 0.0);

    world.set_paused(true);
    world.set_paused(false);
    world.frame(now + 5.0, &ManualInput::default()).unwrap();

    let after = *world.manual_car().unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_zero_time_frames_do_not_change_car() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.load_track(open_course()).unwrap();

    world.tick(0.01, &throttle()).unwrap();
    let before = *world.manual_car().unwrap();

    // first frame of the clock carries no elapsed time
    world.frame(42.0, &throttle()).unwrap();
    world.tick(0.0, &throttle()).unwrap();

    assert_eq!(*world.manual_car().unwrap(), before);
}

#[test]
fn test_manual_car_accelerates() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.load_track(open_course()).unwrap();

    // 300 px/s² for 0.01 s: v = 3, moved 0.03
    world.tick(0.01, &throttle()).unwrap();

    let car = world.manual_car().unwrap();
    assert!((car.velocity.x - 3.0).abs() < 1e-9);
    assert!((car.position.x - 20.03).abs() < 1e-9);
    assert_eq!(world.cars().len(), 1);
    assert!(world.trainer().is_none());
}

#[test]
fn test_manual_car_is_reset_off_track() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.load_track(open_course()).unwrap();

    world.tick(1.0, &throttle()).unwrap();

    let car = world.manual_car().unwrap();
    assert_eq!(car.position, Vector2::new(20.0, 10.0));
    assert_eq!(car.velocity, Vector2::zero());
    assert!(world.cars()[0].alive);
}

#[test]
fn test_reset_restarts_population() {
    let params = create_test_params();
    let mut world = World::new(params.clone(), Mode::Population).unwrap();
    world.load_track(open_course()).unwrap();

    for _ in 0..20 {
        world.tick(0.1, &ManualInput::default()).unwrap();
    }
    world.reset().unwrap();

    let trainer = world.trainer().unwrap();
    assert_eq!(trainer.generation(), 0);
    assert_eq!(trainer.alive_count(), params.num_cars);
    assert!(trainer.agents().iter().all(|a| a.fitness == 0.0));
    assert!(world
        .cars()
        .iter()
        .all(|c| c.position == Vector2::new(20.0, 10.0)));
}

#[test]
fn test_reset_before_load_is_noop() {
    let mut world = World::new(create_test_params(), Mode::Manual).unwrap();
    world.reset().unwrap();
    assert!(!world.is_ready());
}

#[test]
fn test_population_keeps_size_across_generations() {
    let params = Params {
        turnover_delay: 0.0,
        ..create_test_params()
    };
    let mut world = World::new(params.clone(), Mode::Population).unwrap();
    world.load_track(open_course()).unwrap();

    for _ in 0..200 {
        world.tick(0.1, &ManualInput::default()).unwrap();
        assert_eq!(world.cars().len(), params.num_cars);
    }
}
