use drift_evo::simulation::world::World;
use macroquad::prelude::*;

const CAR_LENGTH: f32 = 10.0;
const CAR_WIDTH: f32 = 5.0;

pub fn draw_course(texture: &Texture2D, world: &World) {
    draw_texture(texture, 0.0, 0.0, WHITE);

    if let Some(track) = world.track() {
        let origin = track.origin();
        draw_rectangle(origin.x as f32, origin.y as f32, 1.0, 1.0, BLACK);
    }
}

pub fn draw_cars(world: &World) {
    // dead cars first so live ones stay on top
    let mut cars = world.cars();
    cars.sort_by_key(|car| car.alive);

    for car in cars {
        let color = if car.alive {
            Color::from_rgba(30, 120, 255, 255)
        } else {
            Color::from_rgba(120, 120, 120, 140)
        };
        draw_rectangle_ex(
            car.position.x as f32,
            car.position.y as f32,
            CAR_LENGTH,
            CAR_WIDTH,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: car.heading as f32,
                color,
            },
        );
    }
}

/// Draws the sensor rays of the best live car.
pub fn draw_leader_rays(world: &World) {
    let (Some(track), Some(trainer)) = (world.track(), world.trainer()) else {
        return;
    };
    let Some(leader) = trainer.leader() else {
        return;
    };

    let start = leader.state.position;
    for end in trainer
        .perception()
        .ray_endpoints(&leader.state, track, world.params())
    {
        draw_line(
            start.x as f32,
            start.y as f32,
            end.x as f32,
            end.y as f32,
            1.0,
            Color::from_rgba(255, 160, 0, 200),
        );
    }
}
