use anyhow::{Context, Result, anyhow};
use clap::Parser;
use drift_evo::simulation::input::ManualInput;
use drift_evo::simulation::params::Params;
use drift_evo::simulation::track::{COURSE_HEIGHT, COURSE_WIDTH, Track};
use drift_evo::simulation::world::{Mode, World};
use macroquad::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

mod graphics;
mod ui;

/// Evolve neural drivers for a drift car.
#[derive(Debug, Parser)]
#[command(name = "drift-evo", version)]
struct Args {
    /// Course image, 850x450. Red pixel = spawn, white = wall.
    #[arg(long)]
    track: PathBuf,
    /// JSON file with simulation parameters.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Drive a single car with the arrow keys instead of training.
    #[arg(long)]
    manual: bool,
    /// Seed for selection, crossover and mutation.
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Drift Evo".to_owned(),
        window_width: COURSE_WIDTH as i32,
        window_height: COURSE_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => Params::load(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => Params::default(),
    };
    if args.seed.is_some() {
        params.rng_seed = args.seed;
    }

    let mode = if args.manual {
        Mode::Manual
    } else {
        Mode::Population
    };
    let mut world = World::new(params, mode)?;

    let track_path = args.track.to_string_lossy();
    let image = load_image(&track_path)
        .await
        .map_err(|e| anyhow!("failed to load course image {track_path}: {e:?}"))?;
    let track = Track::from_rgba(image.width(), image.height(), image.bytes.clone())
        .with_context(|| format!("invalid course image {track_path}"))?;
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);

    world.load_track(track)?;
    info!(track = %track_path, ?mode, "starting simulation");

    loop {
        if is_key_pressed(KeyCode::P) {
            world.set_paused(!world.is_paused());
        }
        if is_key_pressed(KeyCode::R) {
            world.reset()?;
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let input = ManualInput {
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        };
        world.frame(get_time(), &input)?;

        clear_background(BLACK);
        graphics::draw_course(&texture, &world);
        graphics::draw_leader_rays(&world);
        graphics::draw_cars(&world);
        ui::draw_ui(&world);

        next_frame().await;
    }

    Ok(())
}
