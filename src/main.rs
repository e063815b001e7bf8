use clap::Parser;
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use taxi_rush::simulation::input::MoveIntent;
use taxi_rush::simulation::layout::WorldLayout;
use taxi_rush::simulation::leaderboard::{Leaderboard, ScoreEntry};
use taxi_rush::simulation::params::Params;
use taxi_rush::simulation::render;
use taxi_rush::simulation::weather::WeatherSchedule;
use taxi_rush::simulation::world::World;

mod graphics;

#[derive(Parser, Debug)]
#[command(name = "taxi_rush", about = "Arcade taxi game")]
struct Cli {
    /// Game parameters (JSON).
    #[arg(long, default_value = "assets/params.json")]
    config: String,
    /// World layout (CSV).
    #[arg(long, default_value = "assets/world.csv")]
    world: String,
    /// Weather schedule (CSV).
    #[arg(long, default_value = "assets/weather.csv")]
    weather: String,
    /// Leaderboard file.
    #[arg(long, default_value = "scores.txt")]
    scores: String,
    /// Name recorded on the leaderboard.
    #[arg(long, default_value = "player")]
    player: String,
    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Taxi Rush".to_owned(),
        window_width: 1024,
        window_height: 768,
        ..Default::default()
    }
}

fn read_intent() -> MoveIntent {
    MoveIntent {
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
    }
}

fn load_session(cli: &Cli) -> Result<(Params, World), Box<dyn std::error::Error>> {
    let params = Params::load_from_file(&cli.config)?;
    let layout = WorldLayout::load_from_file(&cli.world)?;
    let weather = WeatherSchedule::load_from_file(&cli.weather)?;
    let world = World::new(&params, &layout, weather)?;
    Ok((params, world))
}

fn snapshot_path() -> String {
    chrono::Local::now()
        .format("taxi_rush_%Y%m%d_%H%M%S.json")
        .to_string()
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (params, mut world) = match load_session(&cli) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("failed to start session: {err}");
            std::process::exit(1);
        }
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let leaderboard = Leaderboard::new(&cli.scores);
    let mut top_scores: Option<Vec<ScoreEntry>> = None;

    tracing::info!(config = %cli.config, world = %cli.world, "starting taxi rush");

    loop {
        if world.status.is_over() {
            let scores = top_scores.get_or_insert_with(|| {
                if let Err(err) = leaderboard.record(&cli.player, world.score) {
                    tracing::warn!("failed to record score: {err}");
                }
                leaderboard.top_scores(5).unwrap_or_else(|err| {
                    tracing::warn!("failed to read leaderboard: {err}");
                    Vec::new()
                })
            });
            graphics::draw_game_over(world.status, world.score, scores);
            if is_key_pressed(KeyCode::Escape) {
                break;
            }
            next_frame().await;
            continue;
        }

        if is_key_pressed(KeyCode::S) {
            let path = snapshot_path();
            match world.save_to_file(&path) {
                Ok(()) => tracing::info!(%path, "snapshot saved"),
                Err(err) => tracing::warn!("failed to save snapshot: {err}"),
            }
        }

        world.step(&params, read_intent(), &mut rng);

        graphics::draw_road(&world, &params);
        graphics::draw_hints(&render::render_hints(&world, &params), &params);
        graphics::draw_hud(&render::hud(&world, &params), &world);

        next_frame().await
    }
}
