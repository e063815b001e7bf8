use macroquad::prelude::*;
use taxi_rush::simulation::event_log::EventColor;
use taxi_rush::simulation::leaderboard::ScoreEntry;
use taxi_rush::simulation::params::Params;
use taxi_rush::simulation::render::{Hud, RenderHint, Sprite};
use taxi_rush::simulation::world::{GameStatus, LossReason, World};

const FONT_SIZE: f32 = 22.0;

trait ToScreen {
    fn to_screen(&self, params: &Params) -> f32;
}

impl ToScreen for f64 {
    fn to_screen(&self, params: &Params) -> f32 {
        let scale = screen_height() / params.window_height as f32;
        *self as f32 * scale
    }
}

fn sprite_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Taxi => Color::from_rgba(250, 200, 20, 255),
        Sprite::DamagedTaxi => Color::from_rgba(90, 80, 40, 255),
        Sprite::EnemyCar => Color::from_rgba(200, 30, 30, 255),
        Sprite::OtherCar => Color::from_rgba(60, 110, 220, 255),
        Sprite::Driver => Color::from_rgba(20, 20, 20, 255),
        Sprite::Passenger => Color::from_rgba(30, 160, 70, 255),
        Sprite::Flag => Color::from_rgba(240, 240, 240, 255),
        Sprite::Fireball => Color::from_rgba(255, 120, 0, 255),
        Sprite::Coin => Color::from_rgba(255, 215, 0, 255),
        Sprite::InvinciblePower => Color::from_rgba(180, 60, 220, 255),
        Sprite::Smoke => Color::from_rgba(150, 150, 150, 160),
        Sprite::Fire => Color::from_rgba(255, 70, 0, 200),
    }
}

fn event_color(color: EventColor) -> Color {
    match color {
        EventColor::Trip => GREEN,
        EventColor::Wreck => RED,
        EventColor::Power => GOLD,
        EventColor::Weather => SKYBLUE,
    }
}

pub fn draw_road(world: &World, params: &Params) {
    let background = if world.weather.is_raining() {
        Color::from_rgba(70, 75, 85, 255)
    } else {
        Color::from_rgba(105, 105, 105, 255)
    };
    clear_background(background);

    for lane in &params.lanes {
        let x = lane.to_screen(params);
        draw_line(x, 0.0, x, screen_height(), 1.0, Color::from_rgba(200, 200, 200, 60));
    }
}

pub fn draw_hints(hints: &[RenderHint], params: &Params) {
    for hint in hints {
        let x = hint.pos.x().to_screen(params);
        let y = hint.pos.y().to_screen(params);
        // Effects carry no radius.
        let radius = hint.radius.to_screen(params).max(6.0);

        let mut color = sprite_color(hint.sprite);
        if hint.translucent {
            color.a *= 0.5;
        }
        draw_circle(x, y, radius, color);

        if let Some(label) = &hint.label {
            draw_text(label, x - radius - 60.0, y, FONT_SIZE, WHITE);
        }
    }
}

pub fn draw_hud(hud: &Hud, world: &World) {
    let lines = [
        format!("Earnings: {:.2}", hud.score),
        format!("Target: {:.2}", hud.target),
        format!("Remaining frames: {}", hud.frames_remaining),
        format!("Taxi health: {:.0}", hud.taxi_health),
        format!("Driver health: {:.0}", hud.driver_health),
        format!("Passenger health: {:.0}", hud.passenger_health),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 24.0 + i as f32 * FONT_SIZE, FONT_SIZE, WHITE);
    }

    let mut y = 24.0 + lines.len() as f32 * FONT_SIZE + 10.0;
    if let Some(trip) = hud.trip {
        let title = if trip.ongoing {
            "Current trip:"
        } else {
            "Last trip:"
        };
        draw_text(title, 10.0, y, FONT_SIZE, WHITE);
        y += FONT_SIZE;
        draw_text(
            &format!("  Expected earnings: {:.1}", trip.earnings),
            10.0,
            y,
            FONT_SIZE,
            WHITE,
        );
        y += FONT_SIZE;
        draw_text(&format!("  Priority: {}", trip.priority), 10.0, y, FONT_SIZE, WHITE);
        y += FONT_SIZE;
        if !trip.ongoing {
            draw_text(
                &format!("  Penalty: {:.2}", trip.penalty),
                10.0,
                y,
                FONT_SIZE,
                WHITE,
            );
            y += FONT_SIZE;
        }
    }

    if let Some(frames) = hud.coin_frames {
        draw_text(
            &format!("Coin power: {frames}"),
            screen_width() - 180.0,
            24.0,
            FONT_SIZE,
            GOLD,
        );
    }

    for event in world.event_log.recent(world.frame) {
        y += FONT_SIZE;
        draw_text(
            &format!("[{}] {}", event.frame, event.description),
            10.0,
            y,
            FONT_SIZE * 0.8,
            event_color(event.color),
        );
    }
}

pub fn draw_game_over(status: GameStatus, score: f64, top_scores: &[ScoreEntry]) {
    clear_background(Color::from_rgba(20, 20, 20, 255));

    let headline = match status {
        GameStatus::Won => "You won!".to_string(),
        GameStatus::Lost(reason) => {
            let why = match reason {
                LossReason::OutOfTime => "out of time",
                LossReason::TaxiLeftRoad => "the taxi left the road",
                LossReason::DriverDied => "the driver died",
                LossReason::PassengerDied => "the passenger died",
            };
            format!("Game over: {why}")
        }
        GameStatus::Playing => String::new(),
    };

    let center_x = screen_width() / 2.0;
    let mut y = screen_height() / 3.0;
    let size = measure_text(&headline, None, 36, 1.0);
    draw_text(&headline, center_x - size.width / 2.0, y, 36.0, WHITE);
    y += 40.0;
    draw_text(&format!("Score: {score:.2}"), center_x - 80.0, y, FONT_SIZE, WHITE);
    y += 40.0;

    draw_text("Top scores", center_x - 80.0, y, FONT_SIZE, GOLD);
    for entry in top_scores {
        y += FONT_SIZE + 4.0;
        draw_text(
            &format!("{} - {:.2}", entry.name, entry.score),
            center_x - 80.0,
            y,
            FONT_SIZE,
            WHITE,
        );
    }
}
