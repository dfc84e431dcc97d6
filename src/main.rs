//! Brick Breaker entry point
//!
//! Runs a headless autopilot session against the game core:
//! the pointer chases the ball, the ball is relaunched whenever it rests, and
//! every game event is logged. Set `RUST_LOG=debug` for per-hit detail.

use brick_breaker::{GameEvent, GameState, Tuning, consts::FRAME_DT, hud_text};

/// Environment variable naming an optional tuning JSON file
const TUNING_ENV: &str = "BRICK_BREAKER_TUNING";

/// Stop the autopilot after ten minutes of simulated frames
const MAX_TICKS: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native, headless) starting...");

    let tuning = load_tuning();
    let mut game = GameState::with_tuning(tuning);
    let mut pointer_x = game.paddle.pos.x;

    while !game.is_game_over() && game.time_ticks < MAX_TICKS {
        // Chase the ball with a slow sweep so the paddle imparts some spin
        let sweep = (game.time_ticks as f32 * 0.05).sin() * 25.0;
        let target = game.ball.pos.x + sweep;
        let dx = target - pointer_x;
        pointer_x = target;
        game.on_pointer_move(target, game.paddle.pos.y, dx, 0.0);

        game.on_primary_button_press();
        game.on_tick(FRAME_DT);

        for event in game.drain_events() {
            log_event(&event);
        }
    }

    for line in hud_text(&game) {
        println!("{}", line.text);
    }
    println!(
        "Finished after {} ticks at level {} ({} bricks left)",
        game.time_ticks,
        game.level,
        game.bricks.len()
    );
}

fn load_tuning() -> Tuning {
    match std::env::var(TUNING_ENV) {
        Ok(path) => load_tuning_from(&path),
        Err(_) => Tuning::default(),
    }
}

/// Read a tuning file, falling back to defaults when it is unreadable or invalid
fn load_tuning_from(path: &str) -> Tuning {
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));

    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LevelCleared { next_level } => log::info!("Level {} begins", next_level),
        GameEvent::LifeLost { lives_left } => log::info!("Life lost ({} left)", lives_left),
        GameEvent::GameOver { reason } => log::info!("Game over: {:?}", reason),
        other => log::debug!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("brick-breaker-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_tuning_file_applied() {
        let path = write_temp("valid.json", r#"{ "starting_lives": 5 }"#);
        let tuning = load_tuning_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(tuning.starting_lives, 5);
    }

    #[test]
    fn test_invalid_tuning_file_falls_back() {
        let path = write_temp("bricks.json", r#"{ "screen_width": 300.0 }"#);
        let tuning = load_tuning_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(tuning, Tuning::default());

        assert_eq!(load_tuning_from("/nonexistent/brick-breaker.json"), Tuning::default());
    }
}
