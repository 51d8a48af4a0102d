//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `Game` and returns a brand-new `Game`. Nothing here touches the
//! terminal, the clock or global state, so a whole round can be replayed
//! from a list of inputs.

use log::{debug, info};

use crate::button::Button;
use crate::collision::{collide_any, group_collide, Rect};
use crate::entities::{Bullet, Game, GameStats, Phase, Ship};
use crate::fleet::{change_fleet_direction, create_fleet, fleet_at_bottom, fleet_at_edge, move_fleet};
use crate::input::{Input, Key};
use crate::scoreboard::Scoreboard;
use crate::settings::{Settings, SHIP_HEIGHT, SHIP_WIDTH};

pub const PLAY_LABEL: &str = "Play";

// ── Constructors ─────────────────────────────────────────────────────────────

/// Initial, inactive session for a screen of the given size. A fleet is
/// already on screen behind the Play button.
pub fn init_state(width: u16, height: u16) -> Game {
    let settings = Settings::new(width, height);
    let stats = GameStats::new(&settings);
    let scoreboard = Scoreboard::new(&stats);

    Game {
        play_button: Button::new(width, height, PLAY_LABEL),
        ship: center_ship(None, &settings),
        aliens: create_fleet(&settings),
        bullets: Vec::new(),
        frame: 0,
        pending_size: None,
        settings,
        stats,
        scoreboard,
    }
}

/// Ship at the middle of the bottom edge. Movement flags carry over from
/// `previous`, if any.
pub fn center_ship(previous: Option<&Ship>, settings: &Settings) -> Ship {
    let x = (settings.screen_width as i32 - SHIP_WIDTH as i32) / 2;
    let y = settings.screen_height as i32 - SHIP_HEIGHT as i32;
    Ship {
        x: x as f32,
        y: y as f32,
        moving_right: previous.is_some_and(|s| s.moving_right),
        moving_left: previous.is_some_and(|s| s.moving_left),
    }
}

// ── Round lifecycle ──────────────────────────────────────────────────────────

/// INACTIVE → ACTIVE. Does nothing while a round is already running.
pub fn start_round(state: &Game) -> Game {
    if state.stats.game_active() {
        return state.clone();
    }

    let mut next = state.clone();
    next.settings.initialize_dynamic_settings();
    next.stats.reset_stats(&next.settings);
    next.stats.phase = Phase::Active;
    next.scoreboard.prep_score(&next.stats);
    next.scoreboard.prep_level(&next.stats);
    next.scoreboard.prep_ships(&next.stats);

    next.bullets.clear();
    next.aliens = create_fleet(&next.settings);
    next.ship = center_ship(Some(&state.ship), &next.settings);

    info!(
        "round started: {} aliens, {} ships",
        next.aliens.len(),
        next.stats.ships_left
    );
    next
}

/// Start a round if `column`, `row` lies on the Play button and no round is
/// running.
pub fn check_play_button(state: &Game, column: u16, row: u16) -> Game {
    if state.play_button.is_clicked(column, row) && !state.stats.game_active() {
        start_round(state)
    } else {
        state.clone()
    }
}

/// Lose one ship. The last ship ends the round; otherwise the board is
/// reset and play freezes for `hit_pause`.
pub fn ship_hit(state: &Game) -> Game {
    let mut next = state.clone();
    next.stats.ships_left = next.stats.ships_left.saturating_sub(1);
    next.scoreboard.prep_ships(&next.stats);

    if next.stats.ships_left == 0 {
        next.stats.phase = Phase::Inactive;
        if let Some((width, height)) = next.pending_size.take() {
            apply_screen_size(&mut next, width, height);
        }
        info!(
            "game over: score {}, level {}, high score {}",
            next.stats.score, next.stats.level, next.stats.high_score
        );
        return next;
    }

    next.aliens = create_fleet(&next.settings);
    next.bullets.clear();
    next.ship = center_ship(Some(&state.ship), &next.settings);

    let ticks = next.settings.hit_pause_ticks();
    next.stats.phase = if ticks == 0 {
        Phase::Active
    } else {
        Phase::Stunned { ticks_left: ticks }
    };
    info!("ship hit: {} ships left", next.stats.ships_left);
    next
}

/// Re-derive everything that depends on the screen size. A resize during
/// a round is parked in `pending_size` until the round ends.
pub fn resize(state: &Game, width: u16, height: u16) -> Game {
    let mut next = state.clone();
    if state.stats.game_active() {
        next.pending_size = Some((width, height));
        debug!("screen resized to {}x{} mid-round, deferred", width, height);
        return next;
    }

    next.pending_size = None;
    apply_screen_size(&mut next, width, height);
    next
}

fn apply_screen_size(next: &mut Game, width: u16, height: u16) {
    next.settings.screen_width = width;
    next.settings.screen_height = height;
    next.play_button = Button::new(width, height, PLAY_LABEL);
    next.aliens = create_fleet(&next.settings);
    next.bullets.clear();
    next.ship = center_ship(Some(&next.ship), &next.settings);
    debug!("screen resized to {}x{}", width, height);
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Apply one input. `Input::Quit` is left to the caller.
pub fn handle_input(state: &Game, input: &Input) -> Game {
    match *input {
        Input::Press(Key::Left) => set_moving(state, Key::Left, true),
        Input::Press(Key::Right) => set_moving(state, Key::Right, true),
        Input::Press(Key::Fire) if state.stats.phase == Phase::Active => fire_bullet(state),
        Input::Press(Key::Play) if !state.stats.game_active() => start_round(state),
        Input::Release(key @ (Key::Left | Key::Right)) => set_moving(state, key, false),
        Input::Click { column, row } => check_play_button(state, column, row),
        Input::Resize { width, height } => resize(state, width, height),
        _ => state.clone(),
    }
}

fn set_moving(state: &Game, key: Key, on: bool) -> Game {
    let mut next = state.clone();
    match key {
        Key::Left => next.ship.moving_left = on,
        Key::Right => next.ship.moving_right = on,
        _ => {}
    }
    next
}

/// Fire from the ship's nose. Silently ignored at `bullets_allowed`.
pub fn fire_bullet(state: &Game) -> Game {
    if state.bullets.len() >= state.settings.bullets_allowed {
        return state.clone();
    }

    let settings = &state.settings;
    let nose = state.ship.rect();
    let bullet = Bullet {
        x: (nose.centerx() - settings.bullet_width as i32 / 2) as f32,
        y: state.ship.y,
        width: settings.bullet_width,
        height: settings.bullet_height,
    };

    let mut next = state.clone();
    next.bullets.push(bullet);
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order while active: ship, bullets (including bullet/alien collisions and
/// fleet clears), then aliens (including ship collisions). A kill therefore
/// always lands before a ship collision in the same tick.
pub fn tick(state: &Game) -> Game {
    let mut next = state.clone();
    next.frame += 1;

    match state.stats.phase {
        Phase::Inactive => next,
        Phase::Stunned { ticks_left } => {
            next.stats.phase = if ticks_left > 1 {
                Phase::Stunned {
                    ticks_left: ticks_left - 1,
                }
            } else {
                Phase::Active
            };
            next
        }
        Phase::Active => {
            next.ship = update_ship(&next.ship, &next.settings);
            let next = update_bullets(&next);
            update_aliens(&next)
        }
    }
}

/// Move the ship according to its flags, staying on screen.
pub fn update_ship(ship: &Ship, settings: &Settings) -> Ship {
    let rect = ship.rect();
    let mut x = ship.x;
    if ship.moving_right && rect.right() < settings.screen_width as i32 {
        x += settings.ship_speed;
    }
    if ship.moving_left && rect.left() > 0 {
        x -= settings.ship_speed;
    }
    Ship { x, ..ship.clone() }
}

/// Move bullets up, drop those past the top, then resolve hits.
pub fn update_bullets(state: &Game) -> Game {
    let speed = state.settings.bullet_speed;
    let bullets = state
        .bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - speed,
            ..b.clone()
        })
        .filter(|b| b.rect().bottom() > 0)
        .collect();

    check_bullet_alien_collisions(&Game {
        bullets,
        ..state.clone()
    })
}

/// Remove every colliding bullet/alien pair, score the kills, and replace
/// the fleet once it is gone.
pub fn check_bullet_alien_collisions(state: &Game) -> Game {
    let bullet_rects: Vec<Rect> = state.bullets.iter().map(Bullet::rect).collect();
    let alien_rects: Vec<Rect> = state.aliens.iter().map(|a| a.rect()).collect();
    let (hit_bullets, hit_aliens) = group_collide(&bullet_rects, &alien_rects);

    let mut next = state.clone();

    if !hit_aliens.is_empty() {
        next.bullets = keep_unhit(&state.bullets, &hit_bullets);
        next.aliens = keep_unhit(&state.aliens, &hit_aliens);

        let gain = next.settings.alien_points.saturating_mul(hit_aliens.len() as u32);
        next.stats.score = next.stats.score.saturating_add(gain);
        next.scoreboard.prep_score(&next.stats);
        next.scoreboard.check_high_score(&mut next.stats);
    }

    if next.aliens.is_empty() {
        next.bullets.clear();
        next.aliens = create_fleet(&next.settings);
        next.settings.increase_speed();
        next.stats.level += 1;
        next.scoreboard.prep_level(&next.stats);
        info!(
            "fleet cleared: level {}, alien speed {:.2}, {} points per alien",
            next.stats.level, next.settings.alien_speed, next.settings.alien_points
        );
    }

    next
}

fn keep_unhit<T: Clone>(items: &[T], hit: &[usize]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| !hit.contains(i))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Edge check, sideways step, then ship-collision and bottom checks.
pub fn update_aliens(state: &Game) -> Game {
    let mut next = state.clone();

    if fleet_at_edge(&next.aliens, next.settings.screen_width) {
        let (aliens, direction) = change_fleet_direction(&next.aliens, &next.settings);
        next.aliens = aliens;
        next.settings.fleet_direction = direction;
    }
    next.aliens = move_fleet(&next.aliens, &next.settings);

    let ship_rect = next.ship.rect();
    if collide_any(&ship_rect, next.aliens.iter().map(|a| a.rect())) {
        return ship_hit(&next);
    }
    if fleet_at_bottom(&next.aliens, next.settings.screen_height) {
        return ship_hit(&next);
    }

    next
}
