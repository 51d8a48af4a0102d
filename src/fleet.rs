//! Fleet layout and movement.
//!
//! Aliens sit on a grid with a one-sprite gap between neighbours in both
//! directions. The whole fleet slides sideways, then drops a row and
//! reverses as soon as any alien touches a screen edge.

use log::debug;

use crate::entities::Alien;
use crate::settings::{Settings, ALIEN_HEIGHT, ALIEN_WIDTH, SHIP_HEIGHT};

/// `(columns, rows)` that fit on the screen. Degenerate sizes yield zero.
pub fn fleet_dimensions(
    screen_width: u16,
    screen_height: u16,
    alien_width: u16,
    alien_height: u16,
    ship_height: u16,
) -> (usize, usize) {
    let (sw, sh) = (screen_width as i32, screen_height as i32);
    let (aw, ah) = (alien_width as i32, alien_height as i32);
    if aw == 0 || ah == 0 {
        return (0, 0);
    }

    let available_x = sw - 2 * aw;
    let columns = available_x / (2 * aw);

    let available_y = sh - 3 * ah - ship_height as i32;
    let rows = available_y / (2 * ah);

    (columns.max(0) as usize, rows.max(0) as usize)
}

/// Position of the alien at `column`, `row` in a fresh fleet.
pub fn alien_at(column: usize, row: usize) -> Alien {
    let (aw, ah) = (ALIEN_WIDTH as f32, ALIEN_HEIGHT as f32);
    Alien {
        x: aw + 2.0 * aw * column as f32,
        y: ah + 2.0 * ah * row as f32,
    }
}

/// Build a full fleet for the current screen, row by row.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let (columns, rows) = fleet_dimensions(
        settings.screen_width,
        settings.screen_height,
        ALIEN_WIDTH,
        ALIEN_HEIGHT,
        SHIP_HEIGHT,
    );
    debug!("building fleet: {} columns x {} rows", columns, rows);

    (0..rows)
        .flat_map(|row| (0..columns).map(move |column| alien_at(column, row)))
        .collect()
}

/// True if any alien touches the left or right edge.
pub fn fleet_at_edge(aliens: &[Alien], screen_width: u16) -> bool {
    aliens.iter().any(|a| a.check_edges(screen_width))
}

/// Drop every alien by `fleet_drop_speed` and flip the fleet direction.
/// Applied at most once per tick, however many aliens touch an edge.
pub fn change_fleet_direction(aliens: &[Alien], settings: &Settings) -> (Vec<Alien>, f32) {
    let dropped = aliens
        .iter()
        .map(|a| Alien {
            y: a.y + settings.fleet_drop_speed,
            ..a.clone()
        })
        .collect();
    (dropped, -settings.fleet_direction)
}

/// Slide every alien sideways by `alien_speed × fleet_direction`.
pub fn move_fleet(aliens: &[Alien], settings: &Settings) -> Vec<Alien> {
    let dx = settings.alien_speed * settings.fleet_direction;
    aliens
        .iter()
        .map(|a| Alien {
            x: a.x + dx,
            ..a.clone()
        })
        .collect()
}

/// True if any alien has reached the bottom of the screen.
pub fn fleet_at_bottom(aliens: &[Alien], screen_height: u16) -> bool {
    aliens
        .iter()
        .any(|a| a.rect().bottom() >= screen_height as i32)
}
