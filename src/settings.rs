//! Tunable game constants plus the fields the speed-up rule mutates.
//!
//! Units are terminal cells; speeds are cells per frame tick.

use std::time::Duration;

use crossterm::style::Color;

// ── Sprite sizes (cells) ─────────────────────────────────────────────────────

pub const SHIP_WIDTH: u16 = 3;
pub const SHIP_HEIGHT: u16 = 2;
pub const ALIEN_WIDTH: u16 = 3;
pub const ALIEN_HEIGHT: u16 = 2;

/// ≈30 FPS.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // Screen
    pub screen_width: u16,
    pub screen_height: u16,
    pub bg_color: Color,
    pub hud_color: Color,

    // Ship
    pub ship_limit: u32,
    pub ship_color: Color,

    // Bullets
    pub bullet_width: u16,
    pub bullet_height: u16,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_color: Color,
    pub fleet_drop_speed: f32,

    /// How quickly the game speeds up after each cleared fleet.
    pub speedup_scale: f32,
    /// How quickly alien point values grow.
    pub score_scale: f32,

    pub hit_pause: Duration,
    pub frame_time: Duration,

    // Dynamic, see `initialize_dynamic_settings`
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// +1 moves the fleet right, -1 moves it left.
    pub fleet_direction: f32,
    pub alien_points: u32,
}

impl Settings {
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            bg_color: Color::Reset,
            hud_color: Color::Yellow,
            ship_limit: 3,
            ship_color: Color::White,
            bullet_width: 1,
            bullet_height: 1,
            bullet_color: Color::Cyan,
            bullets_allowed: 3,
            alien_color: Color::Green,
            fleet_drop_speed: 1.0,
            speedup_scale: 1.1,
            score_scale: 1.5,
            hit_pause: Duration::from_millis(500),
            frame_time: FRAME_TIME,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1.0,
            alien_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset everything `increase_speed` touches. Called at round start.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = 1.0;
        self.bullet_speed = 1.0;
        self.alien_speed = 0.3;
        self.fleet_direction = 1.0;
        self.alien_points = 50;
    }

    pub fn increase_speed(&mut self) {
        self.alien_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    /// Number of ticks the stunned phase lasts after a ship hit.
    pub fn hit_pause_ticks(&self) -> u32 {
        let frame = self.frame_time.as_millis().max(1);
        self.hit_pause.as_millis().div_ceil(frame) as u32
    }
}
