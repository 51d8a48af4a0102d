//! All game entity types: plain data plus bounding-rect accessors.

use crate::button::Button;
use crate::collision::Rect;
use crate::scoreboard::Scoreboard;
use crate::settings::{Settings, ALIEN_HEIGHT, ALIEN_WIDTH, SHIP_HEIGHT, SHIP_WIDTH};

// ── Round state ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the Play button. Mouse cursor visible.
    Inactive,
    Active,
    /// Frozen after losing a ship; counts down to `Active`.
    Stunned { ticks_left: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Survives round resets.
    pub high_score: u32,
    pub phase: Phase,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        GameStats {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            high_score: 0,
            phase: Phase::Inactive,
        }
    }

    /// Reset the per-round counters. `high_score` and `phase` are untouched.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn game_active(&self) -> bool {
        !matches!(self.phase, Phase::Inactive)
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    /// Fractional column of the left edge.
    pub x: f32,
    pub y: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn rect(&self) -> Rect {
        Rect::from_position(self.x, self.y, SHIP_WIDTH, SHIP_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    /// Fractional row of the top edge; decreases as the bullet climbs.
    pub y: f32,
    pub width: u16,
    pub height: u16,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::from_position(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::from_position(self.x, self.y, ALIEN_WIDTH, ALIEN_HEIGHT)
    }

    /// True when the alien touches either side of the screen.
    pub fn check_edges(&self, screen_width: u16) -> bool {
        let rect = self.rect();
        rect.right() >= screen_width as i32 || rect.left() <= 0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole session. Cloneable so the update functions in `compute` can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub play_button: Button,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub frame: u64,
    /// Latest terminal size seen mid-round, applied once the round ends.
    pub pending_size: Option<(u16, u16)>,
}

impl Game {
    /// The mouse is only captured while the Play button is on screen.
    pub fn mouse_visible(&self) -> bool {
        !self.stats.game_active()
    }
}
