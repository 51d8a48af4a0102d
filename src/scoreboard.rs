//! HUD text derived from `GameStats`.
//!
//! Each `prep_*` method rebuilds one piece; the compute layer calls them
//! right after the stat they depend on changes, so the renderer only ever
//! prints what is stored here.

use crate::entities::GameStats;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// Number of reserve-ship icons to draw.
    pub ship_icons: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Scoreboard::default();
        sb.prep_score(stats);
        sb.prep_high_score(stats);
        sb.prep_level(stats);
        sb.prep_ships(stats);
        sb
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = format!("L{}", stats.level);
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ship_icons = stats.ships_left;
    }

    /// Raise the high score if the current score beats it.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten (half up) and group thousands: `12345` → `12,350`.
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
