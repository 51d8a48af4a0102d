//! Rendering layer. All terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game. No game logic is performed; this module only translates state
//! into queued terminal commands, flushed once per frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use alien_invasion::entities::{Alien, Bullet, Game, Phase};

const C_STUNNED: Color = Color::DarkGrey;
const C_BUTTON: Color = Color::Green;
const C_BUTTON_LABEL: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "← → / A D : Move   SPACE : Shoot   Q : Quit";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(game.settings.bg_color))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    out.queue(style::SetForegroundColor(game.settings.alien_color))?;
    for alien in &game.aliens {
        draw_alien(out, game, alien)?;
    }

    out.queue(style::SetForegroundColor(game.settings.bullet_color))?;
    for bullet in &game.bullets {
        draw_bullet(out, game, bullet)?;
    }

    draw_ship(out, game)?;
    draw_scoreboard(out, game)?;

    if !game.stats.game_active() {
        draw_play_button(out, game)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, game.settings.screen_height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Print `text` at `x`, `y` if it starts on screen; anything past the
/// right edge is cut off.
fn put<W: Write>(out: &mut W, game: &Game, x: i32, y: i32, text: &str) -> std::io::Result<()> {
    let (w, h) = (
        game.settings.screen_width as i32,
        game.settings.screen_height as i32,
    );
    if y < 0 || y >= h || x >= w {
        return Ok(());
    }
    let skip = (-x).max(0) as usize;
    let visible: String = text
        .chars()
        .skip(skip)
        .take((w - x.max(0)) as usize)
        .collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x.max(0) as u16, y as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn draw_alien<W: Write>(out: &mut W, game: &Game, alien: &Alien) -> std::io::Result<()> {
    //   «▼»    ← swept-back wings
    //   ╚═╝    ← engine block
    let r = alien.rect();
    put(out, game, r.x, r.y, "«▼»")?;
    put(out, game, r.x, r.y + 1, "╚═╝")
}

fn draw_bullet<W: Write>(out: &mut W, game: &Game, bullet: &Bullet) -> std::io::Result<()> {
    let r = bullet.rect();
    for row in 0..r.height {
        put(out, game, r.x, r.y + row, &"║".repeat(r.width as usize))?;
    }
    Ok(())
}

fn draw_ship<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    //    ▲     ← row y      (tip)
    //   /█\    ← row y+1    (fuselage + wings)
    let color = match game.stats.phase {
        Phase::Stunned { ticks_left } if ticks_left % 4 < 2 => C_STUNNED,
        _ => game.settings.ship_color,
    };
    let r = game.ship.rect();
    out.queue(style::SetForegroundColor(color))?;
    put(out, game, r.x + 1, r.y, "▲")?;
    put(out, game, r.x, r.y + 1, "/█\\")
}

// ── Scoreboard (rows 0-1) ─────────────────────────────────────────────────────

fn draw_scoreboard<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let sb = &game.scoreboard;
    let width = game.settings.screen_width as i32;
    out.queue(style::SetForegroundColor(game.settings.hud_color))?;

    // Reserve ships, top left
    let ships = vec!["▲"; sb.ship_icons as usize].join(" ");
    put(out, game, 1, 0, &ships)?;

    // High score, top centre
    let high = format!("Hi {}", sb.high_score_text);
    put(out, game, (width - high.chars().count() as i32) / 2, 0, &high)?;

    // Score top right, level underneath
    let score = sb.score_text.as_str();
    put(out, game, width - score.chars().count() as i32 - 1, 0, score)?;
    let level = sb.level_text.as_str();
    put(out, game, width - level.chars().count() as i32 - 1, 1, level)?;

    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn draw_play_button<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let r = game.play_button.rect;
    let inner = (r.width - 2).max(0) as usize;

    out.queue(style::SetForegroundColor(C_BUTTON))?;
    put(out, game, r.x, r.y, &format!("╔{}╗", "═".repeat(inner)))?;
    put(out, game, r.x, r.y + r.height - 1, &format!("╚{}╝", "═".repeat(inner)))?;
    for row in r.y + 1..r.y + r.height - 1 {
        put(out, game, r.x, row, &format!("║{:^inner$}║", ""))?;
    }

    out.queue(style::SetForegroundColor(C_BUTTON_LABEL))?;
    let label = &game.play_button.label;
    let lx = r.x + (r.width - label.chars().count() as i32) / 2;
    put(out, game, lx, r.y + r.height / 2, label)?;

    out.queue(style::SetForegroundColor(C_HINT))?;
    let hx = (game.settings.screen_width as i32 - HINT.chars().count() as i32) / 2;
    put(out, game, hx, r.bottom() + 1, HINT)?;

    Ok(())
}
