mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, info};

use alien_invasion::compute::{handle_input, init_state, tick};
use alien_invasion::entities::Game;
use alien_invasion::input::{translate, Input, KeyHold};

/// Frames a direction key stays held without a fresh press or repeat, on
/// terminals that never report key releases. 4 frames @ 30 FPS ≈ 133 ms:
/// a tap moves the ship a few cells; a held key stutters once while the OS
/// waits to start auto-repeating, then moves smoothly.
const HOLD_WINDOW: u64 = 4;

/// Space presses closer together than this (≈ 500 ms, the usual OS delay
/// before auto-repeat) count as auto-repeat and do not fire.
const FIRE_REPEAT_WINDOW: u64 = 15;

const LOG_FILE: &str = "alien_invasion.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// stderr is the game screen, so log lines go to a file in the temp dir,
/// and only when `RUST_LOG` asks for them.
fn init_logger() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Mouse capture stands in for the visible pointer: on while the Play
/// button is showing, off during a round.
fn sync_mouse<W: Write>(out: &mut W, game: &Game, captured: &mut bool) -> Result<()> {
    let want = game.mouse_visible();
    if want != *captured {
        if want {
            out.execute(EnableMouseCapture)?;
        } else {
            out.execute(DisableMouseCapture)?;
        }
        *captured = want;
    }
    Ok(())
}

/// Per frame: drain input, advance one tick, redraw. Returns on quit.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> Result<()> {
    let (width, height) = terminal::size().context("failed to read terminal size")?;
    let mut game = init_state(width, height);
    let mut hold = KeyHold::new(HOLD_WINDOW, FIRE_REPEAT_WINDOW);
    let mut mouse_captured = false;
    info!("screen {}x{}, {} aliens in fleet", width, height, game.aliens.len());

    loop {
        let frame_start = Instant::now();
        sync_mouse(out, &game, &mut mouse_captured)?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Some(input) = translate(&ev) else {
                continue;
            };
            if input == Input::Quit {
                info!("quit requested");
                return Ok(());
            }
            if !keyboard_enhanced && !hold.observe(&input, game.frame) {
                continue;
            }
            game = handle_input(&game, &input);
        }

        if !keyboard_enhanced {
            for release in hold.expire(game.frame) {
                game = handle_input(&game, &release);
            }
        }

        game = tick(&game);

        display::render(out, &game).context("failed to draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < game.settings.frame_time {
            thread::sleep(game.settings.frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logger()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to `KeyHold`.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    debug!("keyboard enhancement: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
