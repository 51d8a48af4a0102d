//! Seeded random play-throughs checking the round-level invariants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use alien_invasion::compute::*;
use alien_invasion::entities::*;
use alien_invasion::input::{Input, Key};
use alien_invasion::scoreboard::format_score;

const STEPS: usize = 6_000;

fn random_input(rng: &mut impl Rng, game: &Game) -> Option<Input> {
    let button = game.play_button.rect;
    match rng.gen_range(0..12) {
        0 => Some(Input::Press(Key::Left)),
        1 => Some(Input::Press(Key::Right)),
        2 => Some(Input::Release(Key::Left)),
        3 => Some(Input::Release(Key::Right)),
        4 => Some(Input::Press(Key::Fire)),
        5 => Some(Input::Click {
            column: button.centerx() as u16,
            row: (button.y + 1) as u16,
        }),
        _ => None,
    }
}

fn run(seed: u64, width: u16, height: u16) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = start_round(&init_state(width, height));
    let mut hits = 0;

    for _ in 0..STEPS {
        let before = game.clone();
        if let Some(input) = random_input(&mut rng, &game) {
            game = handle_input(&game, &input);
        }
        game = tick(&game);

        let restarted = !before.stats.game_active() && game.stats.game_active();
        if restarted {
            assert_eq!(game.stats.score, 0);
            assert_eq!(game.stats.ships_left, game.settings.ship_limit);
            assert_eq!(game.stats.level, 1);
        } else {
            assert!(game.stats.score >= before.stats.score, "score went down");
            assert!(game.stats.level >= before.stats.level);
        }

        assert!(game.stats.high_score >= before.stats.high_score);
        assert!(game.stats.high_score >= game.stats.score);
        assert!(game.bullets.len() <= game.settings.bullets_allowed);

        if !restarted && game.stats.ships_left != before.stats.ships_left {
            hits += 1;
            assert_eq!(game.stats.ships_left, before.stats.ships_left - 1);
            if game.stats.ships_left == 0 {
                assert_eq!(game.stats.phase, Phase::Inactive);
            } else {
                assert!(matches!(game.stats.phase, Phase::Stunned { .. }));
            }
        }

        assert_eq!(game.scoreboard.score_text, format_score(game.stats.score));
        assert_eq!(game.scoreboard.ship_icons, game.stats.ships_left);
    }

    // Alien speed compounds per level while the fire rate stays flat, so
    // the fleet always gets through eventually.
    assert!(hits > 0, "seed {} never lost a ship", seed);
}

#[test]
fn invariants_hold_on_small_screen() {
    for seed in 0..4 {
        run(seed, 40, 16);
    }
}

#[test]
fn invariants_hold_on_narrow_screen() {
    run(99, 24, 14);
}
