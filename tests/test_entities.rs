use alien_invasion::collision::*;
use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_truncates_fractional_position() {
    let r = Rect::from_position(3.9, 7.2, 3, 2);
    assert_eq!(r, Rect::new(3, 7, 3, 2));
    assert_eq!(r.right(), 6);
    assert_eq!(r.bottom(), 9);
    assert_eq!(r.centerx(), 4);
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0, 0, 3, 2);
    // Shares only the right edge
    assert!(!a.overlaps(&Rect::new(3, 0, 3, 2)));
    // Shares only the bottom edge
    assert!(!a.overlaps(&Rect::new(0, 2, 3, 2)));
    // One cell in common
    assert!(a.overlaps(&Rect::new(2, 1, 3, 2)));
    assert!(Rect::new(2, 1, 3, 2).overlaps(&a));
}

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(10, 5, 4, 2);
    assert!(r.contains(10, 5));
    assert!(r.contains(13, 6));
    assert!(!r.contains(14, 5));
    assert!(!r.contains(10, 7));
    assert!(!r.contains(9, 5));
}

#[test]
fn collide_any_finds_single_overlap() {
    let ship = Rect::new(10, 10, 3, 2);
    let far = vec![Rect::new(0, 0, 3, 2), Rect::new(20, 20, 3, 2)];
    assert!(!collide_any(&ship, far.clone()));

    let mut near = far;
    near.push(Rect::new(12, 11, 3, 2));
    assert!(collide_any(&ship, near));
}

#[test]
fn group_collide_kills_each_target_once() {
    // Two bullets over the same alien: the first claims it, the second
    // survives because nothing is left for it to hit.
    let bullets = vec![Rect::new(1, 1, 1, 1), Rect::new(1, 1, 1, 1)];
    let aliens = vec![Rect::new(0, 0, 3, 2)];
    let (hit_bullets, hit_aliens) = group_collide(&bullets, &aliens);
    assert_eq!(hit_bullets, vec![0]);
    assert_eq!(hit_aliens, vec![0]);
}

#[test]
fn group_collide_one_bullet_can_take_two_aliens() {
    let bullets = vec![Rect::new(2, 0, 2, 1)];
    let aliens = vec![Rect::new(0, 0, 3, 2), Rect::new(3, 0, 3, 2), Rect::new(9, 0, 3, 2)];
    let (hit_bullets, hit_aliens) = group_collide(&bullets, &aliens);
    assert_eq!(hit_bullets, vec![0]);
    assert_eq!(hit_aliens, vec![0, 1]);
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_edges() {
    let width = 40;
    assert!(!Alien { x: 10.0, y: 2.0 }.check_edges(width));
    assert!(Alien { x: 0.0, y: 2.0 }.check_edges(width));
    assert!(Alien { x: 0.9, y: 2.0 }.check_edges(width)); // truncates to column 0
    assert!(Alien { x: 37.0, y: 2.0 }.check_edges(width)); // right edge = 40
    assert!(!Alien { x: 36.0, y: 2.0 }.check_edges(width));
}

// ── GameStats ─────────────────────────────────────────────────────────────────

#[test]
fn stats_start_inactive() {
    let settings = Settings::new(80, 24);
    let stats = GameStats::new(&settings);
    assert_eq!(stats.phase, Phase::Inactive);
    assert!(!stats.game_active());
    assert_eq!(stats.ships_left, settings.ship_limit);
    assert_eq!(stats.level, 1);
}

#[test]
fn stats_reset_keeps_high_score() {
    let settings = Settings::new(80, 24);
    let mut stats = GameStats::new(&settings);
    stats.score = 900;
    stats.high_score = 1200;
    stats.level = 4;
    stats.ships_left = 0;

    stats.reset_stats(&settings);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.ships_left, 3);
    assert_eq!(stats.high_score, 1200);
}

#[test]
fn stunned_counts_as_active() {
    let settings = Settings::new(80, 24);
    let mut stats = GameStats::new(&settings);
    stats.phase = Phase::Stunned { ticks_left: 3 };
    assert!(stats.game_active());
    stats.phase = Phase::Active;
    assert!(stats.game_active());
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[test]
fn speed_up_compounds_and_resets() {
    let mut s = Settings::new(80, 24);
    s.increase_speed();
    s.increase_speed();
    assert!((s.alien_speed - 0.3 * 1.1 * 1.1).abs() < 1e-5);
    assert!((s.bullet_speed - 1.1 * 1.1).abs() < 1e-5);
    assert_eq!(s.alien_points, 112); // 50 → 75 → 112
    assert!((s.ship_speed - 1.0).abs() < f32::EPSILON);

    s.fleet_direction = -1.0;
    s.initialize_dynamic_settings();
    assert!((s.alien_speed - 0.3).abs() < f32::EPSILON);
    assert_eq!(s.alien_points, 50);
    assert_eq!(s.fleet_direction, 1.0);
}

#[test]
fn hit_pause_rounds_up_to_whole_ticks() {
    let s = Settings::new(80, 24);
    // 500 ms / 33 ms = 15.15 → 16 ticks
    assert_eq!(s.hit_pause_ticks(), 16);
}
