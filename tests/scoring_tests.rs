//! Scoring tests - points, levels and fall speed

use blockfall::core::{calculate_level, calculate_score, get_drop_speed, RulesError};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_constants() {
    assert_eq!(BOARD_WIDTH, 10);
    assert_eq!(BOARD_HEIGHT, 20);
}

#[test]
fn test_single_line() {
    assert_eq!(calculate_score(1, 1), Ok(100));
}

#[test]
fn test_multiple_lines() {
    assert_eq!(calculate_score(1, 1), Ok(100));
    assert_eq!(calculate_score(2, 1), Ok(300));
    assert_eq!(calculate_score(3, 1), Ok(500));
    assert_eq!(calculate_score(4, 1), Ok(800));
}

#[test]
fn test_level_multiplier() {
    for lines in 1..=4 {
        let base = calculate_score(lines, 1).unwrap();
        assert_eq!(calculate_score(lines, 2), Ok(base * 2));
        assert_eq!(calculate_score(lines, 7), Ok(base * 7));
    }
}

#[test]
fn test_no_lines_no_points() {
    for level in [1, 2, 10, 100] {
        assert_eq!(calculate_score(0, level), Ok(0));
    }
}

#[test]
fn test_out_of_contract_inputs() {
    assert_eq!(calculate_score(5, 1), Err(RulesError::LinesOutOfRange(5)));
    assert_eq!(calculate_score(1, 0), Err(RulesError::LevelOutOfRange(0)));
    assert_eq!(get_drop_speed(0), Err(RulesError::LevelOutOfRange(0)));
    assert_eq!(
        calculate_score(9, 1).unwrap_err().to_string(),
        "cannot score 9 lines cleared at once (expected 0..=4)"
    );
}

#[test]
fn test_level_starts_at_one() {
    for lines in 0..10 {
        assert_eq!(calculate_level(lines), 1);
    }
}

#[test]
fn test_level_every_ten_lines() {
    assert_eq!(calculate_level(10), 2);
    assert_eq!(calculate_level(19), 2);
    assert_eq!(calculate_level(20), 3);
    assert_eq!(calculate_level(30), 4);
    assert_eq!(calculate_level(100), 11);
}

#[test]
fn test_drop_speed_level_one() {
    let speed = get_drop_speed(1).unwrap();
    assert!(speed > 0);
    assert!(speed <= 1000);
}

#[test]
fn test_drop_speed_steps_by_100() {
    for level in 1..10 {
        let now = get_drop_speed(level).unwrap();
        let next = get_drop_speed(level + 1).unwrap();
        assert_eq!(now - next, 100, "level {}", level);
    }
}

#[test]
fn test_drop_speed_floor() {
    assert_eq!(get_drop_speed(10), Ok(100));
    for level in [11, 50, 100, 10_000] {
        assert_eq!(get_drop_speed(level), Ok(100));
    }
}
