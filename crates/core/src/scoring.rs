//! Scoring module - points, levels and fall speed
//!
//! Line clears score from a fixed table (100/300/500/800 for 1-4 lines)
//! times the current level. Levels start at 1 and go up every 10 lines.
//! The fall interval starts at 1000ms and shrinks 100ms per level down to a
//! 100ms floor.

use std::time::Duration;

use crate::error::RulesError;
use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MAX_LINES_PER_CLEAR, MIN_DROP_MS,
};

/// Points for clearing `lines_cleared` rows at once on `level`.
///
/// More than 4 lines, level 0, or a product past `u32::MAX` are rejected
/// rather than guessed at.
pub fn calculate_score(lines_cleared: u32, level: u32) -> Result<u32, RulesError> {
    if level == 0 {
        return Err(RulesError::LevelOutOfRange(level));
    }
    if lines_cleared > MAX_LINES_PER_CLEAR {
        return Err(RulesError::LinesOutOfRange(lines_cleared));
    }
    LINE_SCORES[lines_cleared as usize]
        .checked_mul(level)
        .ok_or(RulesError::ScoreOverflow {
            lines: lines_cleared,
            level,
        })
}

/// Level for a running total of cleared lines
pub fn calculate_level(total_lines_cleared: u32) -> u32 {
    total_lines_cleared / LINES_PER_LEVEL + 1
}

/// Fall interval in milliseconds for `level`
pub fn get_drop_speed(level: u32) -> Result<u32, RulesError> {
    if level == 0 {
        return Err(RulesError::LevelOutOfRange(level));
    }
    let speedup = (level - 1).saturating_mul(DROP_STEP_MS);
    Ok(BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS))
}

/// [`get_drop_speed`] as a `Duration`
pub fn drop_interval(level: u32) -> Result<Duration, RulesError> {
    get_drop_speed(level).map(|ms| Duration::from_millis(u64::from(ms)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(calculate_score(0, 1), Ok(0));
        assert_eq!(calculate_score(1, 1), Ok(100));
        assert_eq!(calculate_score(2, 1), Ok(300));
        assert_eq!(calculate_score(3, 1), Ok(500));
        assert_eq!(calculate_score(4, 1), Ok(800));
        assert_eq!(calculate_score(4, 5), Ok(4000));
    }

    #[test]
    fn test_score_rejects_out_of_contract() {
        assert_eq!(calculate_score(5, 1), Err(RulesError::LinesOutOfRange(5)));
        assert_eq!(calculate_score(1, 0), Err(RulesError::LevelOutOfRange(0)));
    }

    #[test]
    fn test_score_overflow_is_an_error() {
        let level = calculate_level(60_000_000);
        assert_eq!(
            calculate_score(4, level),
            Err(RulesError::ScoreOverflow { lines: 4, level })
        );
        assert_eq!(calculate_score(0, u32::MAX), Ok(0));
        assert_eq!(calculate_score(1, 42_949_672), Ok(4_294_967_200));
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(29), 3);
        assert_eq!(calculate_level(100), 11);
    }

    #[test]
    fn test_drop_speed_curve() {
        assert_eq!(get_drop_speed(1), Ok(1000));
        assert_eq!(get_drop_speed(2), Ok(900));
        assert_eq!(get_drop_speed(9), Ok(200));
        assert_eq!(get_drop_speed(10), Ok(100));
        assert_eq!(get_drop_speed(11), Ok(100));
        assert_eq!(get_drop_speed(u32::MAX), Ok(100));
        assert_eq!(get_drop_speed(0), Err(RulesError::LevelOutOfRange(0)));
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(drop_interval(3), Ok(Duration::from_millis(800)));
    }
}
