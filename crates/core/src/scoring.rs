//! Scoring module - line-clear points, level-ups and gravity speed
//!
//! A clear of `rows` lines is worth `(rows + bonus(rows)) * SCORE_MULTIPLIER`,
//! with a bonus of 2 for four rows, 1 for three and 0.5 for two. Points are
//! kept in halves internally so the 0.5 bonus stays exact.

use std::time::Duration;

use crate::types::{LEVEL_BREAKPOINT, SCORE_MULTIPLIER};

/// Multi-row bonus in half rows
fn bonus_halves(rows: usize) -> u32 {
    match rows {
        4 => 4,
        3 => 2,
        2 => 1,
        _ => 0,
    }
}

/// Points awarded for clearing `rows` lines with one piece.
///
/// Clearing nothing is worth nothing. Rows beyond four (only possible with
/// custom shapes) get the four-row bonus.
pub fn calculate_line_score(rows: usize) -> u32 {
    if rows == 0 {
        return 0;
    }
    let halves = (rows as u32) * 2 + bonus_halves(rows.min(4));
    halves * SCORE_MULTIPLIER / 2
}

/// Whether going from `old` to `new` crosses a level breakpoint
pub fn crosses_breakpoint(old: u32, new: u32) -> bool {
    new / LEVEL_BREAKPOINT > old / LEVEL_BREAKPOINT
}

/// Gravity interval for a level.
///
/// `max` at level 1, then `max / level² + min`, approaching `min` as the
/// level grows. Level 0 is treated as level 1.
pub fn gravity_interval(level: u32, max: Duration, min: Duration) -> Duration {
    if level <= 1 {
        return max;
    }
    max / level.saturating_mul(level) + min
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: Duration = Duration::from_millis(750);
    const MIN: Duration = Duration::from_millis(100);

    #[test]
    fn test_line_scores() {
        assert_eq!(calculate_line_score(0), 0);
        assert_eq!(calculate_line_score(1), 10);
        assert_eq!(calculate_line_score(2), 25);
        assert_eq!(calculate_line_score(3), 40);
        assert_eq!(calculate_line_score(4), 60);
    }

    #[test]
    fn test_breakpoint_crossing() {
        assert!(crosses_breakpoint(95, 105));
        assert!(crosses_breakpoint(90, 100));
        assert!(!crosses_breakpoint(100, 160));
        assert!(!crosses_breakpoint(0, 99));
        assert!(!crosses_breakpoint(40, 40));
    }

    #[test]
    fn test_level_one_is_max_interval() {
        assert_eq!(gravity_interval(1, MAX, MIN), MAX);
        assert_eq!(gravity_interval(0, MAX, MIN), MAX);
    }

    #[test]
    fn test_intervals_by_level() {
        assert_eq!(gravity_interval(2, MAX, MIN), Duration::from_micros(287_500));
        assert_eq!(gravity_interval(5, MAX, MIN), Duration::from_millis(130));
        assert_eq!(gravity_interval(10, MAX, MIN), Duration::from_micros(107_500));
    }

    #[test]
    fn test_interval_strictly_decreases_towards_min() {
        let mut previous = gravity_interval(1, MAX, MIN);
        for level in 2..200 {
            let current = gravity_interval(level, MAX, MIN);
            assert!(current < previous, "level {level} is not faster");
            assert!(current > MIN);
            previous = current;
        }
    }
}
