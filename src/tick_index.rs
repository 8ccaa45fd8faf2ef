//! Tick index arithmetic
//!
//! Pure conversions between global tick indices, array-local offsets and
//! array start indices, plus the bounds and grid-alignment rules the rest
//! of the SDK is built on.

use crate::constants::{
    FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD, MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE,
};
use crate::error::{SdkError, SdkResult};
use crate::types::TickRange;

/// Number of global ticks spanned by one tick array
pub fn ticks_per_array(tick_spacing: u16) -> i32 {
    i32::from(tick_spacing) * TICK_ARRAY_SIZE as i32
}

/// Slot offset of `tick_index` within the array starting at
/// `start_tick_index`. Performs no bounds check; callers pairing a tick
/// with the wrong array get an out-of-range offset back.
pub fn offset_index(tick_index: i32, start_tick_index: i32, tick_spacing: u16) -> i32 {
    (tick_index - start_tick_index).div_euclid(i32::from(tick_spacing))
}

/// Start index of the array containing `tick_index`, shifted by
/// `array_offset` whole arrays in either direction.
///
/// Fails when the result lands below the lower bound widened to the
/// array grid, or above `MAX_TICK_INDEX`. That is a caller bug, not a
/// runtime condition.
pub fn start_tick_index(tick_index: i32, tick_spacing: u16, array_offset: i32) -> SdkResult<i32> {
    let span = i64::from(tick_spacing) * TICK_ARRAY_SIZE as i64;
    let start = (i64::from(tick_index).div_euclid(span) + i64::from(array_offset)) * span;

    // MIN_TICK_INDEX rounded down to the nearest array boundary
    let min_start = i64::from(MIN_TICK_INDEX).div_euclid(span) * span;
    if start < min_start || start > i64::from(MAX_TICK_INDEX) {
        return Err(SdkError::StartIndexOutOfBounds(start));
    }
    Ok(start as i32)
}

/// Nearest initializable tick at or below `tick_index`
pub fn initializable_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
    tick_index - tick_index.rem_euclid(i32::from(tick_spacing))
}

/// First initializable tick strictly above the grid line for `tick_index`
pub fn next_initializable_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
    initializable_tick_index(tick_index, tick_spacing) + i32::from(tick_spacing)
}

/// First initializable tick strictly below the grid line for `tick_index`
pub fn prev_initializable_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
    initializable_tick_index(tick_index, tick_spacing) - i32::from(tick_spacing)
}

pub fn is_tick_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}

pub fn is_tick_initializable(tick_index: i32, tick_spacing: u16) -> bool {
    tick_index % i32::from(tick_spacing) == 0
}

/// Reflect a tick around zero; a price and its reciprocal are symmetric
/// around tick 0
pub fn invert_tick(tick_index: i32) -> i32 {
    -tick_index
}

/// Widest grid-aligned range within the hard bounds
pub fn full_range_tick_index(tick_spacing: u16) -> TickRange {
    let spacing = i32::from(tick_spacing);
    // Truncating division rounds the negative bound up and the positive
    // bound down, keeping both ends inside the domain
    TickRange {
        tick_lower_index: MIN_TICK_INDEX / spacing * spacing,
        tick_upper_index: MAX_TICK_INDEX / spacing * spacing,
    }
}

pub fn is_full_range(tick_spacing: u16, tick_lower_index: i32, tick_upper_index: i32) -> bool {
    full_range_tick_index(tick_spacing)
        == TickRange {
            tick_lower_index,
            tick_upper_index,
        }
}

/// Whether the pool's spacing restricts it to full-range positions only
pub fn is_full_range_only(tick_spacing: u16) -> bool {
    tick_spacing >= FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_offset_scenario() {
        // 88 ticks per array at spacing 64: tick 100 lives in array 0, slot 1
        let start = start_tick_index(100, 64, 0).unwrap();
        assert_eq!(start, 0);
        assert_eq!(offset_index(100, start, 64), 1);
    }

    #[test]
    fn test_offset_stays_in_array() {
        for &spacing in &[1u16, 8, 64, 128] {
            for &tick in &[-443_636, -5633, -1, 0, 1, 100, 5632, 443_636] {
                let start = start_tick_index(tick, spacing, 0).unwrap();
                let offset = offset_index(tick, start, spacing);
                assert!(
                    (0..TICK_ARRAY_SIZE as i32).contains(&offset),
                    "tick {} spacing {} gave offset {}",
                    tick,
                    spacing,
                    offset
                );
            }
        }
    }

    #[test]
    fn test_start_tick_index_fixed_point() {
        let start = start_tick_index(-12_345, 64, 0).unwrap();
        assert_eq!(start_tick_index(start, 64, 0).unwrap(), start);
    }

    #[test]
    fn test_start_tick_index_with_array_offset() {
        let span = ticks_per_array(64);
        assert_eq!(start_tick_index(100, 64, 1).unwrap(), span);
        assert_eq!(start_tick_index(100, 64, -2).unwrap(), -2 * span);
    }

    #[test]
    fn test_start_tick_index_out_of_bounds() {
        // past the upper hard bound
        assert!(matches!(
            start_tick_index(MAX_TICK_INDEX, 64, 1000),
            Err(SdkError::StartIndexOutOfBounds(_))
        ));
        // below the widened lower bound
        assert!(matches!(
            start_tick_index(MIN_TICK_INDEX, 64, -1000),
            Err(SdkError::StartIndexOutOfBounds(_))
        ));
    }

    #[test]
    fn test_widened_lower_bound_accepted() {
        // the array containing MIN_TICK_INDEX starts below the hard bound
        let start = start_tick_index(MIN_TICK_INDEX, 64, 0).unwrap();
        assert!(start <= MIN_TICK_INDEX);
        assert_eq!(start % ticks_per_array(64), 0);
    }

    #[test]
    fn test_initializable_tick_index_idempotent() {
        for &tick in &[-1000, -129, -1, 0, 1, 77, 640] {
            let once = initializable_tick_index(tick, 64);
            assert_eq!(initializable_tick_index(once, 64), once);
            assert!(once <= tick);
            assert!(is_tick_initializable(once, 64));
        }
    }

    #[test]
    fn test_next_prev_initializable() {
        assert_eq!(next_initializable_tick_index(100, 64), 128);
        assert_eq!(prev_initializable_tick_index(100, 64), 0);
        assert_eq!(next_initializable_tick_index(-100, 64), -64);
        assert_eq!(prev_initializable_tick_index(-100, 64), -192);
    }

    #[test]
    fn test_invert_tick_involution() {
        for &tick in &[i32::MIN + 1, -443_636, -1, 0, 1, 443_636] {
            assert_eq!(invert_tick(invert_tick(tick)), tick);
        }
    }

    #[test]
    fn test_tick_bounds() {
        assert!(is_tick_in_bounds(0));
        assert!(is_tick_in_bounds(MIN_TICK_INDEX));
        assert!(is_tick_in_bounds(MAX_TICK_INDEX));
        assert!(!is_tick_in_bounds(MIN_TICK_INDEX - 1));
        assert!(!is_tick_in_bounds(MAX_TICK_INDEX + 1));
    }

    #[test]
    fn test_full_range() {
        for &spacing in &[1u16, 8, 64, 128, 32_768] {
            let range = full_range_tick_index(spacing);
            assert!(is_full_range(
                spacing,
                range.tick_lower_index,
                range.tick_upper_index
            ));
            assert!(is_tick_in_bounds(range.tick_lower_index));
            assert!(is_tick_in_bounds(range.tick_upper_index));
            assert!(is_tick_initializable(range.tick_lower_index, spacing));
            assert!(is_tick_initializable(range.tick_upper_index, spacing));
        }
        assert!(!is_full_range(64, -64, 64));
    }

    #[test]
    fn test_full_range_only_threshold() {
        assert!(!is_full_range_only(64));
        assert!(!is_full_range_only(32_767));
        assert!(is_full_range_only(32_768));
    }
}
