//! Initialized-tick search within a single tick array
//!
//! Both searches are confined to the array they are given. Walking across
//! array boundaries is the caller's job, with [`crate::sweep`] supplying
//! the arrays in traversal order.

use crate::constants::TICK_ARRAY_SIZE;
use crate::error::{SdkError, SdkResult};
use crate::tick_index::offset_index;
use crate::types::{Tick, TickArrayData};

/// Slot holding the state for `tick_index` in `array`.
///
/// Fails when the offset does not address a slot in the array, which
/// means the caller paired the wrong array with this tick and spacing.
pub fn tick_from_array<'a>(
    array: &'a TickArrayData,
    tick_index: i32,
    tick_spacing: u16,
) -> SdkResult<&'a Tick> {
    let offset = offset_index(tick_index, array.start_tick_index, tick_spacing);
    usize::try_from(offset)
        .ok()
        .and_then(|offset| array.ticks.get(offset))
        .ok_or(SdkError::TickNotInArray {
            tick_index,
            start_tick_index: array.start_tick_index,
        })
}

/// Global tick index of the nearest initialized slot at or below
/// `current_tick_index`, or `None` when the scan leaves the array.
///
/// The anchor slot itself counts: a search anchored on an initialized
/// tick returns that tick.
pub fn find_previous_initialized_tick_index(
    array: &TickArrayData,
    current_tick_index: i32,
    tick_spacing: u16,
) -> Option<i32> {
    find_initialized_tick_index(array, current_tick_index, tick_spacing, false)
}

/// Global tick index of the nearest initialized slot strictly above
/// `current_tick_index`, or `None` when the scan leaves the array.
///
/// The anchor slot is skipped, asymmetric with the previous-direction
/// search by design.
pub fn find_next_initialized_tick_index(
    array: &TickArrayData,
    current_tick_index: i32,
    tick_spacing: u16,
) -> Option<i32> {
    find_initialized_tick_index(array, current_tick_index, tick_spacing, true)
}

fn find_initialized_tick_index(
    array: &TickArrayData,
    current_tick_index: i32,
    tick_spacing: u16,
    forwards: bool,
) -> Option<i32> {
    let mut offset = offset_index(current_tick_index, array.start_tick_index, tick_spacing);
    if forwards {
        offset += 1;
    }
    let step = if forwards { 1 } else { -1 };

    while (0..TICK_ARRAY_SIZE as i32).contains(&offset) {
        if array.ticks[offset as usize].initialized {
            return Some(array.start_tick_index + offset * i32::from(tick_spacing));
        }
        offset += step;
    }
    None
}

/// Closest initialized tick across an ordered run of arrays.
///
/// `arrays` must be in traversal order for the direction: increasing
/// start indices when scanning forward, decreasing when `reverse`.
/// Arrays the sweep has already passed contribute nothing.
pub fn first_initialized_tick_index(
    arrays: &[TickArrayData],
    current_tick_index: i32,
    tick_spacing: u16,
    reverse: bool,
) -> Option<i32> {
    let spacing = i32::from(tick_spacing);
    for array in arrays {
        let last_tick = array.start_tick_index + (TICK_ARRAY_SIZE as i32 - 1) * spacing;
        let hit = if reverse {
            // arrays below the anchor are entered at their top slot
            let anchor = current_tick_index.min(last_tick);
            find_previous_initialized_tick_index(array, anchor, tick_spacing)
        } else {
            // arrays above the anchor are entered at their bottom slot
            let anchor = current_tick_index.max(array.start_tick_index - spacing);
            find_next_initialized_tick_index(array, anchor, tick_spacing)
        };
        if hit.is_some() {
            return hit;
        }
    }
    None
}
