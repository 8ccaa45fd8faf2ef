//! Tick array sequences for price sweeps

use solana_sdk::pubkey::Pubkey;

use crate::error::SdkResult;
use crate::pda::AddressDeriver;
use crate::tick_index::start_tick_index;

/// Addresses of `count` consecutive tick arrays beginning at the array
/// containing `tick_index`, in the order a sweep will cross them.
///
/// Steps upward one array at a time, or downward when
/// `reverse_direction` is set. A run that would leave the representable
/// start-index domain propagates the out-of-bounds error.
pub fn tick_array_addresses<D: AddressDeriver>(
    deriver: &D,
    pool: &Pubkey,
    tick_index: i32,
    tick_spacing: u16,
    count: u32,
    reverse_direction: bool,
) -> SdkResult<Vec<Pubkey>> {
    let mut addresses = Vec::with_capacity(count as usize);
    for i in 0..count as i32 {
        let array_offset = if reverse_direction { -i } else { i };
        let start = start_tick_index(tick_index, tick_spacing, array_offset)?;
        addresses.push(deriver.derive_tick_array_address(pool, start));
    }
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::pda::PdaDeriver;
    use crate::tick_index::ticks_per_array;

    #[test]
    fn test_forward_sequence_order() {
        let pool = Pubkey::new_unique();
        let deriver = PdaDeriver::default();
        let span = ticks_per_array(64);

        let addresses = tick_array_addresses(&deriver, &pool, 100, 64, 3, false).unwrap();
        let expected: Vec<Pubkey> = [0, span, 2 * span]
            .iter()
            .map(|&start| deriver.derive_tick_array_address(&pool, start))
            .collect();
        assert_eq!(addresses, expected);
    }

    #[test]
    fn test_reverse_sequence_order() {
        let pool = Pubkey::new_unique();
        let deriver = PdaDeriver::default();
        let span = ticks_per_array(64);

        let addresses = tick_array_addresses(&deriver, &pool, 100, 64, 3, true).unwrap();
        let expected: Vec<Pubkey> = [0, -span, -2 * span]
            .iter()
            .map(|&start| deriver.derive_tick_array_address(&pool, start))
            .collect();
        assert_eq!(addresses, expected);
    }

    #[test]
    fn test_sequence_past_bounds_fails() {
        let pool = Pubkey::new_unique();
        let deriver = PdaDeriver::default();

        let result = tick_array_addresses(
            &deriver,
            &pool,
            crate::constants::MAX_TICK_INDEX,
            64,
            10,
            false,
        );
        assert!(matches!(result, Err(SdkError::StartIndexOutOfBounds(_))));
    }
}
