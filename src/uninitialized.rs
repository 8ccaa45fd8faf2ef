//! Detection of missing tick arrays
//!
//! Before building a deposit, withdrawal or swap, an integrator needs to
//! know which of the tick arrays the operation touches have not been
//! created yet. The operations here map raw ticks to their arrays, run
//! one batched fetch, and report the absent ones.

use solana_sdk::pubkey::Pubkey;

use crate::error::SdkResult;
use crate::fetch::{FetchOptions, TickArrayFetcher};
use crate::pda::AddressDeriver;
use crate::tick_index::start_tick_index;
use crate::types::{InitializableTickArray, TickArrayData};

/// Positions of the absent entries in a batch of fetch results
pub fn uninitialized_arrays(results: &[Option<TickArrayData>]) -> Vec<usize> {
    results
        .iter()
        .enumerate()
        .filter_map(|(i, result)| result.is_none().then_some(i))
        .collect()
}

/// Human-readable listing of the addresses in `addresses` whose accounts
/// do not exist, or `None` when every array is present.
pub async fn uninitialized_arrays_string<F: TickArrayFetcher>(
    addresses: &[Pubkey],
    fetcher: &F,
    options: &FetchOptions,
) -> SdkResult<Option<String>> {
    let results = fetcher.get_tick_arrays(addresses, options).await?;
    let missing = uninitialized_arrays(&results);
    if missing.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        missing
            .into_iter()
            .map(|i| addresses[i].to_string())
            .collect::<Vec<_>>()
            .join(", "),
    ))
}

/// Arrays covering `ticks` that must be initialized before a dependent
/// transaction can proceed.
///
/// Each tick is mapped to its containing array; duplicate start indices
/// collapse to the first occurrence, so one fetch covers the set. The
/// returned pairs are the minimal segments to create.
pub async fn uninitialized_array_pdas<D, F>(
    ticks: &[i32],
    pool: &Pubkey,
    tick_spacing: u16,
    deriver: &D,
    fetcher: &F,
    options: &FetchOptions,
) -> SdkResult<Vec<InitializableTickArray>>
where
    D: AddressDeriver,
    F: TickArrayFetcher,
{
    let mut start_indices: Vec<i32> = Vec::with_capacity(ticks.len());
    for &tick in ticks {
        let start = start_tick_index(tick, tick_spacing, 0)?;
        if !start_indices.contains(&start) {
            start_indices.push(start);
        }
    }

    let addresses: Vec<Pubkey> = start_indices
        .iter()
        .map(|&start| deriver.derive_tick_array_address(pool, start))
        .collect();

    let results = fetcher.get_tick_arrays(&addresses, options).await?;
    Ok(uninitialized_arrays(&results)
        .into_iter()
        .map(|i| InitializableTickArray {
            start_tick_index: start_indices[i],
            address: addresses[i],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_arrays_positions() {
        let pool = Pubkey::new_unique();
        let present = Some(TickArrayData::new(pool, 0));
        let results = vec![present, None, present, None];
        assert_eq!(uninitialized_arrays(&results), vec![1, 3]);
    }

    #[test]
    fn test_uninitialized_arrays_empty_cases() {
        assert!(uninitialized_arrays(&[]).is_empty());
        let pool = Pubkey::new_unique();
        assert!(uninitialized_arrays(&[Some(TickArrayData::new(pool, 0))]).is_empty());
        assert_eq!(uninitialized_arrays(&[None, None]), vec![0, 1]);
    }
}
