use std::str::FromStr;

use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::{constants::SLOT_HASHES_SYSVAR, error::LotteryError};

// SlotHashes layout: 8 (entry count) followed by entries of 8 (slot) + 32 (hash).
// The two entropy words are taken from the most recent hash.
const FIRST_HASH_OFFSET: usize = 8 + 8;
const SECOND_WORD_OFFSET: usize = FIRST_HASH_OFFSET + 8;

/// Picks the winning entrant of a round.
pub trait WinnerSelector {
    fn select_winner(&mut self, entrants: &[Pubkey]) -> Result<Pubkey>;
}

/// Selects a winner from block-hash entropy mixed with the clock timestamp.
/// The sysvar is only read once a draw is actually made.
pub struct SlotHashesSelector<'info> {
    slot_hashes: AccountInfo<'info>,
    unix_timestamp: i64,
}

impl<'info> SlotHashesSelector<'info> {
    pub fn new(slot_hashes: AccountInfo<'info>, unix_timestamp: i64) -> Self {
        Self {
            slot_hashes,
            unix_timestamp,
        }
    }
}

impl<'info> WinnerSelector for SlotHashesSelector<'info> {
    fn select_winner(&mut self, entrants: &[Pubkey]) -> Result<Pubkey> {
        // Manually validate the sysvar, Anchor refuses to deserialize SlotHashes
        let pubkey_matches = Pubkey::from_str(SLOT_HASHES_SYSVAR)
            .or(Err(LotteryError::InvalidSlotHashesAccount))?
            .eq(self.slot_hashes.key);
        require!(pubkey_matches, LotteryError::InvalidSlotHashesAccount);

        let data = self.slot_hashes.try_borrow_data()?;
        let seed = seed_from_entropy(&data, self.unix_timestamp)?;

        pick_entrant(seed, entrants)
    }
}

/// Folds the most recent slot hash and the timestamp into one seed.
pub fn seed_from_entropy(data: &[u8], unix_timestamp: i64) -> Result<u64> {
    require!(
        data.len() >= SECOND_WORD_OFFSET,
        LotteryError::InvalidSlotHashesAccount
    );

    let chunk1 = array_ref![data, FIRST_HASH_OFFSET, 8];
    let chunk2 = if data.len() >= SECOND_WORD_OFFSET + 8 {
        array_ref![data, SECOND_WORD_OFFSET, 8]
    } else {
        chunk1
    };

    let hash_value1 = u64::from_le_bytes(*chunk1);
    let hash_value2 = u64::from_le_bytes(*chunk2);

    let mixed_value = mix(hash_value1, unix_timestamp as u64);
    Ok(mix(mixed_value, hash_value2))
}

fn pick_entrant(seed: u64, entrants: &[Pubkey]) -> Result<Pubkey> {
    require!(!entrants.is_empty(), LotteryError::NoEntrants);

    let index = unbiased_range(seed, entrants.len() as u64)?;
    Ok(entrants[index as usize])
}

/// splitmix64 finalizer over the sum of both inputs.
///
/// A one-bit change in the slot hash or the timestamp flips about half of
/// the output bits, so neighbouring slots do not land on neighbouring tickets.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps `x` into `[0, range)` without modulo bias for power-of-two ranges,
/// and with bounded rejection sampling otherwise.
fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    if range == 0 {
        return Err(LotteryError::NoEntrants.into());
    }

    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;

    const MAX_ATTEMPTS: u8 = 3;

    for i in 0..MAX_ATTEMPTS {
        if value < threshold {
            return Ok(value % range);
        }
        value = mix(value, value.wrapping_add(i as u64 + 1));
    }

    Ok(value % range)
}
