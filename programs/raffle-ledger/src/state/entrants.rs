use anchor_lang::prelude::*;
use arrayref::{array_mut_ref, array_ref, mut_array_refs};

use crate::{
    constants::{DISCRIMINATOR_SIZE, ENTRANT_SLOT_SIZE},
    error::RaffleError,
};

/// Header of the entrants ledger.
///
/// The account itself is allocated by the client before `initialize` with
/// room for exactly `max` slots:
///
/// ```text
/// 0..8    discriminator
/// 8..12   total (u32, little endian)
/// 12..16  max   (u32, little endian)
/// 16..    max * 32 byte entrant keys, one per ticket
/// ```
///
/// Only the header is part of the Anchor account struct. Slots are read and
/// written in place and the buffer is never resized.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Entrants {
    pub total: u32,
    pub max: u32,
}

impl Entrants {
    pub const BASE_SIZE: usize = DISCRIMINATOR_SIZE + 4 + 4;

    /// Account size a client has to allocate for `capacity` tickets.
    pub fn space(capacity: u32) -> usize {
        Self::BASE_SIZE + ENTRANT_SLOT_SIZE * capacity as usize
    }

    fn slot_offset(index: u32) -> usize {
        Self::BASE_SIZE + ENTRANT_SLOT_SIZE * index as usize
    }

    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.total)
    }

    pub fn is_full(&self) -> bool {
        self.total >= self.max
    }

    /// Formats zeroed, caller-allocated storage as an empty ledger.
    ///
    /// Anything already written to the buffer means it belongs to another
    /// ledger, so it is rejected instead of being reset.
    pub fn init_storage(data: &mut [u8], capacity: u32) -> Result<Self> {
        require!(capacity > 0, RaffleError::InvalidTicketCapacity);
        require!(data.iter().all(|byte| *byte == 0), RaffleError::AlreadyInitialized);
        require!(
            data.len() == Self::space(capacity),
            RaffleError::EntrantsSizeMismatch
        );

        let entrants = Self {
            total: 0,
            max: capacity,
        };
        let mut dst: &mut [u8] = data;
        entrants.try_serialize(&mut dst)?;

        Ok(entrants)
    }

    /// The slot buffer has to be exactly as large as `max` tickets need.
    pub fn check_storage(&self, data_len: usize) -> Result<()> {
        require!(
            data_len == Self::space(self.max),
            RaffleError::EntrantsSizeMismatch
        );
        Ok(())
    }

    /// Key holding ticket `index`, if that ticket has been sold.
    pub fn entrant_at(&self, data: &[u8], index: u32) -> Option<Pubkey> {
        if index >= self.total {
            return None;
        }
        let start = Self::slot_offset(index);
        let slot = data.get(start..start + ENTRANT_SLOT_SIZE)?;
        Some(Pubkey::new_from_array(*array_ref![slot, 0, ENTRANT_SLOT_SIZE]))
    }

    /// Sold slots in ticket order.
    pub fn entrants(&self, data: &[u8]) -> Result<Vec<Pubkey>> {
        self.check_storage(data.len())?;
        (0..self.total)
            .map(|index| {
                self.entrant_at(data, index)
                    .ok_or_else(|| error!(RaffleError::EntrantsSizeMismatch))
            })
            .collect()
    }

    /// Writes `count` copies of `entrant` into the next free slots and returns
    /// the index of the first one.
    ///
    /// Either every requested ticket fits or nothing is written.
    pub fn append(&mut self, data: &mut [u8], entrant: &Pubkey, count: u32) -> Result<u32> {
        require!(count > 0, RaffleError::InvalidTicketCount);
        require!(count <= self.remaining(), RaffleError::SoldOut);
        self.check_storage(data.len())?;

        let first = self.total;
        let end = first.checked_add(count).ok_or(RaffleError::Overflow)?;

        let slots = &mut data[Self::slot_offset(first)..Self::slot_offset(end)];
        for slot in slots.chunks_exact_mut(ENTRANT_SLOT_SIZE) {
            slot.copy_from_slice(entrant.as_ref());
        }

        self.total = end;
        self.write_header(data);

        Ok(first)
    }

    fn write_header(&self, data: &mut [u8]) {
        let header = array_mut_ref![data, 0, Entrants::BASE_SIZE];
        let (_discriminator, total, max) = mut_array_refs![header, DISCRIMINATOR_SIZE, 4, 4];
        *total = self.total.to_le_bytes();
        *max = self.max.to_le_bytes();
    }
}
