use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Entrants};

// Space calculation:
// 8 (discriminator) +
// 1 (bump) +
// 1 (proceeds_bump) +
// 8 (price) +
// 8 (sale_start) +
// 8 (sale_end) +
// 4 (ticket_capacity) +
// 32 (mint) +
// 32 (proceeds) +
// 32 (entrants) +
// 32 (authority) =
// 166 total bytes
pub const RAFFLE_ACCOUNT_SIZE: usize = 8 + 1 + 1 + 8 + 8 + 8 + 4 + 32 + 32 + 32 + 32;

#[account]
#[derive(Debug)]
pub struct Raffle {
    pub bump: u8,
    pub proceeds_bump: u8,
    /// Price of one ticket in base units of `mint`
    pub price: u64,
    pub sale_start: i64,
    pub sale_end: i64,
    /// Same value as `Entrants::max` of the paired ledger
    pub ticket_capacity: u32,
    pub mint: Pubkey,
    pub proceeds: Pubkey,
    pub entrants: Pubkey,
    /// The admin at creation time; the only key allowed to close
    pub authority: Pubkey,
}

impl Raffle {
    /// Validates the parameters of a new raffle against the current time.
    pub fn validate_params(
        price: u64,
        sale_start: i64,
        sale_end: i64,
        ticket_capacity: u32,
        now: i64,
    ) -> Result<()> {
        require!(price > 0, RaffleError::InvalidPrice);
        require!(ticket_capacity > 0, RaffleError::InvalidTicketCapacity);
        require!(sale_start <= sale_end, RaffleError::InvalidSaleWindow);
        require!(now <= sale_end, RaffleError::SaleAlreadyEnded);
        Ok(())
    }

    /// Both ends of the window are inclusive.
    pub fn is_on_sale(&self, now: i64) -> bool {
        self.sale_start <= now && now <= self.sale_end
    }

    pub fn ticket_cost(&self, ticket_count: u32) -> Result<u64> {
        self.price
            .checked_mul(ticket_count as u64)
            .ok_or_else(|| error!(RaffleError::Overflow))
    }

    /// Checks a purchase of `ticket_count` tickets paid from a balance of
    /// `available` and returns its cost. The first failing check wins:
    /// sale window, then capacity, then funds.
    pub fn check_purchase(
        &self,
        entrants: &Entrants,
        ticket_count: u32,
        available: u64,
        now: i64,
    ) -> Result<u64> {
        require!(ticket_count > 0, RaffleError::InvalidTicketCount);
        require!(self.is_on_sale(now), RaffleError::RaffleNotActive);
        require!(ticket_count <= entrants.remaining(), RaffleError::SoldOut);

        let cost = self.ticket_cost(ticket_count)?;
        require!(available >= cost, RaffleError::InsufficientFunds);

        Ok(cost)
    }

    /// Sale window over or every ticket sold.
    pub fn is_finished(&self, entrants: &Entrants, now: i64) -> bool {
        now > self.sale_end || entrants.is_full()
    }

    /// Gate applied by `close` when built with `strict-close`.
    pub fn check_closable(&self, entrants: &Entrants, now: i64) -> Result<()> {
        require!(self.is_finished(entrants, now), RaffleError::RaffleStillRunning);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;
    const END: i64 = START + 3600;

    fn raffle(price: u64, ticket_capacity: u32) -> Raffle {
        Raffle {
            bump: 255,
            proceeds_bump: 254,
            price,
            sale_start: START,
            sale_end: END,
            ticket_capacity,
            mint: Pubkey::new_unique(),
            proceeds: Pubkey::new_unique(),
            entrants: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
        }
    }

    fn entrants(total: u32, max: u32) -> Entrants {
        Entrants { total, max }
    }

    #[test]
    fn account_size_covers_serialized_raffle() {
        let mut data = Vec::new();
        raffle(10_000, 10).try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), RAFFLE_ACCOUNT_SIZE);
    }

    #[test]
    fn params_are_validated() {
        assert!(Raffle::validate_params(10_000, START, END, 10, START).is_ok());
        assert!(Raffle::validate_params(1, START, START, 1, START).is_ok());

        assert_eq!(
            Raffle::validate_params(0, START, END, 10, START).unwrap_err(),
            RaffleError::InvalidPrice.into()
        );
        assert_eq!(
            Raffle::validate_params(10_000, START, END, 0, START).unwrap_err(),
            RaffleError::InvalidTicketCapacity.into()
        );
        assert_eq!(
            Raffle::validate_params(10_000, END, START, 10, START).unwrap_err(),
            RaffleError::InvalidSaleWindow.into()
        );
        assert_eq!(
            Raffle::validate_params(10_000, START, END, 10, END + 1).unwrap_err(),
            RaffleError::SaleAlreadyEnded.into()
        );
    }

    #[test]
    fn sale_window_is_inclusive() {
        let raffle = raffle(10_000, 10);
        assert!(!raffle.is_on_sale(START - 1));
        assert!(raffle.is_on_sale(START));
        assert!(raffle.is_on_sale(END));
        assert!(!raffle.is_on_sale(END + 1));
    }

    #[test]
    fn purchase_returns_cost() {
        let raffle = raffle(10_000, 10);
        assert_eq!(
            raffle.check_purchase(&entrants(0, 10), 4, 40_000, START).unwrap(),
            40_000
        );
        assert_eq!(
            raffle.check_purchase(&entrants(7, 10), 3, 1_000_000, END).unwrap(),
            30_000
        );
    }

    #[test]
    fn purchase_checks_run_in_order() {
        let raffle = raffle(10_000, 10);

        // Outside the window every other failure is masked.
        assert_eq!(
            raffle.check_purchase(&entrants(10, 10), 1, 0, START - 1).unwrap_err(),
            RaffleError::RaffleNotActive.into()
        );
        // Capacity before funds.
        assert_eq!(
            raffle.check_purchase(&entrants(8, 10), 3, 0, START).unwrap_err(),
            RaffleError::SoldOut.into()
        );
        assert_eq!(
            raffle.check_purchase(&entrants(8, 10), 2, 19_999, START).unwrap_err(),
            RaffleError::InsufficientFunds.into()
        );
        assert_eq!(
            raffle.check_purchase(&entrants(0, 10), 0, 0, START).unwrap_err(),
            RaffleError::InvalidTicketCount.into()
        );
    }

    #[test]
    fn cost_overflow_is_reported() {
        let raffle = raffle(u64::MAX, u32::MAX);
        assert_eq!(
            raffle
                .check_purchase(&entrants(0, u32::MAX), 2, u64::MAX, START)
                .unwrap_err(),
            RaffleError::Overflow.into()
        );
        assert_eq!(RaffleError::Overflow.to_string(), "Arithmetic overflow");
    }

    #[test]
    fn closable_once_sold_out_or_ended() {
        let raffle = raffle(10_000, 10);
        assert_eq!(
            raffle.check_closable(&entrants(9, 10), END).unwrap_err(),
            RaffleError::RaffleStillRunning.into()
        );
        assert!(raffle.check_closable(&entrants(10, 10), START).is_ok());
        assert!(raffle.check_closable(&entrants(0, 10), END + 1).is_ok());
    }
}
