use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::PROCEEDS_SEED,
    error::RaffleError,
    state::{Entrants, Raffle},
};

/// Event emitted when tickets are purchased
#[event]
pub struct TicketsPurchased {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Number of tickets purchased
    pub ticket_count: u32,
    /// Total amount paid in base units of the raffle mint
    pub payment_amount: u64,
    /// Slot index of the first ticket of this purchase
    pub ticket_start_index: u32,
    /// Tickets sold so far, this purchase included
    pub total_sold: u32,
}

/// Instruction to purchase tickets for a raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_count` - The number of tickets to purchase
///
/// # Security Considerations
/// The instruction performs its checks in this order, the first failure wins:
/// 1. The current time lies within `[sale_start, sale_end]`
/// 2. All requested tickets are still available; a purchase is never partially filled
/// 3. The buyer token account holds at least `ticket_count * price`
///
/// # Account Validations
/// * Raffle - Must reference the given entrants and proceeds accounts
/// * Entrants - Writable, which serialises concurrent purchases of the same raffle
/// * Proceeds - PDA with seeds ["proceeds", raffle_key]
/// * BuyerTokenAccount - Must hold the raffle mint and be owned by the buyer
///
/// # Implementation Notes
/// - Uses checked arithmetic operations to prevent overflow
/// - The buyer key is written to one slot per ticket, in purchase order
/// - The escrow balance is verified after the transfer
pub fn buy(ctx: Context<Buy>, ticket_count: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let payment_amount = ctx.accounts.raffle.check_purchase(
        &ctx.accounts.entrants,
        ticket_count,
        ctx.accounts.buyer_token_account.amount,
        now,
    )?;

    let buyer = ctx.accounts.buyer.key();
    let entrants_info = ctx.accounts.entrants.to_account_info();
    let ticket_start_index = {
        let mut data = entrants_info.try_borrow_mut_data()?;
        ctx.accounts.entrants.append(&mut data[..], &buyer, ticket_count)?
    };

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.proceeds.amount;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_token_account.to_account_info(),
                to: ctx.accounts.proceeds.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        payment_amount,
    )?;

    ctx.accounts.proceeds.reload()?;
    require!(
        ctx.accounts.proceeds.amount
            == pre_transfer_balance
                .checked_add(payment_amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    let total_sold = ctx.accounts.entrants.total;
    msg!("Total entrants: {}", total_sold);

    emit!(TicketsPurchased {
        raffle: ctx.accounts.raffle.key(),
        buyer,
        ticket_count,
        payment_amount,
        ticket_start_index,
        total_sold,
    });

    Ok(())
}

/// Accounts required for the buy instruction
#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(
        has_one = entrants,
        has_one = proceeds @ RaffleError::InvalidEscrow,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub entrants: Account<'info, Entrants>,

    #[account(
        mut,
        seeds = [PROCEEDS_SEED, raffle.key().as_ref()],
        bump = raffle.proceeds_bump,
    )]
    pub proceeds: Account<'info, TokenAccount>,

    /// Token account the tickets are paid from
    #[account(
        mut,
        constraint = buyer_token_account.mint == raffle.mint @ RaffleError::InvalidProceedsMint,
        constraint = buyer_token_account.owner == buyer.key() @ RaffleError::BuyerTokenOwnerMismatch,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
