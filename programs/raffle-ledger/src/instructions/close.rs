use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{PROCEEDS_SEED, RAFFLE_SEED},
    error::RaffleError,
    state::{Entrants, Raffle},
};

/// Event emitted when a raffle's proceeds are released
#[event]
pub struct RaffleClosed {
    pub raffle: Pubkey,
    /// Amount moved out of the escrow
    pub amount: u64,
    pub destination: Pubkey,
    pub total_sold: u32,
}

/// Moves the whole escrow balance to `authority_proceeds`.
///
/// Only the raffle authority may call it. By default the sale does not need
/// to be over; with the `strict-close` feature the sale window must have
/// passed or every ticket must be sold. Raffle and entrants records are left
/// untouched and no winner is drawn.
pub fn close(ctx: Context<Close>) -> Result<()> {
    #[cfg(feature = "strict-close")]
    ctx.accounts
        .raffle
        .check_closable(&ctx.accounts.entrants, Clock::get()?.unix_timestamp)?;

    let amount = ctx.accounts.proceeds.amount;
    let raffle = &ctx.accounts.raffle;
    let signer_seeds: &[&[&[u8]]] = &[&[RAFFLE_SEED, raffle.entrants.as_ref(), &[raffle.bump]]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.proceeds.to_account_info(),
                to: ctx.accounts.authority_proceeds.to_account_info(),
                authority: raffle.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.proceeds.reload()?;
    require!(ctx.accounts.proceeds.amount == 0, RaffleError::TransferFailed);

    msg!("Released {} from raffle {}", amount, ctx.accounts.raffle.key());

    emit!(RaffleClosed {
        raffle: ctx.accounts.raffle.key(),
        amount,
        destination: ctx.accounts.authority_proceeds.key(),
        total_sold: ctx.accounts.entrants.total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(
        has_one = entrants,
        has_one = proceeds @ RaffleError::InvalidEscrow,
        has_one = authority @ RaffleError::Unauthorized,
    )]
    pub raffle: Account<'info, Raffle>,

    pub entrants: Account<'info, Entrants>,

    #[account(
        mut,
        seeds = [PROCEEDS_SEED, raffle.key().as_ref()],
        bump = raffle.proceeds_bump,
    )]
    pub proceeds: Account<'info, TokenAccount>,

    /// Destination of the proceeds, any token account of the raffle mint
    #[account(
        mut,
        constraint = authority_proceeds.mint == raffle.mint @ RaffleError::InvalidProceedsMint,
    )]
    pub authority_proceeds: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
