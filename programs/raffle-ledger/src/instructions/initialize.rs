use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{ADMIN_SEED, PROCEEDS_SEED, RAFFLE_SEED},
    error::RaffleError,
    state::{AdminSettings, Entrants, Raffle, RAFFLE_ACCOUNT_SIZE},
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// The entrants ledger paired with the raffle
    pub entrants: Pubkey,
    /// Price per ticket in base units of the mint
    pub price: u64,
    pub sale_start: i64,
    pub sale_end: i64,
    pub ticket_capacity: u32,
    pub mint: Pubkey,
    pub authority: Pubkey,
}

/// Instruction to create a raffle, its entrants ledger and its proceeds escrow
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `price` - Price per ticket in base units of `proceeds_mint` (must be > 0)
/// * `sale_start` - Unix timestamp from which tickets can be bought
/// * `sale_end` - Unix timestamp after which tickets can no longer be bought
/// * `ticket_capacity` - Number of tickets, must match the entrants account size
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the signer is the admin stored in the admin settings PDA
/// 2. Ensures price and capacity are non-zero and the sale window is ordered
/// 3. Rejects a sale window that has already ended
/// 4. Requires the entrants account to be zeroed, rent exempt and sized for
///    exactly `ticket_capacity` slots
/// 5. Rejects a second call for the same entrants account with
///    `AlreadyInitialized`
///
/// # Account Validations
/// * AdminSettings - PDA with seed "admin", admin key must match the signer
/// * Entrants - Caller allocated account owned by this program
/// * Raffle - New PDA with seeds ["raffle", entrants_key]
/// * Proceeds - New token account PDA with seeds ["proceeds", raffle_key],
///   owned by the raffle PDA
///
/// # Implementation Notes
/// - The signer becomes the raffle authority and is the only key able to close it
/// - All three records are created in the same transaction
/// - Raffle and proceeds use `init_if_needed` so an existing raffle reaches the
///   handler and is reported, instead of failing inside account creation
pub fn initialize(
    ctx: Context<Initialize>,
    price: u64,
    sale_start: i64,
    sale_end: i64,
    ticket_capacity: u32,
) -> Result<()> {
    // A raffle created by an earlier call already points at its ledger.
    require_keys_eq!(
        ctx.accounts.raffle.entrants,
        Pubkey::default(),
        RaffleError::AlreadyInitialized
    );

    let now = Clock::get()?.unix_timestamp;
    Raffle::validate_params(price, sale_start, sale_end, ticket_capacity, now)?;

    {
        let mut data = ctx.accounts.entrants.try_borrow_mut_data()?;
        Entrants::init_storage(&mut data[..], ticket_capacity)?;
    }

    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.proceeds_bump = ctx.bumps.proceeds;
    raffle.price = price;
    raffle.sale_start = sale_start;
    raffle.sale_end = sale_end;
    raffle.ticket_capacity = ticket_capacity;
    raffle.mint = ctx.accounts.proceeds_mint.key();
    raffle.proceeds = ctx.accounts.proceeds.key();
    raffle.entrants = ctx.accounts.entrants.key();
    raffle.authority = ctx.accounts.authority.key();

    msg!(
        "Raffle {}: {} tickets at {} from {} to {}",
        raffle.key(),
        ticket_capacity,
        price,
        sale_start,
        sale_end
    );

    emit!(RaffleInitialized {
        raffle: raffle.key(),
        entrants: raffle.entrants,
        price,
        sale_start,
        sale_end,
        ticket_capacity,
        mint: raffle.mint,
        authority: raffle.authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        seeds = [ADMIN_SEED],
        bump,
        constraint = admin_settings.admin_key == authority.key() @ RaffleError::Unauthorized,
    )]
    pub admin_settings: Account<'info, AdminSettings>,

    /// CHECK: Allocated by the client with `Entrants::space(ticket_capacity)`
    /// bytes and assigned to this program; zeroed state and size are checked
    /// by the handler.
    #[account(
        mut,
        owner = crate::ID,
        constraint = rent.is_exempt(entrants.lamports(), entrants.data_len())
            @ RaffleError::EntrantsNotRentExempt,
    )]
    pub entrants: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED, entrants.key().as_ref()],
        bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Escrow for ticket sales, only the raffle PDA can move funds out
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [PROCEEDS_SEED, raffle.key().as_ref()],
        bump,
        token::mint = proceeds_mint,
        token::authority = raffle,
    )]
    pub proceeds: Account<'info, TokenAccount>,

    pub proceeds_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
