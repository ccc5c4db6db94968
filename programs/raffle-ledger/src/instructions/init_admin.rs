use anchor_lang::prelude::*;

use crate::{
    constants::ADMIN_SEED,
    error::RaffleError,
    program::RaffleLedger,
    state::{AdminSettings, ADMIN_SETTINGS_ACCOUNT_SIZE},
};

/// Event emitted when the admin settings are created
#[event]
pub struct AdminInitialized {
    pub admin: Pubkey,
    pub authority: Pubkey,
}

/// Instruction to create the admin settings singleton
/// This should be called once after the program is deployed
///
/// # Security Considerations
/// - Creates a PDA with seed "admin" holding the raffle admin key
/// - Fails with `AlreadyInitialized` once an admin has been assigned
/// - Only the upgrade authority of this program may call it
///
/// # Account Validations
/// * AdminSettings - PDA created on first use, funded by the authority
/// * Program / ProgramData - Must be this program and its data account
/// * Authority - Signer that must be the program upgrade authority
pub fn init_admin(ctx: Context<InitAdmin>, admin_key: Pubkey) -> Result<()> {
    ctx.accounts.admin_settings.init(admin_key)?;
    AdminSettings::check_deploying_authority(
        ctx.accounts.program_data.upgrade_authority_address,
        &ctx.accounts.authority.key(),
    )?;

    msg!("Raffle admin: {}", admin_key);

    emit!(AdminInitialized {
        admin: admin_key,
        authority: ctx.accounts.authority.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitAdmin<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = ADMIN_SETTINGS_ACCOUNT_SIZE,
        seeds = [ADMIN_SEED],
        bump,
    )]
    pub admin_settings: Account<'info, AdminSettings>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ RaffleError::Unauthorized
    )]
    pub program: Program<'info, RaffleLedger>,

    pub program_data: Account<'info, ProgramData>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
