use anchor_lang::prelude::*;

use crate::{constants::ADMIN_SEED, error::RaffleError, program::RaffleLedger, state::AdminSettings};

/// Event emitted when the admin key is replaced
#[event]
pub struct AdminChanged {
    pub previous_admin: Pubkey,
    pub admin: Pubkey,
}

/// Replaces the raffle admin.
///
/// Authorised by the program upgrade authority, not by the current admin, so
/// an unreachable admin key can still be rotated out. Raffles that already
/// exist keep the authority they were created with.
pub fn set_admin(ctx: Context<SetAdmin>, admin_key: Pubkey) -> Result<()> {
    let info = ctx.accounts.admin_settings.to_account_info();
    let mut settings = {
        let data = info.try_borrow_data()?;
        AdminSettings::load(info.owner, &data[..])?
    };
    AdminSettings::check_deploying_authority(
        ctx.accounts.program_data.upgrade_authority_address,
        &ctx.accounts.authority.key(),
    )?;

    let previous_admin = settings.admin_key;
    settings.set(admin_key)?;
    {
        let mut data = info.try_borrow_mut_data()?;
        settings.store(&mut data[..])?;
    }

    msg!("Raffle admin: {} -> {}", previous_admin, admin_key);

    emit!(AdminChanged {
        previous_admin,
        admin: admin_key,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    /// CHECK: Loaded by the handler so that a missing record is reported as
    /// `NotInitialized`. Address is pinned by the seeds.
    #[account(mut, seeds = [ADMIN_SEED], bump)]
    pub admin_settings: UncheckedAccount<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ RaffleError::Unauthorized
    )]
    pub program: Program<'info, RaffleLedger>,

    pub program_data: Account<'info, ProgramData>,

    pub authority: Signer<'info>,
}
