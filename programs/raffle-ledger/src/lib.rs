use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;

declare_id!("Cfy2pLkC4e9e4krHHSfA34QuwVD4tyQCecNYsh8kp2wy");

#[program]
pub mod raffle_ledger {
    use super::*;

    pub fn init_admin(ctx: Context<InitAdmin>, admin_key: Pubkey) -> Result<()> {
        instructions::init_admin::init_admin(ctx, admin_key)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, admin_key: Pubkey) -> Result<()> {
        instructions::set_admin::set_admin(ctx, admin_key)
    }

    pub fn initialize(
        ctx: Context<Initialize>,
        price: u64,
        sale_start: i64,
        sale_end: i64,
        ticket_capacity: u32,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, price, sale_start, sale_end, ticket_capacity)
    }

    pub fn buy(ctx: Context<Buy>, ticket_count: u32) -> Result<()> {
        instructions::buy::buy(ctx, ticket_count)
    }

    pub fn close(ctx: Context<Close>) -> Result<()> {
        instructions::close::close(ctx)
    }
}
