use anchor_lang::prelude::*;
use crate::{constants::PLATFORM_SEED, contexts::*};

pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    platform.authority = ctx.accounts.user.key();
    platform.treasury = treasury;
    platform.is_paused = false;
    platform.fund_count = 0;
    platform.bump = ctx.bumps.platform;

    msg!("Platform initialized, treasury {}", treasury);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = user,
        space = Platform::LEN,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform: Account<'info, Platform>,
    #[account(mut)]
    pub user: Signer<'info>,
    pub system_program: Program<'info, System>,
}
