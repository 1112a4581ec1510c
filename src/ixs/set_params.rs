use anchor_lang::prelude::*;
use crate::{constants::PLATFORM_SEED, contexts::Platform, errors::FundrError};

pub fn set_params(
    ctx: Context<SetParams>,
    treasury: Pubkey,
    new_authority: Option<Pubkey>,
    is_paused: bool,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    platform.treasury = treasury;
    platform.is_paused = is_paused;
    if let Some(authority) = new_authority {
        platform.authority = authority;
    }

    msg!(
        "Platform params set: treasury {}, authority {}, paused {}",
        platform.treasury,
        platform.authority,
        platform.is_paused
    );
    Ok(())
}

#[derive(Accounts)]
pub struct SetParams<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        has_one = authority @ FundrError::NotAuthorized
    )]
    pub platform: Account<'info, Platform>,

    pub authority: Signer<'info>,
}
