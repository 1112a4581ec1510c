use anchor_lang::prelude::*;
use crate::{constants::STAKE_SEED, contexts::*, errors::FundrError};

pub fn close_stake(ctx: Context<CloseStake>) -> Result<()> {
    require!(ctx.accounts.user_stake.shares == 0, FundrError::StakeNotEmpty);
    msg!("Stake closed for {}", ctx.accounts.user.key());
    Ok(())
}

#[derive(Accounts)]
pub struct CloseStake<'info> {
    #[account(
        mut,
        close = user,
        seeds = [STAKE_SEED, user_stake.fund.as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        has_one = user @ FundrError::NotAuthorized
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(mut)]
    pub user: Signer<'info>,
}
