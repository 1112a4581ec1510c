use anchor_lang::prelude::*;
use crate::{constants::*, contexts::*, errors::FundrError, events::FundClosed};

pub fn close_fund(ctx: Context<CloseFund>) -> Result<()> {
    require!(ctx.accounts.fund.total_shares == 0, FundrError::FundNotEmpty);

    emit!(FundClosed {
        fund: ctx.accounts.fund.key(),
        manager: ctx.accounts.manager.key(),
    });

    msg!("Fund {} closed", ctx.accounts.fund.name);
    Ok(())
}

#[derive(Accounts)]
pub struct CloseFund<'info> {
    #[account(
        mut,
        close = manager,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump,
        has_one = manager @ FundrError::NotAuthorized
    )]
    pub fund: Account<'info, Fund>,

    // Residual rent and dust go back to the manager
    #[account(
        mut,
        close = manager,
        seeds = [VAULT_SEED, fund.key().as_ref()],
        bump = fund.vault_bump
    )]
    pub fund_vault: Account<'info, FundVault>,

    #[account(mut)]
    pub manager: Signer<'info>,
}
