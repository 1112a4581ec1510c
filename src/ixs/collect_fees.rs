use anchor_lang::prelude::*;
use crate::{
    accounting,
    constants::*,
    contexts::*,
    errors::FundrError,
    events::ManagementFeeCollected,
};

pub fn collect_management_fee(ctx: Context<CollectManagementFee>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_info = ctx.accounts.fund_vault.to_account_info();
    let nav = FundVault::available_lamports(&vault_info)?;

    let fund = &ctx.accounts.fund;
    let elapsed = now.saturating_sub(fund.last_fee_collection);
    let fee = accounting::management_fee(nav, fund.management_fee_bps, elapsed)?;

    FundVault::pay_out(&vault_info, &ctx.accounts.manager.to_account_info(), fee)?;

    let fund = &mut ctx.accounts.fund;
    fund.last_fee_collection = now;
    let total_assets = nav
        .checked_sub(fee)
        .ok_or(FundrError::MathOverflow)?;
    fund.record_nav(total_assets)?;

    emit!(ManagementFeeCollected {
        fund: fund.key(),
        manager: fund.manager,
        amount: fee,
        elapsed_secs: elapsed,
    });

    msg!("Management fee: {} lamports over {} seconds", fee, elapsed);
    Ok(())
}

#[derive(Accounts)]
pub struct CollectManagementFee<'info> {
    #[account(
        mut,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump,
        has_one = manager @ FundrError::NotAuthorized
    )]
    pub fund: Account<'info, Fund>,

    #[account(
        mut,
        seeds = [VAULT_SEED, fund.key().as_ref()],
        bump = fund.vault_bump
    )]
    pub fund_vault: Account<'info, FundVault>,

    #[account(mut)]
    pub manager: Signer<'info>,
}
