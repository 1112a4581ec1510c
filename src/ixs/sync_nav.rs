use anchor_lang::prelude::*;
use crate::{constants::*, contexts::*, events::NavUpdated};

// Permissionless: picks up SOL that reached the vault outside deposits,
// e.g. swap proceeds settled back by the manager.
pub fn sync_nav(ctx: Context<SyncNav>) -> Result<()> {
    let nav = FundVault::available_lamports(&ctx.accounts.fund_vault.to_account_info())?;
    let fund = &mut ctx.accounts.fund;
    let price = fund.record_nav(nav)?;

    emit!(NavUpdated {
        fund: fund.key(),
        total_assets: fund.total_assets,
        total_shares: fund.total_shares,
        nav_per_share: price,
        high_water_mark: fund.high_water_mark,
    });

    msg!("NAV synced: {} lamports, {} per share", nav, price);
    Ok(())
}

#[derive(Accounts)]
pub struct SyncNav<'info> {
    #[account(
        mut,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump
    )]
    pub fund: Account<'info, Fund>,

    #[account(
        seeds = [VAULT_SEED, fund.key().as_ref()],
        bump = fund.vault_bump
    )]
    pub fund_vault: Account<'info, FundVault>,
}
