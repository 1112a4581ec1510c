use anchor_lang::prelude::*;
use crate::{
    accounting,
    constants::*,
    contexts::*,
    errors::FundrError,
    events::WithdrawalMade,
};

/// `min_amount_out` bounds the lamports paid to the investor after fees.
pub fn withdraw(ctx: Context<Withdraw>, shares: u64, min_amount_out: u64) -> Result<()> {
    require!(shares > 0, FundrError::InvalidAmount);
    require!(
        ctx.accounts.user_stake.shares >= shares,
        FundrError::InsufficientShares
    );

    let now = Clock::get()?.unix_timestamp;
    let fund = &ctx.accounts.fund;
    let stake = &ctx.accounts.user_stake;

    // 1. Price the redemption at the vault's NAV
    let nav = FundVault::available_lamports(&ctx.accounts.fund_vault.to_account_info())?;
    let quote = accounting::quote_withdrawal(
        shares,
        nav,
        fund.total_shares,
        stake.shares,
        stake.cost_basis,
        stake.high_water_mark,
        fund.performance_fee_bps,
    )?;
    require!(nav >= quote.gross_amount, FundrError::InsufficientFundBalance);
    quote.check_min_out(min_amount_out)?;
    let price = accounting::nav_per_share(nav, fund.total_shares)?;

    // 2. Move lamports out of the vault: user, treasury, manager
    let vault_info = ctx.accounts.fund_vault.to_account_info();
    FundVault::pay_out(&vault_info, &ctx.accounts.user.to_account_info(), quote.net_amount)?;
    FundVault::pay_out(&vault_info, &ctx.accounts.treasury.to_account_info(), quote.platform_fee)?;
    FundVault::pay_out(&vault_info, &ctx.accounts.manager.to_account_info(), quote.performance_fee)?;

    // 3. Update stake
    let charged_at = if quote.performance_fee > 0 { Some(price) } else { None };
    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.record_withdrawal(shares, quote.cost_basis, quote.net_amount, charged_at, now)?;
    let exited = user_stake.shares == 0;

    // 4. Update fund
    let fund = &mut ctx.accounts.fund;
    fund.apply_withdrawal(shares, quote.gross_amount, nav, exited)?;

    emit!(WithdrawalMade {
        fund: fund.key(),
        user: ctx.accounts.user.key(),
        shares_redeemed: shares,
        gross_amount: quote.gross_amount,
        amount_received: quote.net_amount,
        platform_fee: quote.platform_fee,
        performance_fee: quote.performance_fee,
        gain: quote.gain,
        timestamp: now,
    });

    msg!(
        "Withdraw: {} shares for {} lamports, platform fee {}, performance fee {}",
        shares,
        quote.net_amount,
        quote.platform_fee,
        quote.performance_fee
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        has_one = treasury
    )]
    pub platform: Account<'info, Platform>,

    #[account(mut)]
    pub treasury: SystemAccount<'info>,

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

    #[account(
        mut,
        seeds = [STAKE_SEED, fund.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.user == user.key() @ FundrError::NotAuthorized
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(mut)]
    pub user: Signer<'info>,

    // Receives the performance fee
    #[account(mut)]
    pub manager: SystemAccount<'info>,
}
