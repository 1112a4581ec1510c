use anchor_lang::prelude::*;
use crate::{
    constants::*,
    contexts::*,
    errors::FundrError,
    events::FundCreated,
};

#[derive(Accounts)]
#[instruction(fund_id: u64)]
pub struct CreateFund<'info> {
    #[account(mut)]
    pub manager: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = manager,
        space = Fund::LEN,
        seeds = [FUND_SEED, manager.key().as_ref(), fund_id.to_le_bytes().as_ref()],
        bump
    )]
    pub fund: Account<'info, Fund>,

    #[account(
        init,
        payer = manager,
        space = FundVault::LEN,
        seeds = [VAULT_SEED, fund.key().as_ref()],
        bump
    )]
    pub fund_vault: Account<'info, FundVault>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn create_fund(
    ctx: Context<CreateFund>,
    fund_id: u64,
    name: String,
    description: String,
    fund_type: FundType,
    management_fee_bps: u16,
    performance_fee_bps: u16,
    min_deposit: u64,
    initial_allocations: Vec<AllocationInput>,
) -> Result<()> {
    require!(!ctx.accounts.platform.is_paused, FundrError::PlatformPaused);
    require!(!name.trim().is_empty(), FundrError::EmptyName);
    require!(name.len() <= MAX_NAME_LEN, FundrError::NameTooLong);
    require!(description.len() <= MAX_DESCRIPTION_LEN, FundrError::DescriptionTooLong);
    require!(
        management_fee_bps <= MAX_MANAGEMENT_FEE_BPS,
        FundrError::ManagementFeeTooHigh
    );
    require!(
        performance_fee_bps <= MAX_PERFORMANCE_FEE_BPS,
        FundrError::PerformanceFeeTooHigh
    );

    let allocations = merge_allocations(&[], &initial_allocations)?;
    let now = Clock::get()?.unix_timestamp;
    let manager = ctx.accounts.manager.key();
    let is_platform_fund = manager == ctx.accounts.platform.authority;

    let fund = &mut ctx.accounts.fund;
    fund.manager = manager;
    fund.fund_id = fund_id;
    fund.name = name;
    fund.description = description;
    fund.fund_type = fund_type;
    fund.management_fee_bps = management_fee_bps;
    fund.performance_fee_bps = performance_fee_bps;
    fund.min_deposit = if min_deposit == 0 { DEFAULT_MIN_DEPOSIT } else { min_deposit };
    fund.total_assets = 0;
    fund.total_shares = 0;
    fund.high_water_mark = INITIAL_SHARE_PRICE;
    fund.allocations = allocations;
    fund.investor_count = 0;
    fund.is_active = true;
    fund.is_platform_fund = is_platform_fund;
    fund.created_at = now;
    fund.last_fee_collection = now;
    fund.last_rebalance = now;
    fund.bump = ctx.bumps.fund;
    fund.vault_bump = ctx.bumps.fund_vault;

    let platform = &mut ctx.accounts.platform;
    platform.fund_count = platform.fund_count
        .checked_add(1)
        .ok_or(FundrError::MathOverflow)?;

    emit!(FundCreated {
        fund: fund.key(),
        manager,
        fund_id,
        fund_type,
        management_fee_bps,
        performance_fee_bps,
        is_platform_fund,
    });

    msg!("Fund {} created by {} ({} allocations)", fund.name, manager, fund.allocations.len());
    Ok(())
}
