use anchor_lang::prelude::*;

pub mod accounting;
pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod ixs;

use contexts::*;
use ixs::*;

declare_id!("7VdinD2kvMSSZozANHmvirnmBUZxE7gdKu6Zt11m5DAe");

#[program]
pub mod fundr {
    use super::*;

    /// Create the platform config; the signer becomes its authority.
    pub fn initialize(ctx: Context<Initialize>, treasury: Pubkey) -> Result<()> {
        ixs::initialize(ctx, treasury)
    }

    pub fn set_params(
        ctx: Context<SetParams>,
        treasury: Pubkey,
        new_authority: Option<Pubkey>,
        is_paused: bool,
    ) -> Result<()> {
        ixs::set_params(ctx, treasury, new_authority, is_paused)
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
        ixs::create_fund(
            ctx,
            fund_id,
            name,
            description,
            fund_type,
            management_fee_bps,
            performance_fee_bps,
            min_deposit,
            initial_allocations,
        )
    }

    /// Deposit SOL into a fund in exchange for shares.
    pub fn deposit(ctx: Context<Deposit>, amount: u64, min_shares: u64) -> Result<()> {
        ixs::deposit(ctx, amount, min_shares)
    }

    /// Redeem shares for SOL at the current NAV.
    pub fn withdraw(ctx: Context<Withdraw>, shares: u64, min_amount_out: u64) -> Result<()> {
        ixs::withdraw(ctx, shares, min_amount_out)
    }

    pub fn rebalance(ctx: Context<Rebalance>, new_allocations: Vec<AllocationInput>) -> Result<()> {
        ixs::rebalance(ctx, new_allocations)
    }

    pub fn update_allocation_after_swap(
        ctx: Context<UpdateAllocation>,
        new_percentage: u16,
    ) -> Result<()> {
        ixs::update_allocation_after_swap(ctx, new_percentage)
    }

    pub fn update_fund_settings(
        ctx: Context<UpdateFundSettings>,
        settings: FundSettings,
    ) -> Result<()> {
        ixs::update_fund_settings(ctx, settings)
    }

    pub fn collect_management_fee(ctx: Context<CollectManagementFee>) -> Result<()> {
        ixs::collect_management_fee(ctx)
    }

    pub fn sync_nav(ctx: Context<SyncNav>) -> Result<()> {
        ixs::sync_nav(ctx)
    }

    pub fn close_fund(ctx: Context<CloseFund>) -> Result<()> {
        ixs::close_fund(ctx)
    }

    pub fn close_stake(ctx: Context<CloseStake>) -> Result<()> {
        ixs::close_stake(ctx)
    }
}
