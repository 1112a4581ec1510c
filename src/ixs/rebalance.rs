use anchor_lang::prelude::*;
use crate::{
    constants::FUND_SEED,
    contexts::*,
    errors::FundrError,
    events::RebalanceExecuted,
};

pub fn rebalance(ctx: Context<Rebalance>, new_allocations: Vec<AllocationInput>) -> Result<()> {
    require!(ctx.accounts.fund.is_active, FundrError::FundInactive);

    let fund = &mut ctx.accounts.fund;
    let merged = merge_allocations(&fund.allocations, &new_allocations)?;
    let old_allocations = std::mem::replace(&mut fund.allocations, merged);
    let now = Clock::get()?.unix_timestamp;
    fund.last_rebalance = now;

    msg!(
        "Rebalance: {} -> {} allocations, {} bps allocated",
        old_allocations.len(),
        fund.allocations.len(),
        fund.allocated_bps()
    );

    emit!(RebalanceExecuted {
        fund: fund.key(),
        manager: ctx.accounts.manager.key(),
        old_allocations,
        new_allocations: fund.allocations.clone(),
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Rebalance<'info> {
    #[account(
        mut,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump,
        has_one = manager @ FundrError::NotAuthorized
    )]
    pub fund: Account<'info, Fund>,

    pub manager: Signer<'info>,
}
