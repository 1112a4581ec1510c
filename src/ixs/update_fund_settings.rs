use anchor_lang::prelude::*;
use crate::{
    constants::FUND_SEED,
    contexts::*,
    errors::FundrError,
    events::FundSettingsUpdated,
};

pub fn update_fund_settings(ctx: Context<UpdateFundSettings>, settings: FundSettings) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let fund = &mut ctx.accounts.fund;
    fund.apply_settings(settings, now)?;

    emit!(FundSettingsUpdated {
        fund: fund.key(),
        management_fee_bps: fund.management_fee_bps,
        performance_fee_bps: fund.performance_fee_bps,
        min_deposit: fund.min_deposit,
        fund_type: fund.fund_type,
        is_active: fund.is_active,
    });

    msg!("Fund {} settings updated, active {}", fund.name, fund.is_active);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFundSettings<'info> {
    #[account(
        mut,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump,
        has_one = manager @ FundrError::NotAuthorized
    )]
    pub fund: Account<'info, Fund>,

    pub manager: Signer<'info>,
}
