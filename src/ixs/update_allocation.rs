use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use crate::{
    constants::FUND_SEED,
    contexts::*,
    errors::FundrError,
    events::AllocationUpdated,
};

/// Records the outcome of a swap the manager executed for this fund: the
/// observed token balance and the new target weight for the mint.
pub fn update_allocation_after_swap(
    ctx: Context<UpdateAllocation>,
    new_percentage: u16,
) -> Result<()> {
    require!(ctx.accounts.fund.is_active, FundrError::FundInactive);

    let mint = ctx.accounts.mint.key();
    let observed = ctx.accounts.fund_token_account.amount;
    let fund = &mut ctx.accounts.fund;
    fund.record_swap(mint, new_percentage, observed)?;

    emit!(AllocationUpdated {
        fund: fund.key(),
        token_mint: mint,
        target_bps: new_percentage,
        current_amount: observed,
    });

    msg!("Allocation {} set to {} bps, holding {}", mint, new_percentage, observed);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateAllocation<'info> {
    #[account(
        mut,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump,
        has_one = manager @ FundrError::NotAuthorized
    )]
    pub fund: Account<'info, Fund>,

    pub manager: Signer<'info>,

    // Token mint the swap bought or sold
    pub mint: Account<'info, Mint>,

    // Fund's token account for the mint
    #[account(
        associated_token::mint = mint,
        associated_token::authority = fund
    )]
    pub fund_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
