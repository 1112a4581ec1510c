use anchor_lang::prelude::*;
use crate::{
    accounting,
    constants::*,
    contexts::*,
    errors::FundrError,
    events::DepositMade,
};

/// `min_shares` bounds the shares minted; pass 0 to accept any price.
pub fn deposit(ctx: Context<Deposit>, amount: u64, min_shares: u64) -> Result<()> {
    // 1. Validate
    require!(amount > 0, FundrError::InvalidAmount);
    require!(!ctx.accounts.platform.is_paused, FundrError::PlatformPaused);
    require!(ctx.accounts.fund.is_active, FundrError::FundInactive);
    require!(amount >= ctx.accounts.fund.min_deposit, FundrError::DepositTooSmall);

    let now = Clock::get()?.unix_timestamp;

    // 2. Price the deposit against the vault's NAV before any SOL moves
    let nav = FundVault::available_lamports(&ctx.accounts.fund_vault.to_account_info())?;
    let quote = accounting::quote_deposit(amount, nav, ctx.accounts.fund.total_shares)?;
    quote.check_min_shares(min_shares)?;

    // 3. Transfer fee: User -> Treasury
    if quote.platform_fee > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.user.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            quote.platform_fee,
        )?;
    }

    // 4. Transfer net deposit: User -> Vault
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.fund_vault.to_account_info(),
            },
        ),
        quote.net_amount,
    )?;

    // 5. Update stake
    let fund_key = ctx.accounts.fund.key();
    let user_stake = &mut ctx.accounts.user_stake;
    let is_new_investor = user_stake.shares == 0;
    if user_stake.user == Pubkey::default() {
        user_stake.user = ctx.accounts.user.key();
        user_stake.fund = fund_key;
        user_stake.bump = ctx.bumps.user_stake;
    }
    user_stake.record_deposit(quote.net_amount, quote.shares, quote.share_price, now)?;

    // 6. Update fund NAV and supply
    let fund = &mut ctx.accounts.fund;
    fund.apply_deposit(&quote, nav, is_new_investor)?;

    emit!(DepositMade {
        fund: fund_key,
        user: ctx.accounts.user.key(),
        amount,
        net_amount: quote.net_amount,
        shares_issued: quote.shares,
        platform_fee: quote.platform_fee,
        share_price: quote.share_price,
        timestamp: now,
    });

    msg!(
        "Deposit: {} lamports ({} net) for {} shares, fee {}",
        amount,
        quote.net_amount,
        quote.shares,
        quote.platform_fee
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        has_one = treasury
    )]
    pub platform: Account<'info, Platform>,

    // Account that receives the platform fee
    #[account(mut)]
    pub treasury: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [FUND_SEED, fund.manager.as_ref(), fund.fund_id.to_le_bytes().as_ref()],
        bump = fund.bump
    )]
    pub fund: Account<'info, Fund>,

    #[account(
        mut,
        seeds = [VAULT_SEED, fund.key().as_ref()],
        bump = fund.vault_bump
    )]
    pub fund_vault: Account<'info, FundVault>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [STAKE_SEED, fund.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}
