use anchor_lang::prelude::*;
use crate::constants::{
    BASIS_POINTS_DIVISOR,
    INITIAL_SHARE_PRICE,
    LAMPORTS_PER_SOL,
    PLATFORM_FEE_BPS,
    PRICE_PRECISION,
    SECONDS_PER_YEAR,
    SHARES_PER_SOL,
};
use crate::errors::FundrError;

/// `a * b / c` computed in u128, rounding down.
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c > 0, FundrError::MathOverflow);
    let value = (a as u128)
        .checked_mul(b as u128)
        .ok_or(FundrError::MathOverflow)?
        .checked_div(c as u128)
        .ok_or(FundrError::MathOverflow)?;
    u64::try_from(value).map_err(|_| FundrError::MathOverflow.into())
}

pub fn fee_from_bps(amount: u64, fee_bps: u64) -> Result<u64> {
    mul_div(amount, fee_bps, BASIS_POINTS_DIVISOR)
}

/// Flat platform fee, identical on the deposit and withdrawal paths.
pub fn platform_fee(amount: u64) -> Result<u64> {
    fee_from_bps(amount, PLATFORM_FEE_BPS)
}

/// Shares minted for `net_amount` lamports.
///
/// An empty fund (no shares, or no assets backing them) prices the deposit at
/// `SHARES_PER_SOL` shares per SOL. Otherwise the depositor buys in at the
/// current NAV per share.
pub fn shares_for_deposit(net_amount: u64, total_assets: u64, total_shares: u64) -> Result<u64> {
    if total_shares == 0 || total_assets == 0 {
        return mul_div(net_amount, SHARES_PER_SOL, LAMPORTS_PER_SOL);
    }
    mul_div(net_amount, total_shares, total_assets)
}

/// Lamports owed for `shares` before any fees.
pub fn redemption_value(shares: u64, total_assets: u64, total_shares: u64) -> Result<u64> {
    if total_shares == 0 {
        return Ok(0);
    }
    mul_div(shares, total_assets, total_shares)
}

/// Lamports per share scaled by `PRICE_PRECISION`.
pub fn nav_per_share(total_assets: u64, total_shares: u64) -> Result<u64> {
    if total_shares == 0 {
        return Ok(INITIAL_SHARE_PRICE);
    }
    mul_div(total_assets, PRICE_PRECISION, total_shares)
}

pub fn value_at_price(shares: u64, share_price: u64) -> Result<u64> {
    mul_div(shares, share_price, PRICE_PRECISION)
}

/// Returns `(gain, fee)`. Only value above both the principal and the
/// high-water value is treated as gain.
pub fn performance_fee(
    final_value: u64,
    cost_basis: u64,
    high_water_value: u64,
    performance_fee_bps: u16,
) -> Result<(u64, u64)> {
    let threshold = cost_basis.max(high_water_value);
    let gain = final_value.saturating_sub(threshold);
    let fee = fee_from_bps(gain, performance_fee_bps as u64)?;
    Ok((gain, fee))
}

/// Pro-rata annual management fee on `nav` for `elapsed_secs`.
pub fn management_fee(nav: u64, management_fee_bps: u16, elapsed_secs: i64) -> Result<u64> {
    if elapsed_secs <= 0 || management_fee_bps == 0 {
        return Ok(0);
    }
    let numerator = (nav as u128)
        .checked_mul(management_fee_bps as u128)
        .ok_or(FundrError::MathOverflow)?
        .checked_mul(elapsed_secs as u128)
        .ok_or(FundrError::MathOverflow)?;
    let denominator = (BASIS_POINTS_DIVISOR as u128)
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or(FundrError::MathOverflow)?;
    u64::try_from(numerator / denominator).map_err(|_| FundrError::MathOverflow.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    pub platform_fee: u64,
    pub net_amount: u64,
    pub shares: u64,
    // Effective price paid, scaled by PRICE_PRECISION
    pub share_price: u64,
}

pub fn quote_deposit(amount: u64, total_assets: u64, total_shares: u64) -> Result<DepositQuote> {
    require!(amount > 0, FundrError::InvalidAmount);

    let platform_fee = platform_fee(amount)?;
    let net_amount = amount
        .checked_sub(platform_fee)
        .ok_or(FundrError::MathOverflow)?;
    let shares = shares_for_deposit(net_amount, total_assets, total_shares)?;
    require!(shares > 0, FundrError::ZeroShares);

    let share_price = mul_div(net_amount, PRICE_PRECISION, shares)?;

    Ok(DepositQuote {
        platform_fee,
        net_amount,
        shares,
        share_price,
    })
}

impl DepositQuote {
    /// Fails when fewer than `min_shares` would be minted.
    pub fn check_min_shares(&self, min_shares: u64) -> Result<()> {
        require!(self.shares >= min_shares, FundrError::SlippageExceeded);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalQuote {
    pub gross_amount: u64,
    pub cost_basis: u64,
    pub gain: u64,
    pub platform_fee: u64,
    pub performance_fee: u64,
    pub net_amount: u64,
}

/// Prices a redemption of `shares` out of a stake holding `stake_shares`
/// with `stake_cost_basis` lamports of principal.
pub fn quote_withdrawal(
    shares: u64,
    total_assets: u64,
    total_shares: u64,
    stake_shares: u64,
    stake_cost_basis: u64,
    stake_high_water_mark: u64,
    performance_fee_bps: u16,
) -> Result<WithdrawalQuote> {
    require!(shares > 0, FundrError::InvalidAmount);
    require!(shares <= stake_shares, FundrError::InsufficientShares);
    require!(shares <= total_shares, FundrError::InsufficientShares);

    let gross_amount = redemption_value(shares, total_assets, total_shares)?;
    let cost_basis = mul_div(stake_cost_basis, shares, stake_shares)?;
    let high_water_value = value_at_price(shares, stake_high_water_mark)?;

    let (gain, performance_fee) =
        performance_fee(gross_amount, cost_basis, high_water_value, performance_fee_bps)?;
    let platform_fee = platform_fee(gross_amount)?;

    let net_amount = gross_amount
        .checked_sub(platform_fee)
        .and_then(|v| v.checked_sub(performance_fee))
        .ok_or(FundrError::MathOverflow)?;

    Ok(WithdrawalQuote {
        gross_amount,
        cost_basis,
        gain,
        platform_fee,
        performance_fee,
        net_amount,
    })
}

impl WithdrawalQuote {
    /// Fails when the investor would receive less than `min_amount_out`.
    pub fn check_min_out(&self, min_amount_out: u64) -> Result<()> {
        require!(self.net_amount >= min_amount_out, FundrError::SlippageExceeded);
        Ok(())
    }
}
