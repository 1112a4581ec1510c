use anchor_lang::prelude::*;
use super::fund::Fund;
use crate::{accounting, errors::FundrError};

#[account]
#[derive(Default)]
pub struct UserStake {
    pub user: Pubkey,
    pub fund: Pubkey,
    pub shares: u64,
    pub cost_basis: u64, // principal behind the shares still held
    pub total_deposited: u64, // cumulative net deposits
    pub total_withdrawn: u64, // cumulative net payouts
    // Share price below which no performance fee is charged, scaled by PRICE_PRECISION
    pub high_water_mark: u64,
    pub deposited_at: i64,
    pub last_deposit: i64,
    pub last_withdrawal: i64,
    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + // discriminator
        32 + // user
        32 + // fund
        8 + // shares
        8 + // cost_basis
        8 + // total_deposited
        8 + // total_withdrawn
        8 + // high_water_mark
        8 + // deposited_at
        8 + // last_deposit
        8 + // last_withdrawal
        1; // bump

    pub fn record_deposit(
        &mut self,
        net_amount: u64,
        shares: u64,
        share_price: u64,
        now: i64,
    ) -> Result<()> {
        require!(shares > 0, FundrError::ZeroShares);
        let new_shares = self.shares
            .checked_add(shares)
            .ok_or(FundrError::MathOverflow)?;

        // Share-weighted mark across the old position and the new purchase
        let weighted = (self.shares as u128)
            .checked_mul(self.high_water_mark as u128)
            .and_then(|v| v.checked_add(shares as u128 * share_price as u128))
            .ok_or(FundrError::MathOverflow)?
            / new_shares as u128;
        self.high_water_mark = u64::try_from(weighted).map_err(|_| FundrError::MathOverflow)?;

        self.shares = new_shares;
        self.cost_basis = self.cost_basis
            .checked_add(net_amount)
            .ok_or(FundrError::MathOverflow)?;
        self.total_deposited = self.total_deposited
            .checked_add(net_amount)
            .ok_or(FundrError::MathOverflow)?;
        if self.deposited_at == 0 {
            self.deposited_at = now;
        }
        self.last_deposit = now;
        Ok(())
    }

    /// `charged_at` is the share price a performance fee was taken at, if any.
    pub fn record_withdrawal(
        &mut self,
        shares: u64,
        cost_basis: u64,
        net_amount: u64,
        charged_at: Option<u64>,
        now: i64,
    ) -> Result<()> {
        self.shares = self.shares
            .checked_sub(shares)
            .ok_or(FundrError::InsufficientShares)?;
        self.cost_basis = if self.shares == 0 {
            0
        } else {
            self.cost_basis.saturating_sub(cost_basis)
        };
        self.total_withdrawn = self.total_withdrawn
            .checked_add(net_amount)
            .ok_or(FundrError::MathOverflow)?;
        if let Some(price) = charged_at {
            self.high_water_mark = self.high_water_mark.max(price);
        }
        self.last_withdrawal = now;
        Ok(())
    }

    /// Value of the position at the fund's current NAV, before fees.
    pub fn current_value(&self, fund: &Fund) -> Result<u64> {
        accounting::redemption_value(self.shares, fund.total_assets, fund.total_shares)
    }
}
