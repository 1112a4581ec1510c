use anchor_lang::prelude::*;
use super::allocation::TokenAllocation;
use crate::{
    accounting::{self, DepositQuote},
    constants::{
        BASIS_POINTS_DIVISOR,
        MAX_ALLOCATIONS,
        MAX_DESCRIPTION_LEN,
        MAX_MANAGEMENT_FEE_BPS,
        MAX_NAME_LEN,
        MAX_PERFORMANCE_FEE_BPS,
    },
    errors::FundrError,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FundType {
    Manual,
    Auto,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct FundSettings {
    pub description: Option<String>,
    pub management_fee_bps: Option<u16>,
    pub performance_fee_bps: Option<u16>,
    pub min_deposit: Option<u64>,
    pub fund_type: Option<FundType>,
    pub is_active: Option<bool>,
}

#[account]
pub struct Fund {
    pub manager: Pubkey,
    pub fund_id: u64,
    pub name: String,
    pub description: String,
    pub fund_type: FundType,
    pub management_fee_bps: u16, // annual, basis points
    pub performance_fee_bps: u16, // on gains above the high-water mark
    pub min_deposit: u64, // lamports
    pub total_assets: u64, // NAV in lamports
    pub total_shares: u64,
    /// Highest NAV per share seen, scaled by PRICE_PRECISION. Informational only;
    /// performance fees are gated by each stake's own mark.
    pub high_water_mark: u64,
    pub allocations: Vec<TokenAllocation>,
    pub investor_count: u32,
    pub is_active: bool,
    pub is_platform_fund: bool,
    pub created_at: i64,
    pub last_fee_collection: i64,
    pub last_rebalance: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Fund {
    pub const LEN: usize = 8 + // discriminator
        32 + // manager
        8 + // fund_id
        4 + MAX_NAME_LEN + // name
        4 + MAX_DESCRIPTION_LEN + // description
        1 + // fund_type
        2 + // management_fee_bps
        2 + // performance_fee_bps
        8 + // min_deposit
        8 + // total_assets
        8 + // total_shares
        8 + // high_water_mark
        4 + MAX_ALLOCATIONS * TokenAllocation::LEN + // allocations
        4 + // investor_count
        1 + // is_active
        1 + // is_platform_fund
        8 + // created_at
        8 + // last_fee_collection
        8 + // last_rebalance
        1 + // bump
        1; // vault_bump

    pub fn nav_per_share(&self) -> Result<u64> {
        accounting::nav_per_share(self.total_assets, self.total_shares)
    }

    /// Stores a fresh NAV and raises the high-water mark if it was beaten.
    /// Returns the resulting NAV per share.
    pub fn record_nav(&mut self, total_assets: u64) -> Result<u64> {
        self.total_assets = total_assets;
        let price = self.nav_per_share()?;
        if self.total_shares > 0 && price > self.high_water_mark {
            self.high_water_mark = price;
        }
        Ok(price)
    }

    /// Books a priced deposit against a vault that held `nav` before it.
    pub fn apply_deposit(&mut self, quote: &DepositQuote, nav: u64, is_new_investor: bool) -> Result<u64> {
        self.total_shares = self.total_shares
            .checked_add(quote.shares)
            .ok_or(FundrError::MathOverflow)?;
        let total_assets = nav
            .checked_add(quote.net_amount)
            .ok_or(FundrError::MathOverflow)?;
        if is_new_investor {
            self.investor_count = self.investor_count.saturating_add(1);
        }
        self.record_nav(total_assets)
    }

    /// Books a redemption of `shares` paying `gross_amount` out of `nav`.
    pub fn apply_withdrawal(
        &mut self,
        shares: u64,
        gross_amount: u64,
        nav: u64,
        investor_exited: bool,
    ) -> Result<u64> {
        self.total_shares = self.total_shares
            .checked_sub(shares)
            .ok_or(FundrError::InsufficientShares)?;
        let total_assets = nav
            .checked_sub(gross_amount)
            .ok_or(FundrError::InsufficientFundBalance)?;
        if investor_exited {
            self.investor_count = self.investor_count.saturating_sub(1);
        }
        self.record_nav(total_assets)
    }

    pub fn allocated_bps(&self) -> u64 {
        self.allocations.iter().map(|a| a.target_bps as u64).sum()
    }

    /// Records a swap outcome for `mint`: adds it, updates it, or drops it
    /// once both the target and the observed balance are zero.
    pub fn record_swap(&mut self, mint: Pubkey, new_percentage: u16, observed: u64) -> Result<()> {
        require!(
            new_percentage as u64 <= BASIS_POINTS_DIVISOR,
            FundrError::InvalidAllocation
        );

        let retired = new_percentage == 0 && observed == 0;
        match self.allocations.iter().position(|a| a.mint == mint) {
            Some(idx) if retired => {
                self.allocations.remove(idx);
            }
            Some(idx) => {
                let allocation = &mut self.allocations[idx];
                allocation.target_bps = new_percentage;
                allocation.current_amount = observed;
            }
            None if retired => {}
            None => {
                require!(
                    self.allocations.len() < MAX_ALLOCATIONS,
                    FundrError::TooManyAllocations
                );
                self.allocations.push(TokenAllocation {
                    mint,
                    target_bps: new_percentage,
                    current_amount: observed,
                });
            }
        }

        require!(
            self.allocated_bps() <= BASIS_POINTS_DIVISOR,
            FundrError::InvalidAllocation
        );
        Ok(())
    }

    pub fn apply_settings(&mut self, settings: FundSettings, now: i64) -> Result<()> {
        if let Some(description) = settings.description {
            require!(description.len() <= MAX_DESCRIPTION_LEN, FundrError::DescriptionTooLong);
            self.description = description;
        }

        if let Some(fee) = settings.management_fee_bps {
            require!(fee <= MAX_MANAGEMENT_FEE_BPS, FundrError::ManagementFeeTooHigh);
            if fee != self.management_fee_bps {
                // Accrual restarts at the new rate; uncollected fees are forfeited
                self.management_fee_bps = fee;
                self.last_fee_collection = now;
            }
        }

        if let Some(fee) = settings.performance_fee_bps {
            require!(fee <= MAX_PERFORMANCE_FEE_BPS, FundrError::PerformanceFeeTooHigh);
            self.performance_fee_bps = fee;
        }

        if let Some(min_deposit) = settings.min_deposit {
            require!(min_deposit > 0, FundrError::InvalidAmount);
            self.min_deposit = min_deposit;
        }

        if let Some(fund_type) = settings.fund_type {
            self.fund_type = fund_type;
        }

        if let Some(is_active) = settings.is_active {
            self.is_active = is_active;
        }

        Ok(())
    }
}

// Holds the fund's SOL. Lamports above rent exemption are the NAV.
#[account]
pub struct FundVault {}

impl FundVault {
    pub const LEN: usize = 8;

    pub fn available_lamports(info: &AccountInfo) -> Result<u64> {
        let rent_floor = Rent::get()?.minimum_balance(Self::LEN);
        Ok(info.lamports().saturating_sub(rent_floor))
    }

    /// Moves lamports out of a program-owned vault. Each balance is borrowed
    /// on its own so the same wallet can appear in several roles.
    pub fn pay_out(vault: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        {
            let mut vault_lamports = vault.try_borrow_mut_lamports()?;
            **vault_lamports = (**vault_lamports)
                .checked_sub(amount)
                .ok_or(FundrError::InsufficientFundBalance)?;
        }
        let mut to_lamports = to.try_borrow_mut_lamports()?;
        **to_lamports = (**to_lamports)
            .checked_add(amount)
            .ok_or(FundrError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::{quote_deposit, quote_withdrawal};
    use crate::constants::{INITIAL_SHARE_PRICE, LAMPORTS_PER_SOL};
    use crate::contexts::UserStake;

    const SOL: u64 = LAMPORTS_PER_SOL;

    fn empty_fund() -> Fund {
        Fund {
            manager: Pubkey::new_unique(),
            fund_id: 1,
            name: "Blue Chip".to_string(),
            description: String::new(),
            fund_type: FundType::Manual,
            management_fee_bps: 100,
            performance_fee_bps: 2_000,
            min_deposit: 0,
            total_assets: 0,
            total_shares: 0,
            high_water_mark: INITIAL_SHARE_PRICE,
            allocations: vec![],
            investor_count: 0,
            is_active: true,
            is_platform_fund: false,
            created_at: 0,
            last_fee_collection: 0,
            last_rebalance: 0,
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn test_high_water_mark_only_rises() {
        let mut fund = empty_fund();
        fund.total_shares = 10_000_000;

        fund.record_nav(14 * LAMPORTS_PER_SOL).unwrap();
        assert_eq!(fund.high_water_mark, 1_400_000_000_000);

        let price = fund.record_nav(11 * LAMPORTS_PER_SOL).unwrap();
        assert_eq!(price, 1_100_000_000_000);
        assert_eq!(fund.high_water_mark, 1_400_000_000_000);
        assert_eq!(fund.total_assets, 11 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_empty_fund_keeps_initial_price() {
        let mut fund = empty_fund();
        assert_eq!(fund.record_nav(5 * LAMPORTS_PER_SOL).unwrap(), INITIAL_SHARE_PRICE);
        assert_eq!(fund.high_water_mark, INITIAL_SHARE_PRICE);
    }

    #[test]
    fn test_allocated_bps() {
        let mut fund = empty_fund();
        fund.allocations = vec![
            TokenAllocation { mint: Pubkey::new_unique(), target_bps: 4_000, current_amount: 0 },
            TokenAllocation { mint: Pubkey::new_unique(), target_bps: 3_500, current_amount: 9 },
        ];
        assert_eq!(fund.allocated_bps(), 7_500);
    }

    #[test]
    fn test_account_size_fits_limits() {
        assert!(Fund::LEN < 10_240);
        assert_eq!(TokenAllocation::LEN, 42);
    }

    fn deposit_into(fund: &mut Fund, stake: &mut UserStake, amount: u64, now: i64) {
        let nav = fund.total_assets;
        let quote = quote_deposit(amount, nav, fund.total_shares).unwrap();
        let is_new = stake.shares == 0;
        stake.record_deposit(quote.net_amount, quote.shares, quote.share_price, now).unwrap();
        fund.apply_deposit(&quote, nav, is_new).unwrap();
    }

    fn withdraw_from(fund: &mut Fund, stake: &mut UserStake, shares: u64, now: i64) -> u64 {
        let nav = fund.total_assets;
        let quote = quote_withdrawal(
            shares,
            nav,
            fund.total_shares,
            stake.shares,
            stake.cost_basis,
            stake.high_water_mark,
            fund.performance_fee_bps,
        )
        .unwrap();
        stake.record_withdrawal(shares, quote.cost_basis, quote.net_amount, None, now).unwrap();
        fund.apply_withdrawal(shares, quote.gross_amount, nav, stake.shares == 0).unwrap();
        quote.gross_amount
    }

    #[test]
    fn test_shares_conserved_across_stakes() {
        let mut fund = empty_fund();
        let mut alice = UserStake::default();
        let mut bob = UserStake::default();

        deposit_into(&mut fund, &mut alice, 10 * SOL, 1);
        deposit_into(&mut fund, &mut bob, 5 * SOL, 2);
        assert_eq!(fund.total_shares, alice.shares + bob.shares);
        assert_eq!(fund.investor_count, 2);

        // Top-up does not count as a new investor
        deposit_into(&mut fund, &mut alice, 2 * SOL, 3);
        assert_eq!(fund.investor_count, 2);
        assert_eq!(fund.total_shares, alice.shares + bob.shares);

        let partial = alice.shares / 2;
        withdraw_from(&mut fund, &mut alice, partial, 4);
        assert_eq!(fund.total_shares, alice.shares + bob.shares);
        assert_eq!(fund.investor_count, 2);

        let all = bob.shares;
        withdraw_from(&mut fund, &mut bob, all, 5);
        assert_eq!(bob.shares, 0);
        assert_eq!(fund.total_shares, alice.shares);
        assert_eq!(fund.investor_count, 1);

        let rest = alice.shares;
        let paid = withdraw_from(&mut fund, &mut alice, rest, 6);
        assert_eq!(fund.total_shares, 0);
        assert_eq!(fund.investor_count, 0);
        assert_eq!(fund.total_assets, 0);
        assert!(paid > 0);
    }

    #[test]
    fn test_apply_withdrawal_rejects_overdraw() {
        let mut fund = empty_fund();
        fund.total_shares = 100;
        assert!(fund.apply_withdrawal(101, 0, SOL, false).is_err());
        assert!(fund.apply_withdrawal(50, 2 * SOL, SOL, false).is_err());
    }

    #[test]
    fn test_record_swap_adds_and_updates() {
        let mut fund = empty_fund();
        let mint = Pubkey::new_unique();

        fund.record_swap(mint, 3_000, 500).unwrap();
        assert_eq!(
            fund.allocations,
            vec![TokenAllocation { mint, target_bps: 3_000, current_amount: 500 }]
        );

        fund.record_swap(mint, 4_500, 800).unwrap();
        assert_eq!(fund.allocations.len(), 1);
        assert_eq!(fund.allocations[0].target_bps, 4_500);
        assert_eq!(fund.allocations[0].current_amount, 800);
    }

    #[test]
    fn test_record_swap_drops_retired_mint() {
        let mut fund = empty_fund();
        let mint = Pubkey::new_unique();
        fund.record_swap(mint, 3_000, 500).unwrap();

        // Target zero but tokens still held: keep tracking the balance
        fund.record_swap(mint, 0, 200).unwrap();
        assert_eq!(fund.allocations.len(), 1);
        assert_eq!(fund.allocations[0].current_amount, 200);

        fund.record_swap(mint, 0, 0).unwrap();
        assert!(fund.allocations.is_empty());

        // Unknown mint with nothing to record is a no-op
        fund.record_swap(Pubkey::new_unique(), 0, 0).unwrap();
        assert!(fund.allocations.is_empty());
    }

    #[test]
    fn test_record_swap_enforces_caps() {
        let mut fund = empty_fund();
        for _ in 0..MAX_ALLOCATIONS {
            fund.record_swap(Pubkey::new_unique(), 100, 1).unwrap();
        }
        assert!(fund.record_swap(Pubkey::new_unique(), 100, 1).is_err());

        let mut fund = empty_fund();
        fund.record_swap(Pubkey::new_unique(), 7_000, 1).unwrap();
        assert!(fund.record_swap(Pubkey::new_unique(), 3_001, 1).is_err());
        assert!(fund.record_swap(Pubkey::new_unique(), 10_001, 0).is_err());
    }

    #[test]
    fn test_apply_settings_restarts_accrual_only_on_fee_change() {
        let mut fund = empty_fund();
        fund.last_fee_collection = 100;

        let same_fee = FundSettings { management_fee_bps: Some(100), ..Default::default() };
        fund.apply_settings(same_fee, 500).unwrap();
        assert_eq!(fund.last_fee_collection, 100);

        let new_fee = FundSettings { management_fee_bps: Some(250), ..Default::default() };
        fund.apply_settings(new_fee, 900).unwrap();
        assert_eq!(fund.management_fee_bps, 250);
        assert_eq!(fund.last_fee_collection, 900);
    }

    #[test]
    fn test_apply_settings_validates_bounds() {
        let mut fund = empty_fund();
        let too_high = FundSettings { performance_fee_bps: Some(2_001), ..Default::default() };
        assert!(fund.apply_settings(too_high, 1).is_err());
        let zero_min = FundSettings { min_deposit: Some(0), ..Default::default() };
        assert!(fund.apply_settings(zero_min, 1).is_err());

        let pause = FundSettings {
            is_active: Some(false),
            fund_type: Some(FundType::Auto),
            ..Default::default()
        };
        fund.apply_settings(pause, 1).unwrap();
        assert!(!fund.is_active);
        assert_eq!(fund.fund_type, FundType::Auto);
        assert_eq!(fund.performance_fee_bps, 2_000);
    }
}
