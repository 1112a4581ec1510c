use anchor_lang::prelude::*;
use crate::contexts::{FundType, TokenAllocation};

#[event]
pub struct FundCreated {
    pub fund: Pubkey,
    pub manager: Pubkey,
    pub fund_id: u64,
    pub fund_type: FundType,
    pub management_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub is_platform_fund: bool,
}

#[event]
pub struct DepositMade {
    pub fund: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub net_amount: u64,
    pub shares_issued: u64,
    pub platform_fee: u64,
    pub share_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalMade {
    pub fund: Pubkey,
    pub user: Pubkey,
    pub shares_redeemed: u64,
    pub gross_amount: u64,
    pub amount_received: u64,
    pub platform_fee: u64,
    pub performance_fee: u64,
    pub gain: u64,
    pub timestamp: i64,
}

#[event]
pub struct RebalanceExecuted {
    pub fund: Pubkey,
    pub manager: Pubkey,
    pub old_allocations: Vec<TokenAllocation>,
    pub new_allocations: Vec<TokenAllocation>,
    pub timestamp: i64,
}

#[event]
pub struct AllocationUpdated {
    pub fund: Pubkey,
    pub token_mint: Pubkey,
    pub target_bps: u16,
    pub current_amount: u64,
}

#[event]
pub struct ManagementFeeCollected {
    pub fund: Pubkey,
    pub manager: Pubkey,
    pub amount: u64,
    pub elapsed_secs: i64,
}

#[event]
pub struct NavUpdated {
    pub fund: Pubkey,
    pub total_assets: u64,
    pub total_shares: u64,
    pub nav_per_share: u64,
    pub high_water_mark: u64,
}

#[event]
pub struct FundSettingsUpdated {
    pub fund: Pubkey,
    pub management_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub min_deposit: u64,
    pub fund_type: FundType,
    pub is_active: bool,
}

#[event]
pub struct FundClosed {
    pub fund: Pubkey,
    pub manager: Pubkey,
}
