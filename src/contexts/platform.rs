use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Platform {
    pub authority: Pubkey,
    // Receives the flat platform fee on deposits and withdrawals
    pub treasury: Pubkey,
    pub is_paused: bool,
    pub fund_count: u64,
    pub bump: u8,
}

impl Platform {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // treasury
        1 + // is_paused
        8 + // fund_count
        1; // bump
}
