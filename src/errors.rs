use anchor_lang::prelude::*;

#[error_code]
pub enum FundrError {
    #[msg("The provided authority is not authorized.")]
    NotAuthorized,

    #[msg("Mathematical overflow occurred.")]
    MathOverflow,

    #[msg("Fund name is too long (max 50 bytes).")]
    NameTooLong,

    #[msg("Fund name cannot be empty.")]
    EmptyName,

    #[msg("Fund description is too long (max 200 bytes).")]
    DescriptionTooLong,

    #[msg("Management fee is too high (max 5% per year).")]
    ManagementFeeTooHigh,

    #[msg("Performance fee is too high (max 20%).")]
    PerformanceFeeTooHigh,

    #[msg("Too many token allocations (max 10).")]
    TooManyAllocations,

    #[msg("Allocation percentages exceed 100%.")]
    InvalidAllocation,

    #[msg("A token mint appears more than once in the allocations.")]
    DuplicateAllocation,

    #[msg("Amount must be greater than zero.")]
    InvalidAmount,

    #[msg("Deposit is below the fund minimum.")]
    DepositTooSmall,

    #[msg("Deposit results in zero shares.")]
    ZeroShares,

    #[msg("Fund is not active.")]
    FundInactive,

    #[msg("Platform is paused.")]
    PlatformPaused,

    #[msg("Insufficient shares for withdrawal.")]
    InsufficientShares,

    #[msg("Insufficient fund balance for withdrawal.")]
    InsufficientFundBalance,

    #[msg("Fund still has outstanding shares.")]
    FundNotEmpty,

    #[msg("Stake still holds shares.")]
    StakeNotEmpty,

    #[msg("Slippage tolerance exceeded.")]
    SlippageExceeded,
}
