pub const PLATFORM_SEED: &[u8] = b"platform";
pub const FUND_SEED: &[u8] = b"fund";
pub const VAULT_SEED: &[u8] = b"vault";
pub const STAKE_SEED: &[u8] = b"stake";

pub const BASIS_POINTS_DIVISOR: u64 = 10_000;
pub const PLATFORM_FEE_BPS: u64 = 100; // 1%
pub const MAX_PERFORMANCE_FEE_BPS: u16 = 2_000; // 20%
pub const MAX_MANAGEMENT_FEE_BPS: u16 = 500; // 5% per year

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
// Shares minted per SOL on the first deposit into an empty fund
pub const SHARES_PER_SOL: u64 = 1_000_000;
// NAV per share is stored as lamports-per-share scaled by this factor
pub const PRICE_PRECISION: u64 = 1_000_000_000;
pub const INITIAL_SHARE_PRICE: u64 = LAMPORTS_PER_SOL / SHARES_PER_SOL * PRICE_PRECISION;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_ALLOCATIONS: usize = 10;

pub const DEFAULT_MIN_DEPOSIT: u64 = 1_000_000; // 0.001 SOL
