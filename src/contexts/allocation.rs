use anchor_lang::prelude::*;
use crate::{constants::{BASIS_POINTS_DIVISOR, MAX_ALLOCATIONS}, errors::FundrError};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationInput {
    pub mint: Pubkey,
    pub percentage: u16, // basis points
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenAllocation {
    pub mint: Pubkey,
    pub target_bps: u16,
    // Last observed balance of the fund's token account for this mint
    pub current_amount: u64,
}

impl TokenAllocation {
    pub const LEN: usize = 32 + 2 + 8;
}

/// Checks count, total weight and mint uniqueness of a target allocation set.
pub fn validate_allocations<'a, I>(allocations: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a Pubkey, u16)>,
{
    let mut seen: Vec<&Pubkey> = Vec::with_capacity(MAX_ALLOCATIONS);
    let mut total: u64 = 0;

    for (mint, percentage) in allocations {
        require!(seen.len() < MAX_ALLOCATIONS, FundrError::TooManyAllocations);
        require!(!seen.contains(&mint), FundrError::DuplicateAllocation);
        seen.push(mint);
        total += percentage as u64;
    }

    require!(total <= BASIS_POINTS_DIVISOR, FundrError::InvalidAllocation);
    Ok(())
}

/// Builds the new allocation table, carrying observed balances over for
/// mints that were already held.
pub fn merge_allocations(
    current: &[TokenAllocation],
    targets: &[AllocationInput],
) -> Result<Vec<TokenAllocation>> {
    validate_allocations(targets.iter().map(|a| (&a.mint, a.percentage)))?;

    Ok(targets
        .iter()
        .map(|target| TokenAllocation {
            mint: target.mint,
            target_bps: target.percentage,
            current_amount: current
                .iter()
                .find(|held| held.mint == target.mint)
                .map(|held| held.current_amount)
                .unwrap_or(0),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(mint: Pubkey, percentage: u16) -> AllocationInput {
        AllocationInput { mint, percentage }
    }

    #[test]
    fn test_allocations_up_to_one_hundred_percent() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let full = [input(a, 6_000), input(b, 4_000)];
        assert!(merge_allocations(&[], &full).is_ok());

        let partial = [input(a, 2_500)];
        assert!(merge_allocations(&[], &partial).is_ok());

        let over = [input(a, 6_000), input(b, 4_001)];
        assert!(merge_allocations(&[], &over).is_err());
    }

    #[test]
    fn test_allocation_count_limit() {
        let eleven: Vec<AllocationInput> =
            (0..MAX_ALLOCATIONS + 1).map(|_| input(Pubkey::new_unique(), 100)).collect();
        assert!(merge_allocations(&[], &eleven).is_err());
        assert!(merge_allocations(&[], &eleven[..MAX_ALLOCATIONS]).is_ok());
    }

    #[test]
    fn test_duplicate_mint_rejected() {
        let a = Pubkey::new_unique();
        assert!(merge_allocations(&[], &[input(a, 1_000), input(a, 1_000)]).is_err());
    }

    #[test]
    fn test_merge_keeps_observed_amounts() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();
        let current = [
            TokenAllocation { mint: a, target_bps: 5_000, current_amount: 42 },
            TokenAllocation { mint: b, target_bps: 5_000, current_amount: 7 },
        ];

        let merged = merge_allocations(&current, &[input(b, 3_000), input(c, 7_000)]).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], TokenAllocation { mint: b, target_bps: 3_000, current_amount: 7 });
        assert_eq!(merged[1], TokenAllocation { mint: c, target_bps: 7_000, current_amount: 0 });
    }
}
