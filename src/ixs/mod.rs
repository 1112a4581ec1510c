pub mod initialize;
pub mod set_params;
pub mod create_fund;
pub mod deposit;
pub mod withdraw;
pub mod rebalance;
pub mod update_allocation;
pub mod update_fund_settings;
pub mod collect_fees;
pub mod sync_nav;
pub mod close_fund;
pub mod close_stake;

// Explicitly export the instruction functions
pub use initialize::*;
pub use set_params::*;
pub use create_fund::*;
pub use deposit::*;
pub use withdraw::*;
pub use rebalance::*;
pub use update_allocation::*;
pub use update_fund_settings::*;
pub use collect_fees::*;
pub use sync_nav::*;
pub use close_fund::*;
pub use close_stake::*;
