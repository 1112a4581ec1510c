mod platform;
mod fund;
mod user_stake;
mod allocation;

pub use platform::*;
pub use fund::*;
pub use user_stake::*;
pub use allocation::*;
