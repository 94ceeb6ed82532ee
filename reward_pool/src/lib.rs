#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod funding;
pub mod lock;
pub mod staking;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

use common_errors::{ERROR_INVALID_ASSET, ERROR_INVALID_MAX_LOCK_DURATION};

#[multiversx_sc::contract]
pub trait RewardPool:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
    + common_access::AccessModule
    + utils::UtilsModule
    + staking::StakingModule
    + lock::LockModule
    + funding::FundingModule
    + view::ViewModule
{
    /// Initializes a reward pool for a single stake token.
    ///
    /// **Purpose**: Sets up the principal token and the lock horizon used for voting power. Reward tokens
    /// are registered afterwards through `registerRewardToken`.
    ///
    /// **Process**:
    /// 1. Stores the stake token and the maximum lock duration.
    /// 2. Starts the total principal at zero.
    /// 3. Grants the `Admin` role to the deployer.
    ///
    /// ### Parameters
    /// - `stake_token`: The token accepted as principal.
    /// - `max_lock_duration`: Longest lock in seconds; a lock this long gives voting power equal to the locked amount.
    ///
    /// **Security Considerations**: `Funder` is not granted here; every funding source is granted explicitly.
    #[init]
    fn init(&self, stake_token: EgldOrEsdtTokenIdentifier, max_lock_duration: u64) {
        require!(stake_token.is_valid(), ERROR_INVALID_ASSET);
        require!(max_lock_duration > 0, ERROR_INVALID_MAX_LOCK_DURATION);

        self.stake_token().set(&stake_token);
        self.max_lock_duration().set(max_lock_duration);
        self.total_principal().set(BigUint::zero());

        let deployer = self.blockchain().get_caller();
        self.add_role(common_structs::Role::Admin, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
