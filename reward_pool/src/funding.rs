multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_INVALID_ASSET, ERROR_INVALID_DURATION, ERROR_REWARD_TOKEN_ALREADY_REGISTERED,
    ERROR_UNKNOWN_REWARD_TOKEN, ERROR_ZERO_AMOUNT,
};
use common_structs::{RewardState, Role};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait FundingModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
    + common_access::AccessModule
{
    /// Registers a new reward token. Registration is permanent.
    ///
    /// **Security Considerations**: Restricted to the `Admin` role. Re-registering a token is rejected so
    /// its accumulator can never be reset.
    #[endpoint(registerRewardToken)]
    fn register_reward_token(&self, token: EgldOrEsdtTokenIdentifier) {
        self.require_role(Role::Admin);
        require!(token.is_valid(), ERROR_INVALID_ASSET);
        require!(
            self.reward_tokens().insert(token.clone()),
            ERROR_REWARD_TOKEN_ALREADY_REGISTERED
        );

        let timestamp = self.blockchain().get_block_timestamp();
        self.reward_state(&token)
            .set(RewardState::new(self.wad_zero(), timestamp));

        self.reward_token_registered_event(&token);
    }

    /// Funds a reward token for the next `duration` seconds.
    ///
    /// **Purpose**: Starts a new reward period. Rewards still owed by a running period and the queued
    /// remainder (idle-period emission and rounding dust) are folded into the new rate.
    ///
    /// **Process**:
    /// 1. Validates the payment (registered reward token, non-zero amount) and `duration > 0`.
    /// 2. Accrues every reward token to the current timestamp.
    /// 3. Reschedules the funded token with `schedule_funding`.
    ///
    /// # Arguments
    /// - `duration`: Length of the new reward period in seconds.
    ///
    /// **Security Considerations**: Restricted to the `Funder` role.
    #[payable("*")]
    #[endpoint(fund)]
    fn fund(&self, duration: u64) {
        self.require_role(Role::Funder);
        require!(duration > 0, ERROR_INVALID_DURATION);

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(self.reward_tokens().contains(&token), ERROR_UNKNOWN_REWARD_TOKEN);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        let cache = Cache::new(self);
        self.global_sync(&cache);

        let mapper = self.reward_state(&token);
        let mut state = mapper.get();
        self.schedule_funding(&mut state, &amount, duration, cache.timestamp);
        mapper.set(&state);

        let caller = self.blockchain().get_caller();
        self.fund_event(&caller, &token, &amount, duration, &state);
    }
}
