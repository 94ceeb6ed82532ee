multiversx_sc::imports!();

use common_constants::MAX_SLIPPAGE_BPS;
use common_errors::{
    ERROR_INVALID_ADDRESS, ERROR_INVALID_ASSET, ERROR_INVALID_DURATION, ERROR_INVALID_SLIPPAGE,
    ERROR_REWARD_TOKEN_ALREADY_REGISTERED, ERROR_REWARD_TOKEN_IS_STAKE_TOKEN, ERROR_ZERO_AMOUNT,
};
use common_structs::Role;

use super::storage;

/// Admin configuration of the ledger. Every endpoint requires the `Admin` role.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + common_events::EventsModule + common_access::AccessModule
{
    /// Appends `token` to the reward tokens. Registration order is the order in which
    /// `recapitalizeByRewards` expects its amounts and in which restoration consumes balances.
    #[endpoint(addRewardToken)]
    fn add_reward_token(&self, token: EgldOrEsdtTokenIdentifier) {
        self.require_role(Role::Admin);
        require!(token.is_valid(), ERROR_INVALID_ASSET);
        require!(
            token != self.stake_token().get(),
            ERROR_REWARD_TOKEN_IS_STAKE_TOKEN
        );
        require!(
            self.reward_tokens().insert(token.clone()),
            ERROR_REWARD_TOKEN_ALREADY_REGISTERED
        );

        self.reward_token_registered_event(&token);
    }

    #[endpoint(setDefaultConverter)]
    fn set_default_converter(&self, converter: ManagedAddress) {
        self.require_role(Role::Admin);
        require!(!converter.is_zero(), ERROR_INVALID_ADDRESS);

        self.default_converter().set(&converter);
    }

    #[endpoint(setMaxSlippage)]
    fn set_max_slippage(&self, max_slippage_bps: u64) {
        self.require_role(Role::Admin);
        self.set_max_slippage_checked(max_slippage_bps);
    }

    #[endpoint(setAccumulationPeriod)]
    fn set_accumulation_period(&self, accumulation_period: u64) {
        self.require_role(Role::Admin);
        self.set_accumulation_period_checked(accumulation_period);
    }

    /// Sweeps any token held by the ledger, e.g. unregistered tokens never touched by distribution.
    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint, to: ManagedAddress) {
        self.require_role(Role::Admin);
        require!(amount > 0, ERROR_ZERO_AMOUNT);
        require!(!to.is_zero(), ERROR_INVALID_ADDRESS);

        self.tx()
            .to(&to)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();

        self.emergency_withdraw_event(&token, &amount, &to);
    }

    fn set_max_slippage_checked(&self, max_slippage_bps: u64) {
        require!(
            max_slippage_bps <= MAX_SLIPPAGE_BPS as u64,
            ERROR_INVALID_SLIPPAGE
        );
        self.max_slippage_bps().set(max_slippage_bps);
    }

    fn set_accumulation_period_checked(&self, accumulation_period: u64) {
        require!(accumulation_period > 0, ERROR_INVALID_DURATION);
        self.accumulation_period().set(accumulation_period);
    }
}
