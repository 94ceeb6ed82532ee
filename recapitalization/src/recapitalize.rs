multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_PRINCIPAL, ERROR_INSUFFICIENT_REWARD_BALANCE, ERROR_INVALID_ADDRESS,
    ERROR_ZERO_AMOUNT,
};
use common_proxies::proxy_reward_pool;
use common_structs::Role;

use super::{conversion, storage};

/// The `RecapitalizeModule` trait moves value from the ledger into a deficient external pool.
///
/// **Scope**: Backfilling from already harvested rewards and from the ledger's own staked principal.
///
/// **Goal**: Only the principal path creates a debt towards stakers, tracked in `recapitalized_amount`.
#[multiversx_sc::module]
pub trait RecapitalizeModule:
    storage::Storage
    + conversion::ConversionModule
    + common_math::SharedMathModule
    + common_events::EventsModule
    + common_access::AccessModule
{
    /// Sells held rewards into the target pool's underlying token and deposits them into a strategy slot.
    ///
    /// **Process**:
    /// 1. Requires one amount per registered reward token, in registration order.
    /// 2. Requires the ledger to hold every requested amount.
    /// 3. Converts each non-zero amount with the default converter.
    /// 4. Deposits the total into `(strategy_slot, token_slot)` of `target_pool`.
    ///
    /// # Returns
    /// - `BigUint`: The amount of underlying deposited.
    ///
    /// **Security Considerations**: Restricted to the `Recapitalizer` role. The debt towards stakers
    /// is not touched since no principal is used.
    #[endpoint(recapitalizeByRewards)]
    fn recapitalize_by_rewards(
        &self,
        target_pool: ManagedAddress,
        strategy_slot: u32,
        token_slot: u32,
        reward_amounts: MultiValueEncoded<BigUint>,
    ) -> BigUint {
        self.require_role(Role::Recapitalizer);
        require!(!target_pool.is_zero(), ERROR_INVALID_ADDRESS);

        let amounts = reward_amounts.to_vec();
        let token_count = self.reward_tokens().len();
        if amounts.len() != token_count {
            sc_panic!("Wrong reward tokens length. Expected {}.", token_count);
        }

        let tokens: ManagedVec<EgldOrEsdtTokenIdentifier> = self.reward_tokens().iter().collect();
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            require!(
                *amount <= self.token_balance(&token),
                ERROR_INSUFFICIENT_REWARD_BALANCE
            );
        }

        let underlying = self.pool_underlying(&target_pool);
        let converter = self.default_converter().get();

        let mut deposited = BigUint::zero();
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            if *amount == 0 {
                continue;
            }
            deposited += self.convert(&token, &amount, &underlying, &converter);
        }
        require!(deposited > 0, ERROR_ZERO_AMOUNT);

        self.deposit_to_strategy(&target_pool, strategy_slot, token_slot, &underlying, &deposited);

        self.recapitalize_by_rewards_event(&target_pool, strategy_slot, token_slot, &deposited, &amounts);

        deposited
    }

    /// Withdraws the ledger's own staked principal and deposits it, converted, into a strategy slot.
    ///
    /// **Process**:
    /// 1. Requires `0 < amount <= staked principal` of the ledger in the reward pool.
    /// 2. Withdraws `amount` from the reward pool, lowering its total principal.
    /// 3. Converts it into the target pool's underlying through `converter`.
    /// 4. Deposits into `(strategy_slot, token_slot)` and records the debt.
    ///
    /// # Returns
    /// - `BigUint`: The amount of underlying deposited.
    ///
    /// **Security Considerations**: Restricted to the `Recapitalizer` role. The diverted principal is
    /// owed back to the pool through `restoreStakedPrincipalByRewards`.
    #[endpoint(recapitalizeByStakedPrincipal)]
    fn recapitalize_by_staked_principal(
        &self,
        amount: BigUint,
        converter: ManagedAddress,
        target_pool: ManagedAddress,
        strategy_slot: u32,
        token_slot: u32,
    ) -> BigUint {
        self.require_role(Role::Recapitalizer);
        require!(amount > 0, ERROR_ZERO_AMOUNT);
        require!(!converter.is_zero(), ERROR_INVALID_ADDRESS);
        require!(!target_pool.is_zero(), ERROR_INVALID_ADDRESS);
        require!(
            amount <= self.staked_principal(),
            ERROR_INSUFFICIENT_PRINCIPAL
        );

        self.tx()
            .to(self.reward_pool().get())
            .typed(proxy_reward_pool::RewardPoolProxy)
            .withdraw(&amount)
            .sync_call();

        let stake_token = self.stake_token().get();
        let underlying = self.pool_underlying(&target_pool);
        let deposited = self.convert(&stake_token, &amount, &underlying, &converter);

        self.deposit_to_strategy(&target_pool, strategy_slot, token_slot, &underlying, &deposited);

        let recapitalized_amount = self.recapitalized_amount().update(|recapitalized| {
            *recapitalized += &amount;
            recapitalized.clone()
        });

        self.recapitalize_by_staked_principal_event(
            &target_pool,
            strategy_slot,
            token_slot,
            &amount,
            &deposited,
            &recapitalized_amount,
        );

        deposited
    }

    /// Principal the ledger currently has staked in the reward pool.
    fn staked_principal(&self) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(self.reward_pool().get())
            .typed(proxy_reward_pool::RewardPoolProxy)
            .get_staked_principal(own_address)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
