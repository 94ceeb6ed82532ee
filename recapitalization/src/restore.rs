multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_ADDRESS, ERROR_NOTHING_TO_RESTORE, ERROR_NO_REWARDS_TO_RESTORE};
use common_proxies::proxy_reward_pool;
use common_structs::Role;

use super::{conversion, storage};

/// The `RestoreModule` trait pays the diverted principal back and streams the remaining rewards.
///
/// **Scope**: Restoration of staked principal from held rewards and reward distribution to the pool.
///
/// **Goal**: Every unit of reward value held by the ledger ends up either restoring principal or funding
/// the pool, never both. Restoration stops at the outstanding debt.
#[multiversx_sc::module]
pub trait RestoreModule:
    storage::Storage
    + conversion::ConversionModule
    + common_math::SharedMathModule
    + common_events::EventsModule
    + common_access::AccessModule
{
    /// Converts held rewards into the stake token and re-deposits them into the reward pool.
    ///
    /// **Process**:
    /// 1. Values every held reward token in the stake token through the oracle.
    /// 2. Targets `min(total value, recapitalized amount)`.
    /// 3. Consumes reward tokens in registration order; the last one used only proportionally.
    /// 4. Converts through `converter` and deposits at most the outstanding debt.
    ///
    /// # Returns
    /// - `BigUint`: The stake token amount restored to the pool.
    ///
    /// **Security Considerations**: Restricted to the `Recapitalizer` role. Reward value above the debt
    /// is left for `distributeRewards`; conversion proceeds above the debt stay in the ledger.
    #[endpoint(restoreStakedPrincipalByRewards)]
    fn restore_staked_principal_by_rewards(&self, converter: ManagedAddress) -> BigUint {
        self.require_role(Role::Recapitalizer);
        require!(!converter.is_zero(), ERROR_INVALID_ADDRESS);

        let restored = self.restore(&converter);
        require!(restored > 0, ERROR_NO_REWARDS_TO_RESTORE);

        restored
    }

    /// Restores outstanding principal first, then funds the reward pool with every remaining
    /// registered reward balance for one accumulation period. Open to anyone, also before the period ends.
    #[endpoint(distributeRewards)]
    fn distribute_rewards(&self) {
        if self.recapitalized_amount().get() > 0 && self.holds_rewards() {
            let converter = self.default_converter().get();
            self.restore(&converter);
        }

        let reward_pool = self.reward_pool().get();
        let duration = self.accumulation_period().get();
        for token in self.reward_tokens().iter() {
            let amount = self.token_balance(&token);
            if amount == 0 {
                continue;
            }

            self.tx()
                .to(&reward_pool)
                .typed(proxy_reward_pool::RewardPoolProxy)
                .fund(duration)
                .egld_or_single_esdt(&token, 0, &amount)
                .sync_call();

            self.distribute_rewards_event(&token, &amount, duration);
        }

        self.last_distribution()
            .set(self.blockchain().get_block_timestamp());
    }

    fn holds_rewards(&self) -> bool {
        self.reward_tokens()
            .iter()
            .any(|token| self.token_balance(&token) > 0)
    }

    /// Returns the stake token amount deposited back into the pool, zero when the held rewards
    /// are worth nothing in the stake token.
    fn restore(&self, converter: &ManagedAddress) -> BigUint {
        let recapitalized = self.recapitalized_amount().get();
        require!(recapitalized > 0, ERROR_NOTHING_TO_RESTORE);

        let stake_token = self.stake_token().get();

        let mut held = ManagedVec::<Self::Api, EgldOrEsdtTokenPayment>::new();
        let mut values = ManagedVec::<Self::Api, BigUint>::new();
        let mut total_value = BigUint::zero();
        for token in self.reward_tokens().iter() {
            let balance = self.token_balance(&token);
            if balance == 0 {
                continue;
            }

            let value = self.valuate(&token, &balance, &stake_token);
            total_value += &value;
            values.push(value);
            held.push(EgldOrEsdtTokenPayment::new(token, 0, balance));
        }
        if total_value == 0 {
            return BigUint::zero();
        }

        let mut remaining = self.min_biguint(total_value, recapitalized.clone());
        let mut converted = BigUint::zero();
        let mut rewards_used = ManagedVec::new();
        for (payment, value) in held.iter().zip(values.iter()) {
            if remaining == 0 {
                break;
            }
            if *value == 0 {
                continue;
            }

            let amount_in = if *value <= remaining {
                remaining -= &*value;
                payment.amount.clone()
            } else {
                // Rounded up: a debt worth less than one unit still consumes one unit
                let partial = self.mul_div_ceil(&payment.amount, &remaining, &value);
                remaining = BigUint::zero();
                self.min_biguint(partial, payment.amount.clone())
            };

            converted += self.convert(&payment.token_identifier, &amount_in, &stake_token, converter);
            rewards_used.push(EgldOrEsdtTokenPayment::new(
                payment.token_identifier.clone(),
                0,
                amount_in,
            ));
        }
        if converted == 0 {
            return BigUint::zero();
        }

        let restored = self.min_biguint(converted.clone(), recapitalized.clone());
        let surplus = converted - &restored;

        self.tx()
            .to(self.reward_pool().get())
            .typed(proxy_reward_pool::RewardPoolProxy)
            .deposit()
            .egld_or_single_esdt(&stake_token, 0, &restored)
            .sync_call();

        let recapitalized_amount = recapitalized - &restored;
        self.recapitalized_amount().set(&recapitalized_amount);

        self.restore_staked_principal_event(&restored, &recapitalized_amount, &surplus, &rewards_used);

        restored
    }
}
