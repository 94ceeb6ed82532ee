multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage};

use common_errors::{ERROR_INVALID_ASSET, ERROR_ZERO_AMOUNT};
use common_structs::{LockCheckpoint, RewardCheckpoint, StakeAccount};

/// The `UtilsModule` trait groups the accrual and settlement helpers behind every reward pool endpoint.
///
/// **Scope**: Global accrual of all reward tokens, per-account settlement, reward collection,
/// lock history bookkeeping and payment validation.
///
/// **Goal**: Keep the "accrue globally, settle the account, then mutate balances" ordering in one place.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
{
    /// Advances the accumulator of every registered reward token to the cached timestamp.
    ///
    /// **Process**:
    /// 1. Loads each reward state.
    /// 2. Applies `accrue_reward_state` using the principal staked during the elapsed interval.
    /// 3. Persists and logs the state when it changed.
    ///
    /// # Arguments
    /// - `cache`: The pool snapshot; its `total_principal` must not yet include the current operation.
    ///
    /// **Security Tip**: Must run before any principal change, otherwise the new principal would earn
    /// rewards for time it was not staked.
    fn global_sync(&self, cache: &Cache<Self>) {
        for token in cache.reward_tokens.iter() {
            let mapper = self.reward_state(&token);
            let mut state = mapper.get();

            if self.accrue_reward_state(&mut state, &cache.total_principal, cache.timestamp) {
                self.update_reward_state_event(
                    cache.timestamp,
                    &token,
                    &cache.total_principal,
                    &state,
                );
                mapper.set(&state);
            }
        }
    }

    /// Settles an account against every reward token, moving owed rewards into its checkpoints.
    ///
    /// # Arguments
    /// - `account_address`: Owner of the position.
    /// - `account`: The position as it was during the elapsed interval.
    /// - `cache`: The pool snapshot, already synced with `global_sync`.
    fn position_sync(
        &self,
        account_address: &ManagedAddress,
        account: &StakeAccount<Self::Api>,
        cache: &Cache<Self>,
    ) {
        for token in cache.reward_tokens.iter() {
            let state = self.reward_state(&token).get();
            let mut checkpoint = self.get_reward_checkpoint(account_address, &token);

            self.settle_checkpoint(&mut checkpoint, &account.principal, &state);

            self.reward_checkpoint(account_address, &token)
                .set(&checkpoint);
        }
    }

    /// Zeroes every non-zero unclaimed amount of an account and returns the matching payments.
    /// The caller is responsible for the transfer.
    fn take_unclaimed(
        &self,
        account_address: &ManagedAddress,
        cache: &Cache<Self>,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let mut payments = ManagedVec::new();

        for token in cache.reward_tokens.iter() {
            let mapper = self.reward_checkpoint(account_address, &token);
            if mapper.is_empty() {
                continue;
            }

            let mut checkpoint = mapper.get();
            if checkpoint.unclaimed == 0 {
                continue;
            }

            let amount = core::mem::replace(&mut checkpoint.unclaimed, BigUint::zero());
            mapper.set(&checkpoint);

            self.claim_event(account_address, &token, &amount);
            payments.push(EgldOrEsdtTokenPayment::new((*token).clone(), 0, amount));
        }

        payments
    }

    /// Appends the current lock of an account to its history. Two changes in the same block
    /// overwrite the last entry so lookups by timestamp stay unambiguous.
    fn record_lock_checkpoint(
        &self,
        account_address: &ManagedAddress,
        account: &StakeAccount<Self::Api>,
        timestamp: u64,
    ) {
        let checkpoint = LockCheckpoint {
            timestamp,
            locked: account.locked.clone(),
            unlock_timestamp: account.unlock_timestamp,
        };

        let mut history = self.lock_checkpoints(account_address);
        let len = history.len();
        if len > 0 && history.get(len).timestamp == timestamp {
            history.set(len, &checkpoint);
        } else {
            history.push(&checkpoint);
        }
    }

    /// Voting power of an account at `timestamp`, read from its lock history.
    ///
    /// **Process**: Binary search for the last checkpoint recorded at or before `timestamp`, then
    /// applies the linear decay of `lock_power` at that instant.
    fn voting_power_at(&self, account_address: &ManagedAddress, timestamp: u64) -> BigUint {
        let history = self.lock_checkpoints(account_address);

        let mut low = 1usize;
        let mut high = history.len();
        let mut found = 0usize;
        while low <= high {
            let mid = (low + high) / 2;
            if history.get(mid).timestamp <= timestamp {
                found = mid;
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        if found == 0 {
            return BigUint::zero();
        }

        let checkpoint = history.get(found);
        self.lock_power(
            &checkpoint.locked,
            checkpoint.unlock_timestamp,
            timestamp,
            self.max_lock_duration().get(),
        )
    }

    fn get_stake_account(&self, account_address: &ManagedAddress) -> StakeAccount<Self::Api> {
        let mapper = self.stake_account(account_address);
        if mapper.is_empty() {
            StakeAccount::empty()
        } else {
            mapper.get()
        }
    }

    /// Checkpoint of an account for `token`. A missing checkpoint starts from a zero accumulator,
    /// which is exact because the account held no principal before its first settlement.
    fn get_reward_checkpoint(
        &self,
        account_address: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> RewardCheckpoint<Self::Api> {
        let mapper = self.reward_checkpoint(account_address, token);
        if mapper.is_empty() {
            RewardCheckpoint::new(self.wad_zero())
        } else {
            mapper.get()
        }
    }

    /// Retrieves and validates a principal payment.
    ///
    /// **Security Tip**: Rejects any token other than the stake token and zero amounts.
    fn get_stake_payment(&self, cache: &Cache<Self>) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_stake_token(&token), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        amount
    }

    /// Transfers principal and any collected rewards to `to` in a single transfer.
    fn send_payments(
        &self,
        to: &ManagedAddress,
        cache: &Cache<Self>,
        principal: &BigUint,
        mut payments: ManagedVec<EgldOrEsdtTokenPayment>,
    ) {
        if *principal > 0 {
            payments.push(EgldOrEsdtTokenPayment::new(
                cache.stake_token.clone(),
                0,
                principal.clone(),
            ));
        }

        self.tx().to(to).payment(payments).transfer_if_not_empty();
    }
}
