multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_ACCOUNT_NOT_FOUND, ERROR_INVALID_UNLOCK_TIMESTAMP, ERROR_LOCK_CANNOT_BE_SHORTENED,
    ERROR_LOCK_EXCEEDS_PRINCIPAL, ERROR_NOTHING_LOCKED,
};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LockModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
{
    /// Locks free principal until `unlock_timestamp` in exchange for voting power.
    ///
    /// **Purpose**: Locked principal keeps earning rewards like any other principal and, in addition,
    /// gives voting power `locked * (unlock_timestamp - now) / max_lock_duration`, decaying linearly.
    ///
    /// **Process**:
    /// 1. Clears an expired lock.
    /// 2. Validates the unlock timestamp: in the future, at most `max_lock_duration` away and not
    ///    earlier than the current one.
    /// 3. Adds `amount` of free principal to the locked amount (`amount` may be zero to only extend).
    /// 4. Records a lock checkpoint for historical voting power.
    ///
    /// # Arguments
    /// - `amount`: Additional principal to lock.
    /// - `unlock_timestamp`: New unlock timestamp for the whole locked amount.
    ///
    /// **Security Considerations**: A lock can only grow and be extended, never shortened.
    #[endpoint(lock)]
    fn lock(&self, amount: BigUint, unlock_timestamp: u64) {
        let cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let now = cache.timestamp;

        require!(!self.stake_account(&caller).is_empty(), ERROR_ACCOUNT_NOT_FOUND);
        let mut account = self.stake_account(&caller).get();

        self.global_sync(&cache);
        self.position_sync(&caller, &account, &cache);

        if !account.is_locked(now) {
            account.locked = BigUint::zero();
            account.unlock_timestamp = 0;
        }

        let max_unlock = now + self.max_lock_duration().get();
        require!(
            unlock_timestamp > now && unlock_timestamp <= max_unlock,
            ERROR_INVALID_UNLOCK_TIMESTAMP
        );
        require!(
            unlock_timestamp >= account.unlock_timestamp,
            ERROR_LOCK_CANNOT_BE_SHORTENED
        );
        require!(
            amount <= account.free_principal(now),
            ERROR_LOCK_EXCEEDS_PRINCIPAL
        );

        account.locked += &amount;
        require!(account.locked > 0, ERROR_NOTHING_LOCKED);
        account.unlock_timestamp = unlock_timestamp;

        self.stake_account(&caller).set(&account);
        self.record_lock_checkpoint(&caller, &account, now);

        self.lock_event(&caller, &account.locked, unlock_timestamp);
    }
}
