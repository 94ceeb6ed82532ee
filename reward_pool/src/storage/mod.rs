multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{LockCheckpoint, RewardCheckpoint, RewardState, StakeAccount};

/// The Storage trait holds the on-chain state of the reward pool.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the token accepted as staked principal.
    #[view(getStakeToken)]
    #[storage_mapper("stake_token")]
    fn stake_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Longest lock allowed, in seconds. A lock of this length yields voting power equal to the locked amount.
    #[view(getMaxLockDuration)]
    #[storage_mapper("max_lock_duration")]
    fn max_lock_duration(&self) -> SingleValueMapper<u64>;

    /// Sum of every account's principal.
    ///
    /// # Returns
    /// - `BigUint`: The total staked principal.
    #[view(getTotalPrincipal)]
    #[storage_mapper("total_principal")]
    fn total_principal(&self) -> SingleValueMapper<BigUint>;

    /// Reward tokens in registration order. Tokens are never removed.
    #[storage_mapper("reward_tokens")]
    fn reward_tokens(&self) -> SetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("reward_state")]
    fn reward_state(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<RewardState<Self::Api>>;

    #[storage_mapper("stake_account")]
    fn stake_account(&self, account: &ManagedAddress) -> SingleValueMapper<StakeAccount<Self::Api>>;

    #[storage_mapper("reward_checkpoint")]
    fn reward_checkpoint(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<RewardCheckpoint<Self::Api>>;

    /// Append-only lock history of an account, ordered by timestamp.
    #[storage_mapper("lock_checkpoints")]
    fn lock_checkpoints(&self, account: &ManagedAddress) -> VecMapper<LockCheckpoint<Self::Api>>;
}
