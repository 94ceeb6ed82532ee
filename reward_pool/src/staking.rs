multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_ACCOUNT_NOT_FOUND, ERROR_INSUFFICIENT_PRINCIPAL, ERROR_STILL_LOCKED, ERROR_ZERO_AMOUNT,
};

use super::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait StakingModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
{
    /// Stakes the attached stake token payment for the caller.
    ///
    /// **Purpose**: Adds principal to the caller's position so it starts earning every registered reward token.
    ///
    /// **Process**:
    /// 1. Validates the payment (stake token, non-zero amount).
    /// 2. Accrues every reward token with the principal staked so far.
    /// 3. Settles the caller's position with its previous principal.
    /// 4. Adds the amount to the position and to the total principal.
    /// 5. Emits a deposit event with the resulting principal.
    ///
    /// **Security Considerations**: Settlement happens before the principal changes, so the new
    /// principal never earns rewards for time it was not staked.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let mut cache = Cache::new(self);
        let amount = self.get_stake_payment(&cache);
        let caller = self.blockchain().get_caller();

        self.global_sync(&cache);

        let mut account = self.get_stake_account(&caller);
        self.position_sync(&caller, &account, &cache);

        account.principal += &amount;
        cache.total_principal += &amount;

        self.stake_account(&caller).set(&account);
        self.deposit_event(&caller, &amount, &account.principal, &cache.total_principal);
    }

    /// Withdraws `amount` of principal back to the caller.
    ///
    /// **Purpose**: Lets stakers leave the pool partially or fully while keeping their accrued rewards.
    ///
    /// **Process**:
    /// 1. Validates `0 < amount <= principal` and that the lock leaves enough free principal.
    /// 2. Accrues and settles the caller's position.
    /// 3. Subtracts from the position and the total principal.
    /// 4. Transfers the principal to the caller.
    ///
    /// # Arguments
    /// - `amount`: Principal to withdraw.
    ///
    /// **Security Considerations**: Unclaimed rewards stay in the caller's checkpoints; they are
    /// paid by `claim` or `exit`.
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let mut account = self.get_stake_account(&caller);

        require!(amount <= account.principal, ERROR_INSUFFICIENT_PRINCIPAL);
        require!(
            amount <= account.free_principal(cache.timestamp),
            ERROR_STILL_LOCKED
        );

        self.global_sync(&cache);
        self.position_sync(&caller, &account, &cache);

        account.principal -= &amount;
        cache.total_principal -= &amount;

        self.stake_account(&caller).set(&account);
        self.withdraw_event(&caller, &amount, &account.principal, &cache.total_principal);

        self.send_payments(&caller, &cache, &amount, ManagedVec::new());
    }

    /// Pays out every non-zero unclaimed reward of the caller.
    ///
    /// **Process**:
    /// 1. Accrues and settles the caller's position.
    /// 2. Zeroes each non-zero unclaimed amount and emits a claim event per token.
    /// 3. Transfers all claimed tokens in one multi-transfer.
    ///
    /// # Returns
    /// - `ManagedVec<EgldOrEsdtTokenPayment>`: The claimed payments, empty when nothing accrued.
    ///
    /// **Security Considerations**: Allowed while the principal is locked. A call with nothing to
    /// claim is a silent no-op.
    #[endpoint(claim)]
    fn claim(&self) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let account = self.get_stake_account(&caller);

        self.global_sync(&cache);
        self.position_sync(&caller, &account, &cache);

        let payments = self.take_unclaimed(&caller, &cache);
        self.send_payments(&caller, &cache, &BigUint::zero(), payments.clone());

        payments
    }

    /// Withdraws the whole principal, claims every reward and removes the caller's position.
    ///
    /// **Security Considerations**: Requires any lock to be expired. The lock history is kept so
    /// historical voting power lookups stay valid.
    #[endpoint(exit)]
    fn exit(&self) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();

        require!(!self.stake_account(&caller).is_empty(), ERROR_ACCOUNT_NOT_FOUND);
        let account = self.stake_account(&caller).get();
        require!(!account.is_locked(cache.timestamp), ERROR_STILL_LOCKED);

        self.global_sync(&cache);
        self.position_sync(&caller, &account, &cache);

        cache.total_principal -= &account.principal;

        let payments = self.take_unclaimed(&caller, &cache);
        for token in cache.reward_tokens.iter() {
            self.reward_checkpoint(&caller, &token).clear();
        }
        self.stake_account(&caller).clear();

        self.exit_event(&caller, &account.principal);
        self.send_payments(&caller, &cache, &account.principal, payments);
    }
}
