multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the pool-wide state, cached from on-chain storage for the duration of one endpoint call.
///
/// **Scope**: Holds the stake token, the registered reward tokens, the total principal and the block timestamp.
///
/// **Goal**: Read the block timestamp once per transaction so every reward token is accrued to the same
/// instant, and write the total principal back exactly once.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// The token accepted as principal.
    pub stake_token: EgldOrEsdtTokenIdentifier<C::Api>,
    /// Every registered reward token, in registration order.
    pub reward_tokens: ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    /// Sum of every account's principal.
    pub total_principal: BigUint<C::Api>,
    /// The timestamp of the current block (seconds since Unix epoch).
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    /// Constructs a new Cache by reading the current pool state from on-chain storage.
    ///
    /// # Arguments
    /// - `sc_ref`: Reference to the contract implementing `Storage`.
    ///
    /// # Returns
    /// - `Cache<Self>`: A new instance containing the cached pool state.
    pub fn new(sc_ref: &'a C) -> Self {
        let mut reward_tokens = ManagedVec::new();
        for token in sc_ref.reward_tokens().iter() {
            reward_tokens.push(token);
        }

        Cache {
            stake_token: sc_ref.stake_token().get(),
            reward_tokens,
            total_principal: sc_ref.total_principal().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }

    pub fn is_stake_token(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.stake_token == *token
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the total principal back to storage. Reward states are written by `global_sync` as they change.
    fn drop(&mut self) {
        self.sc_ref.total_principal().set(&self.total_principal);
    }
}
