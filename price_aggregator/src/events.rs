multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{RoundClosed, RoundPrice};

#[multiversx_sc::module]
pub trait EventsModule {
    fn emit_round_closed(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        round: usize,
        round_price: &RoundPrice<Self::Api>,
        decimals: u8,
    ) {
        self.round_closed_event(
            token,
            round,
            round_price.timestamp,
            &RoundClosed {
                price: round_price.price.clone(),
                decimals,
                submissions: round_price.submissions,
                block: self.blockchain().get_block_nonce(),
            },
        )
    }

    #[event("round_closed")]
    fn round_closed_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] round: usize,
        #[indexed] timestamp: u64,
        round_closed: &RoundClosed<Self::Api>,
    );

    #[event("round_expired")]
    fn round_expired_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] round: usize,
        #[indexed] opened_at: u64,
    );

    #[event("submission_accepted")]
    fn submission_accepted_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] round: usize,
        #[indexed] oracle: &ManagedAddress,
        price: &BigUint,
    );

    /// The oracle already has a submission in the round in progress.
    #[event("submission_discarded")]
    fn submission_discarded_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] round: usize,
        #[indexed] oracle: &ManagedAddress,
    );

    #[event("oracle_added")]
    fn oracle_added_event(&self, #[indexed] oracle: &ManagedAddress);

    #[event("oracle_removed")]
    fn oracle_removed_event(&self, #[indexed] oracle: &ManagedAddress);

    #[event("token_decimals")]
    fn token_decimals_event(&self, #[indexed] token: &EgldOrEsdtTokenIdentifier, #[indexed] decimals: u8);
}
