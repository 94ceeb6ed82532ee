multiversx_sc::imports!();

use common_constants::DEFAULT_MAX_PRICE_AGE_SECONDS;
use common_errors::{ERROR_INVALID_ASSET, ERROR_INVALID_MAX_PRICE_AGE};

use crate::structs::OracleStats;

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::utils::UtilsModule
    + crate::views::ViewsModule
    + crate::events::EventsModule
{
    /// Deploys the oracle paused; the owner unpauses once decimals and first prices are in place.
    #[init]
    fn init(&self, submission_count: usize, oracles: MultiValueEncoded<ManagedAddress>) {
        self.add_oracles(oracles);

        self.require_valid_submission_count(submission_count);
        self.submission_count().set(submission_count);
        self.max_price_age().set(DEFAULT_MAX_PRICE_AGE_SECONDS);

        self.set_paused(true);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.set_paused(true);
    }

    /// Whitelists `oracles`. Known oracles keep their counters.
    #[only_owner]
    #[endpoint(addOracles)]
    fn add_oracles(&self, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut oracle_mapper = self.oracle_stats();
        for oracle in oracles {
            if oracle_mapper.contains_key(&oracle) {
                continue;
            }
            self.oracle_added_event(&oracle);
            let _ = oracle_mapper.insert(oracle, OracleStats::default());
        }
    }

    /// Takes the new submission count along, so it never exceeds the remaining oracles.
    /// Submissions already made by a removed oracle stay in their round.
    #[only_owner]
    #[endpoint(removeOracles)]
    fn remove_oracles(&self, submission_count: usize, oracles: MultiValueEncoded<ManagedAddress>) {
        let mut oracle_mapper = self.oracle_stats();
        for oracle in oracles {
            if oracle_mapper.remove(&oracle).is_some() {
                self.oracle_removed_event(&oracle);
            }
        }

        self.set_submission_count(submission_count);
    }

    #[only_owner]
    #[endpoint(setSubmissionCount)]
    fn set_submission_count(&self, submission_count: usize) {
        self.require_valid_submission_count(submission_count);
        self.submission_count().set(submission_count);
    }

    /// Registers the decimals of `token`. Submissions for a token are only accepted once they are set.
    /// A change discards the round in progress.
    #[only_owner]
    #[endpoint(setTokenDecimals)]
    fn set_token_decimals(&self, token: EgldOrEsdtTokenIdentifier, decimals: u8) {
        require!(token.is_valid(), ERROR_INVALID_ASSET);

        self.clear_submissions(&token);
        self.token_decimals(&token).set(decimals);
        self.token_decimals_event(&token, decimals);
    }

    #[only_owner]
    #[endpoint(setMaxPriceAge)]
    fn set_max_price_age(&self, max_price_age: u64) {
        require!(max_price_age > 0, ERROR_INVALID_MAX_PRICE_AGE);
        self.max_price_age().set(max_price_age);
    }
}
