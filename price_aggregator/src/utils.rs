multiversx_sc::imports!();

use arrayvec::ArrayVec;
use common_constants::{
    FIRST_SUBMISSION_TIMESTAMP_MAX_DIFF_SECONDS, MAX_ROUND_DURATION_SECONDS,
    SUBMISSION_LIST_MAX_LEN, SUBMISSION_LIST_MIN_LEN,
};
use common_errors::*;

use crate::{median, structs::RoundPrice};

#[multiversx_sc::module]
pub trait UtilsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    fn require_is_oracle(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.oracle_stats().contains_key(&caller), ERROR_ONLY_ORACLES);
    }

    fn require_valid_submission_count(&self, submission_count: usize) {
        require!(
            (SUBMISSION_LIST_MIN_LEN..=SUBMISSION_LIST_MAX_LEN).contains(&submission_count)
                && submission_count <= self.oracle_stats().len(),
            ERROR_INVALID_SUBMISSION_COUNT
        );
    }

    /// Oracles sign prices off-chain; a submission may lag the block by a few seconds, never lead it.
    fn require_valid_submission_timestamp(&self, submission_timestamp: u64) {
        let now = self.blockchain().get_block_timestamp();
        require!(submission_timestamp <= now, ERROR_TIMESTAMP_FROM_FUTURE);
        require!(
            now - submission_timestamp <= FIRST_SUBMISSION_TIMESTAMP_MAX_DIFF_SECONDS,
            ERROR_SUBMISSION_TOO_OLD
        );
    }

    /// Records the caller's price for `token`. One submission per oracle and round; the round
    /// closes as soon as `submission_count` distinct oracles submitted.
    fn submit_unchecked(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint) {
        require!(price > 0, ERROR_INVALID_PRICE);
        let decimals_mapper = self.token_decimals(&token);
        require!(!decimals_mapper.is_empty(), ERROR_TOKEN_DECIMALS_NOT_SET);

        let round = self.rounds(&token).len() + 1;
        let now = self.blockchain().get_block_timestamp();
        self.expire_stale_round(&token, round, now);

        let oracle = self.blockchain().get_caller();
        let mut submissions = self.submissions(&token);
        let accepted = !submissions.contains_key(&oracle);
        if accepted {
            if submissions.is_empty() {
                self.round_opened_at(&token).set(now);
            }
            submissions.insert(oracle.clone(), price.clone());
            self.submission_accepted_event(&token, round, &oracle, &price);

            self.try_close_round(&token, round, decimals_mapper.get());
        } else {
            self.submission_discarded_event(&token, round, &oracle);
        }

        self.oracle_stats().entry(oracle).and_modify(|stats| {
            stats.submitted += 1;
            stats.accepted += accepted as u64;
            stats.last_submission = now;
        });
    }

    fn expire_stale_round(&self, token: &EgldOrEsdtTokenIdentifier, round: usize, now: u64) {
        let opened_at_mapper = self.round_opened_at(token);
        if opened_at_mapper.is_empty() {
            return;
        }

        let opened_at = opened_at_mapper.get();
        if now > opened_at + MAX_ROUND_DURATION_SECONDS {
            self.clear_submissions(token);
            self.round_expired_event(token, round, opened_at);
        }
    }

    fn try_close_round(&self, token: &EgldOrEsdtTokenIdentifier, round: usize, decimals: u8) {
        let submissions = self.submissions(token);
        let submissions_len = submissions.len();
        if submissions_len < self.submission_count().get() {
            return;
        }

        require!(
            submissions_len <= SUBMISSION_LIST_MAX_LEN,
            ERROR_SUBMISSION_LIST_CAPACITY_EXCEEDED
        );

        let mut prices = ArrayVec::<BigUint, SUBMISSION_LIST_MAX_LEN>::new();
        for price in submissions.values() {
            prices.push(price);
        }

        let price = median::calculate(prices.as_mut_slice())
            .unwrap_or_else(|| sc_panic!(ERROR_MEDIAN_INVALID_INDEX));
        let round_price = RoundPrice {
            price,
            timestamp: self.blockchain().get_block_timestamp(),
            submissions: submissions_len as u32,
        };

        self.clear_submissions(token);
        self.rounds(token).push(&round_price);
        self.emit_round_closed(token, round, &round_price, decimals);
    }

    fn clear_submissions(&self, token: &EgldOrEsdtTokenIdentifier) {
        self.submissions(token).clear();
        self.round_opened_at(token).clear();
    }
}
