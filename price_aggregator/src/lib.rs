#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod median;
pub mod storage;
pub mod structs;
pub mod utils;
pub mod views;

/// USD price feed for the tokens the recapitalization ledger values.
///
/// Whitelisted oracles submit WAD prices per token; a round closes on the median once
/// `submission_count` distinct oracles submitted, and rounds left open too long are dropped.
#[multiversx_sc::contract]
pub trait PriceAggregator:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + utils::UtilsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    #[endpoint(submit)]
    fn submit(&self, token: EgldOrEsdtTokenIdentifier, submission_timestamp: u64, price: BigUint) {
        self.require_submitter();
        self.submit_signed(token, submission_timestamp, price);
    }

    /// Several tokens in one transaction. Any invalid entry reverts the whole batch.
    #[endpoint(submitBatch)]
    fn submit_batch(
        &self,
        submissions: MultiValueEncoded<MultiValue3<EgldOrEsdtTokenIdentifier, u64, BigUint>>,
    ) {
        self.require_submitter();
        for submission in submissions {
            let (token, submission_timestamp, price) = submission.into_tuple();
            self.submit_signed(token, submission_timestamp, price);
        }
    }

    fn require_submitter(&self) {
        self.require_not_paused();
        self.require_is_oracle();
    }

    fn submit_signed(&self, token: EgldOrEsdtTokenIdentifier, submission_timestamp: u64, price: BigUint) {
        self.require_valid_submission_timestamp(submission_timestamp);
        self.submit_unchecked(token, price);
    }
}
