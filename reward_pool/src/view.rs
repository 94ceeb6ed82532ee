multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_UNKNOWN_REWARD_TOKEN;
use common_structs::{RewardState, StakeAccount};

use crate::{storage, utils};

/// The ViewModule provides read-only endpoints over stake positions, rewards and voting power.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rewards::RewardAccrual
{
    /// Rewards of `token` an account could claim right now, including accrual not yet written to storage.
    ///
    /// # Arguments
    /// - `account`: The staker.
    /// - `token`: A registered reward token.
    ///
    /// # Returns
    /// - `BigUint`: Unclaimed plus pending rewards, rounded down.
    #[view(getClaimable)]
    fn get_claimable(&self, account: ManagedAddress, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        require!(self.reward_tokens().contains(&token), ERROR_UNKNOWN_REWARD_TOKEN);

        let mut state = self.reward_state(&token).get();
        self.accrue_reward_state(
            &mut state,
            &self.total_principal().get(),
            self.blockchain().get_block_timestamp(),
        );

        let position = self.get_stake_account(&account);
        let checkpoint = self.get_reward_checkpoint(&account, &token);
        let pending = self.pending_reward(&position.principal, &checkpoint, &state.reward_per_share);

        checkpoint.unclaimed + pending
    }

    #[view(getRewardTokens)]
    fn get_reward_tokens(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut tokens = MultiValueEncoded::new();
        for token in self.reward_tokens().iter() {
            tokens.push(token);
        }
        tokens
    }

    /// Stored reward state of `token`, as of its last accrual.
    #[view(getRewardState)]
    fn get_reward_state(&self, token: EgldOrEsdtTokenIdentifier) -> RewardState<Self::Api> {
        require!(self.reward_tokens().contains(&token), ERROR_UNKNOWN_REWARD_TOKEN);
        self.reward_state(&token).get()
    }

    #[view(getStakeAccount)]
    fn get_stake_account_view(&self, account: ManagedAddress) -> StakeAccount<Self::Api> {
        self.get_stake_account(&account)
    }

    #[view(getStakedPrincipal)]
    fn get_staked_principal(&self, account: ManagedAddress) -> BigUint {
        self.get_stake_account(&account).principal
    }

    /// Current voting power of an account, decaying linearly until its unlock timestamp.
    #[view(getVotingPower)]
    fn get_voting_power(&self, account: ManagedAddress) -> BigUint {
        let position = self.get_stake_account(&account);
        self.lock_power(
            &position.locked,
            position.unlock_timestamp,
            self.blockchain().get_block_timestamp(),
            self.max_lock_duration().get(),
        )
    }

    /// Voting power an account held at `timestamp`, from its lock history.
    ///
    /// # Returns
    /// - `BigUint`: Zero when the account had no lock recorded at or before `timestamp`.
    #[view(getPastVotingPower)]
    fn get_past_voting_power(&self, account: ManagedAddress, timestamp: u64) -> BigUint {
        self.voting_power_at(&account, timestamp)
    }
}
