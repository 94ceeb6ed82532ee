multiversx_sc::imports!();

use super::{conversion, recapitalize, storage};

#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + conversion::ConversionModule
    + recapitalize::RecapitalizeModule
    + common_math::SharedMathModule
    + common_events::EventsModule
    + common_access::AccessModule
{
    #[view(getRewardTokens)]
    fn get_reward_tokens(&self) -> MultiValueEncoded<EgldOrEsdtTokenIdentifier> {
        let mut tokens = MultiValueEncoded::new();
        for token in self.reward_tokens().iter() {
            tokens.push(token);
        }
        tokens
    }

    /// Principal the ledger has staked in the reward pool.
    #[view(getStakedPrincipal)]
    fn get_staked_principal(&self) -> BigUint {
        self.staked_principal()
    }

    /// Oracle value of every held registered reward token, in the stake token.
    #[view(getRewardsValue)]
    fn get_rewards_value(&self) -> BigUint {
        let stake_token = self.stake_token().get();

        let mut total = BigUint::zero();
        for token in self.reward_tokens().iter() {
            let balance = self.token_balance(&token);
            if balance > 0 {
                total += self.valuate(&token, &balance, &stake_token);
            }
        }
        total
    }
}
