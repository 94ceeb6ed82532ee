multiversx_sc::imports!();

use common_errors::{ERROR_INSUFFICIENT_EMISSION_BALANCE, ERROR_INVALID_ADDRESS, ERROR_ZERO_AMOUNT};
use common_structs::Role;

use super::{storage, utils};

#[multiversx_sc::module]
pub trait AdminModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_access::AccessModule
{
    /// Moves tokens out of the distributor.
    ///
    /// **Security Considerations**: For the emission token only the balance above the pending allocations
    /// can be withdrawn, so finalized allocations always stay pushable.
    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint, to: ManagedAddress) {
        self.require_role(Role::Admin);
        require!(amount > 0, ERROR_ZERO_AMOUNT);
        require!(!to.is_zero(), ERROR_INVALID_ADDRESS);

        if token == self.emission_token().get() {
            require!(
                amount <= self.free_emission_balance(),
                ERROR_INSUFFICIENT_EMISSION_BALANCE
            );
        }

        self.tx()
            .to(&to)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();

        self.emergency_withdraw_event(&token, &amount, &to);
    }
}
