#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_UNAUTHORIZED;
use common_structs::Role;

/// Role based authorization shared by every privileged endpoint in the workspace.
///
/// The owner manages membership; privileged endpoints call `require_role` before touching state.
#[multiversx_sc::module]
pub trait AccessModule: common_events::EventsModule {
    /// Grants `role` to `account`. Granting an existing membership is a no-op.
    #[only_owner]
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.add_role(role, &account);
    }

    #[only_owner]
    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        if self.role_members(role).swap_remove(&account) {
            self.role_revoked_event(role, &account);
        }
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut members = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            members.push(member);
        }
        members
    }

    fn add_role(&self, role: Role, account: &ManagedAddress) {
        if self.role_members(role).insert(account.clone()) {
            self.role_granted_event(role, account);
        }
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), ERROR_UNAUTHORIZED);
    }

    #[storage_mapper("role_members")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
