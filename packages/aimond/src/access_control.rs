//! Role membership shared by the vesting & loyalty point contracts.
//!
//! Memberships are stored as `(role, account)` keys. Every role is managed by
//! the holders of `Role::admin_role()`, so distributor-managers decide who
//! distributes and admins decide who manages.

use cosmwasm_std::{Addr, Empty, Event, Order, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, Map};
use thiserror::Error;

use crate::types::Role;

// Pagination defaults
const PAGINATION_DEFAULT_LIMIT: u32 = 10;
const PAGINATION_MAX_LIMIT: u32 = 30;

#[derive(Error, Debug, PartialEq)]
pub enum AccessControlError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {account} is missing role {role}")]
    Unauthorized { account: String, role: Role },
}

pub struct RoleRegistry<'a> {
    members: Map<'a, (&'a str, Addr), Empty>,
}

impl<'a> RoleRegistry<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        RoleRegistry {
            members: Map::new(namespace),
        }
    }

    pub fn has(&self, storage: &dyn Storage, role: Role, account: &Addr) -> bool {
        self.members.has(storage, (role.as_str(), account.clone()))
    }

    /// Errors with `Unauthorized` unless `account` holds `role`
    pub fn assert_role(
        &self,
        storage: &dyn Storage,
        role: Role,
        account: &Addr,
    ) -> Result<(), AccessControlError> {
        if self.has(storage, role, account) {
            Ok(())
        } else {
            Err(AccessControlError::Unauthorized {
                account: account.to_string(),
                role,
            })
        }
    }

    /// Errors with `Unauthorized` unless `account` may grant & revoke `role`
    pub fn assert_manager(
        &self,
        storage: &dyn Storage,
        role: Role,
        account: &Addr,
    ) -> Result<(), AccessControlError> {
        self.assert_role(storage, role.admin_role(), account)
    }

    /// Adds membership without an authority check. Used to seed roles at instantiation.
    /// Returns the emitted event, None if `account` already held `role`.
    pub fn seed(
        &self,
        storage: &mut dyn Storage,
        role: Role,
        account: &Addr,
        sender: &Addr,
    ) -> StdResult<Option<Event>> {
        if self.has(storage, role, account) {
            return Ok(None);
        }
        self.members.save(storage, (role.as_str(), account.clone()), &Empty {})?;

        Ok(Some(role_event("role_granted", role, account, sender)))
    }

    /// Grants `role` to `account` if `sender` is a manager of `role`.
    /// Granting an existing membership is a no-op & returns None.
    pub fn grant(
        &self,
        storage: &mut dyn Storage,
        role: Role,
        account: &Addr,
        sender: &Addr,
    ) -> Result<Option<Event>, AccessControlError> {
        self.assert_manager(storage, role, sender)?;

        Ok(self.seed(storage, role, account, sender)?)
    }

    /// Revokes `role` from `account` if `sender` is a manager of `role`.
    /// Revoking a missing membership is a no-op & returns None.
    pub fn revoke(
        &self,
        storage: &mut dyn Storage,
        role: Role,
        account: &Addr,
        sender: &Addr,
    ) -> Result<Option<Event>, AccessControlError> {
        self.assert_manager(storage, role, sender)?;

        Ok(self.remove(storage, role, account, sender))
    }

    /// Drops `sender`'s own membership of `role`
    pub fn renounce(&self, storage: &mut dyn Storage, role: Role, sender: &Addr) -> Option<Event> {
        self.remove(storage, role, sender, sender)
    }

    fn remove(
        &self,
        storage: &mut dyn Storage,
        role: Role,
        account: &Addr,
        sender: &Addr,
    ) -> Option<Event> {
        if !self.has(storage, role, account) {
            return None;
        }
        self.members.remove(storage, (role.as_str(), account.clone()));

        Some(role_event("role_revoked", role, account, sender))
    }

    /// Lists holders of `role` in address order
    pub fn members(
        &self,
        storage: &dyn Storage,
        role: Role,
        start_after: Option<&Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        let limit = limit
            .unwrap_or(PAGINATION_DEFAULT_LIMIT)
            .min(PAGINATION_MAX_LIMIT) as usize;
        let start = start_after.map(|account| Bound::exclusive(account.clone()));

        self.members
            .prefix(role.as_str())
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(account, _)| account))
            .collect()
    }
}

fn role_event(ty: &str, role: Role, account: &Addr, sender: &Addr) -> Event {
    Event::new(ty)
        .add_attribute("role", role.as_str())
        .add_attribute("account", account)
        .add_attribute("sender", sender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const ROLES: RoleRegistry = RoleRegistry::new("roles");

    #[test]
    fn grant_requires_manager_role() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");
        let manager = Addr::unchecked("manager");
        let distributor = Addr::unchecked("distributor");

        ROLES.seed(&mut storage, Role::Admin, &admin, &admin).unwrap();

        //Admin can't grant distributor directly, it needs the manager role
        let err = ROLES
            .grant(&mut storage, Role::Distributor, &distributor, &admin)
            .unwrap_err();
        assert_eq!(
            err,
            AccessControlError::Unauthorized {
                account: String::from("admin"),
                role: Role::DistributorManager,
            }
        );
        assert!(!ROLES.has(&storage, Role::Distributor, &distributor));

        let event = ROLES
            .grant(&mut storage, Role::DistributorManager, &manager, &admin)
            .unwrap()
            .unwrap();
        assert_eq!(event.ty, "role_granted");
        assert_eq!(event.attributes[0].value, "distributor_manager");
        assert_eq!(event.attributes[1].value, "manager");
        assert_eq!(event.attributes[2].value, "admin");

        ROLES
            .grant(&mut storage, Role::Distributor, &distributor, &manager)
            .unwrap();
        assert!(ROLES.has(&storage, Role::Distributor, &distributor));

        //Re-grant is silent
        assert_eq!(
            ROLES
                .grant(&mut storage, Role::Distributor, &distributor, &manager)
                .unwrap(),
            None
        );
    }

    #[test]
    fn revoke_and_renounce() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");
        let manager = Addr::unchecked("manager");

        ROLES.seed(&mut storage, Role::Admin, &admin, &admin).unwrap();
        ROLES
            .grant(&mut storage, Role::DistributorManager, &manager, &admin)
            .unwrap();

        //Manager can't revoke itself through the admin path
        ROLES
            .revoke(&mut storage, Role::DistributorManager, &manager, &manager)
            .unwrap_err();

        let event = ROLES
            .revoke(&mut storage, Role::DistributorManager, &manager, &admin)
            .unwrap()
            .unwrap();
        assert_eq!(event.ty, "role_revoked");
        assert!(!ROLES.has(&storage, Role::DistributorManager, &manager));
        assert_eq!(
            ROLES
                .revoke(&mut storage, Role::DistributorManager, &manager, &admin)
                .unwrap(),
            None
        );

        let event = ROLES.renounce(&mut storage, Role::Admin, &admin).unwrap();
        assert_eq!(event.attributes[2].value, "admin");
        assert!(!ROLES.has(&storage, Role::Admin, &admin));
    }

    #[test]
    fn members_are_paginated() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");

        for name in ["d1", "d2", "d3"] {
            ROLES
                .seed(&mut storage, Role::Distributor, &Addr::unchecked(name), &admin)
                .unwrap();
        }
        ROLES.seed(&mut storage, Role::Admin, &admin, &admin).unwrap();

        let all = ROLES.members(&storage, Role::Distributor, None, None).unwrap();
        assert_eq!(
            all,
            vec![Addr::unchecked("d1"), Addr::unchecked("d2"), Addr::unchecked("d3")]
        );

        let page = ROLES
            .members(&storage, Role::Distributor, Some(&Addr::unchecked("d1")), Some(1))
            .unwrap();
        assert_eq!(page, vec![Addr::unchecked("d2")]);
    }
}
