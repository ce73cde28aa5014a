use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use aimond::access_control::RoleRegistry;
use aimond::loyalty_point::Config;
use aimond::merkle::Hash;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROLES: RoleRegistry = RoleRegistry::new("roles");
pub const MERKLE_ROOT: Item<Hash> = Item::new("merkle_root");
//Cumulative amount withdrawn per account, kept across root updates
pub const CLAIMED: Map<Addr, Uint128> = Map::new("claimed");
pub const TOTAL_CLAIMED: Item<Uint128> = Item::new("total_claimed");
