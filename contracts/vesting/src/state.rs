use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use aimond::access_control::RoleRegistry;
use aimond::types::VestingSchedule;
use aimond::vesting::{Config, Totals};

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROLES: RoleRegistry = RoleRegistry::new("roles");
pub const SCHEDULES: Map<Addr, VestingSchedule> = Map::new("schedules");
//Unset until the admin starts the clock
pub const GLOBAL_START_TIME: Item<u64> = Item::new("global_start_time");
pub const TOTALS: Item<Totals> = Item::new("totals");
