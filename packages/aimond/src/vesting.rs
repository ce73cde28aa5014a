use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;

use crate::types::{AssetInfo, Role, VestingKind, VestingPolicy, VestingSchedule};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    /// Defaults to the instantiator
    pub admin: Option<String>,
    pub initial_distributor_manager: String,
    /// Token held in custody & released to beneficiaries
    pub token: AssetInfo,
    pub kind: VestingKind,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Installs a schedule under the contract's policy. Distributors & distributor-managers only.
    CreateVesting {
        beneficiary: String,
        total_amount: Uint128,
    },
    /// Admin only, frozen after the first release
    SetGlobalStartTime { timestamp: u64 },
    /// Pushes the releasable amount to `beneficiary`. Distributors only.
    ReleaseTo { beneficiary: String },
    /// Pulls the sender's own releasable amount
    Claim {},
    /// All-or-nothing ReleaseTo over a list
    ReleaseToBatch { beneficiaries: Vec<String> },
    AddDistributorManager { account: String },
    RemoveDistributorManager { account: String },
    AddDistributor { account: String },
    RemoveDistributor { account: String },
    GrantRole { role: Role, account: String },
    RevokeRole { role: Role, account: String },
    /// Drops the sender's own membership
    RenounceRole { role: Role },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    HasRole {
        role: Role,
        account: String,
    },
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    GlobalStartTime {},
    VestingSchedule { beneficiary: String },
    /// Releasable at the current block time
    ReleasableAmount { beneficiary: String },
    Beneficiaries {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    BeneficiaryCount {},
    Totals {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub token: AssetInfo,
    pub kind: VestingKind,
    pub policy: VestingPolicy,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct Totals {
    pub total_allocated: Uint128,
    pub total_released: Uint128,
    pub beneficiary_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct GlobalStartTimeResponse {
    pub global_start_time: Option<u64>,
    /// True once tokens have left custody
    pub locked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VestingScheduleResponse {
    pub beneficiary: String,
    pub schedule: VestingSchedule,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ReleasableResponse {
    pub beneficiary: String,
    pub releasable: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct BeneficiariesResponse {
    pub beneficiaries: Vec<VestingScheduleResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct BeneficiaryCountResponse {
    pub count: u64,
}
