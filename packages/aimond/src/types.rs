use core::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};

//Constants
pub const SECONDS_PER_DAY: u64 = 86_400u64;
pub const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;

///////Roles

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Root authority. Manages distributor-managers and itself.
    Admin,
    /// Manages distributors
    DistributorManager,
    /// Pushes releases & creates schedules
    Distributor,
}

impl Role {
    /// Storage key of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::DistributorManager => "distributor_manager",
            Role::Distributor => "distributor",
        }
    }

    /// The role whose holders may grant & revoke this role
    pub fn admin_role(&self) -> Role {
        match self {
            Role::Admin => Role::Admin,
            Role::DistributorManager => Role::Admin,
            Role::Distributor => Role::DistributorManager,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//////////Token custody//////

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetInfo {
    Token { address: Addr },
    NativeToken { denom: String },
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetInfo::NativeToken { denom } => write!(f, "{}", denom),
            AssetInfo::Token { address } => write!(f, "{}", address),
        }
    }
}

///////Vesting

/// Token class a vesting contract is instantiated for.
/// Every class runs the same release algorithm, only the policy differs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VestingKind {
    Employee,
    Founder,
    Investor,
    /// Test deployments with caller-chosen timings
    Mock {
        cliff_duration: u64, //in seconds
        vesting_duration: u64, //release window after the cliff, in seconds
        installment_count: u64,
    },
}

impl VestingKind {
    pub fn policy(&self) -> VestingPolicy {
        match self {
            VestingKind::Employee => VestingPolicy {
                cliff_duration: 365 * SECONDS_PER_DAY,
                total_vesting_duration: 365 * SECONDS_PER_DAY,
                installment_count: 1,
            },
            VestingKind::Founder => VestingPolicy {
                cliff_duration: 365 * SECONDS_PER_DAY,
                total_vesting_duration: 365 * SECONDS_PER_DAY + 30 * SECONDS_PER_MONTH,
                installment_count: 30,
            },
            VestingKind::Investor => VestingPolicy {
                cliff_duration: 180 * SECONDS_PER_DAY,
                total_vesting_duration: 180 * SECONDS_PER_DAY + 10 * SECONDS_PER_MONTH,
                installment_count: 10,
            },
            VestingKind::Mock {
                cliff_duration,
                vesting_duration,
                installment_count,
            } => VestingPolicy {
                cliff_duration: *cliff_duration,
                //u64::MAX marks an overflowing window, rejected by validate
                total_vesting_duration: cliff_duration.saturating_add(*vesting_duration),
                installment_count: *installment_count,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct VestingPolicy {
    pub cliff_duration: u64, //in seconds
    pub total_vesting_duration: u64, //in seconds, from the global start
    pub installment_count: u64,
}

impl VestingPolicy {
    pub fn release_duration(&self) -> u64 {
        self.total_vesting_duration.saturating_sub(self.cliff_duration)
    }

    /// Returns a description of the first violated rule, if any
    pub fn validate(&self) -> Result<(), String> {
        if self.installment_count == 0 {
            return Err(String::from("installment_count must be positive"));
        }
        if self.total_vesting_duration == u64::MAX {
            return Err(String::from("vesting window overflows"));
        }
        if self.total_vesting_duration < self.cliff_duration {
            return Err(String::from("total_vesting_duration is shorter than the cliff"));
        }
        let release_duration = self.release_duration();
        if release_duration != 0 && release_duration / self.installment_count == 0 {
            return Err(String::from("installments must last at least one second"));
        }
        Ok(())
    }

    /// Fresh schedule for `total_amount` under this policy
    pub fn schedule(&self, total_amount: Uint128) -> VestingSchedule {
        VestingSchedule {
            total_amount,
            cliff_duration: self.cliff_duration,
            total_vesting_duration: self.total_vesting_duration,
            release_duration: self.release_duration(),
            installment_count: self.installment_count,
            released_amount: Uint128::zero(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VestingSchedule {
    pub total_amount: Uint128,
    pub cliff_duration: u64,
    pub total_vesting_duration: u64,
    pub release_duration: u64,
    pub installment_count: u64,
    pub released_amount: Uint128,
}

impl VestingSchedule {
    pub fn is_fully_released(&self) -> bool {
        self.released_amount >= self.total_amount
    }
}

///////Shared responses

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct HasRoleResponse {
    pub role: Role,
    pub account: String,
    pub has_role: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}
