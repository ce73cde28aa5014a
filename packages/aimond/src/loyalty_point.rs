use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;

use crate::types::{AssetInfo, Role};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    /// Defaults to the instantiator
    pub admin: Option<String>,
    pub token: AssetInfo,
    /// Hex encoded, 32 bytes
    pub merkle_root: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Admin only. Claimed amounts carry over to the new root.
    UpdateRoot { merkle_root: String },
    /// Claims the delta between `amount` (cumulative allocation) & what the sender already claimed
    Claim {
        amount: Uint128,
        proof: Vec<String>,
    },
    GrantRole { role: Role, account: String },
    RevokeRole { role: Role, account: String },
    RenounceRole { role: Role },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    MerkleRoot {},
    Claimed { account: String },
    HasRole { role: Role, account: String },
    TotalClaimed {},
    /// Dry run of a Claim for `account`
    VerifyClaim {
        account: String,
        amount: Uint128,
        proof: Vec<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub token: AssetInfo,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MerkleRootResponse {
    pub merkle_root: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ClaimedResponse {
    pub account: String,
    pub claimed: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct TotalClaimedResponse {
    pub total_claimed: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VerifyClaimResponse {
    /// Proof matches the current root
    pub valid: bool,
    /// Amount a Claim would transfer, zero if invalid
    pub claimable: Uint128,
}
