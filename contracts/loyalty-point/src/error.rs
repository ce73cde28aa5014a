use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

use aimond::access_control::AccessControlError;
use aimond::types::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    AccessControl(#[from] AccessControlError),

    #[error("Merkle proof doesn't match the current root")]
    BadProof {},

    #[error("Nothing to claim")]
    NothingToClaim {},

    #[error("Custody balance too low: needed {needed}, available {available}")]
    InsufficientCustodyBalance { needed: Uint128, available: Uint128 },

    #[error("Merkle root must be 32 hex encoded bytes")]
    InvalidMerkleRoot {},

    #[error("Proof elements must be 32 hex encoded bytes")]
    InvalidProof {},

    #[error("Role {role} isn't used by the claim ledger")]
    UnsupportedRole { role: Role },
}

impl From<OverflowError> for ContractError {
    fn from(err: OverflowError) -> Self {
        StdError::from(err).into()
    }
}
