use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

use aimond::access_control::AccessControlError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    AccessControl(#[from] AccessControlError),

    #[error("Amount must be positive")]
    InvalidAmount {},

    #[error("{beneficiary} already has a vesting schedule")]
    DuplicateSchedule { beneficiary: String },

    #[error("{beneficiary} has no vesting schedule")]
    NoSchedule { beneficiary: String },

    #[error("Custody balance too low: needed {needed}, available {available}")]
    InsufficientCustodyBalance { needed: Uint128, available: Uint128 },

    #[error("Invalid vesting policy: {reason}")]
    InvalidPolicy { reason: String },

    #[error("Global start time {timestamp} pushes the vesting end past the maximum timestamp")]
    InvalidStartTime { timestamp: u64 },

    #[error("Global start time can't change after tokens have been released")]
    GlobalStartTimeLocked {},
}

impl From<OverflowError> for ContractError {
    fn from(err: OverflowError) -> Self {
        StdError::from(err).into()
    }
}
