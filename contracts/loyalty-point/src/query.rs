use cosmwasm_std::{Deps, StdError, StdResult, Uint128};

use aimond::loyalty_point::{ClaimedResponse, MerkleRootResponse, TotalClaimedResponse, VerifyClaimResponse};
use aimond::merkle::encode_hash;
use aimond::types::{HasRoleResponse, Role};

use crate::contract::claimable_amount;
use crate::error::ContractError;
use crate::state::{CLAIMED, MERKLE_ROOT, ROLES, TOTAL_CLAIMED};

pub fn query_merkle_root(deps: Deps) -> StdResult<MerkleRootResponse> {
    Ok(MerkleRootResponse {
        merkle_root: encode_hash(&MERKLE_ROOT.load(deps.storage)?),
    })
}

/// Returns the cumulative amount `account` has withdrawn
pub fn query_claimed(deps: Deps, account: String) -> StdResult<ClaimedResponse> {
    let valid_addr = deps.api.addr_validate(&account)?;

    Ok(ClaimedResponse {
        claimed: CLAIMED.may_load(deps.storage, valid_addr)?.unwrap_or_default(),
        account,
    })
}

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let valid_addr = deps.api.addr_validate(&account)?;

    Ok(HasRoleResponse {
        role,
        has_role: ROLES.has(deps.storage, role, &valid_addr),
        account,
    })
}

pub fn query_total_claimed(deps: Deps) -> StdResult<TotalClaimedResponse> {
    Ok(TotalClaimedResponse {
        total_claimed: TOTAL_CLAIMED.load(deps.storage)?,
    })
}

/// Dry run of a claim against the current root
pub fn query_verify_claim(
    deps: Deps,
    account: String,
    amount: Uint128,
    proof: Vec<String>,
) -> StdResult<VerifyClaimResponse> {
    let valid_addr = deps.api.addr_validate(&account)?;

    match claimable_amount(deps, &valid_addr, amount, &proof) {
        Ok(claimable) => Ok(VerifyClaimResponse {
            valid: true,
            claimable,
        }),
        Err(ContractError::BadProof {}) | Err(ContractError::InvalidProof {}) => Ok(VerifyClaimResponse {
            valid: false,
            claimable: Uint128::zero(),
        }),
        Err(ContractError::Std(err)) => Err(err),
        Err(err) => Err(StdError::generic_err(err.to_string())),
    }
}
