#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use aimond::helpers::{query_custody_balance, transfer_msg, validate_asset_info};
use aimond::loyalty_point::{Config, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use aimond::merkle::{decode_hash, encode_hash, leaf_hash, verify_proof, Hash};
use aimond::types::Role;

use crate::error::ContractError;
use crate::query::{query_claimed, query_has_role, query_merkle_root, query_total_claimed, query_verify_claim};
use crate::state::{CLAIMED, CONFIG, MERKLE_ROOT, ROLES, TOTAL_CLAIMED};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:aimond-loyalty-point";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let merkle_root = parse_root(&msg.merkle_root)?;
    let config = Config {
        token: validate_asset_info(deps.api, msg.token)?,
    };

    //Set Optionals
    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    MERKLE_ROOT.save(deps.storage, &merkle_root)?;
    TOTAL_CLAIMED.save(deps.storage, &Uint128::zero())?;

    let mut res = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("config", format!("{:?}", config))
        .add_attribute("merkle_root", encode_hash(&merkle_root))
        .add_attribute("contract_address", env.contract.address);
    if let Some(event) = ROLES.seed(deps.storage, Role::Admin, &admin, &info.sender)? {
        res = res.add_event(event);
    }

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateRoot { merkle_root } => update_root(deps, info, merkle_root),
        ExecuteMsg::Claim { amount, proof } => claim(deps, env, info, amount, proof),
        ExecuteMsg::GrantRole { role, account } => {
            assert_ledger_role(role)?;
            let account = deps.api.addr_validate(&account)?;
            let event = ROLES.grant(deps.storage, role, &account, &info.sender)?;

            Ok(Response::new()
                .add_attribute("method", "grant_role")
                .add_events(event))
        }
        ExecuteMsg::RevokeRole { role, account } => {
            assert_ledger_role(role)?;
            let account = deps.api.addr_validate(&account)?;
            let event = ROLES.revoke(deps.storage, role, &account, &info.sender)?;

            Ok(Response::new()
                .add_attribute("method", "revoke_role")
                .add_events(event))
        }
        ExecuteMsg::RenounceRole { role } => {
            assert_ledger_role(role)?;
            let event = ROLES.renounce(deps.storage, role, &info.sender);

            Ok(Response::new()
                .add_attribute("method", "renounce_role")
                .add_events(event))
        }
    }
}

//Only admins exist on the claim ledger
fn assert_ledger_role(role: Role) -> Result<(), ContractError> {
    match role {
        Role::Admin => Ok(()),
        role => Err(ContractError::UnsupportedRole { role }),
    }
}

fn parse_root(merkle_root: &str) -> Result<Hash, ContractError> {
    decode_hash(merkle_root).map_err(|_| ContractError::InvalidMerkleRoot {})
}

fn parse_proof(proof: &[String]) -> Result<Vec<Hash>, ContractError> {
    proof
        .iter()
        .map(|node| decode_hash(node).map_err(|_| ContractError::InvalidProof {}))
        .collect()
}

/// Replaces the root, claimed amounts carry over
fn update_root(deps: DepsMut, info: MessageInfo, merkle_root: String) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Admin, &info.sender)?;

    let merkle_root = parse_root(&merkle_root)?;
    MERKLE_ROOT.save(deps.storage, &merkle_root)?;

    Ok(Response::new()
        .add_attribute("method", "update_root")
        .add_event(Event::new("root_updated").add_attribute("new_root", encode_hash(&merkle_root))))
}

/// Returns the amount `account` can claim with (`amount`, `proof`), erroring if the proof is invalid
pub fn claimable_amount(
    deps: Deps,
    account: &Addr,
    amount: Uint128,
    proof: &[String],
) -> Result<Uint128, ContractError> {
    let proof = parse_proof(proof)?;
    let root = MERKLE_ROOT.load(deps.storage)?;
    let leaf = leaf_hash(&deps.api.addr_canonicalize(account.as_str())?, amount);

    if !verify_proof(&proof, &root, leaf) {
        return Err(ContractError::BadProof {});
    }

    let claimed = CLAIMED
        .may_load(deps.storage, account.clone())?
        .unwrap_or_default();

    //Cumulative allocations below the claimed amount pay nothing
    Ok(amount.saturating_sub(claimed))
}

/// Transfers the sender's unclaimed allocation
fn claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    proof: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let delta = claimable_amount(deps.as_ref(), &info.sender, amount, &proof)?;
    if delta.is_zero() {
        return Err(ContractError::NothingToClaim {});
    }

    //Assert custody
    let available = query_custody_balance(deps.querier, &config.token, &env.contract.address)?;
    if available < delta {
        return Err(ContractError::InsufficientCustodyBalance {
            needed: delta,
            available,
        });
    }

    let total_claimed = TOTAL_CLAIMED.load(deps.storage)?.checked_add(delta)?;

    //Save state before the transfer is dispatched
    CLAIMED.save(deps.storage, info.sender.clone(), &amount)?;
    TOTAL_CLAIMED.save(deps.storage, &total_claimed)?;

    Ok(Response::new()
        .add_attribute("method", "claim")
        .add_message(transfer_msg(&config.token, &info.sender, delta)?)
        .add_event(
            Event::new("claimed")
                .add_attribute("account", &info.sender)
                .add_attribute("amount", delta),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::MerkleRoot {} => to_binary(&query_merkle_root(deps)?),
        QueryMsg::Claimed { account } => to_binary(&query_claimed(deps, account)?),
        QueryMsg::HasRole { role, account } => to_binary(&query_has_role(deps, role, account)?),
        QueryMsg::TotalClaimed {} => to_binary(&query_total_claimed(deps)?),
        QueryMsg::VerifyClaim {
            account,
            amount,
            proof,
        } => to_binary(&query_verify_claim(deps, account, amount, proof)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "migrate"))
}
