#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use aimond::helpers::{query_custody_balance, transfer_msg, validate_asset_info};
use aimond::math::{checked_add_seconds, releasable_amount};
use aimond::types::{Role, VestingSchedule};
use aimond::vesting::{Config, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, Totals};

use crate::error::ContractError;
use crate::query::{
    query_beneficiaries, query_beneficiary_count, query_global_start_time, query_has_role,
    query_releasable, query_role_members, query_schedule,
};
use crate::state::{CONFIG, GLOBAL_START_TIME, ROLES, SCHEDULES, TOTALS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:aimond-vesting";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let policy = msg.kind.policy();
    policy
        .validate()
        .map_err(|reason| ContractError::InvalidPolicy { reason })?;

    let config = Config {
        token: validate_asset_info(deps.api, msg.token)?,
        kind: msg.kind,
        policy,
    };

    //Set Optionals
    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };
    let manager = deps.api.addr_validate(&msg.initial_distributor_manager)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    TOTALS.save(deps.storage, &Totals::default())?;

    //Seed roles
    let mut events: Vec<Event> = vec![];
    let grants = vec![
        (Role::Admin, &admin),
        (Role::DistributorManager, &admin),
        (Role::Distributor, &admin),
        (Role::DistributorManager, &manager),
        (Role::Distributor, &manager),
    ];
    for (role, account) in grants {
        if let Some(event) = ROLES.seed(deps.storage, role, account, &info.sender)? {
            events.push(event);
        }
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("config", format!("{:?}", config))
        .add_attribute("admin", admin)
        .add_attribute("contract_address", env.contract.address)
        .add_events(events))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateVesting {
            beneficiary,
            total_amount,
        } => create_vesting(deps, info, beneficiary, total_amount),
        ExecuteMsg::SetGlobalStartTime { timestamp } => set_global_start_time(deps, info, timestamp),
        ExecuteMsg::ReleaseTo { beneficiary } => {
            ROLES.assert_role(deps.storage, Role::Distributor, &info.sender)?;
            let beneficiary = deps.api.addr_validate(&beneficiary)?;

            release(deps, env, vec![beneficiary], "release_to")
        }
        ExecuteMsg::Claim {} => release(deps, env, vec![info.sender], "claim"),
        ExecuteMsg::ReleaseToBatch { beneficiaries } => {
            ROLES.assert_role(deps.storage, Role::Distributor, &info.sender)?;
            let beneficiaries = beneficiaries
                .into_iter()
                .map(|beneficiary| deps.api.addr_validate(&beneficiary))
                .collect::<StdResult<Vec<Addr>>>()?;

            release(deps, env, beneficiaries, "release_to_batch")
        }
        ExecuteMsg::AddDistributorManager { account } => grant_role(
            deps,
            info,
            Role::DistributorManager,
            account,
            "add_distributor_manager",
        ),
        ExecuteMsg::RemoveDistributorManager { account } => revoke_role(
            deps,
            info,
            Role::DistributorManager,
            account,
            "remove_distributor_manager",
        ),
        ExecuteMsg::AddDistributor { account } => {
            grant_role(deps, info, Role::Distributor, account, "add_distributor")
        }
        ExecuteMsg::RemoveDistributor { account } => {
            revoke_role(deps, info, Role::Distributor, account, "remove_distributor")
        }
        ExecuteMsg::GrantRole { role, account } => grant_role(deps, info, role, account, "grant_role"),
        ExecuteMsg::RevokeRole { role, account } => revoke_role(deps, info, role, account, "revoke_role"),
        ExecuteMsg::RenounceRole { role } => renounce_role(deps, info, role),
    }
}

/// Installs a schedule for `beneficiary` under the contract's policy
fn create_vesting(
    deps: DepsMut,
    info: MessageInfo,
    beneficiary: String,
    total_amount: Uint128,
) -> Result<Response, ContractError> {
    //Assert Authority
    if !ROLES.has(deps.storage, Role::DistributorManager, &info.sender) {
        ROLES.assert_role(deps.storage, Role::Distributor, &info.sender)?;
    }

    if total_amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    let beneficiary = deps.api.addr_validate(&beneficiary)?;
    if SCHEDULES.has(deps.storage, beneficiary.clone()) {
        return Err(ContractError::DuplicateSchedule {
            beneficiary: beneficiary.to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let mut totals = TOTALS.load(deps.storage)?;
    totals.total_allocated = totals.total_allocated.checked_add(total_amount)?;
    totals.beneficiary_count += 1;

    SCHEDULES.save(
        deps.storage,
        beneficiary.clone(),
        &config.policy.schedule(total_amount),
    )?;
    TOTALS.save(deps.storage, &totals)?;

    Ok(Response::new()
        .add_attribute("method", "create_vesting")
        .add_event(
            Event::new("vesting_created")
                .add_attribute("beneficiary", &beneficiary)
                .add_attribute("amount", total_amount),
        ))
}

/// Starts (or moves) the shared vesting clock
fn set_global_start_time(
    deps: DepsMut,
    info: MessageInfo,
    timestamp: u64,
) -> Result<Response, ContractError> {
    ROLES.assert_role(deps.storage, Role::Admin, &info.sender)?;

    //Released amounts were computed from the current start
    if !TOTALS.load(deps.storage)?.total_released.is_zero() {
        return Err(ContractError::GlobalStartTimeLocked {});
    }

    let config = CONFIG.load(deps.storage)?;
    checked_add_seconds(timestamp, config.policy.total_vesting_duration)
        .map_err(|_| ContractError::InvalidStartTime { timestamp })?;

    GLOBAL_START_TIME.save(deps.storage, &timestamp)?;

    Ok(Response::new()
        .add_attribute("method", "set_global_start_time")
        .add_event(
            Event::new("global_start_time_set").add_attribute("timestamp", timestamp.to_string()),
        ))
}

/// Releases the vested delta of every beneficiary in one go.
/// Every release is computed before anything is written, any error aborts the whole batch.
fn release(
    deps: DepsMut,
    env: Env,
    beneficiaries: Vec<Addr>,
    method: &str,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let global_start_time = GLOBAL_START_TIME.may_load(deps.storage)?;
    let now = env.block.time.seconds();

    let mut releases: Vec<(Addr, VestingSchedule, Uint128)> = vec![];
    let mut total_release = Uint128::zero();

    for beneficiary in beneficiaries {
        //Repeats were paid in full by their first occurrence
        if releases.iter().any(|(released_to, _, _)| released_to == &beneficiary) {
            continue;
        }

        let mut schedule = match SCHEDULES.may_load(deps.storage, beneficiary.clone())? {
            Some(schedule) => schedule,
            None => {
                return Err(ContractError::NoSchedule {
                    beneficiary: beneficiary.to_string(),
                })
            }
        };

        let releasable = releasable_amount(&schedule, global_start_time, now)?;
        if releasable.is_zero() {
            continue;
        }

        schedule.released_amount = schedule.released_amount.checked_add(releasable)?;
        total_release = total_release.checked_add(releasable)?;
        releases.push((beneficiary, schedule, releasable));
    }

    let mut res = Response::new().add_attribute("method", method);
    if releases.is_empty() {
        return Ok(res);
    }

    //Assert custody covers the full batch
    let available = query_custody_balance(deps.querier, &config.token, &env.contract.address)?;
    if available < total_release {
        return Err(ContractError::InsufficientCustodyBalance {
            needed: total_release,
            available,
        });
    }

    let mut totals = TOTALS.load(deps.storage)?;
    totals.total_released = totals.total_released.checked_add(total_release)?;

    //Save state before the transfers are dispatched
    for (beneficiary, schedule, amount) in releases {
        SCHEDULES.save(deps.storage, beneficiary.clone(), &schedule)?;

        res = res
            .add_message(transfer_msg(&config.token, &beneficiary, amount)?)
            .add_event(
                Event::new("released")
                    .add_attribute("beneficiary", &beneficiary)
                    .add_attribute("amount", amount),
            );
    }
    TOTALS.save(deps.storage, &totals)?;

    Ok(res.add_attribute("total_released", total_release))
}

fn grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
    method: &str,
) -> Result<Response, ContractError> {
    let account = deps.api.addr_validate(&account)?;
    let mut res = Response::new().add_attribute("method", method);

    if let Some(event) = ROLES.grant(deps.storage, role, &account, &info.sender)? {
        res = res.add_event(event);
        if role == Role::Distributor {
            res = res.add_event(Event::new("distributor_added").add_attribute("account", &account));
        }
    }

    Ok(res)
}

fn revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
    method: &str,
) -> Result<Response, ContractError> {
    let account = deps.api.addr_validate(&account)?;
    let mut res = Response::new().add_attribute("method", method);

    if let Some(event) = ROLES.revoke(deps.storage, role, &account, &info.sender)? {
        res = res.add_event(event);
        if role == Role::Distributor {
            res = res.add_event(Event::new("distributor_removed").add_attribute("account", &account));
        }
    }

    Ok(res)
}

fn renounce_role(deps: DepsMut, info: MessageInfo, role: Role) -> Result<Response, ContractError> {
    let mut res = Response::new().add_attribute("method", "renounce_role");

    if let Some(event) = ROLES.renounce(deps.storage, role, &info.sender) {
        res = res.add_event(event);
        if role == Role::Distributor {
            res = res.add_event(
                Event::new("distributor_removed").add_attribute("account", &info.sender),
            );
        }
    }

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::HasRole { role, account } => to_binary(&query_has_role(deps, role, account)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_binary(&query_role_members(deps, role, start_after, limit)?),
        QueryMsg::GlobalStartTime {} => to_binary(&query_global_start_time(deps)?),
        QueryMsg::VestingSchedule { beneficiary } => to_binary(&query_schedule(deps, beneficiary)?),
        QueryMsg::ReleasableAmount { beneficiary } => {
            to_binary(&query_releasable(deps, env, beneficiary)?)
        }
        QueryMsg::Beneficiaries { start_after, limit } => {
            to_binary(&query_beneficiaries(deps, start_after, limit)?)
        }
        QueryMsg::BeneficiaryCount {} => to_binary(&query_beneficiary_count(deps)?),
        QueryMsg::Totals {} => to_binary(&TOTALS.load(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "migrate"))
}
