use cosmwasm_std::{Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use aimond::math::releasable_amount;
use aimond::types::{HasRoleResponse, Role, RoleMembersResponse};
use aimond::vesting::{
    BeneficiariesResponse, BeneficiaryCountResponse, GlobalStartTimeResponse, ReleasableResponse,
    VestingScheduleResponse,
};

use crate::state::{GLOBAL_START_TIME, ROLES, SCHEDULES, TOTALS};

// Pagination defaults
const PAGINATION_DEFAULT_LIMIT: u32 = 10;
const PAGINATION_MAX_LIMIT: u32 = 30;

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let valid_addr = deps.api.addr_validate(&account)?;

    Ok(HasRoleResponse {
        role,
        has_role: ROLES.has(deps.storage, role, &valid_addr),
        account,
    })
}

pub fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let start_after = match start_after {
        Some(start) => Some(deps.api.addr_validate(&start)?),
        None => None,
    };

    Ok(RoleMembersResponse {
        role,
        members: ROLES.members(deps.storage, role, start_after.as_ref(), limit)?,
    })
}

pub fn query_global_start_time(deps: Deps) -> StdResult<GlobalStartTimeResponse> {
    Ok(GlobalStartTimeResponse {
        global_start_time: GLOBAL_START_TIME.may_load(deps.storage)?,
        locked: !TOTALS.load(deps.storage)?.total_released.is_zero(),
    })
}

/// Returns the schedule of a beneficiary
pub fn query_schedule(deps: Deps, beneficiary: String) -> StdResult<VestingScheduleResponse> {
    let valid_addr = deps.api.addr_validate(&beneficiary)?;

    match SCHEDULES.may_load(deps.storage, valid_addr)? {
        Some(schedule) => Ok(VestingScheduleResponse {
            beneficiary,
            schedule,
        }),
        None => Err(StdError::GenericErr {
            msg: format!("{} has no vesting schedule", beneficiary),
        }),
    }
}

///Returns the amount a release would transfer to `beneficiary` at the current block time
pub fn query_releasable(deps: Deps, env: Env, beneficiary: String) -> StdResult<ReleasableResponse> {
    let schedule = query_schedule(deps, beneficiary)?;
    let global_start_time = GLOBAL_START_TIME.may_load(deps.storage)?;

    Ok(ReleasableResponse {
        releasable: releasable_amount(
            &schedule.schedule,
            global_start_time,
            env.block.time.seconds(),
        )?,
        beneficiary: schedule.beneficiary,
    })
}

/// Returns schedules in beneficiary address order
pub fn query_beneficiaries(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BeneficiariesResponse> {
    let limit = limit
        .unwrap_or(PAGINATION_DEFAULT_LIMIT)
        .min(PAGINATION_MAX_LIMIT) as usize;

    let start = if let Some(start) = start_after {
        let start_after_addr = deps.api.addr_validate(&start)?;
        Some(Bound::exclusive(start_after_addr))
    } else {
        None
    };

    let beneficiaries = SCHEDULES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (beneficiary, schedule) = item?;
            Ok(VestingScheduleResponse {
                beneficiary: beneficiary.to_string(),
                schedule,
            })
        })
        .collect::<StdResult<Vec<VestingScheduleResponse>>>()?;

    Ok(BeneficiariesResponse { beneficiaries })
}

pub fn query_beneficiary_count(deps: Deps) -> StdResult<BeneficiaryCountResponse> {
    Ok(BeneficiaryCountResponse {
        count: TOTALS.load(deps.storage)?.beneficiary_count,
    })
}
