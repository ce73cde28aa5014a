use cosmwasm_std::{StdResult, Uint128, Uint64};

use crate::types::VestingSchedule;

/// Adds a duration to a timestamp, erroring instead of wrapping
pub fn checked_add_seconds(timestamp: u64, duration: u64) -> StdResult<u64> {
    Ok(Uint64::new(timestamp).checked_add(Uint64::new(duration))?.u64())
}

/// Returns the number of installments unlocked at `now`.
/// Boundaries are inclusive: reaching the cliff unlocks the first installment.
pub fn installments_unlocked(
    schedule: &VestingSchedule,
    global_start_time: u64,
    now: u64,
) -> StdResult<u64> {
    let cliff_end = checked_add_seconds(global_start_time, schedule.cliff_duration)?;
    if now < cliff_end {
        return Ok(0);
    }

    let vesting_end = checked_add_seconds(global_start_time, schedule.total_vesting_duration)?;
    let installment_duration = schedule
        .release_duration
        .checked_div(schedule.installment_count)
        .unwrap_or(0);
    if now >= vesting_end || installment_duration == 0 {
        return Ok(schedule.installment_count);
    }

    let elapsed_since_cliff = now - cliff_end;
    Ok((elapsed_since_cliff / installment_duration + 1).min(schedule.installment_count))
}

/// Total amount vested at `now`. Nothing vests until the global start time is set.
pub fn vested_amount(
    schedule: &VestingSchedule,
    global_start_time: Option<u64>,
    now: u64,
) -> StdResult<Uint128> {
    let global_start_time = match global_start_time {
        Some(start) => start,
        None => return Ok(Uint128::zero()),
    };

    //Cliff is checked before the vesting end is computed
    let installments = installments_unlocked(schedule, global_start_time, now)?;
    if installments == 0 {
        return Ok(Uint128::zero());
    }
    if installments >= schedule.installment_count {
        return Ok(schedule.total_amount);
    }

    //Single floor on the final ratio, 256-bit intermediate
    Ok(schedule
        .total_amount
        .multiply_ratio(installments, schedule.installment_count))
}

/// Vested amount not yet released, floored at zero
pub fn releasable_amount(
    schedule: &VestingSchedule,
    global_start_time: Option<u64>,
    now: u64,
) -> StdResult<Uint128> {
    Ok(vested_amount(schedule, global_start_time, now)?.saturating_sub(schedule.released_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{VestingKind, VestingPolicy, SECONDS_PER_DAY};

    const START: u64 = 1_700_000_000;

    fn mock_schedule(total: u128) -> VestingSchedule {
        VestingPolicy {
            cliff_duration: SECONDS_PER_DAY,
            total_vesting_duration: 31 * SECONDS_PER_DAY,
            installment_count: 30,
        }
        .schedule(Uint128::new(total))
    }

    #[test]
    fn nothing_before_cliff() {
        let schedule = mock_schedule(10_000);
        let cliff_end = START + schedule.cliff_duration;

        assert_eq!(releasable_amount(&schedule, Some(START), START).unwrap(), Uint128::zero());
        assert_eq!(releasable_amount(&schedule, Some(START), cliff_end - 1).unwrap(), Uint128::zero());
        //Unset start time
        assert_eq!(releasable_amount(&schedule, None, cliff_end + 100 * SECONDS_PER_DAY).unwrap(), Uint128::zero());
    }

    #[test]
    fn cliff_boundary_is_inclusive() {
        let schedule = mock_schedule(10_000);
        let cliff_end = START + schedule.cliff_duration;

        //floor(10000 * 1 / 30)
        assert_eq!(releasable_amount(&schedule, Some(START), cliff_end).unwrap(), Uint128::new(333));
        assert_eq!(installments_unlocked(&schedule, START, cliff_end).unwrap(), 1);
        assert_eq!(installments_unlocked(&schedule, START, cliff_end + SECONDS_PER_DAY - 1).unwrap(), 1);
        assert_eq!(installments_unlocked(&schedule, START, cliff_end + SECONDS_PER_DAY).unwrap(), 2);
    }

    #[test]
    fn installments_sum_to_total() {
        let mut schedule = mock_schedule(10_000);
        let cliff_end = START + schedule.cliff_duration;
        let installment_duration = schedule.release_duration / schedule.installment_count;

        let mut released = vec![];
        for k in 0..schedule.installment_count {
            let now = cliff_end + installment_duration * k;
            let releasable = releasable_amount(&schedule, Some(START), now).unwrap();

            let expected = Uint128::new(10_000).multiply_ratio(k + 1, 30u64)
                - Uint128::new(10_000).multiply_ratio(k, 30u64);
            assert_eq!(releasable, expected);

            schedule.released_amount += releasable;
            released.push(releasable);
        }

        assert_eq!(schedule.released_amount, Uint128::new(10_000));
        assert!(schedule.is_fully_released());
        //Past the end nothing is left
        let end = START + schedule.total_vesting_duration;
        assert_eq!(releasable_amount(&schedule, Some(START), end + 1).unwrap(), Uint128::zero());
        let total = released.iter().fold(Uint128::zero(), |acc, amount| acc + *amount);
        assert_eq!(total, Uint128::new(10_000));
    }

    #[test]
    fn full_amount_at_vesting_end() {
        let mut schedule = mock_schedule(10_000);
        schedule.released_amount = Uint128::new(1_000);
        let end = START + schedule.total_vesting_duration;

        assert_eq!(releasable_amount(&schedule, Some(START), end).unwrap(), Uint128::new(9_000));
        assert_eq!(releasable_amount(&schedule, Some(START), end + 365 * SECONDS_PER_DAY).unwrap(), Uint128::new(9_000));
    }

    #[test]
    fn released_above_vested_floors_at_zero() {
        let mut schedule = mock_schedule(10_000);
        schedule.released_amount = Uint128::new(5_000);
        let cliff_end = START + schedule.cliff_duration;

        assert_eq!(releasable_amount(&schedule, Some(START), cliff_end).unwrap(), Uint128::zero());
    }

    #[test]
    fn employee_policy_releases_everything_at_cliff() {
        let schedule = VestingKind::Employee.policy().schedule(Uint128::new(10_000));
        let cliff_end = START + schedule.cliff_duration;

        assert_eq!(schedule.release_duration, 0);
        assert_eq!(releasable_amount(&schedule, Some(START), cliff_end - 1).unwrap(), Uint128::zero());
        assert_eq!(releasable_amount(&schedule, Some(START), cliff_end).unwrap(), Uint128::new(10_000));
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let schedule = mock_schedule(u128::MAX);
        let cliff_end = START + schedule.cliff_duration;

        assert_eq!(
            releasable_amount(&schedule, Some(START), cliff_end).unwrap(),
            Uint128::new(u128::MAX / 30)
        );
    }

    #[test]
    fn before_cliff_ignores_far_vesting_end() {
        //start + total_vesting_duration overflows, start + cliff doesn't
        let schedule = mock_schedule(10_000);
        let start = u64::MAX - 10 * SECONDS_PER_DAY;

        assert_eq!(releasable_amount(&schedule, Some(start), START).unwrap(), Uint128::zero());
        assert_eq!(releasable_amount(&schedule, Some(start), start + 1).unwrap(), Uint128::zero());
    }

    #[test]
    fn timestamp_overflow_errors() {
        let schedule = mock_schedule(10_000);
        releasable_amount(&schedule, Some(u64::MAX), u64::MAX).unwrap_err();
    }

    #[test]
    fn policies_validate() {
        for kind in [VestingKind::Employee, VestingKind::Founder, VestingKind::Investor] {
            kind.policy().validate().unwrap();
        }

        let zero_installments = VestingKind::Mock {
            cliff_duration: 1,
            vesting_duration: 30,
            installment_count: 0,
        };
        assert!(zero_installments.policy().validate().is_err());

        let sub_second = VestingKind::Mock {
            cliff_duration: 1,
            vesting_duration: 10,
            installment_count: 30,
        };
        assert!(sub_second.policy().validate().is_err());

        let overflowing = VestingKind::Mock {
            cliff_duration: 10,
            vesting_duration: u64::MAX - 5,
            installment_count: 1,
        };
        assert_eq!(
            overflowing.policy().validate(),
            Err(String::from("vesting window overflows"))
        );
    }
}
