use crate::{
    errors::WalletError,
    policy::{
        authorize_execution, quorum_reached, timelock_elapsed, unlock_time, ExecutionRequest,
        TIMELOCK_DURATION,
    },
};

/// Request that passes every check; tests knock out one condition at a time.
fn eligible() -> ExecutionRequest {
    ExecutionRequest {
        approvals: 2,
        threshold: 2,
        proposed_at: 1_000,
        now: 1_000 + TIMELOCK_DURATION,
        amount: 100,
        balance: 100,
    }
}

#[test]
fn timelock_is_one_day() {
    assert_eq!(TIMELOCK_DURATION, 86_400);
}

#[test]
fn quorum_counts_inclusive() {
    assert!(quorum_reached(2, 2));
    assert!(quorum_reached(3, 2));
    assert!(!quorum_reached(1, 2));
}

#[test]
fn unlock_time_saturates_near_max() {
    assert_eq!(unlock_time(5), 5 + 86_400);
    assert_eq!(unlock_time(u64::MAX - 10), u64::MAX);
}

#[test]
fn timelock_boundary() {
    assert!(!timelock_elapsed(1_000, 1_000 + TIMELOCK_DURATION - 1));
    assert!(timelock_elapsed(1_000, 1_000 + TIMELOCK_DURATION));
    assert!(timelock_elapsed(1_000, 1_000 + TIMELOCK_DURATION + 1));
}

#[test]
fn eligible_request_is_authorized() {
    assert_eq!(authorize_execution(&eligible()), Ok(()));
}

#[test]
fn missing_quorum_alone_fails() {
    let req = ExecutionRequest { approvals: 1, ..eligible() };
    assert_eq!(authorize_execution(&req), Err(WalletError::InsufficientApprovals));
}

#[test]
fn early_execution_alone_fails() {
    let req = ExecutionRequest { now: 1_000 + TIMELOCK_DURATION - 1, ..eligible() };
    assert_eq!(authorize_execution(&req), Err(WalletError::TimelockNotElapsed));
}

#[test]
fn low_balance_alone_fails() {
    let req = ExecutionRequest { balance: 99, ..eligible() };
    assert_eq!(authorize_execution(&req), Err(WalletError::InsufficientFunds));
}

#[test]
fn quorum_is_reported_before_timelock_and_funds() {
    let req = ExecutionRequest { approvals: 0, now: 1_000, balance: 0, ..eligible() };
    assert_eq!(authorize_execution(&req), Err(WalletError::InsufficientApprovals));

    let req = ExecutionRequest { now: 1_000, balance: 0, ..eligible() };
    assert_eq!(authorize_execution(&req), Err(WalletError::TimelockNotElapsed));
}
