use crate::errors::WalletError;

/// Minimum delay, in ledger seconds, between proposal and execution.
pub const TIMELOCK_DURATION: u64 = 86_400;

/// Snapshot of everything the execution decision depends on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExecutionRequest {
    pub approvals: u32,
    pub threshold: u32,
    pub proposed_at: u64,
    pub now: u64,
    pub amount: i128,
    pub balance: i128,
}

pub fn quorum_reached(approvals: u32, threshold: u32) -> bool {
    approvals >= threshold
}

/// Earliest ledger timestamp at which a transaction proposed at
/// `proposed_at` may execute. Saturates instead of wrapping.
pub fn unlock_time(proposed_at: u64) -> u64 {
    proposed_at.saturating_add(TIMELOCK_DURATION)
}

pub fn timelock_elapsed(proposed_at: u64, now: u64) -> bool {
    now >= unlock_time(proposed_at)
}

/// Decides whether a pending transaction may execute.
///
/// # Errors
/// | Error                   | Condition                              |
/// |-------------------------|----------------------------------------|
/// | `InsufficientApprovals` | `approvals < threshold`                |
/// | `TimelockNotElapsed`    | `now < proposed_at + TIMELOCK_DURATION` |
/// | `InsufficientFunds`     | `balance < amount`                     |
///
/// Conditions are checked in that order, so a request failing several of
/// them reports the first.
pub fn authorize_execution(req: &ExecutionRequest) -> Result<(), WalletError> {
    if !quorum_reached(req.approvals, req.threshold) {
        return Err(WalletError::InsufficientApprovals);
    }
    if !timelock_elapsed(req.proposed_at, req.now) {
        return Err(WalletError::TimelockNotElapsed);
    }
    if req.balance < req.amount {
        return Err(WalletError::InsufficientFunds);
    }
    Ok(())
}
