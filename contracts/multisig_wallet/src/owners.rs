use soroban_sdk::{Address, Env};

use crate::{
    errors::WalletError,
    storage::{self, WalletConfig},
};

pub fn is_owner(env: &Env, account: &Address) -> bool {
    storage::has_owner(env, account)
}

/// Authenticates `caller` and checks it is a current owner. The host aborts
/// the invocation when the caller's authorization is missing.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), WalletError> {
    caller.require_auth();
    if !is_owner(env, caller) {
        return Err(WalletError::Unauthorized);
    }
    Ok(())
}

/// Adds `candidate` to the owner set. Re-adding an existing owner fails with
/// `AlreadyOwner`.
pub fn add(env: &Env, config: &mut WalletConfig, candidate: &Address) -> Result<(), WalletError> {
    if is_owner(env, candidate) {
        return Err(WalletError::AlreadyOwner);
    }
    storage::set_owner(env, candidate);
    config.owner_count = config.owner_count.saturating_add(1);
    Ok(())
}

/// Removes `target` from the owner set.
///
/// The remaining count is not compared with the threshold: removing owners
/// below quorum is allowed and blocks every future execution. Approvals the
/// target already recorded stay on their transactions.
pub fn remove(env: &Env, config: &mut WalletConfig, target: &Address) -> Result<(), WalletError> {
    if !is_owner(env, target) {
        return Err(WalletError::NotAnOwner);
    }
    storage::remove_owner(env, target);
    config.owner_count = config.owner_count.saturating_sub(1);
    Ok(())
}
