#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod ledger;
mod owners;
mod policy;
mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};

pub use errors::WalletError;
pub use policy::TIMELOCK_DURATION;
pub use storage::{Transaction, TxStatus};

use events::WalletEvents;
use policy::ExecutionRequest;
use storage::WalletConfig;

/// M-of-N custody wallet with a mandatory delay between proposal and payout.
///
/// Owners propose transfers of the custodied asset, other owners approve
/// them, and once both the quorum and the timelock are satisfied any owner
/// may execute. Owner-set changes take effect immediately on a single
/// owner's signature, without quorum or delay.
#[contract]
pub struct MultisigWallet;

fn load_config(env: &Env) -> Result<WalletConfig, WalletError> {
    storage::get_config(env).ok_or(WalletError::NotInitialized)
}

fn execution_request(env: &Env, config: &WalletConfig, tx: &Transaction) -> ExecutionRequest {
    let balance = TokenClient::new(env, &config.token).balance(&env.current_contract_address());
    ExecutionRequest {
        approvals: ledger::approval_count(tx),
        threshold: config.threshold,
        proposed_at: tx.proposed_at,
        now: env.ledger().timestamp(),
        amount: tx.amount,
        balance,
    }
}

#[contractimpl]
impl MultisigWallet {
    /// One-shot setup: quorum size, first owner and the custodied asset
    /// contract (the native asset's SAC for plain XLM custody).
    ///
    /// Requires no auth: whoever calls it first becomes the first owner, so
    /// deploy and `initialize` must be submitted in the same transaction.
    pub fn initialize(
        env: Env,
        threshold: u32,
        owner: Address,
        token: Address,
    ) -> Result<(), WalletError> {
        if storage::has_config(&env) {
            return Err(WalletError::AlreadyInitialized);
        }
        if threshold == 0 {
            return Err(WalletError::InvalidThreshold);
        }

        let mut config = WalletConfig { threshold, token, tx_count: 0, owner_count: 0 };
        owners::add(&env, &mut config, &owner)?;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        WalletEvents::owner_added(&env, &env.current_contract_address(), &owner);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Owner registry
    // -----------------------------------------------------------------------

    pub fn add_owner(env: Env, caller: Address, candidate: Address) -> Result<(), WalletError> {
        let mut config = load_config(&env)?;
        owners::require_owner(&env, &caller)?;

        owners::add(&env, &mut config, &candidate)?;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        WalletEvents::owner_added(&env, &caller, &candidate);
        Ok(())
    }

    /// Removes `target` immediately. Does not check the remaining owner count
    /// against the threshold and does not touch approvals `target` already
    /// gave.
    pub fn remove_owner(env: Env, caller: Address, target: Address) -> Result<(), WalletError> {
        let mut config = load_config(&env)?;
        owners::require_owner(&env, &caller)?;

        owners::remove(&env, &mut config, &target)?;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        WalletEvents::owner_removed(&env, &caller, &target);
        Ok(())
    }

    pub fn is_owner(env: Env, account: Address) -> bool {
        owners::is_owner(&env, &account)
    }

    pub fn owner_count(env: Env) -> u32 {
        storage::get_config(&env).map(|c| c.owner_count).unwrap_or(0)
    }

    // -----------------------------------------------------------------------
    // Transaction lifecycle
    // -----------------------------------------------------------------------

    /// Creates a pending transfer of `amount` to `recipient`, already
    /// approved by `caller`. Returns the new transaction id.
    pub fn propose_transaction(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, WalletError> {
        let mut config = load_config(&env)?;
        owners::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let tx = ledger::create(&env, &mut config, &caller, &recipient, amount);
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        WalletEvents::transaction_proposed(&env, tx.id, &caller, amount, &recipient);
        Ok(tx.id)
    }

    pub fn approve_transaction(env: Env, caller: Address, id: u64) -> Result<(), WalletError> {
        load_config(&env)?;
        owners::require_owner(&env, &caller)?;

        let mut tx = ledger::load_pending(&env, id)?;
        ledger::record_approval(&mut tx, &caller)?;
        storage::set_transaction(&env, &tx);
        storage::extend_instance_ttl(&env);

        WalletEvents::transaction_approved(&env, id, &caller);
        Ok(())
    }

    /// Pays out a pending transaction once quorum, timelock and balance all
    /// allow it.
    ///
    /// The record is marked `Executed` before the outbound transfer. If the
    /// token contract rejects the transfer the call fails with
    /// `TransferFailed` and the host rolls back every write of this
    /// invocation, leaving the record `Pending` for a later retry.
    pub fn execute_transaction(env: Env, caller: Address, id: u64) -> Result<(), WalletError> {
        let config = load_config(&env)?;
        owners::require_owner(&env, &caller)?;

        let mut tx = ledger::load_pending(&env, id)?;
        policy::authorize_execution(&execution_request(&env, &config, &tx))?;

        ledger::close(&mut tx, TxStatus::Executed)?;
        storage::set_transaction(&env, &tx);

        log!(&env, "multisig payout", id, tx.amount);
        let contract = env.current_contract_address();
        match TokenClient::new(&env, &config.token).try_transfer(&contract, &tx.recipient, &tx.amount) {
            Ok(Ok(())) => {}
            _ => {
                log!(&env, "multisig payout rejected", id);
                return Err(WalletError::TransferFailed);
            }
        }

        storage::extend_instance_ttl(&env);
        WalletEvents::transaction_executed(&env, id);
        Ok(())
    }

    /// Any owner may cancel any pending transaction, not only its proposer.
    pub fn cancel_transaction(env: Env, caller: Address, id: u64) -> Result<(), WalletError> {
        load_config(&env)?;
        owners::require_owner(&env, &caller)?;

        let mut tx = ledger::load_pending(&env, id)?;
        ledger::close(&mut tx, TxStatus::Cancelled)?;
        storage::set_transaction(&env, &tx);
        storage::extend_instance_ttl(&env);

        WalletEvents::transaction_cancelled(&env, id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn get_transaction(env: Env, id: u64) -> Option<Transaction> {
        storage::get_transaction(&env, id)
    }

    pub fn transaction_count(env: Env) -> u64 {
        storage::get_config(&env).map(|c| c.tx_count).unwrap_or(0)
    }

    pub fn has_approved(env: Env, id: u64, owner: Address) -> bool {
        storage::get_transaction(&env, id)
            .map(|tx| ledger::has_approved(&tx, &owner))
            .unwrap_or(false)
    }

    /// Whether `execute_transaction(id)` would pass its policy checks right
    /// now. Does not consider the caller or the outcome of the transfer.
    pub fn can_execute(env: Env, id: u64) -> bool {
        let (Some(config), Ok(tx)) = (storage::get_config(&env), ledger::load_pending(&env, id))
        else {
            return false;
        };
        policy::authorize_execution(&execution_request(&env, &config, &tx)).is_ok()
    }

    pub fn threshold(env: Env) -> u32 {
        storage::get_config(&env).map(|c| c.threshold).unwrap_or(0)
    }

    pub fn token(env: Env) -> Option<Address> {
        storage::get_config(&env).map(|c| c.token)
    }

    /// Custodied balance held by the wallet in its configured asset.
    pub fn balance(env: Env) -> i128 {
        match storage::get_config(&env) {
            Some(config) => {
                TokenClient::new(&env, &config.token).balance(&env.current_contract_address())
            }
            None => 0,
        }
    }

    pub fn timelock_duration(_env: Env) -> u64 {
        TIMELOCK_DURATION
    }
}
