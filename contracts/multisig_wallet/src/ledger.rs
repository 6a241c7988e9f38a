use soroban_sdk::{Address, Env, Vec};

use crate::{
    errors::WalletError,
    storage::{self, Transaction, TxStatus, WalletConfig},
};

/// Allocates the next sequence id and stores a fresh `Pending` record.
///
/// The proposer's approval is written here, as part of creating the record,
/// so `approve_transaction` never needs to special-case the proposer.
pub fn create(
    env: &Env,
    config: &mut WalletConfig,
    proposer: &Address,
    recipient: &Address,
    amount: i128,
) -> Transaction {
    let id = config.tx_count;
    config.tx_count += 1;

    let mut approvals = Vec::new(env);
    approvals.push_back(proposer.clone());

    let tx = Transaction {
        id,
        proposer: proposer.clone(),
        recipient: recipient.clone(),
        amount,
        proposed_at: env.ledger().timestamp(),
        approvals,
        status: TxStatus::Pending,
    };
    storage::set_transaction(env, &tx);
    tx
}

/// Loads a record that is still open. Unknown ids and terminal records both
/// fail with `InvalidState`.
pub fn load_pending(env: &Env, id: u64) -> Result<Transaction, WalletError> {
    let tx = storage::get_transaction(env, id).ok_or(WalletError::InvalidState)?;
    if tx.status != TxStatus::Pending {
        return Err(WalletError::InvalidState);
    }
    Ok(tx)
}

pub fn has_approved(tx: &Transaction, owner: &Address) -> bool {
    tx.approvals.contains(owner)
}

pub fn approval_count(tx: &Transaction) -> u32 {
    tx.approvals.len()
}

/// Appends `owner` to the approval set. The set is append-only; an approval
/// stays counted even if its owner is later removed.
pub fn record_approval(tx: &mut Transaction, owner: &Address) -> Result<(), WalletError> {
    if has_approved(tx, owner) {
        return Err(WalletError::AlreadyApproved);
    }
    tx.approvals.push_back(owner.clone());
    Ok(())
}

/// Moves a pending record to a terminal status.
pub fn close(tx: &mut Transaction, status: TxStatus) -> Result<(), WalletError> {
    if tx.status != TxStatus::Pending || status == TxStatus::Pending {
        return Err(WalletError::InvalidState);
    }
    tx.status = status;
    Ok(())
}
