use soroban_sdk::{contracttype, Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17280; // 5s ledgers

// Any access more than a day after the last bump extends the entry again.
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Owners and transaction records outlive the instance bump. Every read of a
// present entry extends it, so entries in use never archive.
const PERSISTENT_BUMP_AMOUNT: u32 = 180 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletConfig {
    pub threshold: u32,
    pub token: Address,
    pub tx_count: u64,
    pub owner_count: u32,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TxStatus {
    Pending = 0,
    Executed = 1,
    Cancelled = 2,
}

/// A proposed value transfer and its approval state.
///
/// `approvals` always starts with the proposer and only grows while the
/// record is `Pending`. Records are kept after they reach a terminal status.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub proposer: Address,
    pub recipient: Address,
    pub amount: i128,
    pub proposed_at: u64,
    pub approvals: Vec<Address>,
    pub status: TxStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Owner(Address),
    Transaction(u64),
}

pub fn get_config(env: &Env) -> Option<WalletConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn has_owner(env: &Env, account: &Address) -> bool {
    let key = DataKey::Owner(account.clone());
    let present = env.storage().persistent().get::<_, bool>(&key).unwrap_or(false);
    if present {
        extend_persistent_ttl(env, &key);
    }
    present
}

pub fn set_owner(env: &Env, account: &Address) {
    let key = DataKey::Owner(account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

pub fn remove_owner(env: &Env, account: &Address) {
    env.storage().persistent().remove(&DataKey::Owner(account.clone()));
}

pub fn get_transaction(env: &Env, id: u64) -> Option<Transaction> {
    let key = DataKey::Transaction(id);
    let tx = env.storage().persistent().get(&key);
    if tx.is_some() {
        extend_persistent_ttl(env, &key);
    }
    tx
}

pub fn set_transaction(env: &Env, tx: &Transaction) {
    let key = DataKey::Transaction(tx.id);
    env.storage().persistent().set(&key, tx);
    extend_persistent_ttl(env, &key);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
