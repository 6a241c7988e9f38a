use soroban_sdk::{symbol_short, Address, Env};

/// Lifecycle notifications. Every successful state transition publishes
/// exactly one of these; indexers rebuild the wallet history from them.
pub struct WalletEvents;

impl WalletEvents {
    /// Emits a `proposed` event when an owner creates a transaction.
    ///
    /// Topics: `("proposed", proposer)`
    /// Data:   `(id, amount, recipient)`
    pub fn transaction_proposed(
        env: &Env,
        id: u64,
        proposer: &Address,
        amount: i128,
        recipient: &Address,
    ) {
        env.events()
            .publish((symbol_short!("proposed"), proposer.clone()), (id, amount, recipient.clone()));
    }

    /// Topics: `("approved", owner)`
    /// Data:   `id`
    pub fn transaction_approved(env: &Env, id: u64, owner: &Address) {
        env.events().publish((symbol_short!("approved"), owner.clone()), id);
    }

    pub fn transaction_executed(env: &Env, id: u64) {
        env.events().publish((symbol_short!("executed"),), id);
    }

    pub fn transaction_cancelled(env: &Env, id: u64) {
        env.events().publish((symbol_short!("cancelled"),), id);
    }

    /// Topics: `("owner_add", caller)`
    /// Data:   `candidate`
    ///
    /// `caller` is the wallet's own address for the owner registered by
    /// `initialize`.
    pub fn owner_added(env: &Env, caller: &Address, candidate: &Address) {
        env.events().publish((symbol_short!("owner_add"), caller.clone()), candidate.clone());
    }

    pub fn owner_removed(env: &Env, caller: &Address, target: &Address) {
        env.events().publish((symbol_short!("owner_rem"), caller.clone()), target.clone());
    }
}
