#![cfg(test)]

// ---------------------------------------------------------------------------
// Multisig wallet test suite
//
// 1. policy     — pure authorization decisions (no Env needed)
// 2. events     — WalletEvents helpers in isolation
// 3. owners     — initialization and owner registry
// 4. lifecycle  — propose / approve / execute / cancel against a real SAC
// ---------------------------------------------------------------------------

mod policy;

use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Val, Vec,
};

use crate::{MultisigWallet, MultisigWalletClient};

/// One whole unit of a 7-decimal Stellar asset, in stroops.
pub const UNIT: i128 = 10_000_000;

/// Ledger time at which the fixture starts.
pub const START: u64 = 1_700_000_000;

pub struct WalletTest<'a> {
    pub env: Env,
    pub wallet: MultisigWalletClient<'a>,
    pub wallet_id: Address,
    pub token: TokenClient<'a>,
    pub token_id: Address,
    pub owner: Address,
    pub other_owner: Address,
    pub recipient: Address,
}

/// Threshold-2 wallet owned by `owner` and `other_owner`, holding 5 units.
pub fn setup<'a>() -> WalletTest<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let token_id = env.register_stellar_asset_contract_v2(admin).address();
    let wallet_id = env.register_contract(None, MultisigWallet);
    let wallet = MultisigWalletClient::new(&env, &wallet_id);

    let owner = Address::generate(&env);
    let other_owner = Address::generate(&env);
    let recipient = Address::generate(&env);

    wallet.initialize(&2, &owner, &token_id);
    wallet.add_owner(&owner, &other_owner);

    StellarAssetClient::new(&env, &token_id).mint(&owner, &(10 * UNIT));
    let token = TokenClient::new(&env, &token_id);
    token.transfer(&owner, &wallet_id, &(5 * UNIT));

    WalletTest { env, wallet, wallet_id, token, token_id, owner, other_owner, recipient }
}

impl<'a> WalletTest<'a> {
    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    /// Topics and data of the most recent event published by the wallet.
    pub fn last_wallet_event(&self) -> (Vec<Val>, Val) {
        let all = self.env.events().all();
        let mut i = all.len();
        while i > 0 {
            i -= 1;
            let (contract, topics, data) = all.get_unchecked(i);
            if contract == self.wallet_id {
                return (topics, data);
            }
        }
        panic!("wallet published no events");
    }
}
