//! Token movements between participants and the contract's escrow balance.
//!
//! Ledger amounts are `u64`; the token interface takes `i128`, so amounts are
//! widened here and nowhere else.

use soroban_sdk::{token, Address, Env};

/// Pull `amount` from `from` into the contract.
pub fn lock(env: &Env, token: &Address, from: &Address, amount: u64) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(
        from,
        &env.current_contract_address(),
        &i128::from(amount),
    );
}

/// Pay `amount` out of the contract to `to`.
pub fn release(env: &Env, token: &Address, to: &Address, amount: u64) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(
        &env.current_contract_address(),
        to,
        &i128::from(amount),
    );
}
