use soroban_sdk::{log, token, Address, Env};

use crate::error::RegistryError;
use crate::events;
use crate::storage;

pub fn get_token_address(env: &Env) -> Result<Address, RegistryError> {
    storage::get_token(env)
}

/// Balance the contract holds on the configured token
pub fn get_token_balance(env: &Env) -> Result<i128, RegistryError> {
    let token_address = storage::get_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    Ok(token_client.balance(&env.current_contract_address()))
}

/// Move `amount` from `from` into the contract's custody.
///
/// Custody is inbound only: the contract never transfers tokens out.
pub fn deposit_tokens(env: &Env, from: Address, amount: i128) -> Result<i128, RegistryError> {
    if amount <= 0 {
        return Err(RegistryError::InvalidInput);
    }
    let token_address = storage::get_token(env)?;
    let token_client = token::Client::new(env, &token_address);
    let custodian = env.current_contract_address();

    token_client.transfer(&from, &custodian, &amount);
    let balance = token_client.balance(&custodian);

    log!(env, "tokens deposited", amount, balance);
    events::emit_tokens_deposited(env, from, amount, balance);

    Ok(balance)
}
