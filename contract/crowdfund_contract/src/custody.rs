use soroban_sdk::{log, token, Address, Env};

use crate::admin::read_token;
use crate::storage_types::CrowdfundError;

/// Move `amount` of the campaign asset from `payer` into contract custody.
///
/// The token call runs in its own host frame, so a rejected transfer leaves
/// no partial effect behind; it is reported as `TransferFailed`.
pub fn pull_from(env: &Env, payer: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);

    match token_client.try_transfer(payer, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "custody pull rejected", payer.clone(), amount);
            Err(CrowdfundError::TransferFailed)
        }
    }
}

/// Pay `amount` of the campaign asset out of custody to `payee`.
pub fn push_to(env: &Env, payee: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);

    match token_client.try_transfer(&env.current_contract_address(), payee, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "custody push rejected", payee.clone(), amount);
            Err(CrowdfundError::TransferFailed)
        }
    }
}
