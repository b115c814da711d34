use soroban_sdk::{Address, Env};

use crate::storage_types::{CrowdfundError, DataKey};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Capability check for housekeeping paths. Creator and contributor checks
/// never go through here.
pub fn is_administrator(env: &Env, identity: &Address) -> bool {
    match env.storage().instance().get::<DataKey, Address>(&DataKey::Admin) {
        Some(admin) => admin == *identity,
        None => false,
    }
}

/// Loads the administrator and demands its authorization.
pub fn require_admin(env: &Env) -> Result<Address, CrowdfundError> {
    let admin = read_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

pub fn read_token(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn check_initialized(env: &Env) -> Result<(), CrowdfundError> {
    if !has_admin(env) {
        return Err(CrowdfundError::NotInitialized);
    }
    Ok(())
}

/// Intake guard for `create_campaign` and `contribute`.
pub fn check_not_paused(env: &Env) -> Result<(), CrowdfundError> {
    check_initialized(env)?;
    if is_paused(env) {
        return Err(CrowdfundError::ContractPaused);
    }
    Ok(())
}
