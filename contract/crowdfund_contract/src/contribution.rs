use soroban_sdk::{Address, Env};

use crate::storage_types::{Campaign, CampaignId, CrowdfundError, PersistentKey};
use crate::utils::extend_persistent;

/// Pledge balance of `contributor`; a missing entry reads as zero.
pub fn contribution_of(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn has_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Contribution(campaign_id, contributor.clone()))
}

/// Zero balances are kept, not removed. A zeroed entry is the refunded state.
pub fn write_contribution(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    amount: i128,
) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

/// Credit an accepted pledge to both the campaign total and the contributor.
/// Callers persist the campaign afterwards.
pub fn credit(
    env: &Env,
    campaign: &mut Campaign,
    contributor: &Address,
    amount: i128,
) -> Result<i128, CrowdfundError> {
    let funds_raised = campaign
        .funds_raised
        .checked_add(amount)
        .ok_or(CrowdfundError::Overflow)?;
    let balance = contribution_of(env, campaign.id, contributor)
        .checked_add(amount)
        .ok_or(CrowdfundError::Overflow)?;

    campaign.funds_raised = funds_raised;
    write_contribution(env, campaign.id, contributor, balance);
    Ok(balance)
}

pub fn check_contributable(
    campaign: &Campaign,
    amount: i128,
    now: u64,
) -> Result<(), CrowdfundError> {
    if campaign.has_ended(now) {
        return Err(CrowdfundError::CampaignEnded);
    }
    if amount <= 0 {
        return Err(CrowdfundError::InvalidArgument);
    }
    // Rejects pledges that would overflow the campaign total.
    if campaign.funds_raised.checked_add(amount).is_none() {
        return Err(CrowdfundError::Overflow);
    }
    Ok(())
}

/// Precondition chain for a refund; yields the refundable balance.
pub fn check_refundable(
    env: &Env,
    campaign: &Campaign,
    contributor: &Address,
    now: u64,
) -> Result<i128, CrowdfundError> {
    if !campaign.has_ended(now) {
        return Err(CrowdfundError::CampaignStillActive);
    }
    if campaign.goal_reached() {
        return Err(CrowdfundError::GoalMet);
    }
    let balance = contribution_of(env, campaign.id, contributor);
    if balance <= 0 {
        return Err(CrowdfundError::NoContribution);
    }
    Ok(balance)
}
