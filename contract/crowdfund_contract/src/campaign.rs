use soroban_sdk::{Address, Env};

use crate::storage_types::{Campaign, CampaignId, CrowdfundError, DataKey, PersistentKey};
use crate::utils::{days_to_seconds, extend_instance, extend_persistent, get_current_timestamp};

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Ids are dense and start at 1, so existence is a range check.
pub fn campaign_exists(env: &Env, campaign_id: CampaignId) -> bool {
    campaign_id > 0 && campaign_id <= campaign_count(env)
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    if !campaign_exists(env, campaign_id) {
        return Err(CrowdfundError::NotFound);
    }
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Allocate the next id and store a fresh campaign under it.
pub fn insert_campaign(
    env: &Env,
    creator: Address,
    goal: i128,
    duration_days: u32,
) -> Result<Campaign, CrowdfundError> {
    if goal <= 0 || duration_days == 0 {
        return Err(CrowdfundError::InvalidArgument);
    }

    let now = get_current_timestamp(env);
    let deadline = now
        .checked_add(days_to_seconds(duration_days))
        .ok_or(CrowdfundError::InvalidArgument)?;

    let campaign_id = campaign_count(env)
        .checked_add(1)
        .ok_or(CrowdfundError::Overflow)?;

    let campaign = Campaign {
        id: campaign_id,
        creator,
        goal,
        deadline,
        funds_raised: 0,
        is_completed: false,
        created_at: now,
    };

    save_campaign(env, &campaign);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &campaign_id);
    extend_instance(env);

    Ok(campaign)
}

/// Precondition chain for a claim, first failure wins.
pub fn check_claimable(
    campaign: &Campaign,
    caller: &Address,
    now: u64,
) -> Result<(), CrowdfundError> {
    if campaign.creator != *caller {
        return Err(CrowdfundError::Unauthorized);
    }
    if !campaign.has_ended(now) {
        return Err(CrowdfundError::CampaignStillActive);
    }
    if !campaign.goal_reached() {
        return Err(CrowdfundError::GoalNotMet);
    }
    if campaign.is_completed {
        return Err(CrowdfundError::AlreadyClaimed);
    }
    Ok(())
}
