use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionMadeEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FundsClaimedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AdminChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PausedChangedEvent {
    pub paused: bool,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_contribution_made(env: &Env, event: ContributionMadeEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution_made"),), event);
}

pub fn emit_funds_claimed(env: &Env, event: FundsClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_claimed"),), event);
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events()
        .publish((Symbol::new(env, "refund_issued"),), event);
}

pub fn emit_admin_changed(env: &Env, event: AdminChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_changed"),), event);
}

pub fn emit_paused_changed(env: &Env, event: PausedChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "paused_changed"),), event);
}
