#![no_std]

mod admin;
mod campaign;
mod contribution;
mod custody;
mod events;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use events::*;
pub use storage_types::{Campaign, CampaignId, CampaignStatus, CrowdfundError};
use storage_types::{DataKey, PersistentKey};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Initialize the contract with its administrator and the asset every
    /// campaign is denominated in
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), CrowdfundError> {
        if admin::has_admin(&e) {
            return Err(CrowdfundError::AlreadyInitialized);
        }
        admin.require_auth();

        admin::write_admin(&e, &admin);
        admin::write_paused(&e, false);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::CampaignCount, &0u64);

        utils::extend_instance(&e);
        Ok(())
    }

    /// Open a new campaign; the caller becomes its creator
    pub fn create_campaign(
        e: Env,
        creator: Address,
        goal: i128,
        duration_days: u32,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        admin::check_not_paused(&e)?;

        let campaign = campaign::insert_campaign(&e, creator, goal, duration_days)?;

        events::emit_campaign_created(
            &e,
            CampaignCreatedEvent {
                campaign_id: campaign.id,
                creator: campaign.creator,
                goal: campaign.goal,
                deadline: campaign.deadline,
            },
        );

        Ok(campaign.id)
    }

    /// Pledge `amount` toward an open campaign
    pub fn contribute(
        e: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();
        admin::check_not_paused(&e)?;

        let mut campaign = campaign::load_campaign(&e, campaign_id)?;
        contribution::check_contributable(&campaign, amount, utils::get_current_timestamp(&e))?;

        // Credit only after the asset is in custody
        custody::pull_from(&e, &contributor, amount)?;

        contribution::credit(&e, &mut campaign, &contributor, amount)?;
        campaign::save_campaign(&e, &campaign);
        utils::extend_instance(&e);

        events::emit_contribution_made(
            &e,
            ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(())
    }

    /// Release the full amount raised to the creator of a successful campaign
    pub fn claim_funds(
        e: Env,
        caller: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        caller.require_auth();
        admin::check_initialized(&e)?;

        let mut campaign = campaign::load_campaign(&e, campaign_id)?;
        campaign::check_claimable(&campaign, &caller, utils::get_current_timestamp(&e))?;

        // Lock before paying out
        campaign.is_completed = true;
        campaign::save_campaign(&e, &campaign);

        if let Err(err) = custody::push_to(&e, &campaign.creator, campaign.funds_raised) {
            campaign.is_completed = false;
            campaign::save_campaign(&e, &campaign);
            log!(&e, "claim rolled back", campaign_id);
            return Err(err);
        }

        events::emit_funds_claimed(
            &e,
            FundsClaimedEvent {
                campaign_id,
                creator: campaign.creator,
                amount: campaign.funds_raised,
            },
        );

        Ok(())
    }

    /// Return the caller's whole pledge from a campaign that missed its goal
    pub fn refund(
        e: Env,
        contributor: Address,
        campaign_id: CampaignId,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();
        admin::check_initialized(&e)?;

        let campaign = campaign::load_campaign(&e, campaign_id)?;
        let amount = contribution::check_refundable(
            &e,
            &campaign,
            &contributor,
            utils::get_current_timestamp(&e),
        )?;

        // Zero before paying out
        contribution::write_contribution(&e, campaign_id, &contributor, 0);

        if let Err(err) = custody::push_to(&e, &contributor, amount) {
            contribution::write_contribution(&e, campaign_id, &contributor, amount);
            log!(&e, "refund rolled back", campaign_id);
            return Err(err);
        }

        events::emit_refund_issued(
            &e,
            RefundIssuedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(())
    }

    /// Admin functions
    pub fn set_admin(e: Env, new_admin: Address) -> Result<(), CrowdfundError> {
        let old_admin = admin::require_admin(&e)?;
        admin::write_admin(&e, &new_admin);
        utils::extend_instance(&e);

        events::emit_admin_changed(
            &e,
            AdminChangedEvent {
                old_admin,
                new_admin,
            },
        );
        Ok(())
    }

    pub fn pause(e: Env) -> Result<(), CrowdfundError> {
        admin::require_admin(&e)?;
        admin::write_paused(&e, true);
        events::emit_paused_changed(&e, PausedChangedEvent { paused: true });
        Ok(())
    }

    pub fn unpause(e: Env) -> Result<(), CrowdfundError> {
        admin::require_admin(&e)?;
        admin::write_paused(&e, false);
        events::emit_paused_changed(&e, PausedChangedEvent { paused: false });
        Ok(())
    }

    /// Keep a campaign record alive in persistent storage
    pub fn extend_campaign_ttl(e: Env, campaign_id: CampaignId) -> Result<(), CrowdfundError> {
        admin::check_initialized(&e)?;
        campaign::load_campaign(&e, campaign_id)?;
        utils::extend_persistent(&e, &PersistentKey::Campaign(campaign_id));
        utils::extend_instance(&e);
        Ok(())
    }

    /// Keep a pledge entry alive until its campaign can be settled
    pub fn extend_contribution_ttl(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<(), CrowdfundError> {
        admin::check_initialized(&e)?;
        campaign::load_campaign(&e, campaign_id)?;
        if !contribution::has_contribution(&e, campaign_id, &contributor) {
            return Err(CrowdfundError::NoContribution);
        }
        utils::extend_persistent(&e, &PersistentKey::Contribution(campaign_id, contributor));
        utils::extend_instance(&e);
        Ok(())
    }

    /// View functions
    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
        campaign::load_campaign(&e, campaign_id)
    }

    pub fn campaign_status(e: Env, campaign_id: CampaignId) -> Result<CampaignStatus, CrowdfundError> {
        let campaign = campaign::load_campaign(&e, campaign_id)?;
        Ok(campaign.status(utils::get_current_timestamp(&e)))
    }

    pub fn get_contribution(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        if !campaign::campaign_exists(&e, campaign_id) {
            return Err(CrowdfundError::NotFound);
        }
        Ok(contribution::contribution_of(&e, campaign_id, &contributor))
    }

    pub fn campaign_count(e: Env) -> u64 {
        campaign::campaign_count(&e)
    }

    pub fn is_administrator(e: Env, identity: Address) -> bool {
        admin::is_administrator(&e, &identity)
    }

    pub fn is_paused(e: Env) -> bool {
        admin::is_paused(&e)
    }

    pub fn token(e: Env) -> Result<Address, CrowdfundError> {
        admin::read_token(&e)
    }
}
