use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Paused,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
}

pub type CampaignId = u64;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,             // Ledger timestamp, fixed at creation
    pub funds_raised: i128,
    pub is_completed: bool,        // Set once, by a successful claim
    pub created_at: u64,
}

impl Campaign {
    pub fn has_ended(&self, now: u64) -> bool {
        now >= self.deadline
    }

    pub fn goal_reached(&self) -> bool {
        self.funds_raised >= self.goal
    }

    pub fn status(&self, now: u64) -> CampaignStatus {
        if self.is_completed {
            CampaignStatus::Claimed
        } else if !self.has_ended(now) {
            CampaignStatus::Open
        } else if self.goal_reached() {
            CampaignStatus::Succeeded
        } else {
            CampaignStatus::Failed
        }
    }
}

// Derived lifecycle view
#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Open,
    Succeeded,
    Failed,
    Claimed,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidArgument = 3,
    NotFound = 4,
    Unauthorized = 5,
    CampaignStillActive = 6,
    CampaignEnded = 7,
    GoalNotMet = 8,
    GoalMet = 9,
    AlreadyClaimed = 10,
    NoContribution = 11,
    TransferFailed = 12,
    Overflow = 13,
    ContractPaused = 14,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
