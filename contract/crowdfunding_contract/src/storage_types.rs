use soroban_sdk::{contracterror, contracttype, Address};

pub type CampaignId = u64;

/// Identifier that is never assigned to a campaign.
pub const SENTINEL_CAMPAIGN_ID: CampaignId = 0;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    CampaignCount,
    Campaign(CampaignId),
    Contribution(CampaignId, Address), // (CampaignID, Funder)
}

/// A single fundraising effort.
///
/// `creator` and `expiration` are fixed at creation; `raised` only grows
/// through successful funding calls made before `expiration`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub creator: Address,
    pub expiration: u64, // Ledger timestamp, seconds
    pub goal: i128,
    pub raised: i128,
    pub created_at: u64,
}

impl Campaign {
    /// Whether the campaign still accepts funding at `now`.
    pub fn is_open_at(&self, now: u64) -> bool {
        now < self.expiration
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    /// Expiration is not strictly after the current ledger time.
    InvalidExpiration = 1,
    /// No campaign is stored under the requested identifier.
    CampaignNotFound = 2,
    /// The campaign's expiration has passed.
    CampaignExpired = 3,
    /// The funding token rejected the transfer.
    TransferFailed = 4,
    InvalidGoal = 5,
    InvalidAmount = 6,
    Overflow = 7,
    /// Contract storage is missing its funding token.
    NotInitialized = 8,
}
