#![no_std]

mod events;
mod ledger;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use events::{CampaignCreatedEvent, CampaignFundedEvent};
pub use storage_types::{Campaign, CampaignId, CrowdfundError, SENTINEL_CAMPAIGN_ID};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Bind the ledger to the token it accepts. Runs once, at deployment.
    pub fn __constructor(env: Env, token: Address) {
        ledger::write_token(&env, &token);
        ledger::write_campaign_count(&env, SENTINEL_CAMPAIGN_ID);
        ledger::extend_instance(&env);
    }

    /// Open a new campaign owned by `creator` and return its identifier.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        expiration: u64,
        goal: i128,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();

        if !utils::is_future(&env, expiration) {
            return Err(CrowdfundError::InvalidExpiration);
        }
        if goal < 0 {
            return Err(CrowdfundError::InvalidGoal);
        }

        let campaign_id = ledger::allocate_campaign_id(&env)?;
        let campaign = Campaign {
            creator: creator.clone(),
            expiration,
            goal,
            raised: 0,
            created_at: utils::get_current_timestamp(&env),
        };

        ledger::write_campaign(&env, campaign_id, &campaign);
        ledger::extend_instance(&env);

        log!(&env, "campaign created", campaign_id, expiration, goal);

        events::emit_campaign_created(
            &env,
            CampaignCreatedEvent {
                creator,
                campaign_id,
                expiration,
            },
        );

        Ok(campaign_id)
    }

    /// Contribute `amount` of the funding token to an open campaign.
    ///
    /// Existence and expiry are checked before the token is touched. The
    /// campaign record is only written after the transfer succeeds.
    pub fn fund_campaign(
        env: Env,
        funder: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        funder.require_auth();

        if amount <= 0 {
            return Err(CrowdfundError::InvalidAmount);
        }

        let mut campaign =
            ledger::read_campaign(&env, campaign_id).ok_or(CrowdfundError::CampaignNotFound)?;

        if !campaign.is_open_at(utils::get_current_timestamp(&env)) {
            return Err(CrowdfundError::CampaignExpired);
        }

        let raised = campaign
            .raised
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;
        let contributed = ledger::read_contribution(&env, campaign_id, &funder)
            .checked_add(amount)
            .ok_or(CrowdfundError::Overflow)?;

        ledger::collect_funds(&env, &funder, amount)?;

        campaign.raised = raised;
        ledger::write_campaign(&env, campaign_id, &campaign);
        ledger::write_contribution(&env, campaign_id, &funder, contributed);
        ledger::extend_instance(&env);

        log!(&env, "campaign funded", campaign_id, amount, raised);

        events::emit_campaign_funded(
            &env,
            CampaignFundedEvent {
                campaign_id,
                funder,
                amount,
                raised,
            },
        );

        Ok(())
    }

    /// Campaign stored under `campaign_id`, or `None` for the sentinel and
    /// unassigned ids.
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Option<Campaign> {
        ledger::read_campaign(&env, campaign_id)
    }

    /// Whether the campaign exists and still accepts funding.
    pub fn is_open(env: Env, campaign_id: CampaignId) -> bool {
        ledger::read_campaign(&env, campaign_id)
            .map(|campaign| campaign.is_open_at(utils::get_current_timestamp(&env)))
            .unwrap_or(false)
    }

    /// Total a funder has contributed to a campaign.
    pub fn get_contribution(env: Env, campaign_id: CampaignId, funder: Address) -> i128 {
        ledger::read_contribution(&env, campaign_id, &funder)
    }

    /// Last assigned campaign id.
    pub fn campaign_count(env: Env) -> CampaignId {
        ledger::read_campaign_count(&env)
    }

    pub fn token(env: Env) -> Result<Address, CrowdfundError> {
        ledger::read_token(&env)
    }
}
