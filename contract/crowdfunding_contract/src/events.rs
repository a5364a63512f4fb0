use soroban_sdk::{contractevent, Address, Env};

use crate::storage_types::CampaignId;

/// Published once per successful `create_campaign`. The creator and campaign
/// id are topics so listeners can filter on either; the body is the bare
/// expiration timestamp.
#[contractevent(topics = ["campaign_created"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    #[topic]
    pub creator: Address,
    #[topic]
    pub campaign_id: CampaignId,
    pub expiration: u64,
}

/// Body is `[amount, raised]`.
#[contractevent(topics = ["campaign_funded"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFundedEvent {
    #[topic]
    pub campaign_id: CampaignId,
    #[topic]
    pub funder: Address,
    pub amount: i128,
    pub raised: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    event.publish(env);
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    event.publish(env);
}
