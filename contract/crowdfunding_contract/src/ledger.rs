use soroban_sdk::{token, Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn read_token(env: &Env) -> Result<Address, CrowdfundError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

/// Last assigned campaign id; zero before the first campaign.
pub fn read_campaign_count(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(SENTINEL_CAMPAIGN_ID)
}

pub fn write_campaign_count(env: &Env, count: CampaignId) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
}

/// Reserve the next identifier. Ids start at 1 so the sentinel is never handed out.
pub fn allocate_campaign_id(env: &Env) -> Result<CampaignId, CrowdfundError> {
    let campaign_id = read_campaign_count(env)
        .checked_add(1)
        .ok_or(CrowdfundError::Overflow)?;
    write_campaign_count(env, campaign_id);
    Ok(campaign_id)
}

pub fn read_campaign(env: &Env, campaign_id: CampaignId) -> Option<Campaign> {
    if campaign_id == SENTINEL_CAMPAIGN_ID || campaign_id > read_campaign_count(env) {
        return None;
    }
    env.storage().persistent().get(&DataKey::Campaign(campaign_id))
}

pub fn write_campaign(env: &Env, campaign_id: CampaignId, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign_id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn read_contribution(env: &Env, campaign_id: CampaignId, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(campaign_id, funder.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, campaign_id: CampaignId, funder: &Address, amount: i128) {
    let key = DataKey::Contribution(campaign_id, funder.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

/// Pull `amount` of the funding token from `funder` into the contract.
/// Any rejection by the token surfaces as `TransferFailed`.
pub fn collect_funds(env: &Env, funder: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = read_token(env)?;
    let token_client = token::Client::new(env, &token_address);

    match token_client.try_transfer(funder, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CrowdfundError::TransferFailed),
    }
}
