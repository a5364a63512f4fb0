use soroban_sdk::Env;

pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// `true` while the ledger clock is strictly before `timestamp`.
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    get_current_timestamp(env) < timestamp
}
