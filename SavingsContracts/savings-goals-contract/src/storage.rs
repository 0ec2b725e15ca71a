use crate::types::{DataKey, Goal, SavingsError, SchedulerConfig};
use soroban_sdk::{Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

// ~7 days
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ~30 days
pub(crate) const GOAL_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const GOAL_LIFETIME_THRESHOLD: u32 = GOAL_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const DEFAULT_FUNDING_PERIOD: u64 = 24 * 60 * 60;
pub const DEFAULT_MAX_BATCH_SIZE: u32 = 50;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, SavingsError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(SavingsError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_config(env: &Env) -> Result<SchedulerConfig, SavingsError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SavingsError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SchedulerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_allowed_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::AllowedTokens)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_allowed_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage().instance().set(&DataKey::AllowedTokens, tokens);
}

pub fn get_goal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::GoalCount)
        .unwrap_or(0)
}

pub fn set_goal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::GoalCount, &count);
}

/// Reads a goal without touching its TTL, so scans stay read-only.
pub fn get_goal(env: &Env, goal_id: u64) -> Option<Goal> {
    env.storage().persistent().get(&DataKey::Goal(goal_id))
}

pub fn set_goal(env: &Env, goal: &Goal) {
    let key = DataKey::Goal(goal.id);
    env.storage().persistent().set(&key, goal);
    env.storage()
        .persistent()
        .extend_ttl(&key, GOAL_LIFETIME_THRESHOLD, GOAL_BUMP_AMOUNT);
}

pub fn get_owner_goal_ids(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerGoals(owner.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Adds `goal_id` to the owner's index if it is not already there.
pub fn add_owner_goal_id(env: &Env, owner: &Address, goal_id: u64) {
    let key = DataKey::OwnerGoals(owner.clone());
    let mut ids = get_owner_goal_ids(env, owner);
    if !ids.contains(goal_id) {
        ids.push_back(goal_id);
    }
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, GOAL_LIFETIME_THRESHOLD, GOAL_BUMP_AMOUNT);
}

pub fn get_last_upkeep(env: &Env) -> Option<u64> {
    env.storage().instance().get(&DataKey::LastUpkeep)
}

pub fn set_last_upkeep(env: &Env, timestamp: u64) {
    env.storage().instance().set(&DataKey::LastUpkeep, &timestamp);
}
