#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};

mod admin;
mod events;
mod goal;
mod interface;
mod registry;
mod storage;
mod tokens;
mod types;
mod upkeep;

pub use crate::interface::{
    GoalInterface, GoalRegistryInterface, TokenRegistryInterface, UpkeepInterface,
};
pub use crate::storage::{DEFAULT_FUNDING_PERIOD, DEFAULT_MAX_BATCH_SIZE};
pub use crate::types::*;

use crate::admin::AdminManager;
use crate::goal::GoalManager;
use crate::registry::GoalRegistry;
use crate::tokens::TokenRegistry;
use crate::upkeep::UpkeepScheduler;

#[contract]
pub struct SavingsGoalContract;

#[contractimpl]
impl SavingsGoalContract {
    /// Initialize the contract with an admin and optional scheduler settings.
    /// Defaults to daily funding periods and batches of 50 goals.
    pub fn initialize(
        env: Env,
        admin: Address,
        config: Option<SchedulerConfig>,
    ) -> Result<(), SavingsError> {
        AdminManager::initialize(&env, admin, config)
    }

    /// Update the admin address.
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), SavingsError> {
        AdminManager::set_admin(&env, current_admin, new_admin)
    }

    pub fn update_config(
        env: Env,
        admin: Address,
        config: SchedulerConfig,
    ) -> Result<(), SavingsError> {
        AdminManager::update_config(&env, admin, config)
    }

    pub fn get_admin(env: Env) -> Result<Address, SavingsError> {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Result<SchedulerConfig, SavingsError> {
        storage::get_config(&env)
    }
}

#[contractimpl]
impl TokenRegistryInterface for SavingsGoalContract {
    fn add_token(env: Env, caller: Address, token: Address) -> Result<(), SavingsError> {
        TokenRegistry::add_token(&env, &caller, token)
    }

    fn remove_token(env: Env, caller: Address, token: Address) -> Result<(), SavingsError> {
        TokenRegistry::remove_token(&env, &caller, token)
    }

    fn is_token_allowed(env: Env, token: Address) -> bool {
        TokenRegistry::is_token_allowed(&env, &token)
    }

    fn get_allowed_tokens(env: Env) -> Vec<Address> {
        TokenRegistry::get_allowed_tokens(&env)
    }
}

#[contractimpl]
impl GoalRegistryInterface for SavingsGoalContract {
    fn create_goal(
        env: Env,
        owner: Address,
        token: Address,
        goal_amount: i128,
        days_to_reach_goal: u32,
        name: String,
        description: String,
    ) -> Result<u64, SavingsError> {
        GoalRegistry::create_goal(
            &env,
            owner,
            token,
            goal_amount,
            days_to_reach_goal,
            name,
            description,
        )
    }

    fn get_all_goals(env: Env) -> Vec<Goal> {
        GoalRegistry::get_all_goals(&env)
    }

    fn get_goals_page(env: Env, start_id: u64, limit: u32) -> Vec<Goal> {
        GoalRegistry::get_goals_page(&env, start_id, limit)
    }

    fn get_goals_by_owner(env: Env, owner: Address) -> Vec<Goal> {
        GoalRegistry::get_goals_by_owner(&env, &owner)
    }

    fn get_goal(env: Env, goal_id: u64) -> Result<Goal, SavingsError> {
        GoalManager::get_goal(&env, goal_id)
    }

    fn get_goal_count(env: Env) -> u64 {
        GoalRegistry::get_goal_count(&env)
    }
}

#[contractimpl]
impl GoalInterface for SavingsGoalContract {
    fn pull_funds(env: Env, goal_id: u64) -> Result<i128, SavingsError> {
        GoalManager::pull_funds(&env, goal_id)
    }

    fn withdraw(env: Env, caller: Address, goal_id: u64) -> Result<i128, SavingsError> {
        GoalManager::withdraw(&env, caller, goal_id)
    }

    fn goal_balance(env: Env, goal_id: u64) -> Result<i128, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.balance)
    }

    fn is_goal_reached(env: Env, goal_id: u64) -> Result<bool, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.is_reached())
    }

    fn goal_amount(env: Env, goal_id: u64) -> Result<i128, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.goal_amount)
    }

    fn days_to_reach_goal(env: Env, goal_id: u64) -> Result<u32, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.days_to_reach_goal)
    }

    fn daily_funding_amount(env: Env, goal_id: u64) -> Result<i128, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.daily_funding_amount)
    }

    fn remaining_amount(env: Env, goal_id: u64) -> Result<i128, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.remaining_amount())
    }

    fn goal_owner(env: Env, goal_id: u64) -> Result<Address, SavingsError> {
        GoalManager::get_goal(&env, goal_id).map(|goal| goal.owner)
    }
}

#[contractimpl]
impl UpkeepInterface for SavingsGoalContract {
    fn check_upkeep(env: Env) -> Result<UpkeepCheck, SavingsError> {
        UpkeepScheduler::check_upkeep(&env)
    }

    fn get_eligible_goals(env: Env) -> Result<Vec<u64>, SavingsError> {
        UpkeepScheduler::eligible_goals(&env)
    }

    fn perform_upkeep(env: Env, perform_data: Bytes) -> Result<UpkeepReport, SavingsError> {
        UpkeepScheduler::perform_upkeep(&env, perform_data)
    }

    fn last_upkeep_at(env: Env) -> Option<u64> {
        UpkeepScheduler::last_upkeep_at(&env)
    }
}
