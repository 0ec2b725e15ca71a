use crate::events;
use crate::goal::daily_funding_amount;
use crate::storage;
use crate::tokens::TokenRegistry;
use crate::types::{Goal, GoalStatus, SavingsError};
use soroban_sdk::{Address, Env, String, Vec};

pub struct GoalRegistry;

impl GoalRegistry {
    /// Create a goal against an allow-listed token. No funds move here;
    /// funding is pulled later by upkeep.
    pub fn create_goal(
        env: &Env,
        owner: Address,
        token: Address,
        goal_amount: i128,
        days_to_reach_goal: u32,
        name: String,
        description: String,
    ) -> Result<u64, SavingsError> {
        owner.require_auth();

        if !storage::has_admin(env) {
            return Err(SavingsError::NotInitialized);
        }
        if !TokenRegistry::is_token_allowed(env, &token) {
            return Err(SavingsError::TokenNotAllowed);
        }
        if goal_amount <= 0 || days_to_reach_goal == 0 {
            return Err(SavingsError::InvalidAmount);
        }

        let goal_id = storage::get_goal_count(env) + 1;

        let goal = Goal {
            id: goal_id,
            owner: owner.clone(),
            token,
            goal_amount,
            days_to_reach_goal,
            daily_funding_amount: daily_funding_amount(goal_amount, days_to_reach_goal),
            balance: 0,
            name,
            description,
            status: GoalStatus::Active,
            created_at: env.ledger().timestamp(),
            last_funded_period: None,
            last_attempted_period: None,
            total_withdrawn: 0,
        };

        storage::set_goal(env, &goal);
        storage::set_goal_count(env, goal_id);
        storage::add_owner_goal_id(env, &owner, goal_id);
        storage::bump_instance(env);

        events::goal_created(env, &goal);

        Ok(goal_id)
    }

    /// Every goal in creation order, completed ones included.
    pub fn get_all_goals(env: &Env) -> Vec<Goal> {
        let mut goals = Vec::new(env);
        for goal_id in 1..=storage::get_goal_count(env) {
            if let Some(goal) = storage::get_goal(env, goal_id) {
                goals.push_back(goal);
            }
        }
        goals
    }

    /// Up to `limit` goals starting at `start_id`, in creation order. Lets
    /// callers page through the registry without reading every entry at once.
    pub fn get_goals_page(env: &Env, start_id: u64, limit: u32) -> Vec<Goal> {
        let mut goals = Vec::new(env);
        let count = storage::get_goal_count(env);
        let mut goal_id = start_id.max(1);
        while goal_id <= count && goals.len() < limit {
            if let Some(goal) = storage::get_goal(env, goal_id) {
                goals.push_back(goal);
            }
            goal_id += 1;
        }
        goals
    }

    pub fn get_goals_by_owner(env: &Env, owner: &Address) -> Vec<Goal> {
        let mut goals = Vec::new(env);
        for goal_id in storage::get_owner_goal_ids(env, owner).iter() {
            if let Some(goal) = storage::get_goal(env, goal_id) {
                goals.push_back(goal);
            }
        }
        goals
    }

    pub fn get_goal_count(env: &Env) -> u64 {
        storage::get_goal_count(env)
    }
}
