use crate::types::{Goal, SavingsError, UpkeepCheck, UpkeepReport};
use soroban_sdk::{Address, Bytes, Env, String, Vec};

/// TokenRegistryInterface manages the allow-list of tokens that savings
/// goals may be denominated in. Only the contract admin can change it.
pub trait TokenRegistryInterface {
    /// Allow-list `token`. Idempotent.
    ///
    /// # Arguments
    /// * `caller` - Must be the contract admin
    /// * `token` - Token contract address
    fn add_token(env: Env, caller: Address, token: Address) -> Result<(), SavingsError>;

    /// Remove `token` from the allow-list. Idempotent; existing goals are unaffected.
    fn remove_token(env: Env, caller: Address, token: Address) -> Result<(), SavingsError>;

    fn is_token_allowed(env: Env, token: Address) -> bool;

    fn get_allowed_tokens(env: Env) -> Vec<Address>;
}

/// GoalRegistryInterface creates goals and exposes the global and per-owner
/// goal listings.
pub trait GoalRegistryInterface {
    /// Creates a new savings goal owned by `owner`
    ///
    /// # Arguments
    /// * `owner` - The address creating the goal; funds are pulled from it
    /// * `token` - An allow-listed token contract
    /// * `goal_amount` - Target amount in token base units, must be positive
    /// * `days_to_reach_goal` - Duration in days, must be positive
    /// * `name` - Display name
    /// * `description` - Free text
    ///
    /// # Returns
    /// * `Result<u64, SavingsError>` - The new goal ID
    fn create_goal(
        env: Env,
        owner: Address,
        token: Address,
        goal_amount: i128,
        days_to_reach_goal: u32,
        name: String,
        description: String,
    ) -> Result<u64, SavingsError>;

    fn get_all_goals(env: Env) -> Vec<Goal>;

    /// Paged variant of `get_all_goals`.
    ///
    /// # Arguments
    /// * `start_id` - First goal ID to return (IDs start at 1)
    /// * `limit` - Maximum number of goals in the page
    fn get_goals_page(env: Env, start_id: u64, limit: u32) -> Vec<Goal>;

    fn get_goals_by_owner(env: Env, owner: Address) -> Vec<Goal>;

    fn get_goal(env: Env, goal_id: u64) -> Result<Goal, SavingsError>;

    fn get_goal_count(env: Env) -> u64;
}

/// GoalInterface covers a single goal: funding pulls, withdrawal and read
/// accessors.
pub trait GoalInterface {
    /// Pull this period's funding for `goal_id` from the owner's allowance.
    /// Anyone may trigger it; it succeeds at most once per funding period.
    fn pull_funds(env: Env, goal_id: u64) -> Result<i128, SavingsError>;

    /// Transfer a reached goal's balance to its owner.
    fn withdraw(env: Env, caller: Address, goal_id: u64) -> Result<i128, SavingsError>;

    fn goal_balance(env: Env, goal_id: u64) -> Result<i128, SavingsError>;

    fn is_goal_reached(env: Env, goal_id: u64) -> Result<bool, SavingsError>;

    fn goal_amount(env: Env, goal_id: u64) -> Result<i128, SavingsError>;

    fn days_to_reach_goal(env: Env, goal_id: u64) -> Result<u32, SavingsError>;

    fn daily_funding_amount(env: Env, goal_id: u64) -> Result<i128, SavingsError>;

    fn remaining_amount(env: Env, goal_id: u64) -> Result<i128, SavingsError>;

    fn goal_owner(env: Env, goal_id: u64) -> Result<Address, SavingsError>;
}

/// UpkeepInterface is the keeper-facing check/perform protocol.
pub trait UpkeepInterface {
    /// Read-only scan. `perform_data` is an opaque batch to hand back to
    /// `perform_upkeep` unchanged.
    fn check_upkeep(env: Env) -> Result<UpkeepCheck, SavingsError>;

    /// Same scan as `check_upkeep`, returned as goal IDs.
    fn get_eligible_goals(env: Env) -> Result<Vec<u64>, SavingsError>;

    /// Pull funds for every goal in the batch, re-checking each one first.
    ///
    /// # Returns
    /// * `Result<UpkeepReport, SavingsError>` - Per-goal outcome and totals;
    ///   errors only when the batch itself is unusable
    fn perform_upkeep(env: Env, perform_data: Bytes) -> Result<UpkeepReport, SavingsError>;

    fn last_upkeep_at(env: Env) -> Option<u64>;
}
