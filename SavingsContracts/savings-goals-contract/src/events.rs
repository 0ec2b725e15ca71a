use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::types::{Goal, PullStatus, SchedulerConfig};

// Topic roots
pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const TOKEN: Symbol = symbol_short!("TOKEN");
pub const GOAL: Symbol = symbol_short!("GOAL");
pub const UPKEEP: Symbol = symbol_short!("UPKEEP");

// Actions
pub const INIT: Symbol = symbol_short!("init");
pub const TRANSFER: Symbol = symbol_short!("transfer");
pub const CONFIG: Symbol = symbol_short!("config");
pub const ADDED: Symbol = symbol_short!("added");
pub const REMOVED: Symbol = symbol_short!("removed");
pub const CREATED: Symbol = symbol_short!("created");
pub const FUNDED: Symbol = symbol_short!("funded");
pub const REACHED: Symbol = symbol_short!("reached");
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");
pub const FAILED: Symbol = symbol_short!("failed");
pub const PERFORMED: Symbol = symbol_short!("performed");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalCreated {
    pub goal_id: u64,
    pub owner: Address,
    pub token: Address,
    pub goal_amount: i128,
    pub days_to_reach_goal: u32,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalFunded {
    pub goal_id: u64,
    pub amount: i128,
    pub balance: i128,
    pub period: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalWithdrawn {
    pub goal_id: u64,
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepPerformed {
    pub funded: u32,
    pub skipped: u32,
    pub failed: u32,
    pub total_pulled: i128,
    pub timestamp: u64,
}

pub fn initialized(env: &Env, admin: &Address, config: &SchedulerConfig) {
    env.events().publish((ADMIN, INIT, admin.clone()), config.clone());
}

pub fn admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
    env.events().publish((ADMIN, TRANSFER, previous.clone()), new_admin.clone());
}

pub fn config_updated(env: &Env, admin: &Address, config: &SchedulerConfig) {
    env.events().publish((ADMIN, CONFIG, admin.clone()), config.clone());
}

pub fn token_added(env: &Env, token: &Address) {
    env.events().publish((TOKEN, ADDED), token.clone());
}

pub fn token_removed(env: &Env, token: &Address) {
    env.events().publish((TOKEN, REMOVED), token.clone());
}

pub fn goal_created(env: &Env, goal: &Goal) {
    env.events().publish(
        (GOAL, CREATED, goal.owner.clone()),
        GoalCreated {
            goal_id: goal.id,
            owner: goal.owner.clone(),
            token: goal.token.clone(),
            goal_amount: goal.goal_amount,
            days_to_reach_goal: goal.days_to_reach_goal,
            name: goal.name.clone(),
        },
    );
}

pub fn goal_funded(env: &Env, goal: &Goal, amount: i128, period: u64) {
    env.events().publish(
        (GOAL, FUNDED, goal.id),
        GoalFunded {
            goal_id: goal.id,
            amount,
            balance: goal.balance,
            period,
        },
    );
}

pub fn goal_reached(env: &Env, goal: &Goal) {
    env.events().publish((GOAL, REACHED, goal.id), goal.goal_amount);
}

pub fn goal_withdrawn(env: &Env, goal: &Goal, amount: i128) {
    env.events().publish(
        (GOAL, WITHDRAWN, goal.id),
        GoalWithdrawn {
            goal_id: goal.id,
            owner: goal.owner.clone(),
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn pull_failed(env: &Env, goal_id: u64, status: PullStatus) {
    env.events().publish((UPKEEP, FAILED, goal_id), status);
}

pub fn upkeep_performed(env: &Env, summary: UpkeepPerformed) {
    env.events().publish((UPKEEP, PERFORMED), summary);
}
