use crate::events;
use crate::storage;
use crate::types::{Goal, GoalStatus, SavingsError, SchedulerConfig};
use soroban_sdk::{log, token, Address, Env};

impl Goal {
    pub fn is_reached(&self) -> bool {
        self.status != GoalStatus::Active
    }

    pub fn remaining_amount(&self) -> i128 {
        self.goal_amount - self.balance
    }

    /// Index of the funding period `now` falls into, counted from creation.
    pub fn period_at(&self, now: u64, funding_period: u64) -> u64 {
        now.saturating_sub(self.created_at) / funding_period
    }

    /// Active and not yet funded in `period`.
    pub fn is_eligible(&self, period: u64) -> bool {
        self.status == GoalStatus::Active && self.last_funded_period != Some(period)
    }

    /// Eligible, and not already failed an upkeep pull in `period`.
    pub fn is_due(&self, period: u64) -> bool {
        self.is_eligible(period) && self.last_attempted_period != Some(period)
    }

    /// Daily amount, capped at what is left to reach the goal.
    pub fn next_pull_amount(&self) -> i128 {
        self.daily_funding_amount.min(self.remaining_amount())
    }

    /// Credit a successful pull. Returns true when this pull reached the goal.
    pub fn record_pull(&mut self, amount: i128, period: u64) -> bool {
        self.balance += amount;
        self.last_funded_period = Some(period);
        if self.balance >= self.goal_amount {
            self.balance = self.goal_amount;
            self.status = GoalStatus::Reached;
            return true;
        }
        false
    }
}

/// Daily funding amount for a goal. Never zero, so tiny goals still progress.
pub fn daily_funding_amount(goal_amount: i128, days_to_reach_goal: u32) -> i128 {
    (goal_amount / days_to_reach_goal as i128).max(1)
}

pub struct GoalManager;

impl GoalManager {
    pub fn get_goal(env: &Env, goal_id: u64) -> Result<Goal, SavingsError> {
        storage::get_goal(env, goal_id).ok_or(SavingsError::GoalNotFound)
    }

    /// Pull one period's funding for a goal from its owner's allowance.
    pub fn pull_funds(env: &Env, goal_id: u64) -> Result<i128, SavingsError> {
        let config = storage::get_config(env)?;
        Self::pull_with_config(env, &config, goal_id)
    }

    /// Eligibility is re-checked here, in the same invocation that writes the
    /// new balance, so a stale or duplicated batch entry cannot fund twice.
    pub(crate) fn pull_with_config(
        env: &Env,
        config: &SchedulerConfig,
        goal_id: u64,
    ) -> Result<i128, SavingsError> {
        let mut goal = Self::get_goal(env, goal_id)?;

        let period = goal.period_at(env.ledger().timestamp(), config.funding_period);
        if !goal.is_eligible(period) {
            return Err(SavingsError::GoalNotEligible);
        }

        let amount = goal.next_pull_amount();
        let contract = env.current_contract_address();
        let token_client = token::Client::new(env, &goal.token);

        let allowance = match token_client.try_allowance(&goal.owner, &contract) {
            Ok(Ok(allowance)) => allowance,
            _ => return Err(SavingsError::TransferFailed),
        };
        if allowance < amount {
            return Err(SavingsError::InsufficientAllowance);
        }

        let owner_balance = match token_client.try_balance(&goal.owner) {
            Ok(Ok(balance)) => balance,
            _ => return Err(SavingsError::TransferFailed),
        };
        if owner_balance < amount {
            return Err(SavingsError::InsufficientOwnerBalance);
        }

        match token_client.try_transfer_from(&contract, &goal.owner, &contract, &amount) {
            Ok(Ok(())) => {}
            _ => {
                log!(env, "transfer_from failed", goal_id, amount);
                return Err(SavingsError::TransferFailed);
            }
        }

        let reached = goal.record_pull(amount, period);
        storage::set_goal(env, &goal);

        events::goal_funded(env, &goal, amount, period);
        if reached {
            events::goal_reached(env, &goal);
        }

        Ok(amount)
    }

    /// Mark a goal as tried by upkeep in its current period so the scan
    /// moves on to later goals. A direct `pull_funds` can still retry it.
    pub(crate) fn record_failed_attempt(env: &Env, config: &SchedulerConfig, goal_id: u64) {
        if let Some(mut goal) = storage::get_goal(env, goal_id) {
            let period = goal.period_at(env.ledger().timestamp(), config.funding_period);
            goal.last_attempted_period = Some(period);
            storage::set_goal(env, &goal);
        }
    }

    /// Pay a reached goal out to its owner.
    pub fn withdraw(env: &Env, caller: Address, goal_id: u64) -> Result<i128, SavingsError> {
        caller.require_auth();

        let mut goal = Self::get_goal(env, goal_id)?;
        if caller != goal.owner {
            return Err(SavingsError::Unauthorized);
        }

        match goal.status {
            GoalStatus::Active => return Err(SavingsError::GoalNotReached),
            GoalStatus::Withdrawn => return Err(SavingsError::NothingToWithdraw),
            GoalStatus::Reached => {}
        }
        if goal.balance == 0 {
            return Err(SavingsError::NothingToWithdraw);
        }

        let amount = goal.balance;
        let token_client = token::Client::new(env, &goal.token);
        match token_client.try_transfer(&env.current_contract_address(), &goal.owner, &amount) {
            Ok(Ok(())) => {}
            _ => return Err(SavingsError::TransferFailed),
        }

        goal.balance = 0;
        goal.total_withdrawn += amount;
        goal.status = GoalStatus::Withdrawn;
        storage::set_goal(env, &goal);

        events::goal_withdrawn(env, &goal, amount);
        Ok(amount)
    }
}
