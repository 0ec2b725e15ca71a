use crate::events::{self, UpkeepPerformed};
use crate::goal::GoalManager;
use crate::storage;
use crate::types::{PullResult, PullStatus, SavingsError, UpkeepCheck, UpkeepReport};
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{log, Bytes, Env, Vec};

/// Two-phase upkeep: a read-only scan producing an opaque batch, and an
/// executor that pulls funds for each goal in that batch.
pub struct UpkeepScheduler;

impl UpkeepScheduler {
    /// IDs of goals due for a pull in their current period, in creation
    /// order, capped at `max_batch_size`. Goals whose upkeep pull already
    /// failed this period are left out so they cannot crowd out later ones.
    /// Performs no writes.
    pub fn eligible_goals(env: &Env) -> Result<Vec<u64>, SavingsError> {
        let config = storage::get_config(env)?;
        let now = env.ledger().timestamp();

        let mut ids = Vec::new(env);
        for goal_id in 1..=storage::get_goal_count(env) {
            if ids.len() >= config.max_batch_size {
                break;
            }
            if let Some(goal) = storage::get_goal(env, goal_id) {
                if goal.is_due(goal.period_at(now, config.funding_period)) {
                    ids.push_back(goal_id);
                }
            }
        }
        Ok(ids)
    }

    pub fn check_upkeep(env: &Env) -> Result<UpkeepCheck, SavingsError> {
        let ids = Self::eligible_goals(env)?;
        if ids.is_empty() {
            return Ok(UpkeepCheck {
                upkeep_needed: false,
                perform_data: Bytes::new(env),
            });
        }
        Ok(UpkeepCheck {
            upkeep_needed: true,
            perform_data: ids.to_xdr(env),
        })
    }

    /// Run a batch produced by `check_upkeep`. A failed pull is reported for
    /// its goal and never aborts or rolls back the rest of the batch.
    pub fn perform_upkeep(env: &Env, perform_data: Bytes) -> Result<UpkeepReport, SavingsError> {
        let config = storage::get_config(env)?;
        let goal_ids = Self::decode_batch(env, &perform_data)?;
        if goal_ids.len() > config.max_batch_size {
            return Err(SavingsError::BatchTooLarge);
        }

        let mut report = UpkeepReport {
            results: Vec::new(env),
            funded: 0,
            skipped: 0,
            failed: 0,
            total_pulled: 0,
        };

        for goal_id in goal_ids.iter() {
            let (status, amount) = match GoalManager::pull_with_config(env, &config, goal_id) {
                Ok(amount) => (PullStatus::Funded, amount),
                Err(err) => (PullStatus::from(err), 0),
            };

            match status {
                PullStatus::Funded => {
                    report.funded += 1;
                    report.total_pulled += amount;
                }
                PullStatus::NotEligible => report.skipped += 1,
                PullStatus::GoalNotFound => {
                    report.failed += 1;
                    log!(env, "upkeep goal missing", goal_id);
                    events::pull_failed(env, goal_id, status);
                }
                _ => {
                    report.failed += 1;
                    GoalManager::record_failed_attempt(env, &config, goal_id);
                    log!(env, "upkeep pull failed", goal_id, status);
                    events::pull_failed(env, goal_id, status);
                }
            }

            report.results.push_back(PullResult {
                goal_id,
                status,
                amount,
            });
        }

        let now = env.ledger().timestamp();
        storage::set_last_upkeep(env, now);
        storage::bump_instance(env);

        log!(
            env,
            "upkeep performed",
            report.funded,
            report.skipped,
            report.failed
        );
        events::upkeep_performed(
            env,
            UpkeepPerformed {
                funded: report.funded,
                skipped: report.skipped,
                failed: report.failed,
                total_pulled: report.total_pulled,
                timestamp: now,
            },
        );

        Ok(report)
    }

    pub fn last_upkeep_at(env: &Env) -> Option<u64> {
        storage::get_last_upkeep(env)
    }

    /// Decode the opaque batch into goal IDs, rejecting anything that is not
    /// a vector of u64 before any goal is touched.
    fn decode_batch(env: &Env, perform_data: &Bytes) -> Result<Vec<u64>, SavingsError> {
        if perform_data.is_empty() {
            return Err(SavingsError::InvalidPerformData);
        }
        let raw = Vec::<u64>::from_xdr(env, perform_data)
            .map_err(|_| SavingsError::InvalidPerformData)?;

        let mut goal_ids = Vec::new(env);
        for item in raw.try_iter() {
            let goal_id = item.map_err(|_| SavingsError::InvalidPerformData)?;
            goal_ids.push_back(goal_id);
        }
        Ok(goal_ids)
    }
}
