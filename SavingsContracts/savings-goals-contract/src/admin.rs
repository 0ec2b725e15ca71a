use crate::events;
use crate::storage::{self, DEFAULT_FUNDING_PERIOD, DEFAULT_MAX_BATCH_SIZE};
use crate::types::{SavingsError, SchedulerConfig};
use soroban_sdk::{Address, Env};

pub struct AdminManager;

impl AdminManager {
    /// Store the admin and scheduler settings. Can only run once.
    pub fn initialize(
        env: &Env,
        admin: Address,
        config: Option<SchedulerConfig>,
    ) -> Result<(), SavingsError> {
        if storage::has_admin(env) {
            return Err(SavingsError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = config.unwrap_or(SchedulerConfig {
            funding_period: DEFAULT_FUNDING_PERIOD,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        });
        Self::validate_config(&config)?;

        storage::set_admin(env, &admin);
        storage::set_config(env, &config);
        storage::set_goal_count(env, 0);
        storage::bump_instance(env);

        events::initialized(env, &admin, &config);
        Ok(())
    }

    /// Authenticate `caller` and check it is the stored admin.
    pub fn require_admin(env: &Env, caller: &Address) -> Result<(), SavingsError> {
        caller.require_auth();
        let admin = storage::get_admin(env)?;
        if *caller != admin {
            return Err(SavingsError::Unauthorized);
        }
        Ok(())
    }

    /// Hand the admin role over. Both parties must sign.
    pub fn set_admin(
        env: &Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), SavingsError> {
        Self::require_admin(env, &current_admin)?;
        new_admin.require_auth();

        storage::set_admin(env, &new_admin);
        storage::bump_instance(env);

        events::admin_transferred(env, &current_admin, &new_admin);
        Ok(())
    }

    pub fn update_config(
        env: &Env,
        admin: Address,
        config: SchedulerConfig,
    ) -> Result<(), SavingsError> {
        Self::require_admin(env, &admin)?;
        Self::validate_config(&config)?;

        storage::set_config(env, &config);
        storage::bump_instance(env);

        events::config_updated(env, &admin, &config);
        Ok(())
    }

    fn validate_config(config: &SchedulerConfig) -> Result<(), SavingsError> {
        if config.funding_period == 0 || config.max_batch_size == 0 {
            return Err(SavingsError::InvalidConfig);
        }
        Ok(())
    }
}
