use soroban_sdk::{contracterror, contracttype, Address, Bytes, String, Vec};

/// Storage keys for contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,               // Contract administrator
    Config,              // SchedulerConfig
    AllowedTokens,       // Vec<Address> of allow-listed tokens
    GoalCount,           // Counter for goal IDs
    Goal(u64),           // Goal ID -> Goal
    OwnerGoals(Address), // Owner -> Vec<u64> of goal IDs
    LastUpkeep,          // Timestamp of the last performed upkeep
}

/// Scheduler settings supplied at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchedulerConfig {
    /// Length of one funding period in seconds.
    pub funding_period: u64,
    /// Maximum number of goals a single upkeep batch may carry.
    pub max_batch_size: u32,
}

/// A single savings goal funded from its owner's token allowance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Goal {
    pub id: u64,
    pub owner: Address,
    pub token: Address,
    pub goal_amount: i128,
    pub days_to_reach_goal: u32,
    pub daily_funding_amount: i128,
    pub balance: i128,
    pub name: String,
    pub description: String,
    pub status: GoalStatus,
    pub created_at: u64,
    /// Funding period index of the most recent successful pull.
    pub last_funded_period: Option<u64>,
    /// Funding period index of the most recent upkeep pull that failed.
    /// Keeps the goal out of the scan until the next period.
    pub last_attempted_period: Option<u64>,
    pub total_withdrawn: i128,
}

/// Lifecycle of a goal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GoalStatus {
    Active,    // Still being funded
    Reached,   // Balance equals goal amount, withdrawable
    Withdrawn, // Paid out to the owner
}

/// Result of the read-only upkeep scan.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    /// XDR-encoded `Vec<u64>` of eligible goal IDs, empty when nothing is due.
    pub perform_data: Bytes,
}

/// Outcome of one goal inside an upkeep batch.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PullStatus {
    Funded,
    NotEligible,
    GoalNotFound,
    InsufficientAllowance,
    InsufficientOwnerBalance,
    TransferFailed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PullResult {
    pub goal_id: u64,
    pub status: PullStatus,
    pub amount: i128,
}

/// Per-goal report returned by `perform_upkeep`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepReport {
    pub results: Vec<PullResult>,
    pub funded: u32,
    pub skipped: u32,
    pub failed: u32,
    pub total_pulled: i128,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SavingsError {
    AlreadyInitialized = 1,        // Contract already setup
    NotInitialized = 2,            // Contract not initialized
    Unauthorized = 3,              // Caller lacks permission
    TokenNotAllowed = 4,           // Token is not on the allow-list
    InvalidAmount = 5,             // Goal amount or duration not positive
    GoalNotFound = 6,              // Goal doesn't exist
    GoalNotReached = 7,            // Withdraw before completion
    NothingToWithdraw = 8,         // Goal already paid out
    InsufficientAllowance = 9,     // Owner allowance below the pull amount
    InsufficientOwnerBalance = 10, // Owner balance below the pull amount
    TransferFailed = 11,           // Token contract call failed
    GoalNotEligible = 12,          // Goal reached or already funded this period
    InvalidPerformData = 13,       // Upkeep batch could not be decoded
    BatchTooLarge = 14,            // Upkeep batch exceeds max_batch_size
    InvalidConfig = 15,            // Zero funding period or batch size
}

impl From<SavingsError> for PullStatus {
    fn from(err: SavingsError) -> Self {
        match err {
            SavingsError::GoalNotEligible => PullStatus::NotEligible,
            SavingsError::GoalNotFound => PullStatus::GoalNotFound,
            SavingsError::InsufficientAllowance => PullStatus::InsufficientAllowance,
            SavingsError::InsufficientOwnerBalance => PullStatus::InsufficientOwnerBalance,
            _ => PullStatus::TransferFailed,
        }
    }
}
