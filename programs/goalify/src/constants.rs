pub const REGISTRY_SEED: &[u8] = b"goalify_registry";
pub const GOAL_SEED: &[u8] = b"goal";
pub const VAULT_SEED: &[u8] = b"goal_vault";

/// Shortest betting phase a staker may commit to.
pub const MIN_GOAL_DURATION_SECS: i64 = 120;

/// Sponsor and judge must join within this many seconds of goal creation.
pub const ONBOARDING_WINDOW_SECS: i64 = 30;

/// The pot may never exceed `POT_CAP_MULTIPLIER * bet_size`.
pub const POT_CAP_MULTIPLIER: u64 = 10;

pub const MAX_GOAL_STATEMENT_LEN: usize = 128;

pub const DECISION_SUCCESS: u8 = 1;
pub const DECISION_FAILURE: u8 = 2;
