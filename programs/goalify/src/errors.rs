use anchor_lang::error_code;

#[error_code]
pub enum ErrorCode {
    #[msg("Goal must be at least 120 seconds long")]
    InvalidDuration,
    #[msg("Bet size must be greater than zero")]
    InvalidBetSize,
    #[msg("Goal statement is too long")]
    GoalStatementTooLong,
    #[msg("Sponsor and judge must be different from staker")]
    SelfAssignment,
    #[msg("Sponsor and judge must be set within 30 seconds after goal is created")]
    OnboardingWindowClosed,
    #[msg("Role already set")]
    AlreadySet,
    #[msg("Only staker and sponsor can bet")]
    UnauthorizedBettor,
    #[msg("Bet must be greater than or equal to bet size")]
    BelowMinimumStake,
    #[msg("Cannot bet more than 10x bet size")]
    CapExceeded,
    #[msg("Goal is already decided")]
    BettingClosed,
    #[msg("Decision is either 1 for success or 2 for failure")]
    InvalidDecision,
    #[msg("Only judge can approve")]
    Unauthorized,
    #[msg("Goal must be in betting state")]
    GoalNotInBetting,
    #[msg("Must wait until goal duration has ended")]
    DurationNotElapsed,
    #[msg("Goal is not decided")]
    NotDecided,
    #[msg("Recipient does not match goal outcome")]
    InvalidRecipient,
    #[msg("Overflow")]
    Overflow,
}
