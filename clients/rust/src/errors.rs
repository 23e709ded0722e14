use num_derive::FromPrimitive;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum GoalifyError {
    /// 6000 - Goal must be at least 120 seconds long
    #[error("Goal must be at least 120 seconds long")]
    InvalidDuration = 0x1770,
    /// 6001 - Bet size must be greater than zero
    #[error("Bet size must be greater than zero")]
    InvalidBetSize = 0x1771,
    /// 6002 - Goal statement is too long
    #[error("Goal statement is too long")]
    GoalStatementTooLong = 0x1772,
    /// 6003 - Sponsor and judge must be different from staker
    #[error("Sponsor and judge must be different from staker")]
    SelfAssignment = 0x1773,
    /// 6004 - Sponsor and judge must be set within 30 seconds after goal is created
    #[error("Sponsor and judge must be set within 30 seconds after goal is created")]
    OnboardingWindowClosed = 0x1774,
    /// 6005 - Role already set
    #[error("Role already set")]
    AlreadySet = 0x1775,
    /// 6006 - Only staker and sponsor can bet
    #[error("Only staker and sponsor can bet")]
    UnauthorizedBettor = 0x1776,
    /// 6007 - Bet must be greater than or equal to bet size
    #[error("Bet must be greater than or equal to bet size")]
    BelowMinimumStake = 0x1777,
    /// 6008 - Cannot bet more than 10x bet size
    #[error("Cannot bet more than 10x bet size")]
    CapExceeded = 0x1778,
    /// 6009 - Goal is already decided
    #[error("Goal is already decided")]
    BettingClosed = 0x1779,
    /// 6010 - Decision is either 1 for success or 2 for failure
    #[error("Decision is either 1 for success or 2 for failure")]
    InvalidDecision = 0x177a,
    /// 6011 - Only judge can approve
    #[error("Only judge can approve")]
    Unauthorized = 0x177b,
    /// 6012 - Goal must be in betting state
    #[error("Goal must be in betting state")]
    GoalNotInBetting = 0x177c,
    /// 6013 - Must wait until goal duration has ended
    #[error("Must wait until goal duration has ended")]
    DurationNotElapsed = 0x177d,
    /// 6014 - Goal is not decided
    #[error("Goal is not decided")]
    NotDecided = 0x177e,
    /// 6015 - Recipient does not match goal outcome
    #[error("Recipient does not match goal outcome")]
    InvalidRecipient = 0x177f,
    /// 6016 - Overflow
    #[error("Overflow")]
    Overflow = 0x1780,
}

impl GoalifyError {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        num_traits::FromPrimitive::from_u32(code)
    }
}
