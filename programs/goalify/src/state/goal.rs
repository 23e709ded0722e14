use anchor_lang::prelude::*;

use crate::constants::{
    DECISION_FAILURE, DECISION_SUCCESS, MAX_GOAL_STATEMENT_LEN, MIN_GOAL_DURATION_SECS,
    ONBOARDING_WINDOW_SECS, POT_CAP_MULTIPLIER,
};
use crate::errors::ErrorCode;

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GoalState {
    Created,
    Betting,
    Decided,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn from_decision(decision: u8) -> Result<Self> {
        match decision {
            DECISION_SUCCESS => Ok(Outcome::Success),
            DECISION_FAILURE => Ok(Outcome::Failure),
            _ => err!(ErrorCode::InvalidDecision),
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Goal {
    pub id: u64,
    #[max_len(MAX_GOAL_STATEMENT_LEN)]
    pub goal_statement: String,
    pub staker: Pubkey,
    pub sponsor: Option<Pubkey>,
    pub judge: Option<Pubkey>,
    pub bet_size: u64,
    pub duration: i64, // seconds
    pub created_at: i64, // unix timestamp
    pub pot: u64,
    pub sponsor_bet_balance: u64,
    pub state: GoalState,
    pub outcome: Option<Outcome>, // set only once decided
    pub vault_bump: u8,
    pub bump: u8,
}

impl Goal {
    /// Checks the terms a staker commits to before the goal record exists.
    pub fn validate_terms(goal_statement: &str, bet_size: u64, duration: i64) -> Result<()> {
        require!(
            duration >= MIN_GOAL_DURATION_SECS,
            ErrorCode::InvalidDuration
        );
        require!(bet_size > 0, ErrorCode::InvalidBetSize);
        require!(
            goal_statement.len() <= MAX_GOAL_STATEMENT_LEN,
            ErrorCode::GoalStatementTooLong
        );
        bet_size
            .checked_mul(POT_CAP_MULTIPLIER)
            .ok_or(ErrorCode::Overflow)?;
        Ok(())
    }

    pub fn pot_cap(&self) -> Result<u64> {
        Ok(self
            .bet_size
            .checked_mul(POT_CAP_MULTIPLIER)
            .ok_or(ErrorCode::Overflow)?)
    }

    pub fn onboarding_deadline(&self) -> Result<i64> {
        Ok(self
            .created_at
            .checked_add(ONBOARDING_WINDOW_SECS)
            .ok_or(ErrorCode::Overflow)?)
    }

    pub fn betting_deadline(&self) -> Result<i64> {
        Ok(self
            .created_at
            .checked_add(self.duration)
            .ok_or(ErrorCode::Overflow)?)
    }

    pub fn is_sponsor(&self, key: &Pubkey) -> bool {
        self.sponsor.as_ref() == Some(key)
    }

    pub fn is_judge(&self, key: &Pubkey) -> bool {
        self.judge.as_ref() == Some(key)
    }

    pub fn assign_sponsor(&mut self, sponsor: Pubkey, now: i64) -> Result<()> {
        self.check_onboarding(&sponsor, self.sponsor.is_some(), now)?;
        self.sponsor = Some(sponsor);
        Ok(())
    }

    pub fn assign_judge(&mut self, judge: Pubkey, now: i64) -> Result<()> {
        self.check_onboarding(&judge, self.judge.is_some(), now)?;
        self.judge = Some(judge);
        Ok(())
    }

    fn check_onboarding(&self, candidate: &Pubkey, already_set: bool, now: i64) -> Result<()> {
        require_keys_neq!(*candidate, self.staker, ErrorCode::SelfAssignment);
        require!(
            now <= self.onboarding_deadline()?,
            ErrorCode::OnboardingWindowClosed
        );
        require!(!already_set, ErrorCode::AlreadySet);
        Ok(())
    }

    /// Records an accepted stake. The caller moves `value` into the vault.
    pub fn place_bet(&mut self, bettor: &Pubkey, value: u64) -> Result<()> {
        let from_sponsor = self.is_sponsor(bettor);
        require!(
            *bettor == self.staker || from_sponsor,
            ErrorCode::UnauthorizedBettor
        );
        require!(self.state != GoalState::Decided, ErrorCode::BettingClosed);
        require!(value >= self.bet_size, ErrorCode::BelowMinimumStake);

        let pot = self.pot.checked_add(value).ok_or(ErrorCode::Overflow)?;
        require!(pot <= self.pot_cap()?, ErrorCode::CapExceeded);

        if from_sponsor {
            self.sponsor_bet_balance = self
                .sponsor_bet_balance
                .checked_add(value)
                .ok_or(ErrorCode::Overflow)?;
        }
        self.pot = pot;

        if self.state == GoalState::Created {
            self.state = GoalState::Betting;
        }

        Ok(())
    }

    pub fn decide(&mut self, judge: &Pubkey, decision: u8, now: i64) -> Result<Outcome> {
        let outcome = Outcome::from_decision(decision)?;
        require!(self.is_judge(judge), ErrorCode::Unauthorized);
        require!(
            self.state == GoalState::Betting,
            ErrorCode::GoalNotInBetting
        );
        require!(
            now >= self.betting_deadline()?,
            ErrorCode::DurationNotElapsed
        );

        self.outcome = Some(outcome);
        self.state = GoalState::Decided;

        Ok(outcome)
    }

    /// Success pays the staker. Failure pays the sponsor, or hands the pot
    /// back to the staker when no sponsor ever joined.
    pub fn payout_recipient(&self) -> Result<Pubkey> {
        require!(self.state == GoalState::Decided, ErrorCode::NotDecided);
        match self.outcome.ok_or(ErrorCode::NotDecided)? {
            Outcome::Success => Ok(self.staker),
            Outcome::Failure => Ok(self.sponsor.unwrap_or(self.staker)),
        }
    }

    /// Empties the pot and returns what it held. Zero on every call after the first.
    pub fn take_pot(&mut self) -> Result<u64> {
        require!(self.state == GoalState::Decided, ErrorCode::NotDecided);
        Ok(std::mem::take(&mut self.pot))
    }
}
