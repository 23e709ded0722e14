use anchor_lang::prelude::*;

use crate::state::Outcome;

#[event]
pub struct GoalCreated {
    pub goal_id: u64,
    pub staker: Pubkey,
    pub goal_statement: String,
    pub bet_size: u64,
    pub duration: i64,
    pub created_at: i64,
}

#[event]
pub struct SponsorSet {
    pub goal_id: u64,
    pub sponsor: Pubkey,
}

#[event]
pub struct JudgeSet {
    pub goal_id: u64,
    pub judge: Pubkey,
}

#[event]
pub struct BetPlaced {
    pub goal_id: u64,
    pub bettor: Pubkey,
    pub amount: u64,
    pub pot: u64,
    pub sponsor_bet_balance: u64,
}

#[event]
pub struct GoalDecided {
    pub goal_id: u64,
    pub judge: Pubkey,
    pub outcome: Outcome,
}

#[event]
pub struct PotDistributed {
    pub goal_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}
