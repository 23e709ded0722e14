use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, REGISTRY_SEED};
use crate::events::JudgeSet;
use crate::state::{Goal, GoalRegistry};

#[derive(Accounts)]
pub struct SetJudge<'info> {
    pub judge: Signer<'info>,

    #[account(
        mut,
        seeds = [GOAL_SEED, registry.key().as_ref(), goal.id.to_le_bytes().as_ref()],
        bump = goal.bump,
    )]
    pub goal: Account<'info, Goal>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, GoalRegistry>,
}

impl<'info> SetJudge<'info> {
    pub fn set_judge(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.goal.assign_judge(self.judge.key(), now)?;

        emit!(JudgeSet {
            goal_id: self.goal.id,
            judge: self.judge.key(),
        });

        Ok(())
    }
}
