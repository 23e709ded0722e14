use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, REGISTRY_SEED};
use crate::events::GoalDecided;
use crate::state::{Goal, GoalRegistry};

#[derive(Accounts)]
pub struct Approve<'info> {
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

impl<'info> Approve<'info> {
    pub fn approve(&mut self, decision: u8) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let judge = self.judge.key();
        let outcome = self.goal.decide(&judge, decision, now)?;

        emit!(GoalDecided {
            goal_id: self.goal.id,
            judge,
            outcome,
        });

        Ok(())
    }
}
