use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct GoalRegistry {
    pub goal_count: u64,
    pub bump: u8,
}

impl GoalRegistry {
    pub fn next_goal_id(&self) -> u64 {
        self.goal_count
    }

    pub fn increment_goal_count(&mut self) -> Result<()> {
        self.goal_count = self.goal_count.checked_add(1).ok_or(ErrorCode::Overflow)?;
        Ok(())
    }
}
