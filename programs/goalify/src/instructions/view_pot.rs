use anchor_lang::prelude::*;

use crate::state::Goal;

#[derive(Accounts)]
pub struct ViewPot<'info> {
    pub goal: Account<'info, Goal>,
}

impl<'info> ViewPot<'info> {
    pub fn view_pot(&self) -> Result<u64> {
        Ok(self.goal.pot)
    }
}
