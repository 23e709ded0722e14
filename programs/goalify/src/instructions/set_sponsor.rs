use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, REGISTRY_SEED};
use crate::events::SponsorSet;
use crate::state::{Goal, GoalRegistry};

#[derive(Accounts)]
pub struct SetSponsor<'info> {
    pub sponsor: Signer<'info>,

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

impl<'info> SetSponsor<'info> {
    pub fn set_sponsor(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.goal.assign_sponsor(self.sponsor.key(), now)?;

        emit!(SponsorSet {
            goal_id: self.goal.id,
            sponsor: self.sponsor.key(),
        });

        Ok(())
    }
}
