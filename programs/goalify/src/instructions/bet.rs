use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::events::BetPlaced;
use crate::state::{Goal, GoalRegistry};
use crate::utils::deposit_to_vault;

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub bettor: Signer<'info>,

    #[account(
        mut,
        seeds = [GOAL_SEED, registry.key().as_ref(), goal.id.to_le_bytes().as_ref()],
        bump = goal.bump,
    )]
    pub goal: Account<'info, Goal>,

    #[account(
        mut,
        seeds = [VAULT_SEED, goal.key().as_ref()],
        bump = goal.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, GoalRegistry>,

    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn bet(&mut self, value: u64) -> Result<()> {
        let bettor = self.bettor.key();
        self.goal.place_bet(&bettor, value)?;

        deposit_to_vault(&self.bettor, &self.vault, &self.system_program, value)?;

        emit!(BetPlaced {
            goal_id: self.goal.id,
            bettor,
            amount: value,
            pot: self.goal.pot,
            sponsor_bet_balance: self.goal.sponsor_bet_balance,
        });

        Ok(())
    }
}
